use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use iplocator::{
    config::Config,
    locator::{IpLocator, LocateError},
    log,
    net::GeoClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    log::setup_trace(&config);

    let locator = IpLocator::new(GeoClient::new(&config.api_host));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to the IP locator");
    loop {
        print!("What IP are you locating? ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let input = line?;

        match locator.evaluate(&input).await {
            Ok(location) => {
                println!(
                    "This IP is in {} ({})",
                    location.place_name(),
                    location.coordinates()
                );
            }
            Err(LocateError::Format(_)) => println!("Could not parse IP address"),
            Err(LocateError::Reserved(_)) => println!("IP address is invalid"),
            Err(LocateError::Lookup(err)) => {
                tracing::warn!("lookup failed: {err}");
                println!("No details were found for this IP address");
            }
        }

        match prompt_try_another(&mut lines)? {
            Some(true) => continue,
            Some(false) | None => break,
        }
    }

    Ok(())
}

/// Loops on "[y/n]" until the answer starts with one or the other, or stdin
/// runs out.
fn prompt_try_another(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<bool>> {
    loop {
        print!("Would you like to try another? [y/n] ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let answer = line?;

        match answer.trim().chars().next() {
            Some('y') | Some('Y') => return Ok(Some(true)),
            Some('n') | Some('N') => return Ok(Some(false)),
            _ => continue,
        }
    }
}
