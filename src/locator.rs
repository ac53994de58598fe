//! The evaluation pipeline: parse the input, refuse reserved ranges, then
//! ask the geolocation service.

use thiserror::Error;

use crate::net::{self, GeoClient, Geolocation, IpAddress, LookupError, ParseError};

/// The three user-visible ways an evaluation can fail.
#[derive(Debug, Error)]
pub enum LocateError {
    #[error(transparent)]
    Format(#[from] ParseError),
    #[error("{0} is in a reserved range")]
    Reserved(IpAddress),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

pub struct IpLocator {
    geo: GeoClient,
}

impl IpLocator {
    pub fn new(geo: GeoClient) -> Self {
        IpLocator { geo }
    }

    /// Evaluates one raw input line. Only a well-formed, globally routable
    /// address reaches the external service.
    pub async fn evaluate(&self, input: &str) -> Result<Geolocation, LocateError> {
        let address: IpAddress = input.parse()?;

        if !net::is_routable(&address) {
            tracing::debug!("{address}: rejected, reserved range");
            return Err(LocateError::Reserved(address));
        }

        let location = self.geo.lookup(&address).await?;
        Ok(location)
    }
}
