use crate::config::{Config, LogLevel};
use tracing_subscriber::{filter, fmt::format, prelude::*};

pub fn setup_trace(config: &Config) {
    let level_str = match config.log_level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    };
    let crate_name = env!("CARGO_PKG_NAME");
    let env_filter = filter::EnvFilter::new(format!("{crate_name}={level_str}"));

    let time_format = time::macros::format_description!(
        "[hour]:[minute]:[second].[subsecond digits:5]"
    );
    let time_offset = time::UtcOffset::current_local_offset()
        .unwrap_or_else(|_| time::UtcOffset::UTC);
    let timer = tracing_subscriber::fmt::time::OffsetTime::new(time_offset, time_format);

    let formatted_layer = tracing_subscriber::fmt::layer()
        .event_format(format().compact())
        .with_timer(timer)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(formatted_layer)
        .init();
}
