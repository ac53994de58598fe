use clap::{Parser, ValueEnum};

use crate::net::geolocate::DEFAULT_HOST;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[clap(value_enum, short, long, ignore_case = true, default_value_t = LogLevel::Error)]
    pub log_level: LogLevel,

    /// Base URL of the geolocation API
    #[clap(long, default_value = DEFAULT_HOST)]
    pub api_host: String,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}
