pub mod config;
pub mod locator;
pub mod log;
pub mod net;
