pub mod geolocate;
pub mod ip;
pub mod reserved;

pub use geolocate::{GeoClient, Geolocation, LookupError};
pub use ip::{IpAddress, IpMask, ParseError};
pub use reserved::is_routable;
