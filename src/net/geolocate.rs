//! Geolocation lookups against Ip-Api (www.ip-api.com).

use thiserror::Error;

use crate::net::ip::IpAddress;

pub const DEFAULT_HOST: &str = "http://ip-api.com";

const DEFAULT_FIELDS: &str = "status,message,country,regionName,city,lat,lon,query";

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("geolocation request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("geolocation service reported failure: {0}")]
    Fail(String),
}

/// Thin client for the Ip-Api JSON endpoint.
pub struct GeoClient {
    http: reqwest::Client,
    host: String,
}

impl GeoClient {
    pub fn new(host: impl Into<String>) -> Self {
        GeoClient {
            http: reqwest::Client::new(),
            host: host.into(),
        }
    }

    /// Queries a single IP address, returning its geolocation.
    /// Rate limit: 45/min
    pub async fn lookup(&self, ip: &IpAddress) -> Result<Geolocation, LookupError> {
        tracing::info!("{ip}: issuing query to Ip-Api");
        let url = format!("{}/json/{ip}?fields={DEFAULT_FIELDS}", self.host);

        let response = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<schema::Response>()
            .await?;

        match response.status {
            schema::Status::Success(location) => Ok(Geolocation {
                city: location.city,
                region: location.region_name,
                country: location.country,
                latitude: location.lat,
                longitude: location.lon,
            }),
            schema::Status::Fail(failure) => Err(LookupError::Fail(failure.message)),
        }
    }
}

/// A resolved location. Ip-Api omits place fields it cannot determine.
#[derive(Debug, Clone)]
pub struct Geolocation {
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Geolocation {
    /// "City, Region, Country", keeping only the parts the service filled in.
    pub fn place_name(&self) -> String {
        [&self.city, &self.region, &self.country]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// "lat, lon" to three decimal places.
    pub fn coordinates(&self) -> String {
        format!("{:.3}, {:.3}", self.latitude, self.longitude)
    }
}

/// Serde-compatible response schema for Ip-Api.
mod schema {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Response {
        #[allow(dead_code)]
        pub query: Option<String>,
        #[serde(flatten)]
        pub status: Status,
    }

    #[derive(Deserialize)]
    #[serde(tag = "status", rename_all = "lowercase")]
    pub enum Status {
        Success(Location),
        Fail(Failure),
    }

    #[derive(Deserialize)]
    pub struct Failure {
        pub message: String,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Location {
        #[serde(default)]
        pub country: Option<String>,
        #[serde(default)]
        pub region_name: Option<String>,
        #[serde(default)]
        pub city: Option<String>,
        pub lat: f64,
        pub lon: f64,
    }
}
