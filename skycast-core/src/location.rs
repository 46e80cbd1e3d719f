use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

pub const IP_API_URL: &str = "http://ip-api.com/json";

/// Geographic position in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("location access denied")]
    Denied,

    #[error("location service unavailable")]
    Unavailable,
}

/// Source of the user's current position.
///
/// `is_available` is the capability check: handlers call it before asking
/// for a position, and report an unsupported-capability error when it
/// returns false.
#[async_trait]
pub trait LocationSource: Send + Sync {
    fn is_available(&self) -> bool;

    async fn current_position(&self) -> Result<Position, LocationError>;
}

/// Position lookup via IP geolocation (ip-api.com).
///
/// Coarse, but needs no permission prompt and works on any networked host.
#[derive(Debug, Clone)]
pub struct IpLocationSource {
    http: Client,
    base_url: String,
}

impl Default for IpLocationSource {
    fn default() -> Self {
        Self::with_base_url(IP_API_URL.to_string())
    }
}

impl IpLocationSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source pointed at an explicit endpoint, for tests against a mock server.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

#[async_trait]
impl LocationSource for IpLocationSource {
    fn is_available(&self) -> bool {
        true
    }

    async fn current_position(&self) -> Result<Position, LocationError> {
        let res = self
            .http
            .get(&self.base_url)
            .send()
            .await
            .map_err(|err| {
                warn!(error = %err, "IP geolocation request failed");
                LocationError::Unavailable
            })?;

        let parsed: IpApiResponse = res.json().await.map_err(|err| {
            warn!(error = %err, "IP geolocation response was malformed");
            LocationError::Unavailable
        })?;

        // ip-api reports refusals as status != "success" with a 200.
        if parsed.status != "success" {
            return Err(LocationError::Denied);
        }

        match (parsed.lat, parsed.lon) {
            (Some(latitude), Some(longitude)) => {
                debug!(latitude, longitude, "resolved position via IP geolocation");
                Ok(Position {
                    latitude,
                    longitude,
                })
            }
            _ => Err(LocationError::Unavailable),
        }
    }
}
