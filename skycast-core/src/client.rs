use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::Settings;
use crate::model::{Units, WeatherReading};

/// Failure of a single current-weather fetch.
///
/// Handlers collapse all variants into one user-facing message per call
/// site; the variants exist for diagnostics and tests.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to weather API failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("weather API returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode weather API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Thin client for the OpenWeather current-weather endpoint.
///
/// One outbound GET per call; no retries, no caching.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: String,
    api_key: String,
    units: Units,
}

impl WeatherClient {
    pub fn new(settings: &Settings) -> Self {
        Self::with_base_url(settings.base_url.clone(), settings.api_key.clone(), settings.units)
    }

    /// Client pointed at an explicit endpoint, for tests against a mock server.
    pub fn with_base_url(base_url: String, api_key: String, units: Units) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_key,
            units,
        }
    }

    /// Fetch current weather by city name.
    ///
    /// `city` must be non-empty after trimming; the handler enforces that
    /// before calling here.
    pub async fn fetch_by_city(&self, city: &str) -> Result<WeatherReading, FetchError> {
        debug!(city, "fetching current weather by city");

        self.fetch(&[
            ("q", city),
            ("appid", self.api_key.as_str()),
            ("units", self.units.as_str()),
        ])
        .await
    }

    /// Fetch current weather by coordinate pair.
    ///
    /// No bounds validation; out-of-range values are forwarded verbatim and
    /// the upstream API's own validation governs the result.
    pub async fn fetch_by_coordinates(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<WeatherReading, FetchError> {
        debug!(lat, lon, "fetching current weather by coordinates");

        let lat = lat.to_string();
        let lon = lon.to_string();

        self.fetch(&[
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("appid", self.api_key.as_str()),
            ("units", self.units.as_str()),
        ])
        .await
    }

    async fn fetch(&self, query: &[(&str, &str)]) -> Result<WeatherReading, FetchError> {
        let res = self.http.get(&self.base_url).query(query).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: CurrentResponse = serde_json::from_str(&body)?;

        Ok(parsed.into_reading())
    }
}

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ApiWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct ApiWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    #[serde(default)]
    dt: Option<i64>,
    main: ApiMain,
    weather: Vec<ApiWeather>,
    wind: ApiWind,
}

impl CurrentResponse {
    fn into_reading(self) -> WeatherReading {
        let observed_at = self
            .dt
            .and_then(unix_to_utc)
            .unwrap_or_else(Utc::now);

        let condition = self
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .unwrap_or_else(|| "Unknown".to_string());

        WeatherReading {
            name: self.name,
            temperature: self.main.temp,
            condition,
            humidity: self.main.humidity,
            wind_speed: self.wind.speed,
            observed_at,
        }
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn paris_payload() -> serde_json::Value {
        json!({
            "name": "Paris",
            "dt": 1_700_000_000,
            "main": {"temp": 18, "humidity": 60},
            "weather": [{"description": "clear sky"}],
            "wind": {"speed": 3.1}
        })
    }

    fn test_client(server: &MockServer) -> WeatherClient {
        WeatherClient::with_base_url(server.uri(), "TEST_KEY".to_string(), Units::Metric)
    }

    #[tokio::test]
    async fn fetch_by_city_sends_one_request_with_city_in_q() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("q", "Paris"))
            .and(query_param("appid", "TEST_KEY"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(paris_payload()))
            .expect(1)
            .mount(&server)
            .await;

        let reading = test_client(&server).fetch_by_city("Paris").await.unwrap();

        assert_eq!(reading.name, "Paris");
        assert_eq!(reading.temperature, 18.0);
        assert_eq!(reading.condition, "clear sky");
        assert_eq!(reading.humidity, 60);
        assert_eq!(reading.wind_speed, 3.1);
    }

    #[tokio::test]
    async fn fetch_by_coordinates_sends_lat_lon() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("lat", "48.85"))
            .and(query_param("lon", "2.35"))
            .and(query_param("appid", "TEST_KEY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(paris_payload()))
            .expect(1)
            .mount(&server)
            .await;

        let reading = test_client(&server)
            .fetch_by_coordinates(48.85, 2.35)
            .await
            .unwrap();

        assert_eq!(reading.name, "Paris");
    }

    #[tokio::test]
    async fn out_of_range_coordinates_are_forwarded_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("lat", "999"))
            .and(query_param("lon", "-999"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "cod": "400", "message": "wrong latitude"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = test_client(&server)
            .fetch_by_coordinates(999.0, -999.0)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Status { status, .. } if status.as_u16() == 400));
    }

    #[tokio::test]
    async fn error_status_carries_truncated_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("x".repeat(500)))
            .mount(&server)
            .await;

        let err = test_client(&server).fetch_by_city("Nowhereville").await.unwrap_err();

        match err {
            FetchError::Status { status, body } => {
                assert_eq!(status.as_u16(), 404);
                assert!(body.ends_with("..."));
                assert!(body.len() <= 203);
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_json_is_a_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = test_client(&server).fetch_by_city("Paris").await.unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn missing_field_is_a_decode_error() {
        let server = MockServer::start().await;

        // Payload without `wind`.
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Paris",
                "main": {"temp": 18, "humidity": 60},
                "weather": [{"description": "clear sky"}]
            })))
            .mount(&server)
            .await;

        let err = test_client(&server).fetch_by_city("Paris").await.unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn empty_weather_array_falls_back_to_unknown_condition() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Paris",
                "main": {"temp": 18, "humidity": 60},
                "weather": [],
                "wind": {"speed": 3.1}
            })))
            .mount(&server)
            .await;

        let reading = test_client(&server).fetch_by_city("Paris").await.unwrap();

        assert_eq!(reading.condition, "Unknown");
    }
}
