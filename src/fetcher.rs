use crate::constants;
use crate::error::FetchError;
use crate::types::Reading;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

/// Seam between the collector and the network. The production implementation
/// talks to the WAQI feed; tests substitute a canned feed.
#[async_trait]
pub trait AqiFeed: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<Reading, FetchError>;
}

/// HTTP client for the WAQI city feed. One GET per location, no retries.
pub struct WaqiClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl WaqiClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(constants::WAQI_FEED_URL, token)
    }

    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    fn feed_url(&self, location: &str) -> String {
        format!("{}/{}/?token={}", self.base_url, location, self.token)
    }
}

#[async_trait]
impl AqiFeed for WaqiClient {
    #[instrument(skip(self))]
    async fn fetch(&self, location: &str) -> Result<Reading, FetchError> {
        debug!("Fetching WAQI feed for {}", location);
        let response = self.client.get(self.feed_url(location)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }
        let body: Value = response.json().await?;
        parse_feed_body(&body)
    }
}

/// Extracts (timestamp, AQI) from a WAQI feed body. The feed wraps payloads
/// in `{"status": "ok", "data": {...}}` and signals errors with
/// `{"status": "error", "data": "<message>"}`; unknown stations come back as
/// the latter. A non-numeric `aqi` (null or the "-" placeholder) is a valid
/// reading with no value.
fn parse_feed_body(body: &Value) -> Result<Reading, FetchError> {
    match body["status"].as_str() {
        Some("ok") => {}
        Some(other) => {
            let message = body["data"].as_str().unwrap_or(other).to_string();
            return Err(FetchError::Feed { message });
        }
        None => return Err(FetchError::MissingField("status")),
    }

    let time = body["data"]["time"]["s"]
        .as_str()
        .ok_or(FetchError::MissingField("data.time.s"))?
        .to_string();
    let aqi = body["data"]["aqi"].as_f64();

    Ok(Reading { time, aqi })
}
