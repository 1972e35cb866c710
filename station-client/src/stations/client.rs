//! Station admin API client.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use super::error::StationError;
use super::records::{self, LastPlayed, Station};

/// Default base URL: the admin server on this machine.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the base URL.
const BASE_URL_ENV: &str = "RDB_ADMIN_URL";

/// How much of an undecodable body to keep in the error.
const BODY_SNIPPET_CHARS: usize = 500;

/// Path of the station collection.
pub fn stations_path() -> &'static str {
    "/api/stations/"
}

/// Path of a single station. `id` is inserted verbatim, without escaping.
pub fn station_path(id: &str) -> String {
    format!("/api/stations/{id}")
}

/// Path of a station's recent plays. `station_id` is inserted verbatim.
pub fn last_played_path(station_id: &str) -> String {
    format!("/api/stations/{station_id}/last-played")
}

/// Configuration for the station API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationClientConfig {
    /// Scheme, host and port of the admin server
    pub base_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl StationClientConfig {
    /// Create a new config for the given base URL, without a timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Read the base URL from `RDB_ADMIN_URL`, falling back to the default.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(BASE_URL_ENV).ok())
    }

    fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for StationClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Client for the station admin API.
///
/// Cloning is cheap and clones share one connection pool. Calls are
/// independent of each other and may run concurrently.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: reqwest::Client,
    base_url: String,
}

impl StationClient {
    /// Create a new station API client.
    pub fn new(config: StationClientConfig) -> Result<Self, StationError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the station collection as raw JSON.
    pub async fn get_stations(&self) -> Result<Value, StationError> {
        self.get_json(stations_path()).await
    }

    /// Fetch one station as raw JSON.
    pub async fn get_station(&self, id: &str) -> Result<Value, StationError> {
        self.get_json(&station_path(id)).await
    }

    /// Fetch a station's recent plays as raw JSON.
    pub async fn get_last_played(&self, station_id: &str) -> Result<Value, StationError> {
        self.get_json(&last_played_path(station_id)).await
    }

    /// Fetch the station collection as typed records.
    pub async fn stations(&self) -> Result<Vec<Station>, StationError> {
        records::decode(self.get_stations().await?)
    }

    /// Fetch one station as a typed record.
    pub async fn station(&self, id: &str) -> Result<Station, StationError> {
        records::decode(self.get_station(id).await?)
    }

    /// Fetch a station's recent plays as typed records, most recent first.
    pub async fn last_played(&self, station_id: &str) -> Result<Vec<LastPlayed>, StationError> {
        records::decode(self.get_last_played(station_id).await?)
    }

    /// GET `path` and decode the body as JSON.
    ///
    /// The status code is not inspected: an error status with a JSON body
    /// decodes successfully, and one with any other body fails to decode.
    async fn get_json(&self, path: &str) -> Result<Value, StationError> {
        let url = format!("{}{}", self.base_url, path);

        debug!(%url, "GET");
        let response = self.http.get(&url).send().await?;
        debug!(%url, status = response.status().as_u16(), "response received");

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| StationError::Decode {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_SNIPPET_CHARS).collect()),
        })
    }
}
