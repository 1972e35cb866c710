//! Typed views of the records served by the station admin API.
//!
//! The raw client calls return whatever JSON the backend sends. These types
//! are an opt-in layer on top for callers that want to work with structs.

use std::fmt;

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::StationError;

/// A radio station known to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    /// Short unique key, e.g. `"jazzfm"`
    pub key: String,
    pub name: String,
    /// Stream or playlist URL the station is monitored from
    pub url: String,
}

/// A song that has been identified on air.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub artist: String,
    pub title: String,
    /// Not every song has been matched on Spotify.
    #[serde(default)]
    pub spotify_uri: Option<String>,
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.artist, self.title)
    }
}

/// One play of a song on a station.
///
/// The backend returns these most recent first, at most ten per station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastPlayed {
    /// Backend-local time, no offset
    pub last_played: NaiveDateTime,
    pub song: Song,
}

/// Convert a raw JSON value into a typed record.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, StationError> {
    serde_json::from_value(value).map_err(|e| StationError::Schema {
        message: e.to_string(),
    })
}
