//! Client for the radio station admin API.
//!
//! Three endpoints are exposed: the station list, a single station, and a
//! station's recently played songs. The raw calls hand back the decoded JSON
//! exactly as the backend sent it, whatever the response status. Typed
//! accessors layered on top convert into [`Station`] and [`LastPlayed`].

mod client;
mod error;
pub mod mock;
mod records;

pub use client::{
    StationClient, StationClientConfig, last_played_path, station_path, stations_path,
};
pub use error::StationError;
pub use mock::MockBackend;
pub use records::{LastPlayed, Song, Station, decode};
