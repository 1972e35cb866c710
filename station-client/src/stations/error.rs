//! Station API error types.

/// Errors that can occur when talking to the station admin API.
///
/// Response status codes are never turned into errors: a 404 or 500 with a
/// JSON body decodes like any other response.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Request could not be sent or the response could not be read
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not valid JSON
    #[error("JSON parse error: {message}")]
    Decode {
        message: String,
        body: Option<String>,
    },

    /// Valid JSON that doesn't have the shape of the requested record
    #[error("unexpected record shape: {message}")]
    Schema { message: String },
}
