use thiserror::Error;

/// Errors surfaced by the geocoding client.
///
/// Provider failures (network, timeout, denial, unparseable body) are
/// deliberately absent: the resolver recovers from all of them by
/// falling through to the next provider and ultimately to the degraded
/// coordinate-only result. Only input validation and client
/// construction can fail.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Latitude/longitude out of range or non-finite — a programming
    /// error upstream, never an environmental failure.
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// The underlying `reqwest::Client` could not be constructed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provider base URL did not parse.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
