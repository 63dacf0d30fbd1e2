use localeats_core::CoordinateError;
use thiserror::Error;

/// What the user is told when a location cannot be acquired.
///
/// Denied permission, timeouts, unavailable positions and malformed replies
/// all collapse into [`LocationFailure::PermissionOrSignalDenied`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationFailure {
    #[error("Geolocation is not supported by your browser")]
    UnsupportedPlatform,

    #[error("Please enable location services to find nearby food.")]
    PermissionOrSignalDenied,
}

/// Low-level errors from a geolocation source. Logged, never shown.
#[derive(Debug, Error)]
pub enum LocatorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("geolocation service refused the lookup: {0}")]
    Refused(String),

    #[error("geolocation response has no coordinates")]
    MissingCoordinates,

    #[error("geolocation returned an invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordinateError),

    #[error("invalid geolocation URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
