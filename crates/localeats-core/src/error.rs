use thiserror::Error;

/// Banner text for failures that carry no message of their own.
pub const UNHANDLED_ERROR_MESSAGE: &str = "Something went wrong";

/// Errors produced while loading [`crate::AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// A latitude/longitude pair that falls outside the valid range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// The single user-facing failure of a recommendation request.
///
/// Transport errors, bad API keys and malformed responses all collapse into
/// this one message; the cause is logged where the failure happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Failed to fetch local food recommendations. Please check your connection.")]
pub struct FetchFailure;
