use thiserror::Error;

/// Feil ved validering av konfig eller JSON-payload.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be > 0 (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be in [{min}, {max}) (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("lower bound {lower} must be below upper bound {upper}")]
    InvalidBounds { lower: f64, upper: f64 },

    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    #[error("invalid payload: {0}")]
    Payload(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
