//! Error types shared by all PLANAR crates

use thiserror::Error;

/// PLANAR errors
#[derive(Debug, Error)]
pub enum PlanarError {
    /// A numeric input was NaN or infinite
    #[error("Argument '{name}' must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// Finite inputs whose result overflowed the f64 range
    #[error("Result of '{operation}' is not finite for the given inputs")]
    NonFiniteResult { operation: &'static str },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PlanarError {
    /// Name of the offending argument for input errors
    pub fn argument(&self) -> Option<&'static str> {
        match self {
            PlanarError::NonFinite { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Whether this error was caused by a bad numeric input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PlanarError::NonFinite { .. } | PlanarError::NonFiniteResult { .. }
        )
    }
}

/// Result type for PLANAR operations
pub type PlanarResult<T> = Result<T, PlanarError>;
