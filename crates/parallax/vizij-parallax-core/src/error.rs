//! Error types for the parallax core

use serde::{Deserialize, Serialize};

/// Errors raised while configuring or driving a parallax instance.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ParallaxError {
    /// Motion string is not one of the recognized axes
    #[error("Motion \"{motion}\" not found")]
    UnknownMotion { motion: String },

    /// Any other invalid configuration value
    #[error("Invalid configuration: {reason}")]
    Configuration { reason: String },

    /// Coordinate table does not line up with the slide sequence
    #[error("Coordinate table has {actual} entries, expected {expected}")]
    Geometry { expected: usize, actual: usize },

    /// Scroll sample that cannot be placed on the axis
    #[error("Invalid scroll sample: {value}")]
    InvalidSample { value: f64 },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ParallaxError>;

impl ParallaxError {
    /// Create a configuration error from a free-form reason.
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Errors a scroll/resize handler may swallow after logging.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Geometry { .. } | Self::InvalidSample { .. })
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownMotion { .. } | Self::Configuration { .. } => "configuration",
            Self::Geometry { .. } => "geometry",
            Self::InvalidSample { .. } => "sample",
        }
    }
}

impl From<serde_json::Error> for ParallaxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Configuration {
            reason: err.to_string(),
        }
    }
}
