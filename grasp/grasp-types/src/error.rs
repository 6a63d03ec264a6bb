//! Configuration error types.

use thiserror::Error;

/// Errors raised while validating a benchmark configuration.
///
/// All variants are construction-time failures: once a driver has been
/// built, no further configuration errors can occur (the driver performs
/// no I/O and takes no further configuration input).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Phase boundaries must be finite and strictly increasing.
    #[error(
        "phase timeline not monotonic: {boundary} = {value} must exceed \
         {previous} = {previous_value}"
    )]
    NonMonotonicTimeline {
        /// The offending boundary.
        boundary: &'static str,
        /// Its configured value (s).
        value: f64,
        /// The boundary it must exceed.
        previous: &'static str,
        /// That boundary's value (s).
        previous_value: f64,
    },

    /// Timestep must be positive, finite, and at most 1 second.
    #[error("invalid timestep: {0} (must be positive, finite, and <= 1 s)")]
    InvalidTimestep(f64),

    /// Height threshold must be finite and non-negative.
    #[error("invalid height threshold: {0} m")]
    InvalidThreshold(f64),

    /// Object name not in the benchmark asset set.
    #[error("unknown object: {name} (expected cube, ball, or bottle)")]
    UnknownObject {
        /// The unrecognized name.
        name: String,
    },

    /// Shake magnitude bounds must satisfy 0 <= min <= max < inf.
    #[error("invalid shake bounds: {reason}")]
    InvalidShakeBounds {
        /// What is wrong with the bounds.
        reason: String,
    },

    /// Shake pulse period must be positive and finite.
    #[error("invalid pulse period: {0} s")]
    InvalidPulsePeriod(f64),

    /// Lift distance must be positive and finite.
    #[error("invalid lift distance: {0} m")]
    InvalidLiftDistance(f64),

    /// A configured pose contains `NaN` or `Inf`.
    #[error("non-finite {which} pose")]
    NonFinitePose {
        /// Which pose is invalid.
        which: &'static str,
    },
}

impl ConfigError {
    /// Create an invalid shake bounds error.
    #[must_use]
    pub fn invalid_bounds(reason: impl Into<String>) -> Self {
        Self::InvalidShakeBounds {
            reason: reason.into(),
        }
    }

    /// Check if this is a timeline ordering error.
    #[must_use]
    pub fn is_timeline_error(&self) -> bool {
        matches!(self, Self::NonMonotonicTimeline { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::NonMonotonicTimeline {
            boundary: "lift_start",
            value: 2.0,
            previous: "grasp_start",
            previous_value: 2.0,
        };
        assert!(err.to_string().contains("lift_start"));
        assert!(err.is_timeline_error());

        let err = ConfigError::InvalidTimestep(-0.002);
        assert!(err.to_string().contains("-0.002"));
        assert!(!err.is_timeline_error());
    }

    #[test]
    fn test_bounds_helper() {
        let err = ConfigError::invalid_bounds("min_force exceeds max_force");
        assert!(err.to_string().contains("min_force"));
    }
}
