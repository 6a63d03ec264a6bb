//! Reporting error types.

use thiserror::Error;

/// Errors from record persistence and report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Filesystem failure while reading or writing records.
    #[error("record I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A record file could not be serialized or deserialized.
    #[error("record serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A filename does not follow the record naming convention.
    #[error("unrecognized record name: {name}")]
    InvalidRecordName {
        /// The offending file stem.
        name: String,
    },
}

impl ReportError {
    /// Create an invalid record name error.
    #[must_use]
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidRecordName { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReportError::invalid_name("not_a_record");
        assert!(err.to_string().contains("not_a_record"));
    }
}
