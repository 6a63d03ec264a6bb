//! Run verdicts.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Final classification of a benchmark run.
///
/// A verdict is a *value*, never an error: a failed grasp is an expected,
/// reportable outcome, distinct at the type level from a
/// [`ConfigError`](crate::ConfigError) raised before the run started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Verdict {
    /// Run still in progress (or aborted before completion).
    Pending,
    /// The object stayed above the height threshold through the shake.
    Pass,
    /// The object dropped below the threshold after being lifted. Latched:
    /// a later height recovery never reverts a failure.
    Fail,
}

impl Verdict {
    /// Whether the verdict is settled (pass or fail).
    #[must_use]
    pub const fn is_final(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Whether the run passed.
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Whether the run failed.
    #[must_use]
    pub const fn is_fail(self) -> bool {
        matches!(self, Self::Fail)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pending => "pending",
            Self::Pass => "pass",
            Self::Fail => "fail",
        };
        write!(f, "{name}")
    }
}
