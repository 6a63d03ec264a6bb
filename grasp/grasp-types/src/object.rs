//! The objects the benchmark grasps.

use crate::error::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Object placed on the table for the gripper to pick up.
///
/// The set matches the scene assets shipped with the benchmark; the driver
/// itself only uses the identity for record naming and grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GraspObject {
    /// 2 cm radius sphere.
    Ball,
    /// 4 cm cube.
    Cube,
    /// Bottle mesh, the tallest and least stable of the three.
    Bottle,
}

impl GraspObject {
    /// All objects, in canonical order.
    pub const ALL: [Self; 3] = [Self::Ball, Self::Cube, Self::Bottle];

    /// Lowercase name used in record filenames and CLI-style input.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Ball => "ball",
            Self::Bottle => "bottle",
        }
    }
}

impl std::fmt::Display for GraspObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GraspObject {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cube" => Ok(Self::Cube),
            "ball" => Ok(Self::Ball),
            "bottle" => Ok(Self::Bottle),
            other => Err(ConfigError::UnknownObject {
                name: other.to_string(),
            }),
        }
    }
}
