//! End-effector poses and perturbation wrenches.

use nalgebra::{Point3, UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position and orientation of the end-effector in world coordinates.
///
/// # Example
///
/// ```
/// use grasp_types::Pose;
/// use nalgebra::Point3;
///
/// let a = Pose::from_position(Point3::new(0.0, 0.0, 0.0));
/// let b = Pose::from_position(Point3::new(0.0, 0.0, 1.0));
/// let mid = a.lerp(&b, 0.5);
/// assert!((mid.position.z - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    /// Position in world coordinates (meters).
    pub position: Point3<f64>,
    /// Orientation as a unit quaternion.
    pub rotation: UnitQuaternion<f64>,
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl Pose {
    /// Identity pose (origin, no rotation).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            position: Point3::origin(),
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Pose from position only (identity rotation).
    #[must_use]
    pub fn from_position(position: Point3<f64>) -> Self {
        Self {
            position,
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Pose from position and rotation.
    #[must_use]
    pub const fn from_position_rotation(
        position: Point3<f64>,
        rotation: UnitQuaternion<f64>,
    ) -> Self {
        Self { position, rotation }
    }

    /// This pose shifted by a world-frame offset, rotation unchanged.
    #[must_use]
    pub fn translated(&self, offset: Vector3<f64>) -> Self {
        Self {
            position: self.position + offset,
            rotation: self.rotation,
        }
    }

    /// Interpolate between two poses.
    ///
    /// Linear on position, SLERP on rotation. `t` is clamped to `[0, 1]`,
    /// so callers at a phase boundary never extrapolate.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            position: Point3::from(self.position.coords.lerp(&other.position.coords, t)),
            rotation: self.rotation.slerp(&other.rotation, t),
        }
    }

    /// Check for `NaN` or `Inf` components.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.coords.iter().all(|x| x.is_finite())
            && self.rotation.coords.iter().all(|x| x.is_finite())
    }
}

/// A force/torque pair injected at the gripper body during the shake phase.
///
/// Both vectors are expressed in world coordinates: force in Newtons,
/// torque in Newton-meters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wrench {
    /// Force vector (N).
    pub force: Vector3<f64>,
    /// Torque vector (N·m).
    pub torque: Vector3<f64>,
}

impl Wrench {
    /// Create a wrench from force and torque vectors.
    #[must_use]
    pub const fn new(force: Vector3<f64>, torque: Vector3<f64>) -> Self {
        Self { force, torque }
    }

    /// The zero wrench (no perturbation).
    #[must_use]
    pub fn zero() -> Self {
        Self {
            force: Vector3::zeros(),
            torque: Vector3::zeros(),
        }
    }

    /// Check if this wrench is effectively zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.force.norm_squared() < 1e-20 && self.torque.norm_squared() < 1e-20
    }

    /// Largest absolute force component (N).
    #[must_use]
    pub fn max_force_component(&self) -> f64 {
        self.force.iter().fold(0.0_f64, |m, x| m.max(x.abs()))
    }

    /// Largest absolute torque component (N·m).
    #[must_use]
    pub fn max_torque_component(&self) -> f64 {
        self.torque.iter().fold(0.0_f64, |m, x| m.max(x.abs()))
    }
}

impl Default for Wrench {
    fn default() -> Self {
        Self::zero()
    }
}
