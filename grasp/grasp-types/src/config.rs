//! Benchmark run configuration.
//!
//! A [`BenchmarkConfig`] is built once from external input, validated, and
//! is read-only for the rest of the run. Every value the driver consumes is
//! settable here; nothing is hardcoded downstream.

use nalgebra::{Point3, Vector3};

use crate::error::ConfigError;
use crate::object::GraspObject;
use crate::phase::PhaseTimeline;
use crate::pose::Pose;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Magnitude bounds and pulse timing for shake perturbations.
///
/// During each pulse, every wrench component is drawn once, uniformly in
/// `[min, max]` with a random sign, and held constant until the next pulse.
/// Absolute component values therefore never exceed the configured maxima.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShakeConfig {
    /// Minimum per-axis force magnitude (N).
    pub min_force: f64,
    /// Maximum per-axis force magnitude (N).
    pub max_force: f64,
    /// Minimum per-axis torque magnitude (N·m).
    pub min_torque: f64,
    /// Maximum per-axis torque magnitude (N·m).
    pub max_torque: f64,
    /// Duration of one shake pulse (s of simulated time).
    ///
    /// A new wrench is drawn at each pulse boundary, producing sustained
    /// perturbation events rather than per-step noise.
    pub pulse_period: f64,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            min_force: 0.5,
            max_force: 5.0,
            min_torque: 0.05,
            max_torque: 0.5,
            pulse_period: 0.25,
        }
    }
}

impl ShakeConfig {
    /// Set force magnitude bounds (N).
    #[must_use]
    pub const fn with_force_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_force = min;
        self.max_force = max;
        self
    }

    /// Set torque magnitude bounds (N·m).
    #[must_use]
    pub const fn with_torque_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_torque = min;
        self.max_torque = max;
        self
    }

    /// Set the pulse period (s).
    #[must_use]
    pub const fn with_pulse_period(mut self, period: f64) -> Self {
        self.pulse_period = period;
        self
    }

    /// Validate bounds and pulse timing.
    pub fn validate(&self) -> crate::Result<()> {
        for (name, min, max) in [
            ("force", self.min_force, self.max_force),
            ("torque", self.min_torque, self.max_torque),
        ] {
            if !min.is_finite() || !max.is_finite() || min < 0.0 {
                return Err(ConfigError::invalid_bounds(format!(
                    "{name} bounds must be finite and non-negative"
                )));
            }
            if min > max {
                return Err(ConfigError::invalid_bounds(format!(
                    "min_{name} ({min}) exceeds max_{name} ({max})"
                )));
            }
        }
        if !self.pulse_period.is_finite() || self.pulse_period <= 0.0 {
            return Err(ConfigError::InvalidPulsePeriod(self.pulse_period));
        }
        Ok(())
    }
}

/// Immutable configuration for one benchmark run.
///
/// # Example
///
/// ```
/// use grasp_types::{BenchmarkConfig, GraspObject};
///
/// let config = BenchmarkConfig::new(GraspObject::Bottle)
///     .with_seed(42)
///     .with_height_threshold(0.05)
///     .without_shake();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BenchmarkConfig {
    /// Object to grasp.
    pub object: GraspObject,
    /// Whether shake wrenches are injected during the shake phase. When
    /// false the run is a plain slip test: lift and hold.
    pub shake_enabled: bool,
    /// Physics timestep the embedding engine will step with (s).
    pub timestep: f64,
    /// Seed for the perturbation stream.
    pub seed: u64,
    /// Heights below this after lift-off fail the run (m, world-frame Z).
    pub height_threshold: f64,
    /// Phase boundary times.
    pub timeline: PhaseTimeline,
    /// End-effector pose at run start.
    pub home_pose: Pose,
    /// Pose above the object from which the approach descends. When `None`,
    /// the lift pose is used, matching the documented trajectory where the
    /// approach starts from the same posture the lift returns to.
    pub hover_pose: Option<Pose>,
    /// Pose at which the gripper closes around the object.
    pub grasp_pose: Pose,
    /// How far straight up the lift phase raises the gripper (m).
    pub lift_distance: f64,
    /// Shake perturbation bounds and pulse timing.
    pub shake: ShakeConfig,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new(GraspObject::Cube)
    }
}

impl BenchmarkConfig {
    /// Configuration with the documented defaults for `object`.
    ///
    /// Defaults: 500 Hz timestep, 0.04 m threshold (the object rest height
    /// of the 4 cm cube), grasp pose over the table-mounted object, 0.2 m
    /// lift.
    #[must_use]
    pub fn new(object: GraspObject) -> Self {
        Self {
            object,
            shake_enabled: true,
            timestep: 0.002,
            seed: 0,
            height_threshold: 0.04,
            timeline: PhaseTimeline::default(),
            home_pose: Pose::from_position(Point3::new(0.3, 0.0, 0.5)),
            hover_pose: None,
            grasp_pose: Pose::from_position(Point3::new(0.65, 0.0, 0.025)),
            lift_distance: 0.2,
            shake: ShakeConfig::default(),
        }
    }

    /// Set the perturbation seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the physics timestep (s).
    #[must_use]
    pub const fn with_timestep(mut self, timestep: f64) -> Self {
        self.timestep = timestep;
        self
    }

    /// Set the failure height threshold (m).
    #[must_use]
    pub const fn with_height_threshold(mut self, threshold: f64) -> Self {
        self.height_threshold = threshold;
        self
    }

    /// Set the phase timeline.
    #[must_use]
    pub const fn with_timeline(mut self, timeline: PhaseTimeline) -> Self {
        self.timeline = timeline;
        self
    }

    /// Set the shake configuration.
    #[must_use]
    pub const fn with_shake(mut self, shake: ShakeConfig) -> Self {
        self.shake = shake;
        self
    }

    /// Disable shake wrenches (slip test).
    #[must_use]
    pub const fn without_shake(mut self) -> Self {
        self.shake_enabled = false;
        self
    }

    /// Set the home pose.
    #[must_use]
    pub const fn with_home_pose(mut self, pose: Pose) -> Self {
        self.home_pose = pose;
        self
    }

    /// Set an explicit hover pose for the approach start.
    #[must_use]
    pub const fn with_hover_pose(mut self, pose: Pose) -> Self {
        self.hover_pose = Some(pose);
        self
    }

    /// Set the grasp pose.
    #[must_use]
    pub const fn with_grasp_pose(mut self, pose: Pose) -> Self {
        self.grasp_pose = pose;
        self
    }

    /// Set the lift distance (m).
    #[must_use]
    pub const fn with_lift_distance(mut self, distance: f64) -> Self {
        self.lift_distance = distance;
        self
    }

    /// The pose held during lift, shake, and done: the grasp pose raised by
    /// the lift distance.
    #[must_use]
    pub fn lift_pose(&self) -> Pose {
        self.grasp_pose
            .translated(Vector3::new(0.0, 0.0, self.lift_distance))
    }

    /// The pose the approach descends from.
    #[must_use]
    pub fn effective_hover_pose(&self) -> Pose {
        self.hover_pose.unwrap_or_else(|| self.lift_pose())
    }

    /// Task name used in record files: shaking grasp or plain slip test.
    #[must_use]
    pub const fn task_name(&self) -> &'static str {
        if self.shake_enabled {
            "shake"
        } else {
            "slip"
        }
    }

    /// Validate the whole configuration.
    ///
    /// Called by the driver at construction; any error here is fatal and
    /// reported before a single physics step runs.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.timestep.is_finite() || self.timestep <= 0.0 {
            return Err(ConfigError::InvalidTimestep(self.timestep));
        }
        if self.timestep > 1.0 {
            // A step longer than a second spans entire phases.
            return Err(ConfigError::InvalidTimestep(self.timestep));
        }
        if !self.height_threshold.is_finite() || self.height_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.height_threshold));
        }
        if !self.lift_distance.is_finite() || self.lift_distance <= 0.0 {
            return Err(ConfigError::InvalidLiftDistance(self.lift_distance));
        }
        for (which, pose) in [
            ("home", &self.home_pose),
            ("grasp", &self.grasp_pose),
        ] {
            if !pose.is_finite() {
                return Err(ConfigError::NonFinitePose { which });
            }
        }
        if let Some(hover) = &self.hover_pose {
            if !hover.is_finite() {
                return Err(ConfigError::NonFinitePose { which: "hover" });
            }
        }
        self.timeline.validate()?;
        self.shake.validate()?;
        Ok(())
    }
}
