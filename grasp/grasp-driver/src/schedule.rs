//! Phase scheduling: commanded pose and aperture for any elapsed time.

use grasp_types::{BenchmarkConfig, Phase, PhaseTimeline, Pose};

/// Commanded end-effector state for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GripperTarget {
    /// Target end-effector pose in world coordinates.
    pub pose: Pose,
    /// Gripper aperture: 1 fully open, 0 closed.
    pub aperture: f64,
}

/// Maps elapsed time to the commanded pose and gripper aperture.
///
/// The schedule is a pure function of elapsed time: it holds no mutable
/// state, so a driver can query it out of order in tests, and two
/// schedules built from the same config always agree.
///
/// Within-phase motion:
///
/// | Phase    | Pose                                | Aperture  |
/// |----------|-------------------------------------|-----------|
/// | initial  | home → hover, interpolated          | 1 (open)  |
/// | approach | hover → grasp, interpolated         | 1         |
/// | grasp    | grasp, held                         | 1 → 0     |
/// | lift     | grasp → lift, interpolated          | 0 (closed)|
/// | shake    | lift, held (wrench added elsewhere) | 0         |
/// | done     | lift, held forever                  | 0         |
///
/// Interpolation is clamped at phase boundaries; there is no
/// extrapolation past either end of a phase.
#[derive(Debug, Clone)]
pub struct PhaseSchedule {
    timeline: PhaseTimeline,
    home: Pose,
    hover: Pose,
    grasp: Pose,
    lift: Pose,
}

impl PhaseSchedule {
    /// Build a schedule from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`](grasp_types::ConfigError) if the timeline is
    /// non-monotonic or any pose is non-finite.
    pub fn new(config: &BenchmarkConfig) -> grasp_types::Result<Self> {
        config.validate()?;
        Ok(Self {
            timeline: config.timeline,
            home: config.home_pose,
            hover: config.effective_hover_pose(),
            grasp: config.grasp_pose,
            lift: config.lift_pose(),
        })
    }

    /// The phase active at `elapsed` seconds from run start.
    #[must_use]
    pub fn phase_at(&self, elapsed: f64) -> Phase {
        self.timeline.phase_at(elapsed)
    }

    /// The phase timeline this schedule runs on.
    #[must_use]
    pub fn timeline(&self) -> &PhaseTimeline {
        &self.timeline
    }

    /// Commanded pose and aperture at `elapsed` seconds from run start.
    #[must_use]
    pub fn target_at(&self, elapsed: f64) -> GripperTarget {
        let phase = self.phase_at(elapsed);
        let t = self.timeline.progress(phase, elapsed);
        match phase {
            Phase::Initial => GripperTarget {
                pose: self.home.lerp(&self.hover, t),
                aperture: 1.0,
            },
            Phase::Approach => GripperTarget {
                pose: self.hover.lerp(&self.grasp, t),
                aperture: 1.0,
            },
            Phase::Grasp => GripperTarget {
                pose: self.grasp,
                aperture: 1.0 - t,
            },
            Phase::Lift => GripperTarget {
                pose: self.grasp.lerp(&self.lift, t),
                aperture: 0.0,
            },
            Phase::Shake | Phase::Done => GripperTarget {
                pose: self.lift,
                aperture: 0.0,
            },
        }
    }
}
