//! The per-run benchmark driver.

use grasp_types::{BenchmarkConfig, GraspObject, Phase, Verdict, Wrench};
use tracing::debug;

use crate::evaluator::OutcomeEvaluator;
use crate::perturbation::ShakeGenerator;
use crate::schedule::{GripperTarget, PhaseSchedule};
use crate::trace::HeightTrace;

/// Output of one driver step: what the harness should command and inject
/// before the next physics step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepCommand {
    /// Phase the run is in at this step.
    pub phase: Phase,
    /// Commanded end-effector pose and gripper aperture.
    pub target: GripperTarget,
    /// Wrench to inject at the gripper body; present only during the shake
    /// phase of a shake-enabled run.
    pub wrench: Option<Wrench>,
}

/// Everything retained from a finished run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Object that was grasped.
    pub object: GraspObject,
    /// Whether shake wrenches were injected.
    pub shake_enabled: bool,
    /// Seed the wrench stream was drawn from.
    pub seed: u64,
    /// Physics timestep the run was stepped with (s).
    pub timestep: f64,
    /// Final verdict.
    pub verdict: Verdict,
    /// Time of the first eligible sub-threshold height, if the run failed
    /// (s).
    pub drop_time: Option<f64>,
    /// Full `(time, height)` sample sequence.
    pub trace: HeightTrace,
    /// Number of driver steps taken.
    pub steps: u64,
}

/// One benchmark run's state, advanced once per physics step.
///
/// The driver exclusively owns its run state: phase, height trace, and
/// verdict. Nothing here blocks, sleeps, or steps physics; the embedding
/// loop owns the timeline and calls [`step`](Self::step) with
/// monotonically non-decreasing elapsed times.
///
/// # Example
///
/// ```
/// use grasp_driver::GraspDriver;
/// use grasp_types::{BenchmarkConfig, GraspObject, Phase, Verdict};
///
/// let config = BenchmarkConfig::new(GraspObject::Ball).with_seed(1);
/// let mut driver = GraspDriver::new(config).unwrap();
///
/// let cmd = driver.step(10.0, 0.22);
/// assert_eq!(cmd.phase, Phase::Shake);
/// assert!(cmd.wrench.is_some());
/// assert_eq!(driver.verdict(), Verdict::Pending);
/// ```
#[derive(Debug, Clone)]
pub struct GraspDriver {
    config: BenchmarkConfig,
    schedule: PhaseSchedule,
    shaker: ShakeGenerator,
    evaluator: OutcomeEvaluator,
    trace: HeightTrace,
    phase: Phase,
    steps: u64,
}

impl GraspDriver {
    /// Build a driver for one run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`](grasp_types::ConfigError) for any invalid
    /// configuration; this is the only point at which the driver can fail.
    pub fn new(config: BenchmarkConfig) -> grasp_types::Result<Self> {
        let schedule = PhaseSchedule::new(&config)?;
        let shaker = ShakeGenerator::new(config.seed, config.shake)?;
        let evaluator = OutcomeEvaluator::new(config.height_threshold);
        // Capped: a pathologically small timestep must not pre-allocate
        // an unbounded trace.
        let expected_steps = (config.timeline.total_duration() / config.timestep)
            .ceil()
            .min(1e6);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        // Truncation: validated timestep and timeline keep this well under
        // usize::MAX.
        let trace = HeightTrace::with_capacity(expected_steps as usize + 1);
        Ok(Self {
            config,
            schedule,
            shaker,
            evaluator,
            trace,
            phase: Phase::Initial,
            steps: 0,
        })
    }

    /// The run's configuration.
    #[must_use]
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Advance one step: record the observed height, update the verdict,
    /// and return the command for the upcoming physics step.
    ///
    /// `elapsed` is seconds since run start and must be non-decreasing
    /// across calls; `object_height` is the world-frame Z of the tracked
    /// object after the previous physics step.
    pub fn step(&mut self, elapsed: f64, object_height: f64) -> StepCommand {
        self.steps += 1;
        let phase = self.schedule.phase_at(elapsed);
        if phase != self.phase {
            debug!(prev = %self.phase, next = %phase, time = elapsed, "phase transition");
            self.phase = phase;
        }

        self.trace.push(elapsed, object_height);
        self.evaluator.observe(phase, elapsed, object_height);

        let target = self.schedule.target_at(elapsed);
        let wrench = (self.config.shake_enabled && phase == Phase::Shake).then(|| {
            self.shaker
                .wrench_at(elapsed - self.config.timeline.shake_start)
        });

        StepCommand {
            phase,
            target,
            wrench,
        }
    }

    /// The phase reported by the most recent step.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The current verdict.
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        self.evaluator.verdict()
    }

    /// Settle and return the verdict. Idempotent.
    pub fn finalize(&mut self) -> Verdict {
        self.evaluator.finalize()
    }

    /// Time of the latched drop, if the run failed (s).
    #[must_use]
    pub const fn drop_time(&self) -> Option<f64> {
        self.evaluator.drop_time()
    }

    /// Height samples recorded so far.
    #[must_use]
    pub fn trace(&self) -> &HeightTrace {
        &self.trace
    }

    /// Number of steps taken so far.
    #[must_use]
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// Consume the driver into a report for persistence.
    #[must_use]
    pub fn into_report(mut self) -> RunReport {
        let verdict = self.evaluator.finalize();
        RunReport {
            object: self.config.object,
            shake_enabled: self.config.shake_enabled,
            seed: self.config.seed,
            timestep: self.config.timestep,
            verdict,
            drop_time: self.evaluator.drop_time(),
            trace: self.trace,
            steps: self.steps,
        }
    }
}
