//! The seam between the driver and a physics engine.

use grasp_types::{BenchmarkConfig, Pose, Wrench};

use crate::driver::{GraspDriver, RunReport};

/// The narrow capability set the driver needs from a physics engine.
///
/// Each engine binding (MuJoCo, Genesis, an in-process test double)
/// implements these four operations; the driver knows nothing else about
/// the engine. Engine-internal failures are the binding's concern: a
/// binding that cannot step should panic or record its own error state,
/// not report through the driver, which has no recoverable runtime
/// errors of its own.
pub trait GripperWorld {
    /// Command the end-effector toward `pose` with the given gripper
    /// aperture (1 open, 0 closed).
    fn command_gripper(&mut self, pose: &Pose, aperture: f64);

    /// Inject a perturbation wrench at the gripper body for the upcoming
    /// step.
    fn apply_wrench(&mut self, wrench: &Wrench);

    /// Advance physics by `dt` seconds.
    fn step(&mut self, dt: f64);

    /// World-frame Z of the tracked object (m).
    fn object_height(&self) -> f64;
}

/// Drive one full benchmark run against `world`.
///
/// Steps the engine at the configured timestep until the run completes
/// (done phase reached) or fails early (object dropped below the
/// threshold after lift-off), then returns the retained report. Elapsed
/// time is derived from the step counter, matching the engine-side
/// convention `elapsed = step_count * dt` and avoiding accumulation
/// drift over a ten-thousand-step run.
///
/// # Errors
///
/// Returns [`ConfigError`](grasp_types::ConfigError) if the configuration
/// is invalid; no errors occur after the first step.
pub fn run_benchmark<W: GripperWorld>(
    config: &BenchmarkConfig,
    world: &mut W,
) -> grasp_types::Result<RunReport> {
    let mut driver = GraspDriver::new(config.clone())?;
    let dt = config.timestep;
    let mut step_count: u64 = 0;

    loop {
        #[allow(clippy::cast_precision_loss)]
        // Precision loss: step counts stay far below 2^52.
        let elapsed = step_count as f64 * dt;
        let command = driver.step(elapsed, world.object_height());
        if driver.verdict().is_final() {
            break;
        }

        world.command_gripper(&command.target.pose, command.target.aperture);
        if let Some(wrench) = &command.wrench {
            world.apply_wrench(wrench);
        }
        world.step(dt);
        step_count += 1;
    }

    Ok(driver.into_report())
}
