//! Engine-agnostic driver for the grasp-and-shake benchmark.
//!
//! The benchmark grasps an object, lifts it, shakes the gripper with
//! seeded pseudo-random wrenches for sixteen seconds, and passes if the
//! object never drops below a height threshold. This crate owns everything
//! between the configuration and the physics engine:
//!
//! - [`PhaseSchedule`] - commanded pose and gripper aperture per phase
//! - [`ShakeGenerator`] - deterministic per-pulse perturbation wrenches
//! - [`OutcomeEvaluator`] - latched pass/fail verdict over height samples
//! - [`GraspDriver`] - one run's state, advanced once per physics step
//! - [`GripperWorld`] / [`run_benchmark`] - the narrow seam a physics
//!   engine binding implements, and the loop that drives it
//! - [`BenchmarkBatch`] - N independent lanes with derived seed streams
//!
//! The driver never steps physics itself: the engine's stepping loop owns
//! the timeline and feeds elapsed time and observed object height in,
//! receiving pose/aperture commands and shake wrenches out.
//!
//! # Determinism
//!
//! Two runs with the same [`BenchmarkConfig`] (seed included) produce
//! bit-identical wrench sequences and identical verdicts. Shake wrenches
//! are keyed to the discrete pulse counter derived from *simulated* time,
//! never wall time, so results are reproducible across hosts and engines.
//!
//! # Example
//!
//! ```
//! use grasp_driver::GraspDriver;
//! use grasp_types::{BenchmarkConfig, GraspObject, Phase};
//!
//! let config = BenchmarkConfig::new(GraspObject::Cube).with_seed(7);
//! let mut driver = GraspDriver::new(config).unwrap();
//!
//! // One step at t=0: object resting on the table.
//! let cmd = driver.step(0.0, 0.02);
//! assert_eq!(cmd.phase, Phase::Initial);
//! assert!(cmd.wrench.is_none());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

mod batch;
mod driver;
mod evaluator;
mod perturbation;
mod schedule;
mod trace;
mod world;

pub use batch::{lane_seed, BenchmarkBatch};
pub use driver::{GraspDriver, RunReport, StepCommand};
pub use evaluator::OutcomeEvaluator;
pub use perturbation::ShakeGenerator;
pub use schedule::{GripperTarget, PhaseSchedule};
pub use trace::HeightTrace;
pub use world::{run_benchmark, GripperWorld};

// The driver speaks the shared benchmark vocabulary.
pub use grasp_types::{
    BenchmarkConfig, ConfigError, GraspObject, Phase, PhaseTimeline, Pose, ShakeConfig, Verdict,
    Wrench,
};
