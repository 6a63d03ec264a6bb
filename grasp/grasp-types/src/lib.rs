//! Core types for the grasp-and-shake benchmark.
//!
//! This crate provides the foundational types shared by the benchmark driver
//! and its reporting layer:
//!
//! - [`Pose`] / [`Wrench`] - end-effector targets and injected perturbations
//! - [`Phase`] / [`PhaseTimeline`] - the fixed benchmark schedule
//! - [`GraspObject`] - which object is being grasped
//! - [`BenchmarkConfig`] / [`ShakeConfig`] - the immutable run configuration
//! - [`Verdict`] - the pass/fail classification of a run
//!
//! # Design Philosophy
//!
//! These types are **pure data**. They carry no scheduling, no random number
//! generation, and no evaluation logic. They're the common language between:
//!
//! - The benchmark driver (phase scheduling, perturbation, scoring)
//! - Physics engine bindings (MuJoCo, Genesis, or anything steppable)
//! - Result records and comparison reports
//!
//! # Coordinate System
//!
//! World-frame, right-handed, Z up. Object height is the world-frame Z
//! coordinate of the tracked object, in meters.
//!
//! # Example
//!
//! ```
//! use grasp_types::{BenchmarkConfig, GraspObject, Phase};
//!
//! let config = BenchmarkConfig::new(GraspObject::Cube)
//!     .with_seed(7)
//!     .with_timestep(0.002);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.timeline.phase_at(10.0), Phase::Shake);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::missing_const_for_fn,  // Many methods can't be const due to nalgebra
    clippy::missing_errors_doc,    // Error docs added where non-obvious
    clippy::must_use_candidate
)]

mod config;
mod error;
mod object;
mod phase;
mod pose;
mod verdict;

pub use config::{BenchmarkConfig, ShakeConfig};
pub use error::ConfigError;
pub use object::GraspObject;
pub use phase::{Phase, PhaseTimeline};
pub use pose::{Pose, Wrench};
pub use verdict::Verdict;

// Re-export math types for convenience
pub use nalgebra::{Point3, UnitQuaternion, Vector3};

/// Result type for configuration validation.
pub type Result<T> = std::result::Result<T, ConfigError>;
