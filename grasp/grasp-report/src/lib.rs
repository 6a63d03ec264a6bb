//! Result records and comparison reporting for the grasp benchmark.
//!
//! One benchmark run produces one [`RunRecord`], persisted as a JSON file
//! whose name encodes the run's engine, task, object, and timestep. This
//! crate owns that convention end to end:
//!
//! - [`RunRecord`] / [`TaskKind`] - what gets persisted per run
//! - [`save_record`] / [`load_records`] - the JSON files in an output
//!   directory
//! - [`Summary`] - pass/fail totals grouped by engine, object, and
//!   timestep
//! - [`render_report`] / [`write_report`] - a self-contained HTML
//!   comparison page
//!
//! The driver produces [`RunReport`](grasp_driver::RunReport)s; the
//! embedding harness stamps them with the engine name and hands them
//! here. Records from different engines land in the same directory, and
//! the report renders them side by side, which is the point of the whole
//! benchmark.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

mod error;
mod html;
mod record;
mod store;
mod summary;

pub use error::ReportError;
pub use html::{render_report, write_report};
pub use record::{RunRecord, TaskKind};
pub use store::{ensure_output_dir, load_records, save_record};
pub use summary::{GroupStats, Summary};

/// Result type for reporting operations.
pub type Result<T> = std::result::Result<T, ReportError>;
