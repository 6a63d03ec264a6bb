//! Per-run result records and their filename convention.

use chrono::{DateTime, Utc};
use grasp_driver::RunReport;
use grasp_types::{GraspObject, Verdict};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Which variant of the benchmark a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// Grasp, lift, and shake.
    Shake,
    /// Grasp and lift only; the object must simply not slip out.
    Slip,
}

impl TaskKind {
    /// Name used in record files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shake => "shake",
            Self::Slip => "slip",
        }
    }

    /// Task for a run with the given shake setting.
    #[must_use]
    pub const fn from_shake_enabled(shake_enabled: bool) -> Self {
        if shake_enabled {
            Self::Shake
        } else {
            Self::Slip
        }
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shake" => Ok(Self::Shake),
            "slip" => Ok(Self::Slip),
            other => Err(ReportError::invalid_name(other)),
        }
    }
}

/// Everything persisted about one benchmark run.
///
/// Serialized as pretty JSON next to any video the harness recorded, with
/// a file stem shared between the two so the report can pair them up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Physics engine the run was stepped with.
    pub engine: String,
    /// Object grasped.
    pub object: GraspObject,
    /// Shake or slip variant.
    pub task: TaskKind,
    /// Physics timestep (s).
    pub timestep: f64,
    /// Perturbation seed.
    pub seed: u64,
    /// Final verdict.
    pub verdict: Verdict,
    /// Time the object dropped, for failed runs (s).
    pub drop_time: Option<f64>,
    /// When the run finished (UTC).
    pub timestamp: DateTime<Utc>,
}

impl RunRecord {
    /// Build a record from a finished run, stamped with the current time.
    #[must_use]
    pub fn from_report(engine: impl Into<String>, report: &RunReport) -> Self {
        Self {
            engine: engine.into(),
            object: report.object,
            task: TaskKind::from_shake_enabled(report.shake_enabled),
            timestep: report.timestep,
            seed: report.seed,
            verdict: report.verdict,
            drop_time: report.drop_time,
            timestamp: Utc::now(),
        }
    }

    /// Standardized file stem:
    /// `{engine}_grasp_{task}_{object}_dt{d_ddd}` with the timestep's
    /// decimal point replaced by an underscore.
    #[must_use]
    pub fn file_stem(&self) -> String {
        format!(
            "{}_grasp_{}_{}_dt{}",
            self.engine,
            self.task,
            self.object,
            format_timestep(self.timestep)
        )
    }

    /// Parse `(engine, task, object, timestep)` back out of a file stem.
    ///
    /// The inverse of [`file_stem`](Self::file_stem); used to decide
    /// whether a JSON file in the output directory is a record at all.
    pub fn parse_stem(stem: &str) -> crate::Result<(String, TaskKind, GraspObject, f64)> {
        let parts: Vec<&str> = stem.split('_').collect();
        // engine, "grasp", task, object, "dt<int>", "<frac>"
        if parts.len() != 6 || parts[1] != "grasp" {
            return Err(ReportError::invalid_name(stem));
        }
        let task: TaskKind = parts[2].parse()?;
        let object: GraspObject = parts[3]
            .parse()
            .map_err(|_| ReportError::invalid_name(stem))?;
        let whole = parts[4]
            .strip_prefix("dt")
            .ok_or_else(|| ReportError::invalid_name(stem))?;
        let timestep: f64 = format!("{whole}.{}", parts[5])
            .parse()
            .map_err(|_| ReportError::invalid_name(stem))?;
        Ok((parts[0].to_string(), task, object, timestep))
    }
}

/// Timestep with three decimals and the dot replaced by an underscore, so
/// the stem stays a single filesystem-safe token: `0.002` -> `0_002`.
fn format_timestep(dt: f64) -> String {
    format!("{dt:.3}").replace('.', "_")
}
