//! Pass/fail statistics over a set of run records.

use std::collections::BTreeMap;

use grasp_types::GraspObject;

use crate::record::RunRecord;

/// Pass/fail counts for one group of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupStats {
    /// Records in the group.
    pub total: usize,
    /// Records with a pass verdict.
    pub passed: usize,
}

impl GroupStats {
    fn record(&mut self, passed: bool) {
        self.total += 1;
        if passed {
            self.passed += 1;
        }
    }

    /// Records that did not pass.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.total - self.passed
    }

    /// Fraction of the group that passed, 0 for an empty group.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    // Precision loss: record counts beyond 2^52 are unsupported
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.passed as f64 / self.total as f64
        }
    }
}

/// Totals and per-category breakdowns for a record set.
///
/// Grouping mirrors the comparison axes of the benchmark: which engine,
/// which object, and which timestep. Non-final verdicts (a record written
/// from an aborted run) count toward totals but not toward passes.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    /// All records.
    pub overall: GroupStats,
    /// Grouped by engine name.
    pub by_engine: BTreeMap<String, GroupStats>,
    /// Grouped by grasped object.
    pub by_object: BTreeMap<GraspObject, GroupStats>,
    /// Grouped by timestep, keyed by its three-decimal rendering.
    pub by_timestep: BTreeMap<String, GroupStats>,
}

impl Summary {
    /// Compute a summary over `records`.
    #[must_use]
    pub fn from_records(records: &[RunRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            let passed = record.verdict.is_pass();
            summary.overall.record(passed);
            summary
                .by_engine
                .entry(record.engine.clone())
                .or_default()
                .record(passed);
            summary
                .by_object
                .entry(record.object)
                .or_default()
                .record(passed);
            summary
                .by_timestep
                .entry(format!("{:.3}", record.timestep))
                .or_default()
                .record(passed);
        }
        summary
    }

    /// Engines present, in sorted order.
    pub fn engines(&self) -> impl Iterator<Item = &str> {
        self.by_engine.keys().map(String::as_str)
    }
}
