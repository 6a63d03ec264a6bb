//! Pass/fail evaluation over observed object heights.

use grasp_types::{Phase, Verdict};
use tracing::{debug, info};

/// Latching pass/fail evaluator.
///
/// Feeds on one `(phase, time, height)` observation per physics step:
///
/// - heights below the threshold while the object is expected to be lifted
///   (shake phase or later) latch [`Verdict::Fail`] immediately;
/// - dips during initial/approach/grasp/lift are grace-period samples (the
///   object legitimately sits on the table below the threshold) and never
///   fail the run;
/// - reaching [`Phase::Done`] without a latched failure yields
///   [`Verdict::Pass`].
///
/// A latched failure is terminal: height recoveries on later steps model
/// a bounce, not a re-grasp, and do not revert the verdict. No debounce
/// window is applied; the first eligible sub-threshold sample decides.
#[derive(Debug, Clone)]
pub struct OutcomeEvaluator {
    threshold: f64,
    verdict: Verdict,
    drop_time: Option<f64>,
}

impl OutcomeEvaluator {
    /// Create an evaluator with the given height threshold (m).
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            verdict: Verdict::Pending,
            drop_time: None,
        }
    }

    /// The failure threshold (m).
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The current verdict.
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Time of the first eligible sub-threshold observation, if any (s).
    #[must_use]
    pub const fn drop_time(&self) -> Option<f64> {
        self.drop_time
    }

    /// Record one height observation and return the (possibly updated)
    /// verdict.
    pub fn observe(&mut self, phase: Phase, time: f64, height: f64) -> Verdict {
        if self.verdict.is_final() {
            return self.verdict;
        }
        if phase.object_lifted() && height < self.threshold {
            self.verdict = Verdict::Fail;
            self.drop_time = Some(time);
            info!(
                time,
                height,
                threshold = self.threshold,
                "object dropped, failure latched"
            );
        } else if phase.is_done() {
            self.verdict = Verdict::Pass;
            info!(time, "shake complete, run passed");
        } else {
            debug!(phase = %phase, time, height, "height sample");
        }
        self.verdict
    }

    /// Settle and return the verdict.
    ///
    /// Idempotent: calling again after the verdict is final returns the
    /// same value with no side effects. Returns [`Verdict::Pending`] if the
    /// run was aborted before the done phase with no failure observed.
    pub fn finalize(&mut self) -> Verdict {
        self.verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_when_height_holds() {
        let mut eval = OutcomeEvaluator::new(0.05);
        let mut time = 0.0;
        while time < 20.0 {
            let phase = grasp_types::PhaseTimeline::default().phase_at(time);
            assert_eq!(eval.observe(phase, time, 0.10), Verdict::Pending);
            time += 0.1;
        }
        assert_eq!(eval.observe(Phase::Done, 20.0, 0.10), Verdict::Pass);
    }

    #[test]
    fn test_fail_latched_in_shake() {
        let mut eval = OutcomeEvaluator::new(0.05);
        eval.observe(Phase::Shake, 9.9, 0.10);
        assert_eq!(eval.observe(Phase::Shake, 10.0, 0.02), Verdict::Fail);
        assert_eq!(eval.drop_time(), Some(10.0));

        // Recovery does not revert the failure.
        assert_eq!(eval.observe(Phase::Shake, 10.1, 0.20), Verdict::Fail);
        assert_eq!(eval.observe(Phase::Done, 20.0, 0.20), Verdict::Fail);
        assert_eq!(eval.drop_time(), Some(10.0));
    }

    #[test]
    fn test_grace_period_before_lift_completes() {
        let mut eval = OutcomeEvaluator::new(0.05);
        // Object still on the table during the early phases.
        assert_eq!(eval.observe(Phase::Initial, 0.5, 0.02), Verdict::Pending);
        assert_eq!(eval.observe(Phase::Approach, 1.5, 0.02), Verdict::Pending);
        assert_eq!(eval.observe(Phase::Grasp, 2.5, 0.02), Verdict::Pending);
        assert_eq!(eval.observe(Phase::Lift, 3.5, 0.04), Verdict::Pending);
        assert!(eval.drop_time().is_none());
    }

    #[test]
    fn test_drop_during_done_still_fails() {
        let mut eval = OutcomeEvaluator::new(0.05);
        assert_eq!(eval.observe(Phase::Done, 20.0, 0.01), Verdict::Fail);
    }

    #[test]
    fn test_finalize_idempotent() {
        let mut eval = OutcomeEvaluator::new(0.05);
        eval.observe(Phase::Shake, 5.0, 0.01);
        assert_eq!(eval.finalize(), Verdict::Fail);
        assert_eq!(eval.finalize(), Verdict::Fail);

        let mut pending = OutcomeEvaluator::new(0.05);
        pending.observe(Phase::Lift, 3.5, 0.10);
        assert_eq!(pending.finalize(), Verdict::Pending);
        assert_eq!(pending.finalize(), Verdict::Pending);
    }

    #[test]
    fn test_exact_threshold_is_not_a_drop() {
        let mut eval = OutcomeEvaluator::new(0.05);
        assert_eq!(eval.observe(Phase::Shake, 5.0, 0.05), Verdict::Pending);
    }
}
