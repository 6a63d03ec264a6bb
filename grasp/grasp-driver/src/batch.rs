//! Batched runs: N independent lanes over one configuration.
//!
//! All lanes share the benchmark configuration but own independent run
//! state and perturbation streams, so a batch of 64 environments can be
//! stepped by a vectorized engine while each lane scores itself. Stepping
//! is parallelized across CPU cores via rayon when the `parallel` feature
//! is enabled; sequential fallback when disabled. Either way the output
//! is independent of thread count and scheduling order: each lane is
//! exclusively owned by one slot and lane seeds are derived, not shared.

use grasp_types::{BenchmarkConfig, Verdict};

use crate::driver::{GraspDriver, RunReport, StepCommand};
use crate::perturbation::mix64;

/// Seed for lane `lane` of a batch seeded with `seed`.
///
/// SplitMix64-mixed so neighboring lanes get decorrelated streams while
/// remaining reproducible from the batch seed alone.
#[must_use]
pub fn lane_seed(seed: u64, lane: u64) -> u64 {
    mix64(seed.wrapping_add(mix64(lane)))
}

/// N independent benchmark lanes sharing one configuration.
///
/// # Example
///
/// ```
/// use grasp_driver::BenchmarkBatch;
/// use grasp_types::{BenchmarkConfig, GraspObject};
///
/// let config = BenchmarkConfig::new(GraspObject::Cube).with_seed(3);
/// let mut batch = BenchmarkBatch::new(&config, 4).unwrap();
///
/// let heights = [0.02; 4];
/// let commands = batch.step_all(0.0, &heights);
/// assert_eq!(commands.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkBatch {
    lanes: Vec<GraspDriver>,
}

impl BenchmarkBatch {
    /// Create a batch of `n` lanes, lane `i` seeded with
    /// [`lane_seed`]`(config.seed, i)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`](grasp_types::ConfigError) if the shared
    /// configuration is invalid.
    pub fn new(config: &BenchmarkConfig, n: usize) -> grasp_types::Result<Self> {
        let lanes = (0..n)
            .map(|i| {
                let seeded = config.clone().with_seed(lane_seed(config.seed, i as u64));
                GraspDriver::new(seeded)
            })
            .collect::<grasp_types::Result<Vec<_>>>()?;
        Ok(Self { lanes })
    }

    /// Number of lanes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    /// Whether the batch has no lanes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Immutable access to lane `i`.
    #[must_use]
    pub fn lane(&self, i: usize) -> Option<&GraspDriver> {
        self.lanes.get(i)
    }

    /// Mutable access to lane `i`.
    pub fn lane_mut(&mut self, i: usize) -> Option<&mut GraspDriver> {
        self.lanes.get_mut(i)
    }

    /// Iterate over lanes.
    pub fn lanes(&self) -> impl Iterator<Item = &GraspDriver> {
        self.lanes.iter()
    }

    /// Iterate over lanes mutably.
    pub fn lanes_mut(&mut self) -> impl Iterator<Item = &mut GraspDriver> {
        self.lanes.iter_mut()
    }

    /// Step every lane at the same elapsed time with per-lane heights.
    ///
    /// `heights[i]` is the observed object height in lane `i`'s
    /// environment. Lanes whose verdicts are already final still receive
    /// the observation (it is recorded in their traces) but their verdicts
    /// cannot change.
    ///
    /// # Panics
    ///
    /// Panics if `heights.len() != self.len()`.
    pub fn step_all(&mut self, elapsed: f64, heights: &[f64]) -> Vec<StepCommand> {
        assert_eq!(
            heights.len(),
            self.lanes.len(),
            "one height per lane required"
        );

        #[cfg(feature = "parallel")]
        {
            use rayon::iter::{
                IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator,
            };
            self.lanes
                .par_iter_mut()
                .zip(heights)
                .map(|(lane, &height)| lane.step(elapsed, height))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            self.lanes
                .iter_mut()
                .zip(heights)
                .map(|(lane, &height)| lane.step(elapsed, height))
                .collect()
        }
    }

    /// Current verdict of every lane.
    #[must_use]
    pub fn verdicts(&self) -> Vec<Verdict> {
        self.lanes.iter().map(GraspDriver::verdict).collect()
    }

    /// Whether every lane has a final verdict.
    #[must_use]
    pub fn all_final(&self) -> bool {
        self.lanes.iter().all(|lane| lane.verdict().is_final())
    }

    /// Consume the batch into per-lane reports.
    #[must_use]
    pub fn into_reports(self) -> Vec<RunReport> {
        self.lanes
            .into_iter()
            .map(GraspDriver::into_report)
            .collect()
    }
}
