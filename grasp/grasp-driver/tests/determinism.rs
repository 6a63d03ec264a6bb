//! Reproducibility tests: identical configurations must produce
//! bit-identical wrench sequences and identical verdicts, the property the
//! whole cross-engine comparison rests on.

use grasp_driver::{BenchmarkBatch, GraspDriver, ShakeGenerator};
use grasp_types::{BenchmarkConfig, GraspObject, ShakeConfig, Wrench};

fn config(seed: u64) -> BenchmarkConfig {
    BenchmarkConfig::new(GraspObject::Bottle)
        .with_seed(seed)
        .with_timestep(0.002)
}

/// Drive a full run and collect every emitted wrench.
fn wrench_sequence(config: &BenchmarkConfig) -> Vec<Wrench> {
    let mut driver = GraspDriver::new(config.clone()).unwrap();
    let mut wrenches = Vec::new();
    for step in 0..10_001_u64 {
        let elapsed = step as f64 * config.timestep;
        if let Some(w) = driver.step(elapsed, 0.10).wrench {
            wrenches.push(w);
        }
    }
    wrenches
}

#[test]
fn identical_configs_bit_identical_wrenches() {
    // Bit-level equality, not approximate.
    let a = wrench_sequence(&config(42));
    let b = wrench_sequence(&config(42));

    assert_eq!(a.len(), b.len());
    for (wa, wb) in a.iter().zip(&b) {
        assert_eq!(wa.force.as_slice(), wb.force.as_slice());
        assert_eq!(wa.torque.as_slice(), wb.torque.as_slice());
    }
}

#[test]
fn different_seeds_different_wrenches() {
    let a = wrench_sequence(&config(42));
    let b = wrench_sequence(&config(43));
    assert_ne!(a, b);
}

#[test]
fn verdicts_reproducible() {
    // Heights derived from the wrench stream itself, so any stream
    // difference between reruns would surface as a verdict difference.
    let run = || {
        let mut driver = GraspDriver::new(config(7)).unwrap();
        let mut height = 0.10;
        for step in 0..10_001_u64 {
            let elapsed = step as f64 * 0.002;
            let command = driver.step(elapsed, height);
            height = command
                .wrench
                .map_or(0.10, |w| 0.10 - w.force.z.abs() * 0.012);
            if driver.verdict().is_final() {
                break;
            }
        }
        (driver.finalize(), driver.drop_time())
    };

    let (verdict_a, drop_a) = run();
    let (verdict_b, drop_b) = run();
    assert_eq!(verdict_a, verdict_b);
    assert_eq!(drop_a, drop_b);
}

#[test]
fn wrench_bounds_hold_over_long_runs() {
    // Configured bounds hold across seeds and pulses.
    let shake = ShakeConfig::default()
        .with_force_bounds(1.0, 4.0)
        .with_torque_bounds(0.1, 0.3);
    for seed in [0, 1, 0xDEAD_BEEF, u64::MAX] {
        let gen = ShakeGenerator::new(seed, shake).unwrap();
        for pulse in 0..500 {
            let w = gen.wrench_for_pulse(pulse);
            assert!(w.max_force_component() <= 4.0);
            assert!(w.force.iter().all(|f| f.abs() >= 1.0));
            assert!(w.max_torque_component() <= 0.3);
        }
    }
}

#[test]
fn batch_lanes_reproducible_and_independent() {
    let base = config(100);

    let run_batch = || {
        let mut batch = BenchmarkBatch::new(&base, 4).unwrap();
        let heights = [0.10; 4];
        let mut all = Vec::new();
        for step in 0..3000_u64 {
            let elapsed = step as f64 * base.timestep;
            let commands = batch.step_all(elapsed, &heights);
            all.extend(commands.into_iter().filter_map(|c| c.wrench));
        }
        all
    };

    let first = run_batch();
    let second = run_batch();
    assert_eq!(first, second, "batch reruns must be bit-identical");

    // Lanes within one batch draw from distinct streams.
    let mut batch = BenchmarkBatch::new(&base, 2).unwrap();
    let commands = batch.step_all(5.0, &[0.10, 0.10]);
    assert_ne!(commands[0].wrench, commands[1].wrench);
}
