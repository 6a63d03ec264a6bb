//! End-to-end reporting pipeline: drive benchmark runs for several
//! engines, persist their records, and render the comparison report from
//! the directory alone, the way the batch runner consumes this crate.

use grasp_driver::{run_benchmark, GripperWorld};
use grasp_report::{load_records, render_report, save_record, write_report, RunRecord, Summary};
use grasp_types::{BenchmarkConfig, GraspObject, Pose, Verdict, Wrench};

/// Test double whose grasp quality is fixed per instance: a solid grasp
/// tracks the commanded pose, a weak one drops the object mid-shake.
struct FakeEngine {
    drops_at: Option<f64>,
    elapsed: f64,
    commanded_z: f64,
    aperture: f64,
    attached: bool,
}

impl FakeEngine {
    fn solid() -> Self {
        Self {
            drops_at: None,
            elapsed: 0.0,
            commanded_z: 0.0,
            aperture: 1.0,
            attached: false,
        }
    }

    fn dropping_at(t: f64) -> Self {
        Self {
            drops_at: Some(t),
            ..Self::solid()
        }
    }
}

impl GripperWorld for FakeEngine {
    fn command_gripper(&mut self, pose: &Pose, aperture: f64) {
        self.commanded_z = pose.position.z;
        self.aperture = aperture;
    }

    fn apply_wrench(&mut self, _wrench: &Wrench) {}

    fn step(&mut self, dt: f64) {
        self.elapsed += dt;
        if self.aperture < 0.1 {
            self.attached = true;
        }
    }

    fn object_height(&self) -> f64 {
        if let Some(drop) = self.drops_at {
            if self.elapsed >= drop {
                return 0.01;
            }
        }
        if self.attached {
            self.commanded_z.max(0.02)
        } else {
            0.02
        }
    }
}

fn config() -> BenchmarkConfig {
    BenchmarkConfig::new(GraspObject::Cube)
        .with_timestep(0.01)
        .with_seed(3)
}

#[test]
fn runs_to_report_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output");

    // mujoco holds the grasp, genesis drops it at t=12.
    let mujoco = run_benchmark(&config(), &mut FakeEngine::solid()).unwrap();
    let genesis = run_benchmark(&config(), &mut FakeEngine::dropping_at(12.0)).unwrap();
    assert_eq!(mujoco.verdict, Verdict::Pass);
    assert_eq!(genesis.verdict, Verdict::Fail);

    save_record(&output, &RunRecord::from_report("mujoco", &mujoco)).unwrap();
    save_record(&output, &RunRecord::from_report("genesis", &genesis)).unwrap();

    // Reload from disk only.
    let records = load_records(&output).unwrap();
    assert_eq!(records.len(), 2);

    let summary = Summary::from_records(&records);
    assert_eq!(summary.overall.total, 2);
    assert_eq!(summary.overall.passed, 1);
    assert_eq!(summary.by_engine["mujoco"].passed, 1);
    assert_eq!(summary.by_engine["genesis"].passed, 0);

    let report_path = output.join("comparison_report.html");
    write_report(&report_path, &records, "Grasp Benchmark Comparison Report").unwrap();

    let html = std::fs::read_to_string(&report_path).unwrap();
    assert!(html.contains("<th>mujoco</th>"));
    assert!(html.contains("fail @ 12."));

    // The report itself must not confuse the next directory scan.
    let rescanned = load_records(&output).unwrap();
    assert_eq!(rescanned.len(), 2);
}

#[test]
fn drop_time_survives_persistence() {
    let dir = tempfile::tempdir().unwrap();

    let report = run_benchmark(&config(), &mut FakeEngine::dropping_at(10.0)).unwrap();
    let drop = report.drop_time.unwrap();
    assert!((drop - 10.0).abs() < 0.1);

    save_record(dir.path(), &RunRecord::from_report("motrix", &report)).unwrap();
    let records = load_records(dir.path()).unwrap();
    assert_eq!(records[0].drop_time, Some(drop));
}

#[test]
fn mixed_objects_group_in_report() {
    let dir = tempfile::tempdir().unwrap();

    for object in GraspObject::ALL {
        let config = BenchmarkConfig::new(object).with_timestep(0.01);
        let report = run_benchmark(&config, &mut FakeEngine::solid()).unwrap();
        save_record(dir.path(), &RunRecord::from_report("mujoco", &report)).unwrap();
    }

    let records = load_records(dir.path()).unwrap();
    assert_eq!(records.len(), 3);

    let html = render_report(&records, "By object");
    for object in GraspObject::ALL {
        assert!(html.contains(&format!("<td>{object}</td>")));
    }
}
