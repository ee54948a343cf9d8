// Dweve SymBench - Symbolic Execution Benchmark Harness
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Batch experiments against a fake engine.

mod common;

use common::{arg_value, environment, FakeRunner};
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use symbench_core::Value;
use symbench_launch::{
    CommandRunner, Experiment, ExperimentConfig, InstructionBudget, LaunchError, Launcher,
    Provisioner,
};
use symbench_test::fixtures::stats;
use tempfile::TempDir;

/// Baseline runs take 10s, incremental runs 4s; `od` issues one more query
/// incrementally.
fn summarize(dir: &Path) -> String {
    let name = dir.file_name().unwrap().to_str().unwrap().to_string();
    let incremental = name.contains("Z3Incremental");
    let time = if incremental { 4.0 } else { 10.0 };
    let queries = if incremental && name.starts_with("od") { 11 } else { 10 };
    stats::run(&dir.display().to_string(), time, 1000, queries).to_csv()
}

fn config(programs: &[&str], budget: InstructionBudget) -> ExperimentConfig {
    ExperimentConfig {
        name: "inc-vs-base".to_string(),
        programs: programs.iter().map(|p| p.to_string()).collect(),
        budget,
        ..Default::default()
    }
}

#[test]
fn test_fixed_budgets_write_results_and_mismatches() {
    let tmp = TempDir::new().unwrap();
    let launcher = Launcher::new(environment(&tmp), FakeRunner::new(summarize));
    let experiment = Experiment::new(
        launcher,
        config(&["ln", "od"], InstructionBudget::Fixed(vec![500, 700])),
    );

    let report = experiment.run().unwrap();

    let csv = fs::read_to_string(tmp.path().join("results/inc-vs-base.csv")).unwrap();
    assert_eq!(
        csv,
        "Program,Non-Incremental Time,Incremental Time\nln,10.0,4.0\nod,10.0,4.0\n"
    );
    assert_eq!(
        report.budgets,
        vec![("ln".to_string(), 500), ("od".to_string(), 700)]
    );
    assert_eq!(report.query_mismatches.len(), 1);
    assert_eq!(report.query_mismatches[0].program, "od");
    assert_eq!(report.query_mismatches[0].baseline, Value::Int(10));
    assert_eq!(report.query_mismatches[0].testee, Value::Int(11));
    assert!(report.instruction_mismatches.is_empty());

    let engine = experiment.launcher().runner().engine_calls();
    assert_eq!(engine.len(), 4);
    assert_eq!(arg_value(&engine[0], "--max-instructions"), Some("500"));
    assert_eq!(arg_value(&engine[2], "--max-instructions"), Some("700"));
    assert_eq!(arg_value(&engine[0], "--max-time"), Some("1500s"));
    assert_eq!(arg_value(&engine[0], "--search"), Some("dfs"));

    let progress = fs::read_to_string(report.progress_path.unwrap()).unwrap();
    assert!(progress.contains("Results for od (2 / 2):"));
    assert!(progress.contains("Current query mismatches: [(od, 10, 11)]"));
}

#[test]
fn test_calibration_scales_instructions() {
    let tmp = TempDir::new().unwrap();
    let launcher = Launcher::new(environment(&tmp), FakeRunner::new(summarize));
    let experiment = Experiment::new(
        launcher,
        config(
            &["ln"],
            InstructionBudget::Calibrate {
                time_secs: 120,
                scale: 0.85,
            },
        ),
    );

    let report = experiment.run().unwrap();
    assert_eq!(report.budgets, vec![("ln".to_string(), 850)]);

    let engine = experiment.launcher().runner().engine_calls();
    assert_eq!(engine.len(), 3);
    assert_eq!(arg_value(&engine[0], "--max-time"), Some("120s"));
    assert_eq!(arg_value(&engine[0], "--max-instructions"), Some("0"));
    assert_eq!(arg_value(&engine[1], "--max-instructions"), Some("850"));
    assert_eq!(arg_value(&engine[2], "--max-instructions"), Some("850"));
}

#[test]
fn test_resume_skips_recorded_programs() {
    let tmp = TempDir::new().unwrap();
    let results = tmp.path().join("results");
    fs::create_dir_all(&results).unwrap();
    fs::write(
        results.join("inc-vs-base.csv"),
        "Program,Non-Incremental Time,Incremental Time\nln,9.5,3.5\n",
    )
    .unwrap();

    let launcher = Launcher::new(environment(&tmp), FakeRunner::new(summarize));
    let mut cfg = config(&["ln", "od"], InstructionBudget::Fixed(vec![500, 700]));
    cfg.resume = true;
    let experiment = Experiment::new(launcher, cfg);

    let report = experiment.run().unwrap();
    assert_eq!(report.skipped, 1);
    assert_eq!(report.budgets, vec![("od".to_string(), 700)]);
    assert_eq!(
        fs::read_to_string(results.join("inc-vs-base.csv")).unwrap(),
        "Program,Non-Incremental Time,Incremental Time\nln,9.5,3.5\nod,10.0,4.0\n"
    );
}

#[test]
fn test_resume_rejects_foreign_table() {
    let tmp = TempDir::new().unwrap();
    let results = tmp.path().join("results");
    fs::create_dir_all(&results).unwrap();
    fs::write(
        results.join("inc-vs-base.csv"),
        "Program,Non-Incremental Time,Incremental Time\ndu,9.5,3.5\n",
    )
    .unwrap();

    let launcher = Launcher::new(environment(&tmp), FakeRunner::new(summarize));
    let mut cfg = config(&["ln", "od"], InstructionBudget::Fixed(vec![500, 700]));
    cfg.resume = true;
    let err = Experiment::new(launcher, cfg).run().unwrap_err();
    assert!(matches!(err, LaunchError::InvalidConfig { .. }));
}

#[test]
fn test_failed_run_keeps_earlier_rows() {
    let tmp = TempDir::new().unwrap();
    let fail_on_od = |dir: &Path| {
        if dir.file_name().unwrap().to_str().unwrap().starts_with("od") {
            String::new()
        } else {
            summarize(dir)
        }
    };
    let launcher = Launcher::new(environment(&tmp), FakeRunner::new(fail_on_od));
    let experiment = Experiment::new(
        launcher,
        config(&["ln", "od"], InstructionBudget::Fixed(vec![500, 700])),
    );

    let err = experiment.run().unwrap_err();
    assert!(matches!(err, LaunchError::MissingResults { .. }));
    assert_eq!(
        fs::read_to_string(tmp.path().join("results/inc-vs-base.csv")).unwrap(),
        "Program,Non-Incremental Time,Incremental Time\nln,10.0,4.0\n"
    );
}

#[derive(Default)]
struct RecordingProvisioner {
    revisions: Mutex<Vec<String>>,
}

impl Provisioner for RecordingProvisioner {
    fn provision(&self, _runner: &dyn CommandRunner, revision: &str) -> symbench_launch::Result<()> {
        self.revisions.lock().unwrap().push(revision.to_string());
        Ok(())
    }
}

#[test]
fn test_revisions_switch_only_when_needed() {
    let tmp = TempDir::new().unwrap();
    let launcher = Launcher::new(environment(&tmp), FakeRunner::new(summarize));
    let mut cfg = config(&["ln", "od"], InstructionBudget::Fixed(vec![500, 700]));
    cfg.baseline.revision = Some("master".to_string());
    cfg.testee.revision = Some("master".to_string());
    let provisioner = RecordingProvisioner::default();
    let experiment = Experiment::with_provisioner(launcher, &provisioner, cfg);
    experiment.run().unwrap();
    assert_eq!(*provisioner.revisions.lock().unwrap(), vec!["master"]);

    let tmp = TempDir::new().unwrap();
    let launcher = Launcher::new(environment(&tmp), FakeRunner::new(summarize));
    let mut cfg = config(&["ln"], InstructionBudget::Fixed(vec![500]));
    cfg.baseline.revision = Some("master".to_string());
    cfg.testee.revision = Some("pooling".to_string());
    let provisioner = RecordingProvisioner::default();
    Experiment::with_provisioner(launcher, &provisioner, cfg)
        .run()
        .unwrap();
    assert_eq!(
        *provisioner.revisions.lock().unwrap(),
        vec!["master", "pooling"]
    );
}
