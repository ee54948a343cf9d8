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


//! Batch experiments: baseline versus testee over a list of programs.
//!
//! For every program, in order:
//!
//! 1. pick an instruction budget, either from a fixed list or by running the
//!    baseline for a fixed time and scaling the instructions it reached
//! 2. run baseline and testee on that budget, each capped by a wall-clock
//!    safety timeout
//! 3. compare their instruction and query counts
//! 4. append `program, baseline time, testee time` to the results table
//!
//! The first fatal error aborts the batch; rows already written stay on disk
//! and a later run with `resume` set continues after them.

use crate::config::{
    IncrementalityMode, RunConfiguration, RunConfigurationBuilder, SearchStrategy, DEFAULT_MEMORY_MB,
};
use crate::error::{LaunchError, Result};
use crate::launcher::Launcher;
use crate::progress::ProgressLog;
use crate::provision::{NoProvisioner, Provisioner};
use crate::runner::CommandRunner;
use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};
use symbench_compare::{compare_records, default_fields};
use symbench_core::{EngineStats, StatField, Value, PROGRAM_COLUMN};
use symbench_csv::ResultWriter;
use tracing::{info, warn};

/// Instruction scale applied to calibration runs.
pub const DEFAULT_SCALE_FACTOR: f64 = 0.85;

/// Wall-clock cap on budgeted runs, in seconds.
pub const DEFAULT_SAFETY_TIMEOUT_SECS: u64 = 25 * 60;

/// One side of the comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Arm {
    /// Column label; the results column is `<label> Time`.
    pub label: String,
    /// Incrementality mode.
    pub mode: IncrementalityMode,
    /// Search strategy.
    pub search: SearchStrategy,
    /// Engine revision to provision before this arm runs.
    pub revision: Option<String>,
    /// Passthrough engine flags.
    pub extra_flags: Vec<String>,
}

impl Arm {
    /// An arm using depth-first search and no revision switch.
    pub fn new(label: impl Into<String>, mode: IncrementalityMode) -> Self {
        Self {
            label: label.into(),
            mode,
            search: SearchStrategy::Dfs,
            revision: None,
            extra_flags: Vec::new(),
        }
    }

    fn configure(&self, program: &str, memory_mb: u64) -> RunConfigurationBuilder {
        RunConfiguration::builder(program)
            .mode(self.mode)
            .search(self.search)
            .memory_mb(memory_mb)
            .simplify(true)
            .extra_flags(self.extra_flags.iter().cloned())
    }
}

/// How each program's instruction budget is chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum InstructionBudget {
    /// One budget per program, in program order.
    Fixed(Vec<u64>),
    /// Run the baseline for `time_secs` and scale the instructions it reached.
    Calibrate {
        /// Calibration run length.
        time_secs: u64,
        /// Scale applied to the calibration run's instruction count.
        scale: f64,
    },
}

/// Settings for an [`Experiment`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    /// Experiment name; results go to `<results_dir>/<name>.csv`.
    pub name: String,
    /// Programs, in run order.
    pub programs: Vec<String>,
    /// Instruction budget policy.
    pub budget: InstructionBudget,
    /// Wall-clock cap on budgeted runs.
    pub safety_timeout_secs: u64,
    /// Memory ceiling for every run.
    pub memory_mb: u64,
    /// Reference configuration.
    pub baseline: Arm,
    /// Configuration under test.
    pub testee: Arm,
    /// Continue an existing results table instead of starting over.
    pub resume: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            name: "results".to_string(),
            programs: Vec::new(),
            budget: InstructionBudget::Calibrate {
                time_secs: 10 * 60,
                scale: DEFAULT_SCALE_FACTOR,
            },
            safety_timeout_secs: DEFAULT_SAFETY_TIMEOUT_SECS,
            memory_mb: DEFAULT_MEMORY_MB,
            baseline: Arm::new("Non-Incremental", IncrementalityMode::NonIncremental),
            testee: Arm::new("Incremental", IncrementalityMode::Incremental),
            resume: false,
        }
    }
}

impl ExperimentConfig {
    /// Results table columns.
    pub fn columns(&self) -> Vec<String> {
        vec![
            PROGRAM_COLUMN.to_string(),
            format!("{} Time", self.baseline.label),
            format!("{} Time", self.testee.label),
        ]
    }

    fn validate(&self) -> Result<()> {
        if self.programs.is_empty() {
            return Err(LaunchError::invalid_config("experiment has no programs"));
        }
        if self.baseline.label == self.testee.label {
            return Err(LaunchError::invalid_config(format!(
                "baseline and testee share the label '{}'",
                self.baseline.label
            )));
        }
        match &self.budget {
            InstructionBudget::Fixed(budgets) if budgets.len() != self.programs.len() => {
                Err(LaunchError::invalid_config(format!(
                    "{} instruction budgets for {} programs",
                    budgets.len(),
                    self.programs.len()
                )))
            }
            InstructionBudget::Calibrate { time_secs: 0, .. } => Err(
                LaunchError::invalid_config("calibration time must be positive"),
            ),
            InstructionBudget::Calibrate { scale, .. } if !(*scale > 0.0 && scale.is_finite()) => {
                Err(LaunchError::invalid_config(format!(
                    "instruction scale must be positive, got {}",
                    scale
                )))
            }
            _ => Ok(()),
        }
    }
}

/// A counter that differs between baseline and testee.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    /// Program.
    pub program: String,
    /// Baseline value.
    pub baseline: Value,
    /// Testee value.
    pub testee: Value,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.program, self.baseline, self.testee)
    }
}

fn list<T: fmt::Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

/// What an experiment produced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExperimentReport {
    /// Results table path.
    pub results_path: PathBuf,
    /// Instruction budget used for each program run in this session.
    pub budgets: Vec<(String, u64)>,
    /// Programs whose query counts differed.
    pub query_mismatches: Vec<Mismatch>,
    /// Programs whose instruction counts differed.
    pub instruction_mismatches: Vec<Mismatch>,
    /// Programs skipped because a resumed table already had them.
    pub skipped: usize,
    /// Persisted progress log.
    pub progress_path: Option<PathBuf>,
}

/// Runs an [`ExperimentConfig`] through a [`Launcher`].
#[derive(Debug)]
pub struct Experiment<R, P = NoProvisioner> {
    launcher: Launcher<R>,
    provisioner: P,
    config: ExperimentConfig,
    current_revision: RefCell<Option<String>>,
}

impl<R: CommandRunner> Experiment<R, NoProvisioner> {
    /// Experiment without revision switching.
    pub fn new(launcher: Launcher<R>, config: ExperimentConfig) -> Self {
        Self::with_provisioner(launcher, NoProvisioner, config)
    }
}

impl<R: CommandRunner, P: Provisioner> Experiment<R, P> {
    /// Experiment that provisions each arm's revision before it runs.
    pub fn with_provisioner(launcher: Launcher<R>, provisioner: P, config: ExperimentConfig) -> Self {
        Self {
            launcher,
            provisioner,
            config,
            current_revision: RefCell::new(None),
        }
    }

    /// The configuration.
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// The launcher.
    pub fn launcher(&self) -> &Launcher<R> {
        &self.launcher
    }

    /// Run the batch.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by configuration, provisioning, a run,
    /// or the results table. Rows written before the error are kept.
    pub fn run(&self) -> Result<ExperimentReport> {
        self.config.validate()?;
        let env = self.launcher.env();
        let progress = ProgressLog::create(&env.dump_dir)?;
        let results_path = env.results_dir.join(format!("{}.csv", self.config.name));
        let (mut writer, skipped) = self.open_results(&results_path)?;

        let mut report = ExperimentReport {
            results_path: results_path.clone(),
            skipped,
            ..Default::default()
        };
        if skipped > 0 {
            progress.log(&format!("Resuming after {} recorded programs", skipped))?;
        }

        let total = self.config.programs.len();
        for (i, program) in self.config.programs.iter().enumerate().skip(skipped) {
            let budget = self.instruction_budget(i, program, &progress)?;
            report.budgets.push((program.clone(), budget));

            let baseline = self.budgeted_run(&self.config.baseline, program, budget, &progress)?;
            let testee = self.budgeted_run(&self.config.testee, program, budget, &progress)?;

            for diff in compare_records(baseline.record(), testee.record(), &default_fields())? {
                let mismatch = Mismatch {
                    program: program.clone(),
                    baseline: diff.a,
                    testee: diff.b,
                };
                warn!(program = %program, field = %diff.field, "baseline and testee differ");
                if diff.field == StatField::Queries.name() {
                    report.query_mismatches.push(mismatch);
                } else {
                    report.instruction_mismatches.push(mismatch);
                }
            }

            let (base_time, test_time) = (baseline.time()?, testee.time()?);
            progress.log(&format!(
                "Results for {} ({} / {}):\n    - (First Time: {}, Second Time: {})\n    - Current query mismatches: {}\n    - Current instruction mismatches: {}",
                program,
                i + 1,
                total,
                base_time,
                test_time,
                list(&report.query_mismatches),
                list(&report.instruction_mismatches),
            ))?;
            writer.write_row(
                program.as_str(),
                vec![Value::Float(base_time), Value::Float(test_time)],
            )?;
        }

        progress.log(&format!("Printing results...\n{}", writer.contents()?))?;
        let budgets: Vec<u64> = report.budgets.iter().map(|(_, b)| *b).collect();
        progress.log(&format!("Printing instruction list:\n{:?}", budgets))?;
        progress.log(&format!(
            "Printing query mismatches:\n{}",
            list(&report.query_mismatches)
        ))?;
        progress.log(&format!(
            "Printing instruction mismatches:\n{}",
            list(&report.instruction_mismatches)
        ))?;
        report.progress_path = Some(progress.persist(&env.progress_dir, &self.config.name)?);
        info!(results = %results_path.display(), "experiment finished");
        Ok(report)
    }

    fn open_results(&self, path: &Path) -> Result<(ResultWriter, usize)> {
        let columns = self.config.columns();
        if !(self.config.resume && path.exists()) {
            return Ok((ResultWriter::create(path, columns)?, 0));
        }
        let writer = ResultWriter::resume(path, columns)?;
        let done = writer.rows_written();
        if done > 0 {
            let table = symbench_csv::load(path)?;
            let recorded: Vec<&str> = table.keys().collect();
            let expected: Vec<&str> = self
                .config
                .programs
                .iter()
                .take(done)
                .map(String::as_str)
                .collect();
            if recorded != expected {
                return Err(LaunchError::invalid_config(format!(
                    "cannot resume '{}': recorded programs [{}] are not a prefix of the program list",
                    path.display(),
                    recorded.join(", ")
                )));
            }
        }
        Ok((writer, done))
    }

    fn provision(&self, arm: &Arm) -> Result<()> {
        let Some(revision) = &arm.revision else {
            return Ok(());
        };
        if self.current_revision.borrow().as_deref() == Some(revision.as_str()) {
            return Ok(());
        }
        self.provisioner.provision(self.launcher.runner(), revision)?;
        *self.current_revision.borrow_mut() = Some(revision.clone());
        Ok(())
    }

    fn instruction_budget(&self, index: usize, program: &str, progress: &ProgressLog) -> Result<u64> {
        match &self.config.budget {
            InstructionBudget::Fixed(budgets) => Ok(budgets[index]),
            InstructionBudget::Calibrate { time_secs, scale } => {
                let arm = &self.config.baseline;
                self.provision(arm)?;
                let config = arm
                    .configure(program, self.config.memory_mb)
                    .max_time_secs(*time_secs)
                    .build()?;
                progress.log(&format!(
                    "Calibrating {}: running command...\n{}",
                    program,
                    self.launcher.plan(&config).engine
                ))?;
                let reached = self.launcher.run(&config)?.instructions()?;
                let reached = u64::try_from(reached).map_err(|_| {
                    LaunchError::invalid_config(format!(
                        "calibration run of '{}' reported {} instructions",
                        program, reached
                    ))
                })?;
                Ok((reached as f64 * scale).round() as u64)
            }
        }
    }

    fn budgeted_run(
        &self,
        arm: &Arm,
        program: &str,
        instructions: u64,
        progress: &ProgressLog,
    ) -> Result<EngineStats> {
        self.provision(arm)?;
        let config = arm
            .configure(program, self.config.memory_mb)
            .max_time_secs(self.config.safety_timeout_secs)
            .max_instructions(instructions)
            .build()?;
        progress.log(&format!(
            "{} run of {}: running command...\n{}",
            arm.label,
            program,
            self.launcher.plan(&config).engine
        ))?;
        self.launcher.run(&config)
    }
}
