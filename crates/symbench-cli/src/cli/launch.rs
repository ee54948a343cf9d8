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


//! Commands that run the engine.

use crate::commands;
use crate::env::resolve_environment;
use crate::error::CliError;
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};
use symbench_launch::{
    Arm, ExperimentConfig, IncrementalityMode, InstructionBudget, RunConfiguration, SearchStrategy,
    Solver, SystemRunner, DEFAULT_EXTERNAL_CALLS, DEFAULT_MEMORY_MB, DEFAULT_SAFETY_TIMEOUT_SECS,
    DEFAULT_SCALE_FACTOR,
};

/// Engine commands.
#[derive(Subcommand, Debug)]
pub enum LaunchCommands {
    /// Run the engine once and summarize the run
    ///
    /// The run gets a fresh output directory under the dump directory. At
    /// least one of --max-time and --max-instructions must be given.
    Run(RunArgs),

    /// Compare a baseline and a testee configuration over many programs
    ///
    /// Each program gets an instruction budget (fixed, or calibrated from a
    /// timed baseline run), then both configurations run on that budget.
    /// Times go to <results_dir>/<name>.csv.
    Bench(BenchArgs),
}

/// Arguments of `symbench run`.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Program under test
    #[arg(value_name = "PROGRAM")]
    pub program: String,

    /// Core solver (Z3, STP)
    #[arg(long, default_value = "Z3")]
    pub solver: Solver,

    /// Incrementality mode (NonIncremental, Incremental, LocalBaseline, GlobalBaseline)
    #[arg(long, default_value = "NonIncremental")]
    pub mode: IncrementalityMode,

    /// Search strategy (DefaultHeuristic, InputReplay, DFS, BFS)
    #[arg(long, default_value = "DefaultHeuristic")]
    pub search: SearchStrategy,

    /// Turn off every solver-chain cache
    #[arg(long)]
    pub unoptimized: bool,

    /// Memory ceiling in MB
    #[arg(long, value_name = "MB", default_value_t = DEFAULT_MEMORY_MB)]
    pub memory: u64,

    /// Wall-clock ceiling in seconds (0 disables the watchdog)
    #[arg(long, value_name = "SECS")]
    pub max_time: Option<u64>,

    /// Instruction ceiling
    #[arg(long, value_name = "N")]
    pub max_instructions: Option<u64>,

    /// Disable constraint simplification
    #[arg(long)]
    pub no_simplify: bool,

    /// Per-query solver timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub solver_timeout: Option<u64>,

    /// Instruction quantum for batching search
    #[arg(long, value_name = "N")]
    pub batch_instructions: Option<u64>,

    /// Policy for calls to external functions
    #[arg(long, value_name = "POLICY", default_value = DEFAULT_EXTERNAL_CALLS)]
    pub external_calls: String,

    /// Dump test cases for live states when halting
    #[arg(long)]
    pub dump_states_on_halt: bool,

    /// Dump queries for debugging
    #[arg(long)]
    pub debug_dump_queries: bool,

    /// Log every query and move the log here after the run
    #[arg(long, value_name = "FILE")]
    pub query_log: Option<PathBuf>,

    /// Keep the engine output directory
    #[arg(long)]
    pub keep_output: bool,

    /// Output directory (defaults to a name derived from the configuration)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Extra engine flag, passed through verbatim (repeatable)
    #[arg(long = "flag", value_name = "FLAG", allow_hyphen_values = true)]
    pub flags: Vec<String>,

    /// Print the command lines instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// Print statistics as JSON
    #[arg(long)]
    pub json: bool,
}

impl RunArgs {
    /// Build the run configuration these arguments describe.
    ///
    /// # Errors
    ///
    /// Returns `Err` if no usable budget was given.
    pub fn to_config(&self) -> Result<RunConfiguration, CliError> {
        let mut builder = RunConfiguration::builder(&self.program)
            .solver(self.solver)
            .mode(self.mode)
            .search(self.search)
            .memory_mb(self.memory)
            .simplify(!self.no_simplify)
            .external_calls(&self.external_calls)
            .dump_states_on_halt(self.dump_states_on_halt)
            .debug_dump_queries(self.debug_dump_queries)
            .remove_output(!self.keep_output)
            .extra_flags(self.flags.iter().cloned());
        if self.unoptimized {
            builder = builder.unoptimized();
        }
        if let Some(secs) = self.max_time {
            builder = builder.max_time_secs(secs);
        }
        if let Some(n) = self.max_instructions {
            builder = builder.max_instructions(n);
        }
        if let Some(secs) = self.solver_timeout {
            builder = builder.solver_timeout_secs(secs);
        }
        if let Some(n) = self.batch_instructions {
            builder = builder.batch_instructions(n);
        }
        if let Some(path) = &self.query_log {
            builder = builder.query_log(path);
        }
        if let Some(dir) = &self.output_dir {
            builder = builder.output_dir(dir);
        }
        Ok(builder.build()?)
    }
}

/// Arguments of `symbench bench`.
#[derive(Args, Debug, Clone)]
pub struct BenchArgs {
    /// Programs to run, in order (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub programs: Vec<String>,

    /// Experiment name; results go to <results_dir>/<name>.csv
    #[arg(long, default_value = "results")]
    pub name: String,

    /// Fixed instruction budget per program, in program order (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub budgets: Vec<u64>,

    /// Length in seconds of the calibration run used when no budgets are given
    #[arg(long, value_name = "SECS", default_value_t = 600)]
    pub calibrate: u64,

    /// Scale applied to the calibration run's instruction count
    #[arg(long, default_value_t = DEFAULT_SCALE_FACTOR)]
    pub scale: f64,

    /// Wall-clock cap on budgeted runs, in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_SAFETY_TIMEOUT_SECS)]
    pub safety_timeout: u64,

    /// Memory ceiling in MB
    #[arg(long, value_name = "MB", default_value_t = DEFAULT_MEMORY_MB)]
    pub memory: u64,

    /// Search strategy for both arms
    #[arg(long, default_value = "DFS")]
    pub search: SearchStrategy,

    /// Baseline column label
    #[arg(long, default_value = "Non-Incremental")]
    pub baseline_label: String,

    /// Baseline incrementality mode
    #[arg(long, default_value = "NonIncremental")]
    pub baseline_mode: IncrementalityMode,

    /// Engine revision for the baseline
    #[arg(long, value_name = "REV")]
    pub baseline_revision: Option<String>,

    /// Testee column label
    #[arg(long, default_value = "Incremental")]
    pub testee_label: String,

    /// Testee incrementality mode
    #[arg(long, default_value = "Incremental")]
    pub testee_mode: IncrementalityMode,

    /// Engine revision for the testee
    #[arg(long, value_name = "REV")]
    pub testee_revision: Option<String>,

    /// Continue an existing results table
    #[arg(long)]
    pub resume: bool,
}

impl BenchArgs {
    fn arm(label: &str, mode: IncrementalityMode, search: SearchStrategy, revision: Option<&str>) -> Arm {
        let mut arm = Arm::new(label, mode);
        arm.search = search;
        arm.revision = revision.map(str::to_string);
        arm
    }

    /// Build the experiment these arguments describe.
    pub fn to_config(&self) -> ExperimentConfig {
        let budget = if self.budgets.is_empty() {
            InstructionBudget::Calibrate {
                time_secs: self.calibrate,
                scale: self.scale,
            }
        } else {
            InstructionBudget::Fixed(self.budgets.clone())
        };
        ExperimentConfig {
            name: self.name.clone(),
            programs: self.programs.clone(),
            budget,
            safety_timeout_secs: self.safety_timeout,
            memory_mb: self.memory,
            baseline: Self::arm(
                &self.baseline_label,
                self.baseline_mode,
                self.search,
                self.baseline_revision.as_deref(),
            ),
            testee: Self::arm(
                &self.testee_label,
                self.testee_mode,
                self.search,
                self.testee_revision.as_deref(),
            ),
            resume: self.resume,
        }
    }
}

impl LaunchCommands {
    /// Execute the launch command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the engine environment cannot be resolved or the
    /// command fails.
    pub fn execute(self, engine_config: Option<&Path>) -> Result<(), CliError> {
        let env = resolve_environment(engine_config)?;
        match self {
            LaunchCommands::Run(args) => {
                let config = args.to_config()?;
                commands::run(env, SystemRunner, &config, args.dry_run, args.json)
            }
            LaunchCommands::Bench(args) => commands::bench(env, SystemRunner, args.to_config()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: LaunchCommands,
    }

    fn parse(args: &[&str]) -> LaunchCommands {
        let mut argv = vec!["symbench"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn test_run_args_to_config() {
        let LaunchCommands::Run(args) = parse(&[
            "run",
            "ln",
            "--mode",
            "incremental",
            "--max-instructions",
            "1000",
            "--max-time",
            "0",
            "--unoptimized",
            "--flag",
            "--max-depth=5",
        ]) else {
            panic!("expected run");
        };
        let config = args.to_config().unwrap();
        assert_eq!(config.mode(), IncrementalityMode::Incremental);
        assert_eq!(config.max_instructions(), 1000);
        assert!(!config.watchdog());
        assert_eq!(config.caching(), symbench_launch::Caching::OFF);
        assert_eq!(config.extra_flags(), ["--max-depth=5".to_string()]);
    }

    #[test]
    fn test_run_without_budget_is_rejected() {
        let LaunchCommands::Run(args) = parse(&["run", "ln"]) else {
            panic!("expected run");
        };
        assert!(matches!(args.to_config(), Err(CliError::Launch(_))));
    }

    #[test]
    fn test_bench_budgets() {
        let LaunchCommands::Bench(args) = parse(&[
            "bench",
            "--programs",
            "ln,od",
            "--budgets",
            "100,200",
            "--testee-revision",
            "pooling",
        ]) else {
            panic!("expected bench");
        };
        let config = args.to_config();
        assert_eq!(config.programs, vec!["ln", "od"]);
        assert_eq!(config.budget, InstructionBudget::Fixed(vec![100, 200]));
        assert_eq!(config.testee.revision.as_deref(), Some("pooling"));
        assert_eq!(config.baseline.search, SearchStrategy::Dfs);
        assert_eq!(config.columns()[1], "Non-Incremental Time");
    }

    #[test]
    fn test_bench_calibrates_by_default() {
        let LaunchCommands::Bench(args) = parse(&["bench", "--programs", "ln"]) else {
            panic!("expected bench");
        };
        assert_eq!(
            args.to_config().budget,
            InstructionBudget::Calibrate {
                time_secs: 600,
                scale: DEFAULT_SCALE_FACTOR
            }
        );
    }
}
