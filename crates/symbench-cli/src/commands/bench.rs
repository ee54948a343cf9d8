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


//! Bench command - baseline versus testee over a list of programs

use crate::error::CliError;
use colored::Colorize;
use symbench_launch::{
    CommandRunner, EngineEnvironment, Experiment, ExperimentConfig, ExperimentReport,
    GitProvisioner, Launcher,
};

/// Run an experiment and summarize it.
///
/// When either arm names a revision, the engine checkout is switched with
/// git and rebuilt before that arm runs.
///
/// # Errors
///
/// Returns `Err` on an invalid configuration or on the first run that
/// fails; rows already written stay in the results table.
pub fn bench<R: CommandRunner>(
    env: EngineEnvironment,
    runner: R,
    config: ExperimentConfig,
) -> Result<(), CliError> {
    let provision = config.baseline.revision.is_some() || config.testee.revision.is_some();
    let build_dir = env.build_dir();
    let launcher = Launcher::new(env, runner);

    let report = if provision {
        Experiment::with_provisioner(launcher, GitProvisioner::new(build_dir), config).run()?
    } else {
        Experiment::new(launcher, config).run()?
    };

    print_report(&report);
    Ok(())
}

fn print_report(report: &ExperimentReport) {
    println!("{}  {}", "Results:".cyan(), report.results_path.display());
    if report.skipped > 0 {
        println!("{}  {} already recorded", "Skipped:".cyan(), report.skipped);
    }
    for (program, budget) in &report.budgets {
        println!("  {:<16} {} instructions", program, budget);
    }

    if report.query_mismatches.is_empty() && report.instruction_mismatches.is_empty() {
        println!("{} baseline and testee agree", "✓".green().bold());
    }
    for mismatch in &report.query_mismatches {
        println!("{} query count mismatch {}", "!".yellow().bold(), mismatch);
    }
    for mismatch in &report.instruction_mismatches {
        println!("{} instruction count mismatch {}", "!".yellow().bold(), mismatch);
    }

    if let Some(progress) = &report.progress_path {
        println!("{}  {}", "Progress:".cyan(), progress.display());
    }
}
