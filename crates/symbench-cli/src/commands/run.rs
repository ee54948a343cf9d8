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


//! Run command - one engine invocation

use super::analysis::print_stats;
use crate::error::CliError;
use colored::Colorize;
use symbench_launch::{CommandRunner, EngineEnvironment, Launcher, RunConfiguration};

/// Run the engine once and print the run's statistics.
///
/// With `dry_run`, prints the engine and summarizer command lines and
/// returns without touching the filesystem.
///
/// # Errors
///
/// Returns `Err` if the engine or summarizer cannot be started, or the
/// summarizer does not produce exactly one row.
pub fn run<R: CommandRunner>(
    env: EngineEnvironment,
    runner: R,
    config: &RunConfiguration,
    dry_run: bool,
    json: bool,
) -> Result<(), CliError> {
    let launcher = Launcher::new(env, runner);
    let plan = launcher.plan(config);

    if dry_run {
        println!("{}", plan.engine);
        println!("{}", plan.summarizer);
        return Ok(());
    }

    let stats = launcher.execute(&plan)?;
    if json {
        println!("{}", stats.to_json()?);
    } else {
        print_stats(&stats)?;
        println!("{}  {}", "Stats:".cyan(), plan.stats_path.display());
        if let Some(log) = &plan.query_log {
            println!("{}  {}", "Query log:".cyan(), log.display());
        }
    }
    Ok(())
}
