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


//! CLI command definitions and argument parsing.
//!
//! Commands are grouped by category and flattened into one top-level list:
//!
//! - [`launch`](LaunchCommands): run, bench
//! - [`core`](CoreCommands): stats, compare, determinism, speedup, merge, diff-log
//! - [`report`](ReportCommands): chart, extract, key-stats
//! - [`utility`](UtilityCommands): completion

mod core;
mod launch;
mod report;
mod utility;

use crate::error::CliError;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

pub use self::core::CoreCommands;
pub use launch::{BenchArgs, LaunchCommands, RunArgs};
pub use report::ReportCommands;
pub use utility::UtilityCommands;

/// SymBench - symbolic execution benchmark harness
///
/// Runs the engine under competing configurations, checks that they
/// explored the same paths, and reports speedups as tables and charts.
///
/// # Examples
///
/// ```bash
/// # Show the command line of a run without executing it
/// symbench run base64 --max-instructions 2874421 --max-time 0 --dry-run
///
/// # Non-incremental versus incremental on three programs
/// symbench bench --programs base64,ln,od --calibrate 600
///
/// # Speedup per program from the results table
/// symbench speedup results/results.csv
/// ```
#[derive(Parser, Debug)]
#[command(name = "symbench")]
#[command(author, version, about = "SymBench - symbolic execution benchmark harness", long_about = None)]
pub struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Engine environment JSON file
    #[arg(long, global = true, value_name = "FILE")]
    pub engine_config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Execute the selected command.
    ///
    /// # Errors
    ///
    /// Returns whatever the command returns.
    pub fn execute(self) -> Result<(), CliError> {
        self.command.execute(self.engine_config.as_deref())
    }
}

/// Top-level CLI commands.
///
/// ```text
/// Commands
/// ├── Launch (run, bench)
/// ├── Core (stats, compare, determinism, speedup, merge, diff-log)
/// ├── Report (chart, extract, key-stats)
/// └── Utility (completion)
/// ```
#[derive(Subcommand, Debug)]
pub enum Commands {
    // Launch commands - flattened to appear at top level
    #[command(flatten)]
    Launch(LaunchCommands),

    // Core commands - flattened to appear at top level
    #[command(flatten)]
    Core(CoreCommands),

    // Report commands - flattened to appear at top level
    #[command(flatten)]
    Report(ReportCommands),

    // Utility commands - flattened to appear at top level
    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Dispatch to the command category.
    ///
    /// Only launch commands read the engine environment.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command fails.
    pub fn execute(self, engine_config: Option<&Path>) -> Result<(), CliError> {
        match self {
            Commands::Launch(cmd) => cmd.execute(engine_config),
            Commands::Core(cmd) => cmd.execute(),
            Commands::Report(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
