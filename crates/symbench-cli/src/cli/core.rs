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


//! Commands that analyse results tables, stats files and query logs.
//!
//! None of these run the engine.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Analysis commands.
#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Show the key statistics of one run
    ///
    /// Reads a `<dir>.stats.csv` file written after a run.
    Stats {
        /// Stats file
        #[arg(value_name = "FILE")]
        file: String,

        /// Print every statistic as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare two results tables row by row
    ///
    /// Exits with a failure status if any compared field differs.
    Compare {
        /// First table
        #[arg(value_name = "A")]
        a: String,

        /// Second table
        #[arg(value_name = "B")]
        b: String,

        /// Fields to compare (comma-separated; default Instrs,Queries)
        #[arg(short, long = "field", value_delimiter = ',')]
        fields: Vec<String>,

        /// Report every divergent row instead of stopping at the first
        #[arg(short, long)]
        all: bool,
    },

    /// Check that two sets of runs executed identically
    ///
    /// Compares instruction and query counts per program.
    Determinism {
        /// First set of runs
        #[arg(value_name = "A")]
        a: String,

        /// Second set of runs
        #[arg(value_name = "B")]
        b: String,
    },

    /// Per-program speedup with median and mean
    Speedup {
        /// Results table
        #[arg(value_name = "FILE")]
        file: String,

        /// Read the testee column from this table instead
        #[arg(long, value_name = "FILE")]
        against: Option<String>,

        /// Baseline column (numerator)
        #[arg(long, default_value = "Non-Incremental Time")]
        baseline: String,

        /// Testee column (denominator)
        #[arg(long, default_value = "Incremental Time")]
        testee: String,
    },

    /// Join two tables with the same rows column-wise
    Merge {
        /// Left table
        #[arg(value_name = "A")]
        a: String,

        /// Right table
        #[arg(value_name = "B")]
        b: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Find where two query logs diverge
    ///
    /// Exits with a failure status if the logs differ.
    DiffLog {
        /// First query log
        #[arg(value_name = "A")]
        a: String,

        /// Second query log
        #[arg(value_name = "B")]
        b: String,

        /// Read query headers only
        #[arg(long)]
        headers_only: bool,

        /// Do not compare query results
        #[arg(long)]
        ignore_results: bool,

        /// Also bound the divergent region from the ends of the logs
        #[arg(long)]
        range: bool,
    },
}

impl CoreCommands {
    /// Execute the analysis command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command fails or finds a difference.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Stats { file, json } => commands::stats(&file, json),
            CoreCommands::Compare { a, b, fields, all } => commands::compare(&a, &b, &fields, all),
            CoreCommands::Determinism { a, b } => commands::determinism(&a, &b),
            CoreCommands::Speedup {
                file,
                against,
                baseline,
                testee,
            } => commands::speedup(&file, against.as_deref(), &baseline, &testee),
            CoreCommands::Merge { a, b, output } => commands::merge(&a, &b, output.as_deref()),
            CoreCommands::DiffLog {
                a,
                b,
                headers_only,
                ignore_results,
                range,
            } => commands::diff_log(&a, &b, headers_only, ignore_results, range),
        }
    }
}
