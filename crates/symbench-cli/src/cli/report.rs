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


//! Commands that turn results into tables and LaTeX documents.

use crate::commands::{self, ChartOptions};
use crate::error::CliError;
use clap::Subcommand;
use symbench_chart::BarColour;
use symbench_launch::Metric;

/// Reporting commands.
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Render a results table as a pgfplots bar chart
    ///
    /// Writes `<file>.tex` next to the CSV file, one bar series per column.
    Chart {
        /// Results table
        #[arg(value_name = "FILE")]
        file: String,

        /// Y axis label
        #[arg(long, default_value = "Time (s)")]
        y_label: String,

        /// Keep column names instead of stripping a trailing " Time"
        #[arg(long)]
        keep_names: bool,

        /// Series colours (comma-separated: cyan, orange, lime, red, blue)
        #[arg(long, value_delimiter = ',')]
        colours: Vec<BarColour>,

        /// Compile the chart with pdflatex into this directory
        #[arg(long, value_name = "DIR")]
        pdf: Option<String>,
    },

    /// Tabulate one statistic over several sets of runs
    ///
    /// Each source names the stats files `<dir>/<prefix><program><suffix>.klee-out.stats.csv`.
    Extract {
        /// Programs (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        programs: Vec<String>,

        /// Source as LABEL=PREFIX[:SUFFIX] (repeatable)
        #[arg(short, long = "source", value_name = "SOURCE")]
        sources: Vec<String>,

        /// Directory holding the stats files
        #[arg(long, default_value = ".")]
        dir: String,

        /// Statistic, or the difference of two as A-B
        #[arg(short, long, default_value = "Time(s)")]
        metric: Metric,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Also render the table as a bar chart (needs --output)
        #[arg(long)]
        chart: bool,

        /// Y axis label of the chart
        #[arg(long, default_value = "Time (s)")]
        y_label: String,
    },

    /// Key statistics of one set of runs as CSV and a LaTeX table
    KeyStats {
        /// Programs (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        programs: Vec<String>,

        /// Directory holding the stats files
        #[arg(long, default_value = ".")]
        dir: String,

        /// Stats file prefix
        #[arg(long, default_value = "")]
        prefix: String,

        /// Stats file suffix
        #[arg(long, default_value = "")]
        suffix: String,

        /// Output CSV path (defaults to <dir>/<prefix><suffix>key-stats.csv)
        #[arg(short, long)]
        output: Option<String>,

        /// Compile the table with pdflatex into this directory
        #[arg(long, value_name = "DIR")]
        pdf: Option<String>,
    },
}

impl ReportCommands {
    /// Execute the reporting command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ReportCommands::Chart {
                file,
                y_label,
                keep_names,
                colours,
                pdf,
            } => commands::chart(
                &file,
                &ChartOptions {
                    y_label,
                    keep_names,
                    colours,
                    pdf_dir: pdf,
                },
            ),
            ReportCommands::Extract {
                programs,
                sources,
                dir,
                metric,
                output,
                chart,
                y_label,
            } => {
                let options = ChartOptions {
                    y_label,
                    keep_names: true,
                    ..ChartOptions::default()
                };
                commands::extract(
                    &programs,
                    &sources,
                    &dir,
                    metric,
                    output.as_deref(),
                    chart.then_some(&options),
                )
            }
            ReportCommands::KeyStats {
                programs,
                dir,
                prefix,
                suffix,
                output,
                pdf,
            } => commands::key_stats(
                &programs,
                &dir,
                &prefix,
                &suffix,
                output.as_deref(),
                pdf.as_deref(),
            ),
        }
    }
}
