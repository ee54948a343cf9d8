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


//! CLI command implementations

mod analysis;
mod bench;
mod completion;
mod diff_log;
mod report;
mod run;

pub use analysis::{compare, determinism, merge, speedup, stats};
pub use bench::bench;
pub use completion::{write_completion, CompletionShell};
pub use diff_log::diff_log;
pub use report::{chart, extract, key_stats, parse_source, ChartOptions};
pub use run::run;

use crate::error::CliError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use symbench_core::ResultTable;

/// Read a text file.
pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Load a results table.
pub(crate) fn load_table(path: &str) -> Result<ResultTable, CliError> {
    Ok(symbench_csv::load(path)?)
}

/// Save a table to `output`, or print it as CSV on stdout.
pub(crate) fn emit_table(table: &ResultTable, output: Option<&str>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            symbench_csv::save(table, Path::new(path))?;
            tracing::info!(path, rows = table.len(), "wrote table");
            Ok(())
        }
        None => {
            let csv = symbench_csv::to_csv_string(table)?;
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(csv.as_bytes())
                .map_err(|e| CliError::Output(e.to_string()))
        }
    }
}
