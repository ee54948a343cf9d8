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


//! Structured error types for the SymBench CLI.
//!
//! Every command returns `Result<(), CliError>`. Library errors convert
//! with `?`; the binary prints the message and exits with a failure code.

use std::io;
use std::path::PathBuf;
use symbench_chart::ChartError;
use symbench_compare::CompareError;
use symbench_core::TableError;
use symbench_csv::StoreError;
use symbench_launch::LaunchError;
use thiserror::Error;

/// The main error type for SymBench CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// I/O operation failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Writing to stdout failed.
    #[error("Output error: {0}")]
    Output(String),

    /// A results table was malformed.
    #[error(transparent)]
    Table(#[from] TableError),

    /// A results file could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Comparison failed.
    #[error(transparent)]
    Compare(#[from] CompareError),

    /// An engine run or experiment failed.
    #[error(transparent)]
    Launch(#[from] LaunchError),

    /// Chart generation failed.
    #[error(transparent)]
    Chart(#[from] ChartError),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(String),

    /// Two inputs that should agree do not.
    ///
    /// Returned by the comparison commands so scripts can branch on the
    /// exit code.
    #[error("{what} differ ({count} difference(s))")]
    Divergent {
        /// What was compared.
        what: &'static str,
        /// Number of differences found.
        count: usize,
    },

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
