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


//! Error types for chart generation.

use std::path::PathBuf;
use symbench_core::TableError;
use thiserror::Error;

/// Errors raised while rendering or compiling charts.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The palette has fewer colours than the table has series.
    #[error("Not enough colours: {series} series but only {colours} colours")]
    NotEnoughColours {
        /// Number of non-key columns.
        series: usize,
        /// Number of palette entries.
        colours: usize,
    },

    /// `strip_time_suffix` was requested but a column does not end in " Time".
    #[error("Column '{column}' does not end with ' Time'")]
    MissingTimeSuffix {
        /// Offending column.
        column: String,
    },

    /// A row key cannot be used as a symbolic x coordinate.
    #[error("Row key '{key}' cannot be charted: it contains '{character}'")]
    InvalidKey {
        /// Offending key.
        key: String,
        /// First character pgfplots cannot take in a coordinate.
        character: char,
    },

    /// Unknown bar colour name.
    #[error("Unknown colour '{name}'")]
    UnknownColour {
        /// Name as given.
        name: String,
    },

    /// The table could not be used.
    #[error(transparent)]
    Table(#[from] TableError),

    /// Reading or writing a file failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// Path involved.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },

    /// The LaTeX compiler could not be run or failed.
    #[error("LaTeX compilation of '{path}' failed: {message}")]
    Compile {
        /// Source document.
        path: PathBuf,
        /// What happened.
        message: String,
    },
}

impl ChartError {
    /// Create an I/O error for a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

/// Result alias for chart operations.
pub type Result<T> = std::result::Result<T, ChartError>;
