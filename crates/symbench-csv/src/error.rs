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

//! Error types for results table I/O.

use std::path::PathBuf;
use symbench_core::TableError;
use thiserror::Error;

/// Errors raised while reading or writing results tables.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The table itself is malformed (empty, ragged, bad header...).
    #[error(transparent)]
    Table(#[from] TableError),

    /// File could not be opened, created or written.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },

    /// A record could not be decoded.
    #[error("CSV parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: u64,
        /// Detailed error message.
        message: String,
    },

    /// Error from the underlying CSV library while writing.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),

    /// More rows than the configured limit.
    #[error("Row limit exceeded: more than {limit} rows")]
    RowLimit {
        /// Maximum allowed rows.
        limit: usize,
    },

    /// An existing file cannot be appended to with the requested columns.
    #[error("Cannot resume '{path}': file has columns [{found}], expected [{expected}]")]
    HeaderMismatch {
        /// The file being resumed.
        path: PathBuf,
        /// Columns found in the file.
        found: String,
        /// Columns the writer was asked for.
        expected: String,
    },
}

impl StoreError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// The table-level error, if this is one.
    pub fn as_table_error(&self) -> Option<&TableError> {
        match self {
            StoreError::Table(e) => Some(e),
            _ => None,
        }
    }
}

/// Result alias for table I/O.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_error_is_transparent() {
        let err: StoreError = TableError::schema("file is empty").into();
        assert_eq!(err.to_string(), "Schema error: file is empty");
        assert!(err.as_table_error().is_some());
    }

    #[test]
    fn test_io_display() {
        let err = StoreError::io(
            "results/missing.csv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("results/missing.csv"));
        assert!(err.as_table_error().is_none());
    }
}
