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


//! Error types for comparisons and aggregation.

use symbench_core::TableError;
use thiserror::Error;

/// Errors raised while comparing runs, diffing query logs or computing
/// speedups.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompareError {
    /// Two paired series do not have the same number of entries.
    #[error("Length mismatch: {what} has {left} entries on the left and {right} on the right")]
    LengthMismatch {
        /// What was being paired ("series", "tables", "keys"...).
        what: &'static str,
        /// Length of the left-hand series.
        left: usize,
        /// Length of the right-hand series.
        right: usize,
    },

    /// A speedup denominator is zero.
    #[error(
        "Division by zero at position {position}{}",
        .key.as_ref().map(|k| format!(" ('{k}')")).unwrap_or_default()
    )]
    DivideByZero {
        /// Position of the zero denominator.
        position: usize,
        /// Key of the offending entry, when keyed.
        key: Option<String>,
    },

    /// Summary statistics were requested over nothing.
    #[error("Cannot summarize an empty series")]
    EmptySeries,

    /// A compared cell is not a number where a number is required.
    #[error("Field '{field}' of '{key}' is not numeric: '{value}'")]
    NotNumeric {
        /// Field name.
        field: String,
        /// Record key.
        key: String,
        /// The cell as read.
        value: String,
    },

    /// Field lookup or table alignment failed.
    #[error(transparent)]
    Table(#[from] TableError),

    /// A query log line could not be understood.
    #[error("Query log error at line {line}: {reason}")]
    QueryLog {
        /// 1-based line number in the log.
        line: usize,
        /// What was wrong.
        reason: String,
    },
}

impl CompareError {
    /// Create a query log error.
    pub fn query_log(line: usize, reason: impl Into<String>) -> Self {
        Self::QueryLog {
            line,
            reason: reason.into(),
        }
    }
}

/// Result alias for comparison operations.
pub type Result<T> = std::result::Result<T, CompareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_by_zero_names_key() {
        let err = CompareError::DivideByZero {
            position: 2,
            key: Some("od".to_string()),
        };
        assert_eq!(err.to_string(), "Division by zero at position 2 ('od')");

        let err = CompareError::DivideByZero {
            position: 0,
            key: None,
        };
        assert_eq!(err.to_string(), "Division by zero at position 0");
    }

    #[test]
    fn test_table_error_is_transparent() {
        let err: CompareError = TableError::unknown_field("Instrs").into();
        assert_eq!(err.to_string(), "Unknown field 'Instrs'");
    }
}
