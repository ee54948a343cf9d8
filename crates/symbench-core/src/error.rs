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

//! Error types for result records and tables.

use thiserror::Error;

/// Errors raised while building, reading or merging results tables.
///
/// All variants are fatal to the operation that raised them and carry the
/// offending field, key or position so a failed batch can be diagnosed.
///
/// # Examples
///
/// ```
/// use symbench_core::TableError;
///
/// let err = TableError::DuplicateField {
///     fields: vec!["Queries".to_string(), "Time(s)".to_string()],
/// };
/// assert_eq!(
///     err.to_string(),
///     "Duplicate fields across merged tables: Queries, Time(s)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// The table is empty, or its rows do not share one schema.
    #[error("Schema error: {reason}")]
    Schema {
        /// What was wrong with the table layout.
        reason: String,
    },

    /// A field was requested that is not part of the record's schema.
    #[error(
        "Unknown field '{field}'{}",
        .key.as_ref().map(|k| format!(" in record '{k}'")).unwrap_or_default()
    )]
    UnknownField {
        /// The requested field name.
        field: String,
        /// Key of the record the lookup ran against, when there was one.
        key: Option<String>,
    },

    /// Two tables cannot be merged because their rows do not line up.
    #[error("Alignment error: {reason}")]
    Alignment {
        /// Description of the first misalignment found.
        reason: String,
    },

    /// Two tables cannot be merged because they share non-key columns.
    #[error("Duplicate fields across merged tables: {}", .fields.join(", "))]
    DuplicateField {
        /// The shared column names, sorted.
        fields: Vec<String>,
    },

    /// A cell exists but does not hold the kind of value its field requires.
    #[error("Field '{field}' of '{key}' is not a valid {expected}: '{value}'")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Record key.
        key: String,
        /// Expected kind, e.g. "integer".
        expected: &'static str,
        /// The cell as it was read.
        value: String,
    },
}

impl TableError {
    /// Create a schema error.
    pub fn schema(reason: impl Into<String>) -> Self {
        Self::Schema {
            reason: reason.into(),
        }
    }

    /// Create an alignment error.
    pub fn alignment(reason: impl Into<String>) -> Self {
        Self::Alignment {
            reason: reason.into(),
        }
    }

    /// Create an unknown-field error not tied to a particular record.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
            key: None,
        }
    }
}

/// Result alias for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
