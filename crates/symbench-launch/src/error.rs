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


//! Error types for launching engine runs.

use std::path::PathBuf;
use symbench_compare::CompareError;
use symbench_core::TableError;
use symbench_csv::StoreError;
use thiserror::Error;

/// Errors raised while configuring, running or summarizing engine runs.
///
/// All variants abort the current run. Rows an [`Experiment`](crate::Experiment)
/// already wrote stay on disk.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The summarizer did not produce exactly one row.
    #[error("Missing results for '{dir}': summarizer produced {rows} rows, expected exactly 1")]
    MissingResults {
        /// Run output directory.
        dir: PathBuf,
        /// Number of data rows produced.
        rows: usize,
    },

    /// A configuration value is unusable.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What was wrong.
        reason: String,
    },

    /// An external command could not be started.
    #[error("Failed to run '{program}': {message}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying error message.
        message: String,
    },

    /// A filesystem operation failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// Path involved.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },

    /// Reading or writing a results table failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A statistics field was missing or malformed.
    #[error(transparent)]
    Table(#[from] TableError),

    /// Comparing baseline and testee failed.
    #[error(transparent)]
    Compare(#[from] CompareError),

    /// Switching the engine to another revision failed.
    #[error("Provisioning revision '{revision}' failed at '{step}': {message}")]
    Provision {
        /// Requested revision.
        revision: String,
        /// Step that failed, e.g. `git checkout`.
        step: String,
        /// What happened.
        message: String,
    },
}

impl LaunchError {
    /// Create an invalid-configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create an I/O error for a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

/// Result alias for launch operations.
pub type Result<T> = std::result::Result<T, LaunchError>;
