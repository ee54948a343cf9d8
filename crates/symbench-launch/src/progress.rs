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


//! Plain-text progress log for long batches.

use crate::error::{LaunchError, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default progress file name inside the dump directory.
pub const PROGRESS_FILE: &str = "progress.txt";

/// Append-only progress log.
///
/// Every message is also emitted at `info` level.
#[derive(Debug, Clone)]
pub struct ProgressLog {
    path: PathBuf,
}

impl ProgressLog {
    /// Create (or truncate) `<dir>/progress.txt`.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::Io`] if the file cannot be created.
    pub fn create(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| LaunchError::io(dir, e))?;
        let path = dir.join(PROGRESS_FILE);
        fs::write(&path, "").map_err(|e| LaunchError::io(&path, e))?;
        Ok(Self { path })
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a message.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::Io`] if the file cannot be written.
    pub fn log(&self, message: &str) -> Result<()> {
        info!("{}", message);
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| LaunchError::io(&self.path, e))?;
        write!(file, "{}\n\n\n", message).map_err(|e| LaunchError::io(&self.path, e))
    }

    /// Copy the log to `<dir>/<name>.txt` and return that path.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::Io`] if the copy fails.
    pub fn persist(&self, dir: impl AsRef<Path>, name: &str) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| LaunchError::io(dir, e))?;
        let dest = dir.join(format!("{}.txt", name));
        fs::copy(&self.path, &dest).map_err(|e| LaunchError::io(&dest, e))?;
        Ok(dest)
    }
}
