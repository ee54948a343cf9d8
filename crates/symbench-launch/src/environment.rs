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


//! Where the engine lives and where runs write their output.

use crate::error::{LaunchError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Engine installation and harness directories.
///
/// Passed explicitly to the launcher; nothing here is read from the process
/// environment. Missing keys in a JSON file take their defaults.
///
/// # Examples
///
/// ```
/// use symbench_launch::EngineEnvironment;
///
/// let env: EngineEnvironment =
///     serde_json::from_str(r#"{ "engine_root": "/opt/klee" }"#).unwrap();
/// assert_eq!(env.bin_dir().to_str(), Some("/opt/klee/build/bin"));
/// assert_eq!(env.dump_dir.to_str(), Some("dump"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineEnvironment {
    /// Engine source checkout.
    pub engine_root: PathBuf,
    /// Directory holding the engine binaries; `<engine_root>/build/bin` when
    /// unset.
    pub bin_dir: Option<PathBuf>,
    /// Engine binary name.
    pub engine_binary: String,
    /// Summarizer binary name.
    pub summarizer_binary: String,
    /// Environment file handed to the program under test.
    pub env_file: PathBuf,
    /// Directory the program under test runs in.
    pub sandbox_dir: PathBuf,
    /// Directory holding `<program>.bc`.
    pub bitcode_dir: PathBuf,
    /// Parent of run output directories.
    pub dump_dir: PathBuf,
    /// Where experiment results tables go.
    pub results_dir: PathBuf,
    /// Where progress logs are persisted.
    pub progress_dir: PathBuf,
}

impl Default for EngineEnvironment {
    fn default() -> Self {
        Self {
            engine_root: PathBuf::from("klee"),
            bin_dir: None,
            engine_binary: "klee".to_string(),
            summarizer_binary: "klee-stats".to_string(),
            env_file: PathBuf::from("../src/test.env"),
            sandbox_dir: PathBuf::from("/tmp/sandbox"),
            bitcode_dir: PathBuf::from("../src"),
            dump_dir: PathBuf::from("dump"),
            results_dir: PathBuf::from("results"),
            progress_dir: PathBuf::from("progress"),
        }
    }
}

impl EngineEnvironment {
    /// Read an environment from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::Io`] if the file cannot be read and
    /// [`LaunchError::InvalidConfig`] if it is not a valid environment.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| LaunchError::io(path, e))?;
        serde_json::from_str(&text).map_err(|e| {
            LaunchError::invalid_config(format!("{}: {}", path.display(), e))
        })
    }

    /// Engine build directory, where revisions are compiled.
    pub fn build_dir(&self) -> PathBuf {
        self.engine_root.join("build")
    }

    /// Directory holding the engine binaries.
    pub fn bin_dir(&self) -> PathBuf {
        self.bin_dir
            .clone()
            .unwrap_or_else(|| self.build_dir().join("bin"))
    }

    /// Full path of the engine binary.
    pub fn engine_path(&self) -> PathBuf {
        self.bin_dir().join(&self.engine_binary)
    }

    /// Full path of the summarizer binary.
    pub fn summarizer_path(&self) -> PathBuf {
        self.bin_dir().join(&self.summarizer_binary)
    }

    /// Bitcode of a program.
    pub fn bitcode_path(&self, program: &str) -> PathBuf {
        self.bitcode_dir.join(format!("{}.bc", program))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_paths() {
        let env = EngineEnvironment::default();
        assert_eq!(env.engine_path(), PathBuf::from("klee/build/bin/klee"));
        assert_eq!(
            env.summarizer_path(),
            PathBuf::from("klee/build/bin/klee-stats")
        );
        assert_eq!(env.bitcode_path("ln"), PathBuf::from("../src/ln.bc"));
    }

    #[test]
    fn test_explicit_bin_dir() {
        let env = EngineEnvironment {
            bin_dir: Some(PathBuf::from("/usr/local/bin")),
            ..Default::default()
        };
        assert_eq!(env.engine_path(), PathBuf::from("/usr/local/bin/klee"));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"dump_dir": "out", "engine_binary": "klee-dev"}}"#).unwrap();
        let env = EngineEnvironment::from_json_file(file.path()).unwrap();
        assert_eq!(env.dump_dir, PathBuf::from("out"));
        assert_eq!(env.engine_binary, "klee-dev");
        assert_eq!(env.summarizer_binary, "klee-stats");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"dumpdir": "out"}}"#).unwrap();
        let err = EngineEnvironment::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, LaunchError::InvalidConfig { .. }));
    }
}
