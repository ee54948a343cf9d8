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


//! Engine environment resolution for CLI commands.
//!
//! Settings come from, in increasing precedence: built-in defaults, the
//! `--engine-config` JSON file, then the `SYMBENCH_ENGINE_DIR` and
//! `SYMBENCH_DUMP_DIR` environment variables.

use crate::error::CliError;
use std::path::{Path, PathBuf};
use symbench_launch::EngineEnvironment;

/// Environment variable overriding the engine checkout root.
pub const ENGINE_DIR_VAR: &str = "SYMBENCH_ENGINE_DIR";

/// Environment variable overriding the run output directory.
pub const DUMP_DIR_VAR: &str = "SYMBENCH_DUMP_DIR";

/// Build the engine environment for this invocation.
///
/// # Errors
///
/// Returns `Err` if the config file cannot be read or is not a valid
/// environment description.
pub fn resolve_environment(config: Option<&Path>) -> Result<EngineEnvironment, CliError> {
    let env = match config {
        Some(path) => EngineEnvironment::from_json_file(path)?,
        None => EngineEnvironment::default(),
    };
    Ok(apply_overrides(
        env,
        std::env::var_os(ENGINE_DIR_VAR).map(PathBuf::from),
        std::env::var_os(DUMP_DIR_VAR).map(PathBuf::from),
    ))
}

fn apply_overrides(
    mut env: EngineEnvironment,
    engine_dir: Option<PathBuf>,
    dump_dir: Option<PathBuf>,
) -> EngineEnvironment {
    if let Some(dir) = engine_dir.filter(|d| !d.as_os_str().is_empty()) {
        tracing::debug!(dir = %dir.display(), "engine root from {}", ENGINE_DIR_VAR);
        env.engine_root = dir;
    }
    if let Some(dir) = dump_dir.filter(|d| !d.as_os_str().is_empty()) {
        tracing::debug!(dir = %dir.display(), "dump dir from {}", DUMP_DIR_VAR);
        env.dump_dir = dir;
    }
    env
}
