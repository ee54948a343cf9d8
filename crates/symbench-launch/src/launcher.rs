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


//! Running one engine invocation and extracting its statistics.

use crate::config::RunConfiguration;
use crate::environment::EngineEnvironment;
use crate::error::{LaunchError, Result};
use crate::invocation::{engine_invocation, summarizer_invocation, Invocation, QUERY_LOG_NAME};
use crate::runner::CommandRunner;
use std::fs;
use std::path::{Path, PathBuf};
use symbench_core::EngineStats;
use tracing::{debug, info, warn};

/// Everything a run will do, computed without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    /// Program under test.
    pub program: String,
    /// Fresh output directory for the run.
    pub output_dir: PathBuf,
    /// Engine command line.
    pub engine: Invocation,
    /// Summarizer command line.
    pub summarizer: Invocation,
    /// Where the summarizer's output is saved: `<output_dir>.stats.csv`.
    pub stats_path: PathBuf,
    /// Where the query log is moved, if logging is on.
    pub query_log: Option<PathBuf>,
    /// Whether the output directory is deleted afterwards.
    pub remove_output: bool,
}

/// Stats file path for a run directory: `<dir>.stats.csv`.
pub fn stats_path_for(output_dir: &Path) -> PathBuf {
    let mut name = output_dir.as_os_str().to_owned();
    name.push(".stats.csv");
    PathBuf::from(name)
}

/// Launches engine runs.
///
/// Each run gets a fresh output directory; a leftover directory of the same
/// name is deleted first, so retries never see stale state.
#[derive(Debug)]
pub struct Launcher<R> {
    env: EngineEnvironment,
    runner: R,
}

impl<R: CommandRunner> Launcher<R> {
    /// Create a launcher for an engine environment.
    pub fn new(env: EngineEnvironment, runner: R) -> Self {
        Self { env, runner }
    }

    /// The engine environment.
    pub fn env(&self) -> &EngineEnvironment {
        &self.env
    }

    /// The command runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Work out directories and command lines for a run.
    pub fn plan(&self, config: &RunConfiguration) -> RunPlan {
        let output_dir = config
            .output_dir()
            .cloned()
            .unwrap_or_else(|| self.env.dump_dir.join(config.default_dir_name()));
        RunPlan {
            program: config.program().to_string(),
            engine: engine_invocation(&self.env, config, &output_dir),
            summarizer: summarizer_invocation(&self.env, &output_dir),
            stats_path: stats_path_for(&output_dir),
            query_log: config.query_log().cloned(),
            remove_output: config.remove_output(),
            output_dir,
        }
    }

    /// Run the engine, summarize the run and return its statistics.
    ///
    /// The engine's exit status is logged but not interpreted; the
    /// summarizer's single row is authoritative. Saving the query log and
    /// removing the output directory are best-effort and only logged when
    /// they fail.
    ///
    /// # Errors
    ///
    /// - [`LaunchError::Io`] if the output directory cannot be prepared or the
    ///   stats file cannot be written
    /// - [`LaunchError::Spawn`] if the engine or summarizer cannot be started
    /// - [`LaunchError::MissingResults`] unless the summarizer printed exactly
    ///   one row
    pub fn run(&self, config: &RunConfiguration) -> Result<EngineStats> {
        let plan = self.plan(config);
        self.execute(&plan)
    }

    /// Carry out a previously computed plan.
    ///
    /// # Errors
    ///
    /// See [`Launcher::run`].
    pub fn execute(&self, plan: &RunPlan) -> Result<EngineStats> {
        prepare_output_dir(&plan.output_dir)?;

        info!(program = %plan.program, dir = %plan.output_dir.display(), "running engine");
        debug!(command = %plan.engine, "engine command line");
        let output = self.spawn(&plan.engine)?;
        if !output.success() {
            warn!(
                program = %plan.program,
                exit_code = output.exit_code,
                "engine exited with non-zero status"
            );
        }

        let stats = self.summarize(plan);
        self.finish(plan);
        stats
    }

    fn finish(&self, plan: &RunPlan) {
        if let Some(dest) = &plan.query_log {
            let src = plan.output_dir.join(QUERY_LOG_NAME);
            match move_file(&src, dest) {
                Ok(()) => debug!(dest = %dest.display(), "saved query log"),
                Err(e) => warn!(dest = %dest.display(), error = %e, "could not save query log"),
            }
        }

        if plan.remove_output {
            if let Err(e) = fs::remove_dir_all(&plan.output_dir) {
                warn!(dir = %plan.output_dir.display(), error = %e, "could not remove run output");
            }
        }
    }

    fn spawn(&self, invocation: &Invocation) -> Result<crate::runner::CommandOutput> {
        self.runner.run(invocation).map_err(|e| LaunchError::Spawn {
            program: invocation.program_name(),
            message: e.to_string(),
        })
    }

    fn summarize(&self, plan: &RunPlan) -> Result<EngineStats> {
        debug!(command = %plan.summarizer, "summarizer command line");
        let output = self.spawn(&plan.summarizer)?;
        fs::write(&plan.stats_path, &output.stdout)
            .map_err(|e| LaunchError::io(&plan.stats_path, e))?;

        let lines = output.stdout.lines().filter(|l| !l.trim().is_empty()).count();
        if lines != 2 {
            return Err(LaunchError::MissingResults {
                dir: plan.output_dir.clone(),
                rows: lines.saturating_sub(1),
            });
        }
        let table = symbench_csv::from_csv_str(&output.stdout)?;
        let rows = table.len();
        let record = table.into_records().pop();
        match (rows, record) {
            (1, Some(record)) => {
                info!(program = %plan.program, stats = %plan.stats_path.display(), "extracted results");
                Ok(EngineStats::new(record))
            }
            (rows, _) => Err(LaunchError::MissingResults {
                dir: plan.output_dir.clone(),
                rows,
            }),
        }
    }
}

fn prepare_output_dir(dir: &Path) -> Result<()> {
    if let Some(parent) = dir.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LaunchError::io(parent, e))?;
    }
    if dir.exists() {
        debug!(dir = %dir.display(), "removing previous run output");
        fs::remove_dir_all(dir).map_err(|e| LaunchError::io(dir, e))?;
    }
    Ok(())
}

fn move_file(src: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LaunchError::io(parent, e))?;
    }
    if fs::rename(src, dest).is_ok() {
        return Ok(());
    }
    // rename fails across filesystems
    fs::copy(src, dest).map_err(|e| LaunchError::io(src, e))?;
    fs::remove_file(src).map_err(|e| LaunchError::io(src, e))
}
