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


//! Engine runs for SymBench.
//!
//! A [`RunConfiguration`] describes one invocation of the symbolic-execution
//! engine. A [`Launcher`] turns it into a command line, runs it in a fresh
//! output directory, asks the summarizer for the run's statistics and
//! returns them as [`EngineStats`](symbench_core::EngineStats).
//!
//! External processes go through the [`CommandRunner`] trait. Engine paths
//! come from an explicit [`EngineEnvironment`]; nothing reads the process
//! environment.
//!
//! # Example
//!
//! ```
//! use symbench_launch::{EngineEnvironment, Launcher, RunConfiguration, SearchStrategy, SystemRunner};
//!
//! let launcher = Launcher::new(EngineEnvironment::default(), SystemRunner);
//! let config = RunConfiguration::builder("base64")
//!     .search(SearchStrategy::Dfs)
//!     .max_time_secs(0)
//!     .max_instructions(2_874_421)
//!     .build()?;
//!
//! // Dry run: inspect the command line without executing anything.
//! let plan = launcher.plan(&config);
//! assert!(plan.engine.args.contains(&"--watchdog=false".to_string()));
//! # Ok::<(), symbench_launch::LaunchError>(())
//! ```
//!
//! Batches of baseline-versus-testee runs are driven by [`Experiment`].

mod config;
mod environment;
mod error;
mod experiment;
mod invocation;
mod launcher;
mod progress;
mod provision;
mod runner;
mod sources;
mod sym_args;

pub use config::{
    Caching, IncrementalityMode, RunConfiguration, RunConfigurationBuilder, SearchStrategy, Solver,
    DEFAULT_EXTERNAL_CALLS, DEFAULT_MEMORY_MB,
};
pub use environment::EngineEnvironment;
pub use error::{LaunchError, Result};
pub use experiment::{
    Arm, Experiment, ExperimentConfig, ExperimentReport, InstructionBudget, Mismatch,
    DEFAULT_SAFETY_TIMEOUT_SECS, DEFAULT_SCALE_FACTOR,
};
pub use invocation::{engine_invocation, summarizer_invocation, Invocation, QUERY_LOG_NAME};
pub use launcher::{stats_path_for, Launcher, RunPlan};
pub use progress::{ProgressLog, PROGRESS_FILE};
pub use provision::{GitProvisioner, NoProvisioner, Provisioner};
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
pub use sources::{
    extract, key_stats, load_stats, Metric, StatsSource, INSTRUCTION_WARN_LIMIT, KEY_STATS,
    STATS_SUFFIX,
};
pub use sym_args::{sym_args_for, DEFAULT_SYM_ARGS};
