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


//! SymBench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Engine runs
//!
//! - **run**: one engine invocation, summarized (`--dry-run` prints the command lines)
//! - **bench**: baseline versus testee over a list of programs, with per-program
//!   instruction budgets and optional revision switching
//!
//! ## Analysis
//!
//! - **stats**: key statistics of one run
//! - **compare**: row-by-row comparison of two results tables
//! - **determinism**: instruction and query agreement between two sets of runs
//! - **speedup**: per-program ratios with median and mean
//! - **merge**: column-wise join of two tables
//! - **diff-log**: first divergence between two query logs
//!
//! ## Reports
//!
//! - **chart**: pgfplots bar chart from a results table
//! - **extract**: one statistic tabulated over several sets of runs
//! - **key-stats**: key statistics as CSV and a LaTeX table
//!
//! ## Utilities
//!
//! - **completion**: shell completion scripts
//!
//! # Configuration
//!
//! Launch commands read the engine environment from `--engine-config`
//! (JSON), then `SYMBENCH_ENGINE_DIR` and `SYMBENCH_DUMP_DIR`. Analysis and
//! report commands only read the files they are given.
//!
//! # Error Handling
//!
//! Commands return `Result<(), CliError>`. Comparison commands return
//! [`CliError::Divergent`](error::CliError::Divergent) when their inputs
//! differ, so the process exits with a failure status.

pub mod cli;
pub mod commands;
pub mod env;
pub mod error;
