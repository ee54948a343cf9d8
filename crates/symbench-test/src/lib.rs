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

//! Shared test fixtures for SymBench crates.
//!
//! - [`fixtures::stats`]: summarizer rows with every recognized column
//! - [`fixtures::tables`]: small results tables keyed by program
//! - [`fixtures::query_logs`]: engine query logs in the SMT2 comment format
//!
//! ```rust
//! use symbench_core::StatField;
//! use symbench_test::fixtures::stats::StatsRow;
//!
//! let csv = StatsRow::new("dump/ln.klee-out")
//!     .set(StatField::Instructions, 5000_i64)
//!     .to_csv();
//! assert!(csv.starts_with("Path,Time(s),Instrs"));
//! ```

pub mod fixtures;

/// Programs used throughout the fixtures.
pub const PROGRAMS: &[&str] = &["base64", "dircolors", "ln", "mkfifo", "od"];
