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


//! Comparison and aggregation of SymBench runs.
//!
//! - [`compare`] / [`mismatches`]: positional comparison of two result
//!   series on chosen fields (instruction and query counts by default)
//! - [`check_determinism`]: per-program verdicts for two runs
//! - [`parse_query_log`], [`first_difference`], [`divergence_range`]:
//!   ordered diff of engine query logs
//! - [`speedup`] and friends: ratios with median and mean
//!
//! # Example
//!
//! ```
//! use symbench_compare::{compare, default_fields};
//! use symbench_core::{ResultTable, Value};
//!
//! let mut run = ResultTable::new(vec!["Program".into(), "Instrs".into(), "Queries".into()])?;
//! run.push("base64", vec![Value::Int(48_000), Value::Int(310)])?;
//!
//! let report = compare(run.records(), run.records(), &default_fields())?;
//! assert!(report.is_equivalent());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod comparator;
mod error;
mod query_log;
mod speedup;

pub use comparator::{
    check_determinism, compare, compare_records, default_fields, mismatches, ComparisonReport,
    DeterminismReport, Divergence, FieldDiff, ProgramVerdict, DEFAULT_FIELDS,
};
pub use error::{CompareError, Result};
pub use query_log::{
    divergence_range, first_difference, parse_query_log, DiffPolicy, DivergenceRange,
    FirstDifference, Overlap, ParseMode, QueryKind, QueryRecord, QueryResult, Validity,
};
pub use speedup::{speedup, speedup_keyed, speedup_records, Ratio, SpeedupSummary};
