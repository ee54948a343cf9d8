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

//! Core data model for SymBench.
//!
//! SymBench compares configurations of an external symbolic-execution engine
//! across a corpus of programs. Every engine run ends in a single statistics
//! row; rows for many programs form a results table. This crate holds the
//! pieces every other SymBench crate shares:
//!
//! - [`Value`]: one parsed table cell (integer, float or text)
//! - [`Header`] and [`ResultRecord`]: an immutable, schema-checked row
//! - [`ResultTable`]: an ordered set of rows sharing one header, and
//!   [`merge`] for column-wise union of two aligned tables
//! - [`StatField`] and [`EngineStats`]: the fixed, versioned list of
//!   statistics the engine's summarizer emits, with typed accessors
//!
//! # Examples
//!
//! ```
//! use symbench_core::{ResultTable, Value};
//!
//! let mut table = ResultTable::new(vec![
//!     "Program".to_string(),
//!     "Instrs".to_string(),
//!     "Time(s)".to_string(),
//! ])
//! .unwrap();
//! table
//!     .push("base64", vec![Value::Int(120_000), Value::Float(4.5)])
//!     .unwrap();
//!
//! let record = &table.records()[0];
//! assert_eq!(record.key(), "base64");
//! assert_eq!(record.field("Instrs").unwrap(), &Value::Int(120_000));
//! assert!(record.field("Branches").is_err());
//! ```

mod error;
mod record;
mod schema;
mod stats;
mod table;
mod value;

pub use error::{Result, TableError};
pub use record::{Header, ResultRecord};
pub use schema::{FieldKind, StatField, SCHEMA_VERSION};
pub use stats::EngineStats;
pub use table::{merge, ResultTable};
pub use value::Value;

/// Name of the identifying column in tables SymBench writes itself.
pub const PROGRAM_COLUMN: &str = "Program";
