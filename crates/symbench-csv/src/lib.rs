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

//! Results tables on disk.
//!
//! Tables are comma-delimited with a header row of field names, key field
//! first and one row per program. This crate reads them into
//! [`ResultTable`](symbench_core::ResultTable)s and writes them back, either
//! whole ([`save`]) or one row at a time through the append-only
//! [`ResultWriter`].
//!
//! # Examples
//!
//! ```
//! use symbench_csv::{from_csv_str, to_csv_string};
//!
//! let csv = "Program,Instrs,Time(s)\nbase64,1200,3.5\nln,800,1.25\n";
//! let table = from_csv_str(csv).unwrap();
//! assert_eq!(table.len(), 2);
//! assert_eq!(to_csv_string(&table).unwrap(), csv);
//! ```
//!
//! # Round trips
//!
//! Cells are written with [`Value`](symbench_core::Value)'s `Display`, which
//! always re-parses to the same variant, so loading a saved table yields the
//! same table field for field and row for row.

mod error;
mod reader;
mod writer;

pub use error::{Result, StoreError};
pub use reader::{from_csv_reader, from_csv_reader_with_config, from_csv_str, load, load_with_config, LoadConfig};
pub use writer::{save, to_csv_string, to_csv_writer, ResultWriter};
