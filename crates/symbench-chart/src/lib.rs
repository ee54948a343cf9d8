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


//! LaTeX output for SymBench result tables.
//!
//! - [`bar_chart_tex`] turns a results table into a grouped pgfplots bar chart
//! - [`key_stats_tex`] renders a statistics table as a `tabular`
//! - [`LatexCompiler`] runs `pdflatex` over the generated documents
//!
//! ```
//! use symbench_chart::{bar_chart_tex, ChartConfig};
//! use symbench_core::{ResultTable, Value};
//!
//! let mut table = ResultTable::new(vec!["Program".into(), "Baseline Time".into()]).unwrap();
//! table.push("ln", vec![Value::Float(2.5)]).unwrap();
//!
//! let tex = bar_chart_tex(&table, &ChartConfig::default()).unwrap();
//! assert!(tex.contains("coordinates {(ln,2.5)}"));
//! assert!(tex.contains("\\legend{Baseline}"));
//! ```

mod bar;
mod colour;
mod compile;
mod error;
mod table;

pub use bar::{bar_chart_tex, series, ChartConfig, Series, TIME_SUFFIX};
pub use colour::{BarColour, DEFAULT_PALETTE};
pub use compile::{tex_path_for, write_tex, LatexCompiler};
pub use error::{ChartError, Result};
pub use table::{escape, key_stats_tex};
