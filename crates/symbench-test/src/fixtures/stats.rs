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

//! Summarizer statistics rows.

use symbench_core::{EngineStats, FieldKind, StatField, Value};

/// Builder for one summarizer row with every recognized column present.
///
/// Unset integer columns default to `0` and unset float columns to `0.0`.
#[derive(Debug, Clone)]
pub struct StatsRow {
    path: String,
    values: Vec<(StatField, Value)>,
}

impl StatsRow {
    /// Start a row for the given run directory.
    pub fn new(path: impl Into<String>) -> Self {
        let values = StatField::ALL
            .iter()
            .map(|f| {
                let v = match f.kind() {
                    FieldKind::Int => Value::Int(0),
                    FieldKind::Float => Value::Float(0.0),
                };
                (*f, v)
            })
            .collect();
        Self {
            path: path.into(),
            values,
        }
    }

    /// Override one column.
    pub fn set(mut self, field: StatField, value: impl Into<Value>) -> Self {
        let value = value.into();
        if let Some(slot) = self.values.iter_mut().find(|(f, _)| *f == field) {
            slot.1 = value;
        }
        self
    }

    /// Drop a column entirely, to exercise missing-field handling.
    pub fn without(mut self, field: StatField) -> Self {
        self.values.retain(|(f, _)| *f != field);
        self
    }

    /// Header line plus the single data line, as the summarizer prints them.
    pub fn to_csv(&self) -> String {
        let mut header = vec!["Path".to_string()];
        header.extend(self.values.iter().map(|(f, _)| f.name().to_string()));
        let mut row = vec![self.path.clone()];
        row.extend(self.values.iter().map(|(_, v)| v.to_string()));
        format!("{}\n{}\n", header.join(","), row.join(","))
    }

    /// The row as typed statistics.
    pub fn to_stats(&self) -> EngineStats {
        let mut names = vec!["Path".to_string()];
        names.extend(self.values.iter().map(|(f, _)| f.name().to_string()));
        let mut table = symbench_core::ResultTable::new(names).expect("fixture header is valid");
        table
            .push(
                self.path.clone(),
                self.values.iter().map(|(_, v)| v.clone()).collect(),
            )
            .expect("fixture row matches header");
        EngineStats::new(table.into_records().remove(0))
    }
}

/// A typical completed run: given time, instructions and queries.
pub fn run(path: &str, time: f64, instructions: i64, queries: i64) -> StatsRow {
    StatsRow::new(path)
        .set(StatField::Time, time)
        .set(StatField::Instructions, instructions)
        .set(StatField::Queries, queries)
        .set(StatField::SolverTime, time / 2.0)
        .set(StatField::QueryTime, time / 4.0)
        .set(StatField::CexTime, time / 8.0)
}
