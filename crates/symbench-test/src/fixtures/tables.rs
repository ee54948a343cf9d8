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

//! Small results tables.

use symbench_core::{ResultTable, Value, PROGRAM_COLUMN};

/// Build a table keyed by program with integer columns.
pub fn int_table(fields: &[&str], rows: &[(&str, &[i64])]) -> ResultTable {
    let mut names = vec![PROGRAM_COLUMN.to_string()];
    names.extend(fields.iter().map(|f| f.to_string()));
    let mut table = ResultTable::new(names).expect("fixture header is valid");
    for (key, values) in rows {
        table
            .push(*key, values.iter().map(|v| Value::Int(*v)).collect())
            .expect("fixture row matches header");
    }
    table
}

/// Per-program instruction and query counts for a deterministic pair of runs.
pub fn determinism_table(seed: i64) -> ResultTable {
    let rows: Vec<(&str, Vec<i64>)> = crate::PROGRAMS
        .iter()
        .enumerate()
        .map(|(i, p)| (*p, vec![seed + i as i64 * 1000, seed / 10 + i as i64]))
        .collect();
    let borrowed: Vec<(&str, &[i64])> = rows.iter().map(|(p, v)| (*p, v.as_slice())).collect();
    int_table(&["Instrs", "Queries"], &borrowed)
}
