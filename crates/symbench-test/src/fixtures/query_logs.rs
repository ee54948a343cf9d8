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

//! Engine query logs.
//!
//! Each query is written as the engine writes it: a header comment, the
//! SMT2 body, and result comments.

use std::fmt::Write;

/// One query to render.
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Type tag as printed (`Truth`, `Validity`, `Value`...).
    pub kind: &'static str,
    /// Instruction count at the time of the query.
    pub instructions: u64,
    /// Result token: `true`/`false` for Truth, `1`/`-1`/`0` for Validity.
    pub result: &'static str,
}

impl LogEntry {
    /// A Truth query.
    pub fn truth(instructions: u64, valid: bool) -> Self {
        Self {
            kind: "Truth",
            instructions,
            result: if valid { "true" } else { "false" },
        }
    }

    /// A Validity query.
    pub fn validity(instructions: u64, result: &'static str) -> Self {
        Self {
            kind: "Validity",
            instructions,
            result,
        }
    }

    /// Any other query type.
    pub fn other(kind: &'static str, instructions: u64) -> Self {
        Self {
            kind,
            instructions,
            result: "",
        }
    }
}

/// Render a query log.
pub fn render(entries: &[LogEntry]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(
            out,
            "; Query {} -- Type: {}, Instructions: {}",
            i, entry.kind, entry.instructions
        );
        out.push_str("(set-logic QF_AUFBV )\n");
        out.push_str("(declare-fun n_args () (Array (_ BitVec 32) (_ BitVec 8) ) )\n");
        out.push_str("(assert (bvult  (select  n_args (_ bv0 32) ) (_ bv2 8) ) )\n");
        out.push_str("(check-sat)\n(exit)\n");
        let _ = writeln!(out, ";   OK -- Elapsed: 1.011424e-02s");
        match entry.kind {
            "Truth" => {
                let _ = writeln!(out, ";   Is Valid: {}", entry.result);
            }
            "Validity" => {
                let _ = writeln!(out, ";   Validity: {}", entry.result);
            }
            _ => {}
        }
        out.push('\n');
    }
    out
}

/// A log of `n` alternating Truth/Validity queries with increasing counts.
pub fn alternating(n: usize) -> Vec<LogEntry> {
    (0..n)
        .map(|i| {
            let instructions = 12_000 + i as u64 * 9;
            if i % 2 == 0 {
                LogEntry::truth(instructions, i % 4 == 0)
            } else {
                LogEntry::validity(instructions, "0")
            }
        })
        .collect()
}
