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


//! LaTeX tables of per-program statistics.

use symbench_core::{ResultTable, Value};

/// Escape characters that are special in LaTeX text mode.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '\\' => out.push_str("\\textbackslash{}"),
            _ => out.push(c),
        }
    }
    out
}

fn cell(value: &Value) -> String {
    match value {
        Value::Float(x) => format!("{:.2}", x),
        other => escape(&other.to_string()),
    }
}

/// Render a table as a standalone document holding one `tabular`.
///
/// The key column is left-aligned and every other column right-aligned.
/// Floats are shown with two decimals.
pub fn key_stats_tex(table: &ResultTable) -> String {
    let header = table.header();
    let columns = format!("l{}", "r".repeat(header.fields().len()));
    let heading: Vec<String> = header
        .names()
        .iter()
        .map(|n| format!("\\textbf{{{}}}", escape(n)))
        .collect();

    let mut body = String::new();
    for record in table.records() {
        let cells: Vec<String> = record.cells().iter().map(cell).collect();
        body.push_str(&format!("        {} \\\\\n", cells.join(" & ")));
    }

    format!(
        r"\documentclass[border=10pt]{{standalone}}
\usepackage{{booktabs}}
\begin{{document}}
    \begin{{tabular}}{{{columns}}}
        \toprule
        {heading} \\
        \midrule
{body}        \bottomrule
    \end{{tabular}}
\end{{document}}
",
        columns = columns,
        heading = heading.join(" & "),
        body = body,
    )
}
