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


//! Diff-log command - first divergence between two query logs

use super::read_file;
use crate::error::CliError;
use colored::Colorize;
use symbench_compare::{
    divergence_range, first_difference, parse_query_log, DiffPolicy, ParseMode, QueryRecord,
};

fn describe(log: &[QueryRecord], index: u64) -> String {
    match log.iter().find(|q| q.index == index) {
        Some(q) => {
            let result = q
                .result
                .as_ref()
                .map(|r| format!(", result {}", r))
                .unwrap_or_default();
            format!("{} at {} instructions{}", q.kind, q.instructions, result)
        }
        None => "missing".to_string(),
    }
}

/// Compare two query logs.
///
/// By default reports the first query that differs in type, instruction
/// count or result. `headers_only` skips result lines entirely;
/// `ignore_results` reads them but does not compare them. `range` also
/// scans from the ends to bound the divergent region.
///
/// # Errors
///
/// Returns [`CliError::Divergent`] if the logs differ anywhere, including
/// in length, and `Err` if either log is malformed.
pub fn diff_log(
    a: &str,
    b: &str,
    headers_only: bool,
    ignore_results: bool,
    range: bool,
) -> Result<(), CliError> {
    let mode = if headers_only {
        ParseMode::HeadersOnly
    } else {
        ParseMode::Full
    };
    let left = parse_query_log(&read_file(a)?, mode)?;
    let right = parse_query_log(&read_file(b)?, mode)?;

    let policy = DiffPolicy {
        compare_results: !headers_only && !ignore_results,
    };
    let first = first_difference(&left, &right, policy);
    println!("{}", first.overlap);

    let mut count = 0;
    match first.at {
        Some(index) => {
            count += 1;
            println!("{} first difference at query {}", "✗".red().bold(), index);
            println!("  {}: {}", a, describe(&left, index));
            println!("  {}: {}", b, describe(&right, index));
        }
        None => println!("{} no difference in the compared queries", "✓".green().bold()),
    }

    if range {
        let bounds = divergence_range(&left, &right);
        if let Some(i) = bounds.first_kind {
            println!("  first type difference: query {}", i);
        }
        if let Some((i, j)) = bounds.last_kind {
            println!("  last type difference: queries {} / {}", i, j);
        }
        if let Some(i) = bounds.first_instructions {
            println!("  first instruction difference: query {}", i);
        }
        if let Some((i, j)) = bounds.last_instructions {
            println!("  last instruction difference: queries {} / {}", i, j);
        }
        if first.at.is_none() && !bounds.is_identical() {
            count += 1;
        }
    }

    if first.overlap.is_truncated() {
        count += 1;
    }
    if count > 0 {
        return Err(CliError::Divergent {
            what: "query logs",
            count,
        });
    }
    Ok(())
}
