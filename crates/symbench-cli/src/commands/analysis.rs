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


//! Analysis commands - statistics, comparison, determinism, speedup, merge

use super::{emit_table, load_table};
use crate::error::CliError;
use colored::Colorize;
use std::path::Path;
use symbench_compare::{check_determinism, default_fields, mismatches, speedup_records, ComparisonReport};
use symbench_core::EngineStats;
use symbench_launch::{load_stats, KEY_STATS};

/// Print the key statistics of one run.
pub(crate) fn print_stats(stats: &EngineStats) -> Result<(), CliError> {
    println!("{}  {}", "Program:".cyan(), stats.key().bold());
    println!("  {:<24} {}", "Instructions", stats.instructions()?);
    for (field, label) in KEY_STATS {
        println!("  {:<24} {}", label, stats.get(*field)?);
    }
    Ok(())
}

/// Show a summarizer output file.
///
/// # Errors
///
/// Returns `Err` if the file is not a single-row summarizer table or lacks
/// one of the key statistics.
pub fn stats(file: &str, json: bool) -> Result<(), CliError> {
    let stats = load_stats(Path::new(file))?;
    if json {
        println!("{}", stats.to_json()?);
    } else {
        print_stats(&stats)?;
    }
    Ok(())
}

/// Compare two results tables row by row on `fields`.
///
/// Without `all`, stops at the first divergent row. With `all`, lists every
/// divergent row.
///
/// # Errors
///
/// Returns [`CliError::Divergent`] when the tables differ, and `Err` if
/// they cannot be loaded, differ in length, or lack a field.
pub fn compare(a: &str, b: &str, fields: &[String], all: bool) -> Result<(), CliError> {
    let fields = if fields.is_empty() {
        default_fields()
    } else {
        fields.to_vec()
    };
    let left = load_table(a)?;
    let right = load_table(b)?;

    let count = if all {
        let found = mismatches(left.records(), right.records(), &fields)?;
        for divergence in &found {
            println!("{} {}", "✗".red().bold(), divergence);
        }
        found.len()
    } else {
        match symbench_compare::compare(left.records(), right.records(), &fields)? {
            ComparisonReport::Equivalent => 0,
            ComparisonReport::Divergent(divergence) => {
                println!("{} {}", "✗".red().bold(), divergence);
                1
            }
        }
    };

    if count > 0 {
        return Err(CliError::Divergent {
            what: "tables",
            count,
        });
    }
    println!(
        "{} {} rows equivalent on {}",
        "✓".green().bold(),
        left.len(),
        fields.join(", ")
    );
    Ok(())
}

/// Check that two sets of runs executed the same instructions and queries.
///
/// # Errors
///
/// Returns [`CliError::Divergent`] naming how many programs diverged.
pub fn determinism(a: &str, b: &str) -> Result<(), CliError> {
    let left = load_table(a)?;
    let right = load_table(b)?;
    let report = check_determinism(left.records(), right.records())?;

    for verdict in &report.verdicts {
        if verdict.is_deterministic() {
            println!(
                "{} {}: {} instructions",
                "✓".green().bold(),
                verdict.key,
                verdict.instructions
            );
        } else {
            let mut differing = Vec::new();
            if !verdict.instructions_match {
                differing.push("instructions");
            }
            if !verdict.queries_match {
                differing.push("queries");
            }
            println!(
                "{} {}: {} differ",
                "✗".red().bold(),
                verdict.key,
                differing.join(" and ")
            );
        }
    }

    let diverged = report.diverged().count();
    if diverged > 0 {
        return Err(CliError::Divergent {
            what: "runs",
            count: diverged,
        });
    }
    Ok(())
}

/// Print per-program speedups `baseline / testee` with median and mean.
///
/// Both columns come from `file` unless `against` names a second table,
/// in which case `testee` is read from it.
///
/// # Errors
///
/// Returns `Err` if a column is missing, the tables do not line up, or a
/// testee value is zero.
pub fn speedup(
    file: &str,
    against: Option<&str>,
    baseline: &str,
    testee: &str,
) -> Result<(), CliError> {
    let left = load_table(file)?;
    let right = match against {
        Some(path) => load_table(path)?,
        None => left.clone(),
    };
    let summary = speedup_records(left.records(), baseline, right.records(), testee)?;
    println!("{}", summary);
    Ok(())
}

/// Join two tables on their rows and print or save the result.
///
/// # Errors
///
/// Returns `Err` if the rows do not line up or a column name repeats.
pub fn merge(a: &str, b: &str, output: Option<&str>) -> Result<(), CliError> {
    let left = load_table(a)?;
    let right = load_table(b)?;
    let merged = left.merge(&right)?;
    emit_table(&merged, output)
}
