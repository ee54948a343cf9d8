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


//! Statistics files of finished runs, and tables built from them.
//!
//! A run of `program` leaves `<dir>/<prefix><program><suffix>.klee-out.stats.csv`
//! behind. Several such sources side by side make the columns of an
//! extracted table.

use crate::error::{LaunchError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use symbench_core::{EngineStats, ResultTable, StatField, TableError, Value, PROGRAM_COLUMN};
use tracing::warn;

/// File name suffix of a summarizer output next to its run directory.
pub const STATS_SUFFIX: &str = ".klee-out.stats.csv";

/// Instruction counts at or above this overflow the engine's `int` counters.
pub const INSTRUCTION_WARN_LIMIT: i64 = i32::MAX as i64;

/// Where to find the stats files of one configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsSource {
    /// Directory holding the stats files.
    pub dir: PathBuf,
    /// Text before the program name.
    pub prefix: String,
    /// Text after the program name.
    pub suffix: String,
}

impl StatsSource {
    /// Source with the given prefix and suffix in `dir`.
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Stats file for `program`.
    pub fn path_for(&self, program: &str) -> PathBuf {
        self.dir
            .join(format!("{}{}{}{}", self.prefix, program, self.suffix, STATS_SUFFIX))
    }

    /// Load the single stats row for `program`.
    ///
    /// # Errors
    ///
    /// - [`LaunchError::Store`] if the file is missing or malformed
    /// - [`LaunchError::MissingResults`] if it holds more than one row
    pub fn load(&self, program: &str) -> Result<EngineStats> {
        load_stats(&self.path_for(program))
    }
}

/// Load a summarizer output file holding exactly one row.
///
/// # Errors
///
/// See [`StatsSource::load`].
pub fn load_stats(path: &Path) -> Result<EngineStats> {
    let table = symbench_csv::load(path)?;
    if table.len() != 1 {
        return Err(LaunchError::MissingResults {
            dir: path.to_path_buf(),
            rows: table.len(),
        });
    }
    let record = table
        .into_records()
        .pop()
        .ok_or_else(|| LaunchError::MissingResults {
            dir: path.to_path_buf(),
            rows: 0,
        })?;
    Ok(EngineStats::new(record))
}

/// A value derived from one stats row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// One column as is.
    Field(StatField),
    /// `a - b`, e.g. solver time excluding the counterexample cache.
    Difference(StatField, StatField),
}

impl Metric {
    /// Evaluate on a stats row.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::Table`] if a column is missing or, for a
    /// difference, not numeric or too large for an integer.
    pub fn eval(&self, stats: &EngineStats) -> Result<Value> {
        match *self {
            Metric::Field(field) => Ok(stats.get(field)?.clone()),
            Metric::Difference(a, b) => {
                let (va, vb) = (stats.get(a)?, stats.get(b)?);
                match (va, vb) {
                    (Value::Int(x), Value::Int(y)) => {
                        x.checked_sub(*y).map(Value::Int).ok_or_else(|| {
                            TableError::InvalidValue {
                                field: self.to_string(),
                                key: stats.key().to_string(),
                                expected: "64-bit integer difference",
                                value: format!("{} - {}", x, y),
                            }
                            .into()
                        })
                    }
                    _ => Ok(Value::Float(stats.numeric(a)? - stats.numeric(b)?)),
                }
            }
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Field(field) => write!(f, "{}", field),
            Metric::Difference(a, b) => write!(f, "{}-{}", a, b),
        }
    }
}

impl FromStr for Metric {
    type Err = LaunchError;

    /// A column name, or two column names joined by `-`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(field) = StatField::from_name(s) {
            return Ok(Metric::Field(field));
        }
        if let Some((a, b)) = s.split_once('-') {
            return Ok(Metric::Difference(
                StatField::from_name(a.trim())?,
                StatField::from_name(b.trim())?,
            ));
        }
        Err(TableError::unknown_field(s).into())
    }
}

fn warn_on_overflow(program: &str, stats: &EngineStats) {
    if let Ok(instructions) = stats.instructions() {
        if instructions >= INSTRUCTION_WARN_LIMIT {
            warn!(
                program,
                instructions,
                "instruction count at or above {}",
                INSTRUCTION_WARN_LIMIT
            );
        }
    }
}

/// Build `Program, <name>...` with `metric` evaluated per program and source.
///
/// # Errors
///
/// Fails on the first stats file that cannot be loaded or lacks a column.
/// Column names must be distinct.
pub fn extract<S: AsRef<str>>(
    programs: &[S],
    sources: &[(String, StatsSource)],
    metric: Metric,
) -> Result<ResultTable> {
    let mut names = vec![PROGRAM_COLUMN.to_string()];
    names.extend(sources.iter().map(|(name, _)| name.clone()));
    let mut table = ResultTable::new(names)?;
    for program in programs {
        let program = program.as_ref();
        let mut row = Vec::with_capacity(sources.len());
        for (_, source) in sources {
            let stats = source.load(program)?;
            warn_on_overflow(program, &stats);
            row.push(metric.eval(&stats)?);
        }
        table.push(program, row)?;
    }
    Ok(table)
}

/// Columns of the key-statistics table: source column and display name.
pub const KEY_STATS: &[(StatField, &str)] = &[
    (StatField::Time, "Time"),
    (StatField::SolverTime, "Solver Chain Time"),
    (StatField::QueryTime, "Core Solver Time"),
    (StatField::Queries, "Solver Chain Queries"),
    (StatField::SolverQueries, "Core Solver Queries"),
    (StatField::ExternalCalls, "External Calls"),
    (StatField::States, "States"),
    (StatField::MaxActiveStates, "Max Active States"),
    (StatField::TermEarly, "States Terminated Early"),
    (StatField::MaxMemory, "Max Memory"),
];

/// Build the key-statistics table for one source.
///
/// # Errors
///
/// Fails on the first stats file that cannot be loaded or lacks a column.
pub fn key_stats<S: AsRef<str>>(
    programs: &[S],
    source: &StatsSource,
    columns: &[(StatField, &str)],
) -> Result<ResultTable> {
    let mut names = vec![PROGRAM_COLUMN.to_string()];
    names.extend(columns.iter().map(|(_, label)| label.to_string()));
    let mut table = ResultTable::new(names)?;
    for program in programs {
        let program = program.as_ref();
        let stats = source.load(program)?;
        let row = columns
            .iter()
            .map(|(field, _)| stats.get(*field).cloned())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        table.push(program, row)?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for() {
        let s = StatsSource::new("runs", "pooling-final", "");
        assert_eq!(
            s.path_for("ln"),
            PathBuf::from("runs/pooling-finalln.klee-out.stats.csv")
        );
    }

    #[test]
    fn test_metric_parsing() {
        assert_eq!(
            "TSolver(s)".parse::<Metric>().unwrap(),
            Metric::Field(StatField::SolverTime)
        );
        assert_eq!(
            "TSolver(s)-TCex(s)".parse::<Metric>().unwrap(),
            Metric::Difference(StatField::SolverTime, StatField::CexTime)
        );
        assert!("Solver Time".parse::<Metric>().is_err());
        assert_eq!(
            Metric::Difference(StatField::SolverTime, StatField::CexTime).to_string(),
            "TSolver(s)-TCex(s)"
        );
    }

    fn stats_row(instructions: i64, queries: i64) -> EngineStats {
        let mut table =
            ResultTable::new(vec!["Path".into(), "Instrs".into(), "Queries".into()]).unwrap();
        table
            .push("ln", vec![Value::Int(instructions), Value::Int(queries)])
            .unwrap();
        EngineStats::new(table.into_records().pop().unwrap())
    }

    #[test]
    fn test_integer_difference() {
        let metric = Metric::Difference(StatField::Instructions, StatField::Queries);
        assert_eq!(metric.eval(&stats_row(900, 300)).unwrap(), Value::Int(600));
    }

    #[test]
    fn test_integer_difference_overflow() {
        let metric = Metric::Difference(StatField::Instructions, StatField::Queries);
        let err = metric.eval(&stats_row(i64::MIN, 1)).unwrap_err();
        assert!(matches!(
            err,
            LaunchError::Table(TableError::InvalidValue { ref key, .. }) if key == "ln"
        ));
        assert!(err.to_string().contains("Instrs-Queries"));
    }

    #[test]
    fn test_key_stats_labels_unique() {
        let mut labels: Vec<_> = KEY_STATS.iter().map(|(_, l)| *l).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), KEY_STATS.len());
    }
}
