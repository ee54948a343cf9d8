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


//! Pairwise comparison of result series.
//!
//! Both series are walked by position. Keys are reported but never used to
//! realign rows; callers pre-align their series.

use crate::error::{CompareError, Result};
use std::fmt;
use symbench_core::{ResultRecord, StatField, Value};
use tracing::{debug, warn};

/// Fields compared when none are given: the two counters that must not move
/// between correct configurations of the same program.
pub const DEFAULT_FIELDS: [StatField; 2] = [StatField::Instructions, StatField::Queries];

/// Names of [`DEFAULT_FIELDS`].
pub fn default_fields() -> Vec<String> {
    DEFAULT_FIELDS.iter().map(|f| f.name().to_string()).collect()
}

/// One field whose values differ between the two sides.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDiff {
    /// Field name.
    pub field: String,
    /// Value on the left-hand side.
    pub a: Value,
    /// Value on the right-hand side.
    pub b: Value,
}

impl fmt::Display for FieldDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} != {}", self.field, self.a, self.b)
    }
}

/// A position at which the two series disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct Divergence {
    /// Zero-based position in both series.
    pub position: usize,
    /// Key of the left-hand record.
    pub key: String,
    /// Every compared field that differs, in the order the fields were given.
    pub diffs: Vec<FieldDiff>,
}

impl Divergence {
    /// The first differing field.
    pub fn first(&self) -> &FieldDiff {
        // constructed only with at least one diff
        &self.diffs[0]
    }
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "position {} ('{}'): ", self.position, self.key)?;
        for (i, diff) in self.diffs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", diff)?;
        }
        Ok(())
    }
}

/// Outcome of [`compare`].
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonReport {
    /// Every compared field matched at every position.
    Equivalent,
    /// The first position with a mismatch.
    Divergent(Divergence),
}

impl ComparisonReport {
    /// Whether the series matched.
    pub fn is_equivalent(&self) -> bool {
        matches!(self, ComparisonReport::Equivalent)
    }

    /// The divergence, if any.
    pub fn divergence(&self) -> Option<&Divergence> {
        match self {
            ComparisonReport::Equivalent => None,
            ComparisonReport::Divergent(d) => Some(d),
        }
    }
}

/// Compare two records on the given fields.
///
/// Numbers compare by value, so `Int(3)` equals `Float(3.0)`.
///
/// # Errors
///
/// Returns [`CompareError::Table`] if either record lacks one of the fields.
pub fn compare_records<S: AsRef<str>>(
    a: &ResultRecord,
    b: &ResultRecord,
    fields: &[S],
) -> Result<Vec<FieldDiff>> {
    let mut diffs = Vec::new();
    for field in fields {
        let name = field.as_ref();
        let va = a.field(name)?;
        let vb = b.field(name)?;
        if !va.numerically_eq(vb) {
            diffs.push(FieldDiff {
                field: name.to_string(),
                a: va.clone(),
                b: vb.clone(),
            });
        }
    }
    Ok(diffs)
}

fn check_lengths(a: &[ResultRecord], b: &[ResultRecord]) -> Result<()> {
    if a.len() != b.len() {
        return Err(CompareError::LengthMismatch {
            what: "series",
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Compare two series position by position and stop at the first mismatch.
///
/// # Errors
///
/// - [`CompareError::LengthMismatch`] if the series differ in length
/// - [`CompareError::Table`] if a record lacks a compared field
///
/// # Examples
///
/// ```
/// use symbench_compare::{compare, ComparisonReport};
/// use symbench_core::{ResultTable, Value};
///
/// let mut base = ResultTable::new(vec!["Program".into(), "Instrs".into()]).unwrap();
/// base.push("ln", vec![Value::Int(800)]).unwrap();
/// let mut other = base.clone();
/// other.push("od", vec![Value::Int(10)]).unwrap();
/// base.push("od", vec![Value::Int(12)]).unwrap();
///
/// let report = compare(base.records(), other.records(), &["Instrs"]).unwrap();
/// let divergence = report.divergence().unwrap();
/// assert_eq!(divergence.position, 1);
/// assert_eq!(divergence.key, "od");
/// ```
pub fn compare<S: AsRef<str>>(
    a: &[ResultRecord],
    b: &[ResultRecord],
    fields: &[S],
) -> Result<ComparisonReport> {
    check_lengths(a, b)?;
    for (position, (ra, rb)) in a.iter().zip(b).enumerate() {
        let diffs = compare_records(ra, rb, fields)?;
        if !diffs.is_empty() {
            let divergence = Divergence {
                position,
                key: ra.key().to_string(),
                diffs,
            };
            debug!(%divergence, "series diverge");
            return Ok(ComparisonReport::Divergent(divergence));
        }
    }
    Ok(ComparisonReport::Equivalent)
}

/// Compare two series in full and return every divergent position.
///
/// # Errors
///
/// Same as [`compare`].
pub fn mismatches<S: AsRef<str>>(
    a: &[ResultRecord],
    b: &[ResultRecord],
    fields: &[S],
) -> Result<Vec<Divergence>> {
    check_lengths(a, b)?;
    let mut out = Vec::new();
    for (position, (ra, rb)) in a.iter().zip(b).enumerate() {
        let diffs = compare_records(ra, rb, fields)?;
        if !diffs.is_empty() {
            out.push(Divergence {
                position,
                key: ra.key().to_string(),
                diffs,
            });
        }
    }
    Ok(out)
}

/// Determinism verdict for one program.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramVerdict {
    /// Program key from the left-hand run.
    pub key: String,
    /// Whether instruction counts agree.
    pub instructions_match: bool,
    /// Whether query counts agree.
    pub queries_match: bool,
    /// Left-hand instruction count.
    pub instructions: i64,
}

impl ProgramVerdict {
    /// Both counters agree.
    pub fn is_deterministic(&self) -> bool {
        self.instructions_match && self.queries_match
    }
}

/// Result of checking two runs of the same programs for determinism.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeterminismReport {
    /// One verdict per program, in series order.
    pub verdicts: Vec<ProgramVerdict>,
}

impl DeterminismReport {
    /// Programs whose counters all agree, with their instruction counts.
    pub fn matched(&self) -> impl Iterator<Item = (&str, i64)> {
        self.verdicts
            .iter()
            .filter(|v| v.is_deterministic())
            .map(|v| (v.key.as_str(), v.instructions))
    }

    /// Programs with at least one differing counter.
    pub fn diverged(&self) -> impl Iterator<Item = &ProgramVerdict> {
        self.verdicts.iter().filter(|v| !v.is_deterministic())
    }

    /// Whether every program is deterministic.
    pub fn is_deterministic(&self) -> bool {
        self.verdicts.iter().all(ProgramVerdict::is_deterministic)
    }
}

fn counter(record: &ResultRecord, field: StatField) -> Result<i64> {
    let value = record.field(field.name())?;
    value.as_i64().ok_or_else(|| CompareError::NotNumeric {
        field: field.name().to_string(),
        key: record.key().to_string(),
        value: value.to_string(),
    })
}

/// Check two runs of the same programs for identical instruction and query
/// counts.
///
/// # Errors
///
/// - [`CompareError::LengthMismatch`] if the runs cover different numbers of
///   programs
/// - [`CompareError::Table`] if a record lacks `Instrs` or `Queries`
/// - [`CompareError::NotNumeric`] if either counter is not an integer
pub fn check_determinism(a: &[ResultRecord], b: &[ResultRecord]) -> Result<DeterminismReport> {
    check_lengths(a, b)?;
    let mut report = DeterminismReport::default();
    for (ra, rb) in a.iter().zip(b) {
        let instructions = counter(ra, StatField::Instructions)?;
        let instructions_match = instructions == counter(rb, StatField::Instructions)?;
        let queries_match = counter(ra, StatField::Queries)? == counter(rb, StatField::Queries)?;
        if !instructions_match {
            warn!(program = ra.key(), "different instructions");
        }
        if !queries_match {
            warn!(program = ra.key(), "different queries");
        }
        report.verdicts.push(ProgramVerdict {
            key: ra.key().to_string(),
            instructions_match,
            queries_match,
            instructions,
        });
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use symbench_core::ResultTable;

    fn table(rows: &[(&str, i64, i64)]) -> ResultTable {
        let mut t = ResultTable::new(vec![
            "Program".to_string(),
            "Instrs".to_string(),
            "Queries".to_string(),
        ])
        .unwrap();
        for (k, i, q) in rows {
            t.push(*k, vec![Value::Int(*i), Value::Int(*q)]).unwrap();
        }
        t
    }

    #[test]
    fn test_identical_series_are_equivalent() {
        let t = table(&[("ln", 10, 2), ("od", 20, 3)]);
        let report = compare(t.records(), t.records(), &default_fields()).unwrap();
        assert!(report.is_equivalent());
        assert!(report.divergence().is_none());
    }

    #[test]
    fn test_first_divergence_stops_scan() {
        let a = table(&[("ln", 10, 2), ("od", 20, 3), ("du", 30, 4)]);
        let b = table(&[("ln", 10, 2), ("od", 21, 3), ("du", 31, 5)]);
        let report = compare(a.records(), b.records(), &default_fields()).unwrap();
        let d = report.divergence().unwrap();
        assert_eq!(d.position, 1);
        assert_eq!(d.key, "od");
        assert_eq!(d.diffs.len(), 1);
        assert_eq!(d.first().field, "Instrs");
        assert_eq!(d.first().a, Value::Int(20));
        assert_eq!(d.first().b, Value::Int(21));
    }

    #[test]
    fn test_all_differing_fields_reported_at_position() {
        let a = table(&[("ln", 10, 2)]);
        let b = table(&[("ln", 11, 3)]);
        let report = compare(a.records(), b.records(), &default_fields()).unwrap();
        let fields: Vec<_> = report
            .divergence()
            .unwrap()
            .diffs
            .iter()
            .map(|d| d.field.as_str())
            .collect();
        assert_eq!(fields, vec!["Instrs", "Queries"]);
    }

    #[test]
    fn test_length_mismatch() {
        let a = table(&[("ln", 10, 2)]);
        let b = table(&[("ln", 10, 2), ("od", 1, 1)]);
        let err = compare(a.records(), b.records(), &["Instrs"]).unwrap_err();
        assert_eq!(
            err,
            CompareError::LengthMismatch {
                what: "series",
                left: 1,
                right: 2
            }
        );
    }

    #[test]
    fn test_unknown_field_is_error() {
        let t = table(&[("ln", 10, 2)]);
        let err = compare(t.records(), t.records(), &["Time(s)"]).unwrap_err();
        assert!(matches!(err, CompareError::Table(_)));
    }

    #[test]
    fn test_int_and_float_compare_numerically() {
        let mut a = ResultTable::new(vec!["Program".into(), "Instrs".into()]).unwrap();
        a.push("ln", vec![Value::Int(3)]).unwrap();
        let mut b = ResultTable::new(vec!["Program".into(), "Instrs".into()]).unwrap();
        b.push("ln", vec![Value::Float(3.0)]).unwrap();
        assert!(compare(a.records(), b.records(), &["Instrs"])
            .unwrap()
            .is_equivalent());
    }

    #[test]
    fn test_mismatches_collects_every_position() {
        let a = table(&[("ln", 10, 2), ("od", 20, 3), ("du", 30, 4)]);
        let b = table(&[("ln", 11, 2), ("od", 20, 3), ("du", 30, 5)]);
        let all = mismatches(a.records(), b.records(), &default_fields()).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].key, "ln");
        assert_eq!(all[1].key, "du");
        assert_eq!(all[1].first().field, "Queries");
    }

    #[test]
    fn test_divergence_display() {
        let a = table(&[("ln", 10, 2)]);
        let b = table(&[("ln", 11, 3)]);
        let all = mismatches(a.records(), b.records(), &default_fields()).unwrap();
        assert_eq!(
            all[0].to_string(),
            "position 0 ('ln'): Instrs: 10 != 11, Queries: 2 != 3"
        );
    }

    #[test]
    fn test_determinism_report() {
        let a = table(&[("ln", 10, 2), ("od", 20, 3), ("du", 30, 4)]);
        let b = table(&[("ln", 10, 2), ("od", 21, 3), ("du", 30, 5)]);
        let report = check_determinism(a.records(), b.records()).unwrap();
        assert!(!report.is_deterministic());
        assert_eq!(report.matched().collect::<Vec<_>>(), vec![("ln", 10)]);
        let diverged: Vec<_> = report.diverged().map(|v| v.key.as_str()).collect();
        assert_eq!(diverged, vec!["od", "du"]);
        assert!(!report.verdicts[1].instructions_match);
        assert!(report.verdicts[1].queries_match);
        assert!(!report.verdicts[2].queries_match);
    }

    #[test]
    fn test_determinism_rejects_text_counter() {
        let mut a = ResultTable::new(vec!["Program".into(), "Instrs".into(), "Queries".into()])
            .unwrap();
        a.push("ln", vec![Value::Text("n/a".into()), Value::Int(1)])
            .unwrap();
        let err = check_determinism(a.records(), a.records()).unwrap_err();
        assert!(matches!(err, CompareError::NotNumeric { .. }));
    }
}
