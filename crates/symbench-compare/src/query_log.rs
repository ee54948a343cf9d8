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


//! Engine query logs and positional diffs between them.
//!
//! The engine annotates its SMT2 query log with comment lines:
//!
//! ```text
//! ; Query 0 -- Type: Truth, Instructions: 12099
//! (set-logic QF_AUFBV )
//! ...
//! ;   OK -- Elapsed: 1.011424e-02s
//! ;   Is Valid: false
//! ```
//!
//! Only comment lines are read. A `Truth` query's result sits two comment
//! lines after its header as `Is Valid: true|false`; a `Validity` query's as
//! `Validity: 1|-1|0`. Other query types carry no result.

use crate::error::{CompareError, Result};
use std::fmt;
use tracing::debug;

const HEADER_PREFIX: &str = "; Query";

/// Query type tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// Boolean truth query.
    Truth,
    /// Tri-state validity query.
    Validity,
    /// Any other tag (`Value`, `InitialValues`...), kept verbatim.
    Other(String),
}

impl QueryKind {
    /// Parse a type tag.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "Truth" => QueryKind::Truth,
            "Validity" => QueryKind::Validity,
            other => QueryKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKind::Truth => f.write_str("Truth"),
            QueryKind::Validity => f.write_str("Validity"),
            QueryKind::Other(s) => f.write_str(s),
        }
    }
}

/// Outcome of a `Validity` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validity {
    /// `1`: the expression is always true.
    True,
    /// `-1`: the expression is always false.
    False,
    /// `0`: either value is possible.
    Unknown,
}

/// Recorded result of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryResult {
    /// Result of a `Truth` query.
    Valid(bool),
    /// Result of a `Validity` query.
    Validity(Validity),
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryResult::Valid(b) => write!(f, "{}", b),
            QueryResult::Validity(Validity::True) => f.write_str("1"),
            QueryResult::Validity(Validity::False) => f.write_str("-1"),
            QueryResult::Validity(Validity::Unknown) => f.write_str("0"),
        }
    }
}

/// One query from a log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRecord {
    /// Query number as printed by the engine.
    pub index: u64,
    /// Type tag.
    pub kind: QueryKind,
    /// Instructions executed when the query was issued.
    pub instructions: u64,
    /// Result, for `Truth` and `Validity` queries when results were read.
    pub result: Option<QueryResult>,
}

/// Whether to read result lines as well as headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Headers and results.
    Full,
    /// Headers only; every `result` is `None`.
    HeadersOnly,
}

fn parse_header(line: &str, line_no: usize) -> Result<(u64, QueryKind, u64)> {
    let bad = |reason: &str| CompareError::query_log(line_no, format!("{}: '{}'", reason, line));
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 8 || tokens[3] != "--" || tokens[4] != "Type:" || tokens[6] != "Instructions:"
    {
        return Err(bad("malformed query header"));
    }
    let index = tokens[2]
        .parse::<u64>()
        .map_err(|_| bad("bad query number"))?;
    let tag = tokens[5].strip_suffix(',').unwrap_or(tokens[5]);
    let instructions = tokens[7]
        .parse::<u64>()
        .map_err(|_| bad("bad instruction count"))?;
    Ok((index, QueryKind::parse(tag), instructions))
}

fn parse_result(kind: &QueryKind, line: &str, line_no: usize) -> Result<Option<QueryResult>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let result = match kind {
        QueryKind::Truth => match tokens.as_slice() {
            [";", "Is", "Valid:", "true", ..] => QueryResult::Valid(true),
            [";", "Is", "Valid:", "false", ..] => QueryResult::Valid(false),
            _ => {
                return Err(CompareError::query_log(
                    line_no,
                    format!("expected 'Is Valid: true|false', found '{}'", line),
                ))
            }
        },
        QueryKind::Validity => match tokens.as_slice() {
            [";", "Validity:", "1", ..] => QueryResult::Validity(Validity::True),
            [";", "Validity:", "-1", ..] => QueryResult::Validity(Validity::False),
            [";", "Validity:", "0", ..] => QueryResult::Validity(Validity::Unknown),
            _ => {
                return Err(CompareError::query_log(
                    line_no,
                    format!("expected 'Validity: 1|-1|0', found '{}'", line),
                ))
            }
        },
        QueryKind::Other(_) => return Ok(None),
    };
    Ok(Some(result))
}

/// Parse the comment lines of a query log.
///
/// Query numbers must run from zero without gaps.
///
/// # Errors
///
/// Returns [`CompareError::QueryLog`] with the 1-based line number for a
/// malformed header, a missing or malformed result line, or a numbering gap.
///
/// # Examples
///
/// ```
/// use symbench_compare::{parse_query_log, ParseMode, QueryKind, QueryResult};
///
/// let log = "\
/// ; Query 0 -- Type: Truth, Instructions: 12099
/// (check-sat)
/// ;   OK -- Elapsed: 1.011424e-02s
/// ;   Is Valid: false
/// ";
/// let queries = parse_query_log(log, ParseMode::Full).unwrap();
/// assert_eq!(queries[0].kind, QueryKind::Truth);
/// assert_eq!(queries[0].instructions, 12099);
/// assert_eq!(queries[0].result, Some(QueryResult::Valid(false)));
/// ```
pub fn parse_query_log(text: &str, mode: ParseMode) -> Result<Vec<QueryRecord>> {
    let comments: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .filter(|(_, l)| l.starts_with(';'))
        .map(|(i, l)| (i + 1, l))
        .collect();

    let mut queries = Vec::new();
    for (pos, (line_no, line)) in comments.iter().enumerate() {
        if !line.starts_with(HEADER_PREFIX) {
            continue;
        }
        let (index, kind, instructions) = parse_header(line, *line_no)?;
        if index != queries.len() as u64 {
            return Err(CompareError::query_log(
                *line_no,
                format!("expected query {}, found query {}", queries.len(), index),
            ));
        }

        let result = match (mode, &kind) {
            (ParseMode::HeadersOnly, _) | (ParseMode::Full, QueryKind::Other(_)) => None,
            (ParseMode::Full, _) => {
                let (result_no, result_line) = comments.get(pos + 2).ok_or_else(|| {
                    CompareError::query_log(*line_no, format!("query {} has no result line", index))
                })?;
                parse_result(&kind, result_line, *result_no)?
            }
        };

        queries.push(QueryRecord {
            index,
            kind,
            instructions,
            result,
        });
    }
    debug!(queries = queries.len(), "parsed query log");
    Ok(queries)
}

/// How much of two logs was compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap {
    /// Number of queries in the left log.
    pub len_a: usize,
    /// Number of queries in the right log.
    pub len_b: usize,
}

impl Overlap {
    fn of(a: &[QueryRecord], b: &[QueryRecord]) -> Self {
        Self {
            len_a: a.len(),
            len_b: b.len(),
        }
    }

    /// Number of positions compared.
    pub fn compared(&self) -> usize {
        self.len_a.min(self.len_b)
    }

    /// Whether the longer log had a tail that was not compared.
    pub fn is_truncated(&self) -> bool {
        self.len_a != self.len_b
    }
}

impl fmt::Display for Overlap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "compared {} of {}/{} queries", self.compared(), self.len_a, self.len_b)?;
        if self.is_truncated() {
            write!(
                f,
                " ({} trailing queries not compared)",
                self.len_a.abs_diff(self.len_b)
            )?;
        }
        Ok(())
    }
}

/// What [`first_difference`] looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffPolicy {
    /// Also compare recorded results, not just type and instruction count.
    pub compare_results: bool,
}

impl Default for DiffPolicy {
    fn default() -> Self {
        Self {
            compare_results: true,
        }
    }
}

/// Result of [`first_difference`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstDifference {
    /// Lengths of both logs.
    pub overlap: Overlap,
    /// Query number (left log) of the first difference, if any.
    pub at: Option<u64>,
}

/// Find the first position where the logs differ in type or instruction
/// count, and in result if the policy asks for it.
///
/// Only the overlapping prefix is compared; [`FirstDifference::overlap`]
/// reports whether anything was left out.
pub fn first_difference(
    a: &[QueryRecord],
    b: &[QueryRecord],
    policy: DiffPolicy,
) -> FirstDifference {
    let at = a
        .iter()
        .zip(b)
        .find(|(qa, qb)| {
            qa.kind != qb.kind
                || qa.instructions != qb.instructions
                || (policy.compare_results && qa.result != qb.result)
        })
        .map(|(qa, _)| qa.index);
    FirstDifference {
        overlap: Overlap::of(a, b),
        at,
    }
}

/// Range over which two logs disagree, scanning from both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivergenceRange {
    /// Lengths of both logs.
    pub overlap: Overlap,
    /// First query (left log) differing in type or instruction count.
    pub first: Option<u64>,
    /// First query (left log) whose type differs.
    pub first_kind: Option<u64>,
    /// Last pair of queries, aligned from the ends, whose types differ.
    pub last_kind: Option<(u64, u64)>,
    /// First query (left log) whose instruction count differs.
    pub first_instructions: Option<u64>,
    /// Last pair of queries, aligned from the ends, whose instruction counts
    /// differ.
    pub last_instructions: Option<(u64, u64)>,
}

impl DivergenceRange {
    /// No difference in type or instruction count was found.
    pub fn is_identical(&self) -> bool {
        self.first.is_none() && self.last_kind.is_none() && self.last_instructions.is_none()
    }
}

/// Locate the first and last type and instruction-count differences.
///
/// The forward scan aligns the logs at their first query and the backward
/// scan at their last, so for logs of different lengths the reported last
/// pair carries each log's own query number.
///
/// # Examples
///
/// ```
/// use symbench_compare::{divergence_range, QueryKind, QueryRecord};
///
/// let log = |kinds: &[&str]| -> Vec<QueryRecord> {
///     kinds
///         .iter()
///         .enumerate()
///         .map(|(i, k)| QueryRecord {
///             index: i as u64,
///             kind: QueryKind::parse(k),
///             instructions: 100 * i as u64,
///             result: None,
///         })
///         .collect()
/// };
/// let a = log(&["Truth", "Truth", "Validity"]);
/// let b = log(&["Truth", "Value", "Validity"]);
/// let range = divergence_range(&a, &b);
/// assert_eq!(range.first_kind, Some(1));
/// assert_eq!(range.last_kind, Some((1, 1)));
/// assert_eq!(range.first_instructions, None);
/// ```
pub fn divergence_range(a: &[QueryRecord], b: &[QueryRecord]) -> DivergenceRange {
    let mut first = None;
    let mut first_kind = None;
    let mut first_instructions = None;
    for (qa, qb) in a.iter().zip(b) {
        let kind_differs = qa.kind != qb.kind;
        let instructions_differ = qa.instructions != qb.instructions;
        if first.is_none() && (kind_differs || instructions_differ) {
            first = Some(qa.index);
        }
        if first_kind.is_none() && kind_differs {
            first_kind = Some(qa.index);
        }
        if first_instructions.is_none() && instructions_differ {
            first_instructions = Some(qa.index);
        }
        if first_kind.is_some() && first_instructions.is_some() {
            break;
        }
    }

    let mut last_kind = None;
    let mut last_instructions = None;
    for (qa, qb) in a.iter().rev().zip(b.iter().rev()) {
        if last_kind.is_none() && qa.kind != qb.kind {
            last_kind = Some((qa.index, qb.index));
        }
        if last_instructions.is_none() && qa.instructions != qb.instructions {
            last_instructions = Some((qa.index, qb.index));
        }
        if last_kind.is_some() && last_instructions.is_some() {
            break;
        }
    }

    DivergenceRange {
        overlap: Overlap::of(a, b),
        first,
        first_kind,
        last_kind,
        first_instructions,
        last_instructions,
    }
}
