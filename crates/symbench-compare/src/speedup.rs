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


//! Speedup ratios and their summary statistics.

use crate::error::{CompareError, Result};
use std::fmt;
use symbench_core::{ResultRecord, TableError};

/// One ratio `a / b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ratio {
    /// Key of the pair, when the series were keyed.
    pub key: Option<String>,
    /// `a / b`.
    pub value: f64,
}

/// Per-item ratios with their median and mean.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedupSummary {
    ratios: Vec<Ratio>,
    median: f64,
    mean: f64,
}

impl SpeedupSummary {
    fn from_ratios(ratios: Vec<Ratio>) -> Result<Self> {
        if ratios.is_empty() {
            return Err(CompareError::EmptySeries);
        }
        let mut sorted: Vec<f64> = ratios.iter().map(|r| r.value).collect();
        sorted.sort_by(f64::total_cmp);
        let median = sorted[(sorted.len() - 1) / 2];
        let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;
        Ok(Self {
            ratios,
            median,
            mean,
        })
    }

    /// Ratios in input order.
    pub fn ratios(&self) -> &[Ratio] {
        &self.ratios
    }

    /// Ratio values in input order.
    pub fn values(&self) -> Vec<f64> {
        self.ratios.iter().map(|r| r.value).collect()
    }

    /// Lower-middle element of the sorted ratios.
    pub fn median(&self) -> f64 {
        self.median
    }

    /// Arithmetic mean of the ratios.
    pub fn mean(&self) -> f64 {
        self.mean
    }
}

impl fmt::Display for SpeedupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ratio in &self.ratios {
            match &ratio.key {
                Some(key) => writeln!(f, "{}: {:.4}", key, ratio.value)?,
                None => writeln!(f, "{:.4}", ratio.value)?,
            }
        }
        writeln!(f, "Median: {:.4}", self.median)?;
        write!(f, "Mean: {:.4}", self.mean)
    }
}

fn ratio(position: usize, key: Option<&str>, a: f64, b: f64) -> Result<Ratio> {
    if b == 0.0 {
        return Err(CompareError::DivideByZero {
            position,
            key: key.map(str::to_string),
        });
    }
    Ok(Ratio {
        key: key.map(str::to_string),
        value: a / b,
    })
}

/// Compute `a[i] / b[i]` for every `i`, with median and mean.
///
/// For an even number of ratios the median is the lower of the two middle
/// elements.
///
/// # Errors
///
/// - [`CompareError::LengthMismatch`] if the series differ in length
/// - [`CompareError::EmptySeries`] if they are empty
/// - [`CompareError::DivideByZero`] at the first zero in `b`
///
/// # Examples
///
/// ```
/// use symbench_compare::speedup;
///
/// let summary = speedup(&[10.0, 20.0, 30.0], &[5.0, 5.0, 5.0]).unwrap();
/// assert_eq!(summary.values(), vec![2.0, 4.0, 6.0]);
/// assert_eq!(summary.median(), 4.0);
/// assert_eq!(summary.mean(), 4.0);
/// ```
pub fn speedup(a: &[f64], b: &[f64]) -> Result<SpeedupSummary> {
    if a.len() != b.len() {
        return Err(CompareError::LengthMismatch {
            what: "series",
            left: a.len(),
            right: b.len(),
        });
    }
    let ratios = a
        .iter()
        .zip(b)
        .enumerate()
        .map(|(i, (x, y))| ratio(i, None, *x, *y))
        .collect::<Result<Vec<_>>>()?;
    SpeedupSummary::from_ratios(ratios)
}

/// Like [`speedup`], with a key attached to each pair.
///
/// # Errors
///
/// Same as [`speedup`]; [`CompareError::LengthMismatch`] also covers a key
/// list of the wrong length.
pub fn speedup_keyed<S: AsRef<str>>(keys: &[S], a: &[f64], b: &[f64]) -> Result<SpeedupSummary> {
    if a.len() != b.len() {
        return Err(CompareError::LengthMismatch {
            what: "series",
            left: a.len(),
            right: b.len(),
        });
    }
    if keys.len() != a.len() {
        return Err(CompareError::LengthMismatch {
            what: "keys",
            left: keys.len(),
            right: a.len(),
        });
    }
    let ratios = keys
        .iter()
        .zip(a.iter().zip(b))
        .enumerate()
        .map(|(i, (k, (x, y)))| ratio(i, Some(k.as_ref()), *x, *y))
        .collect::<Result<Vec<_>>>()?;
    SpeedupSummary::from_ratios(ratios)
}

fn numeric(record: &ResultRecord, field: &str) -> Result<f64> {
    let value = record.field(field)?;
    value.as_f64().ok_or_else(|| CompareError::NotNumeric {
        field: field.to_string(),
        key: record.key().to_string(),
        value: value.to_string(),
    })
}

/// Speedup of `field_a` in `a` over `field_b` in `b`, keyed by program.
///
/// Records are paired by position and must carry the same keys.
///
/// # Errors
///
/// - [`CompareError::LengthMismatch`] if the series differ in length
/// - [`CompareError::Table`] for a missing field or a key mismatch
/// - [`CompareError::NotNumeric`] for a non-numeric cell
/// - the errors of [`speedup`]
pub fn speedup_records(
    a: &[ResultRecord],
    field_a: &str,
    b: &[ResultRecord],
    field_b: &str,
) -> Result<SpeedupSummary> {
    if a.len() != b.len() {
        return Err(CompareError::LengthMismatch {
            what: "series",
            left: a.len(),
            right: b.len(),
        });
    }
    let mut keys = Vec::with_capacity(a.len());
    let mut xs = Vec::with_capacity(a.len());
    let mut ys = Vec::with_capacity(b.len());
    for (i, (ra, rb)) in a.iter().zip(b).enumerate() {
        if ra.key() != rb.key() {
            return Err(TableError::alignment(format!(
                "row {} has key '{}' on the left and '{}' on the right",
                i,
                ra.key(),
                rb.key()
            ))
            .into());
        }
        keys.push(ra.key());
        xs.push(numeric(ra, field_a)?);
        ys.push(numeric(rb, field_b)?);
    }
    speedup_keyed(&keys, &xs, &ys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use symbench_core::{ResultTable, Value};

    #[test]
    fn test_spec_example() {
        let s = speedup(&[10.0, 20.0, 30.0], &[5.0, 5.0, 5.0]).unwrap();
        assert_eq!(s.values(), vec![2.0, 4.0, 6.0]);
        assert_eq!(s.median(), 4.0);
        assert_eq!(s.mean(), 4.0);
    }

    #[test]
    fn test_even_length_takes_lower_middle() {
        let s = speedup(&[4.0, 1.0, 3.0, 2.0], &[1.0, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(s.median(), 2.0);
        assert_eq!(s.mean(), 2.5);
    }

    #[test]
    fn test_divide_by_zero() {
        let err = speedup(&[1.0, 2.0], &[1.0, 0.0]).unwrap_err();
        assert_eq!(
            err,
            CompareError::DivideByZero {
                position: 1,
                key: None
            }
        );
    }

    #[test]
    fn test_zero_numerator_is_fine() {
        let s = speedup(&[0.0], &[3.0]).unwrap();
        assert_eq!(s.median(), 0.0);
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(speedup(&[], &[]).unwrap_err(), CompareError::EmptySeries);
    }

    #[test]
    fn test_length_mismatch() {
        let err = speedup(&[1.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, CompareError::LengthMismatch { left: 1, right: 2, .. }));
    }

    #[test]
    fn test_keyed_zero_names_program() {
        let err = speedup_keyed(&["ln", "od"], &[1.0, 2.0], &[1.0, 0.0]).unwrap_err();
        assert_eq!(err.to_string(), "Division by zero at position 1 ('od')");
    }

    #[test]
    fn test_keyed_wrong_key_count() {
        let err = speedup_keyed(&["ln"], &[1.0, 2.0], &[1.0, 1.0]).unwrap_err();
        assert!(matches!(err, CompareError::LengthMismatch { what: "keys", .. }));
    }

    #[test]
    fn test_records_by_column() {
        let mut a = ResultTable::new(vec!["Program".into(), "TSolver(s)".into()]).unwrap();
        a.push("ln", vec![Value::Float(9.0)]).unwrap();
        a.push("od", vec![Value::Int(4)]).unwrap();
        let mut b = ResultTable::new(vec!["Program".into(), "Time".into()]).unwrap();
        b.push("ln", vec![Value::Float(3.0)]).unwrap();
        b.push("od", vec![Value::Float(2.0)]).unwrap();

        let s = speedup_records(a.records(), "TSolver(s)", b.records(), "Time").unwrap();
        assert_eq!(s.ratios()[0].key.as_deref(), Some("ln"));
        assert_eq!(s.values(), vec![3.0, 2.0]);
        assert_eq!(s.median(), 2.0);
    }

    #[test]
    fn test_records_key_mismatch() {
        let mut a = ResultTable::new(vec!["Program".into(), "T".into()]).unwrap();
        a.push("ln", vec![Value::Int(1)]).unwrap();
        let mut b = ResultTable::new(vec!["Program".into(), "T".into()]).unwrap();
        b.push("od", vec![Value::Int(1)]).unwrap();
        let err = speedup_records(a.records(), "T", b.records(), "T").unwrap_err();
        assert!(matches!(err, CompareError::Table(TableError::Alignment { .. })));
    }

    #[test]
    fn test_display() {
        let s = speedup_keyed(&["ln"], &[3.0], &[2.0]).unwrap();
        assert_eq!(s.to_string(), "ln: 1.5000\nMedian: 1.5000\nMean: 1.5000");
    }
}
