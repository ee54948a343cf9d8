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

//! Typed view over a summarizer statistics row.

use crate::error::{Result, TableError};
use crate::record::ResultRecord;
use crate::schema::{FieldKind, StatField};
use crate::value::Value;

/// Statistics of one completed engine run.
///
/// Wraps the single [`ResultRecord`] the summarizer produced. Accessors go
/// through [`StatField`], so a column outside the schema cannot be asked
/// for, and a column missing from the row is an error rather than a default.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineStats {
    record: ResultRecord,
}

impl EngineStats {
    /// Wrap a summarizer row.
    pub fn new(record: ResultRecord) -> Self {
        Self { record }
    }

    /// The underlying row.
    pub fn record(&self) -> &ResultRecord {
        &self.record
    }

    /// Consume the view, returning the row.
    pub fn into_record(self) -> ResultRecord {
        self.record
    }

    /// The row's key column (the run directory, for summarizer output).
    pub fn key(&self) -> &str {
        self.record.key()
    }

    /// Raw cell for a recognized column.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnknownField`] if the row lacks the column.
    pub fn get(&self, field: StatField) -> Result<&Value> {
        self.record.field(field.name())
    }

    /// Raw cell for a column given by name.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnknownField`] if the name is not a recognized
    /// statistics column or the row lacks it.
    pub fn by_name(&self, name: &str) -> Result<&Value> {
        self.get(StatField::from_name(name)?)
    }

    /// Integer column.
    ///
    /// # Errors
    ///
    /// Fails if the column is missing or not a whole number.
    pub fn int(&self, field: StatField) -> Result<i64> {
        let value = self.get(field)?;
        value.as_i64().ok_or_else(|| self.invalid(field, FieldKind::Int, value))
    }

    /// Numeric column as a float. Integer columns convert losslessly enough
    /// for ratios and charts.
    ///
    /// # Errors
    ///
    /// Fails if the column is missing or not numeric.
    pub fn float(&self, field: StatField) -> Result<f64> {
        let value = self.get(field)?;
        value.as_f64().ok_or_else(|| self.invalid(field, FieldKind::Float, value))
    }

    /// Numeric column, read according to its declared kind.
    ///
    /// # Errors
    ///
    /// Fails if the column is missing or does not match its kind.
    pub fn numeric(&self, field: StatField) -> Result<f64> {
        match field.kind() {
            FieldKind::Int => self.int(field).map(|v| v as f64),
            FieldKind::Float => self.float(field),
        }
    }

    fn invalid(&self, field: StatField, kind: FieldKind, value: &Value) -> TableError {
        TableError::InvalidValue {
            field: field.name().to_string(),
            key: self.key().to_string(),
            expected: kind.describe(),
            value: value.to_string(),
        }
    }

    /// Wall-clock seconds.
    pub fn time(&self) -> Result<f64> {
        self.float(StatField::Time)
    }

    /// Instructions executed.
    pub fn instructions(&self) -> Result<i64> {
        self.int(StatField::Instructions)
    }

    /// Queries issued to the solver chain.
    pub fn queries(&self) -> Result<i64> {
        self.int(StatField::Queries)
    }

    /// Queries that reached the core solver.
    pub fn solver_queries(&self) -> Result<i64> {
        self.int(StatField::SolverQueries)
    }

    /// Seconds spent in the solver chain.
    pub fn solver_time(&self) -> Result<f64> {
        self.float(StatField::SolverTime)
    }

    /// Seconds spent in the core solver.
    pub fn query_time(&self) -> Result<f64> {
        self.float(StatField::QueryTime)
    }

    /// Seconds spent in the counterexample cache and below.
    pub fn cex_time(&self) -> Result<f64> {
        self.float(StatField::CexTime)
    }

    /// Peak memory in MiB.
    pub fn max_memory(&self) -> Result<f64> {
        self.float(StatField::MaxMemory)
    }

    /// Query cache hits.
    pub fn query_cache_hits(&self) -> Result<i64> {
        self.int(StatField::QCacheHits)
    }

    /// Counterexample cache hits.
    pub fn cex_cache_hits(&self) -> Result<i64> {
        self.int(StatField::QCexCacheHits)
    }

    /// States terminated early.
    pub fn terminated_early(&self) -> Result<i64> {
        self.int(StatField::TermEarly)
    }

    /// Pretty JSON of the full row, columns in summarizer order.
    ///
    /// # Errors
    ///
    /// Only fails if serialization itself fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.record)
    }
}

impl From<ResultRecord> for EngineStats {
    fn from(record: ResultRecord) -> Self {
        Self::new(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Header;
    use std::sync::Arc;

    fn stats(columns: &[(&str, Value)]) -> EngineStats {
        let mut names = vec!["Path".to_string()];
        names.extend(columns.iter().map(|(n, _)| n.to_string()));
        let header = Arc::new(Header::new(names).unwrap());
        let values = columns.iter().map(|(_, v)| v.clone()).collect();
        EngineStats::new(ResultRecord::new(header, "dump/ln.klee-out", values).unwrap())
    }

    #[test]
    fn test_typed_accessors() {
        let s = stats(&[
            ("Time(s)", Value::Float(12.5)),
            ("Instrs", Value::Int(99_000)),
            ("Queries", Value::Int(40)),
            ("TSolver(s)", Value::Float(3.25)),
        ]);
        assert_eq!(s.time().unwrap(), 12.5);
        assert_eq!(s.instructions().unwrap(), 99_000);
        assert_eq!(s.queries().unwrap(), 40);
        assert_eq!(s.solver_time().unwrap(), 3.25);
    }

    #[test]
    fn test_float_accessor_accepts_integer_cell() {
        let s = stats(&[("Time(s)", Value::Int(12))]);
        assert_eq!(s.time().unwrap(), 12.0);
    }

    #[test]
    fn test_missing_column_is_error() {
        let s = stats(&[("Time(s)", Value::Float(1.0))]);
        assert!(matches!(
            s.instructions(),
            Err(TableError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_unrecognized_name_is_error() {
        let s = stats(&[("Time(s)", Value::Float(1.0))]);
        assert!(s.by_name("Time").is_err());
        assert!(s.by_name("Time(s)").is_ok());
    }

    #[test]
    fn test_wrong_kind_is_error() {
        let s = stats(&[("Instrs", Value::Float(1.5))]);
        let err = s.instructions().unwrap_err();
        assert!(matches!(err, TableError::InvalidValue { expected: "integer", .. }));
    }

    #[test]
    fn test_to_json() {
        let s = stats(&[("Instrs", Value::Int(5))]);
        let json = s.to_json().unwrap();
        assert!(json.contains("\"Instrs\": 5"));
        assert!(json.contains("\"Path\": \"dump/ln.klee-out\""));
    }
}
