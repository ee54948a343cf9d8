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

//! Results tables and column-wise merging.

use crate::error::{Result, TableError};
use crate::record::{Header, ResultRecord};
use crate::value::Value;
use std::collections::BTreeSet;
use std::sync::Arc;

/// An ordered sequence of [`ResultRecord`]s sharing one [`Header`].
///
/// Row order is significant: comparisons and merges pair rows by position.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    header: Arc<Header>,
    records: Vec<ResultRecord>,
}

impl ResultTable {
    /// Create an empty table with the given column names (key first).
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Schema`] for an invalid header.
    pub fn new(names: Vec<String>) -> Result<Self> {
        Ok(Self::with_header(Arc::new(Header::new(names)?)))
    }

    /// Create an empty table sharing an existing header.
    pub fn with_header(header: Arc<Header>) -> Self {
        Self {
            header,
            records: Vec::new(),
        }
    }

    /// The table header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Shared handle to the header, for building compatible records.
    pub fn header_arc(&self) -> Arc<Header> {
        Arc::clone(&self.header)
    }

    /// Append a row given its key and non-key values.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Schema`] if the row width does not match.
    pub fn push(&mut self, key: impl Into<String>, values: Vec<Value>) -> Result<()> {
        let record = ResultRecord::new(Arc::clone(&self.header), key, values)?;
        self.records.push(record);
        Ok(())
    }

    /// Append an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Schema`] if the record was built against a
    /// different header.
    pub fn push_record(&mut self, record: ResultRecord) -> Result<()> {
        if record.header_arc().as_ref() != self.header.as_ref() {
            return Err(TableError::schema(format!(
                "record '{}' has columns [{}], table has [{}]",
                record.key(),
                record.header().names().join(", "),
                self.header.names().join(", ")
            )));
        }
        self.records.push(record);
        Ok(())
    }

    /// All rows in order.
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    /// Consume the table, returning its rows.
    pub fn into_records(self) -> Vec<ResultRecord> {
        self.records
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Row keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(ResultRecord::key)
    }

    /// Find the first row with the given key.
    pub fn find(&self, key: &str) -> Option<&ResultRecord> {
        self.records.iter().find(|r| r.key() == key)
    }

    /// One column as a vector of cells, in row order.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnknownField`] if the column does not exist.
    pub fn column(&self, name: &str) -> Result<Vec<&Value>> {
        let index = self
            .header
            .position(name)
            .ok_or_else(|| TableError::unknown_field(name))?;
        Ok(self.records.iter().map(|r| &r.cells()[index]).collect())
    }

    /// One column converted to floats.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnknownField`] for a missing column and
    /// [`TableError::InvalidValue`] for a non-numeric cell.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        let index = self
            .header
            .position(name)
            .ok_or_else(|| TableError::unknown_field(name))?;
        self.records
            .iter()
            .map(|r| {
                let cell = &r.cells()[index];
                cell.as_f64().ok_or_else(|| TableError::InvalidValue {
                    field: name.to_string(),
                    key: r.key().to_string(),
                    expected: "number",
                    value: cell.to_string(),
                })
            })
            .collect()
    }

    /// Column-wise union with another table. See [`merge`].
    pub fn merge(&self, other: &ResultTable) -> Result<ResultTable> {
        merge(self, other)
    }
}

/// Merge two tables column-wise.
///
/// The result has `left`'s columns followed by `right`'s non-key columns.
/// Rows are paired by position, not by key value: both tables must list the
/// same keys in the same order.
///
/// # Errors
///
/// Checks run in this order, and the first failure is returned:
///
/// 1. [`TableError::Alignment`] if the row counts differ
/// 2. [`TableError::Alignment`] if the key column names differ
/// 3. [`TableError::DuplicateField`] if any non-key column of `right`
///    already exists in `left`
/// 4. [`TableError::Alignment`] if the keys differ at some position
///
/// # Examples
///
/// ```
/// use symbench_core::{merge, ResultTable, Value};
///
/// let mut a = ResultTable::new(vec!["Program".into(), "Baseline Time".into()]).unwrap();
/// a.push("ln", vec![Value::Float(2.0)]).unwrap();
/// let mut b = ResultTable::new(vec!["Program".into(), "Pooling Time".into()]).unwrap();
/// b.push("ln", vec![Value::Float(1.0)]).unwrap();
///
/// let merged = merge(&a, &b).unwrap();
/// assert_eq!(merged.header().names(), &["Program", "Baseline Time", "Pooling Time"]);
/// ```
pub fn merge(left: &ResultTable, right: &ResultTable) -> Result<ResultTable> {
    if left.len() != right.len() {
        return Err(TableError::alignment(format!(
            "tables have {} and {} rows",
            left.len(),
            right.len()
        )));
    }

    if left.header.key_name() != right.header.key_name() {
        return Err(TableError::alignment(format!(
            "key columns differ: '{}' vs '{}'",
            left.header.key_name(),
            right.header.key_name()
        )));
    }

    let left_names: BTreeSet<&str> = left.header.names().iter().map(String::as_str).collect();
    let duplicates: Vec<String> = right
        .header
        .fields()
        .iter()
        .filter(|name| left_names.contains(name.as_str()))
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if !duplicates.is_empty() {
        return Err(TableError::DuplicateField { fields: duplicates });
    }

    for (position, (l, r)) in left.records.iter().zip(right.records.iter()).enumerate() {
        if l.key() != r.key() {
            return Err(TableError::alignment(format!(
                "row {} has key '{}' on the left and '{}' on the right",
                position,
                l.key(),
                r.key()
            )));
        }
    }

    let mut names = left.header.names().to_vec();
    names.extend(right.header.fields().iter().cloned());
    let mut merged = ResultTable::new(names)?;

    for (l, r) in left.records.iter().zip(right.records.iter()) {
        let mut values = l.values().to_vec();
        values.extend(r.values().iter().cloned());
        merged.push(l.key(), values)?;
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(names: &[&str], rows: &[(&str, &[i64])]) -> ResultTable {
        let mut t = ResultTable::new(names.iter().map(|s| s.to_string()).collect()).unwrap();
        for (key, values) in rows {
            t.push(*key, values.iter().map(|v| Value::Int(*v)).collect())
                .unwrap();
        }
        t
    }

    #[test]
    fn test_push_rejects_wrong_width() {
        let mut t = table(&["Program", "A"], &[]);
        let err = t.push("ln", vec![Value::Int(1), Value::Int(2)]).unwrap_err();
        assert!(matches!(err, TableError::Schema { .. }));
        assert!(t.is_empty());
    }

    #[test]
    fn test_push_record_rejects_foreign_header() {
        let a = table(&["Program", "A"], &[("ln", &[1])]);
        let mut b = table(&["Program", "B"], &[]);
        let record = a.records()[0].clone();
        assert!(b.push_record(record).is_err());
    }

    #[test]
    fn test_column_and_numeric_column() {
        let t = table(&["Program", "A"], &[("ln", &[1]), ("od", &[2])]);
        assert_eq!(t.numeric_column("A").unwrap(), vec![1.0, 2.0]);
        assert_eq!(t.column("Program").unwrap().len(), 2);
        assert!(t.column("B").is_err());
        assert!(t.numeric_column("Program").is_err());
    }

    #[test]
    fn test_merge_concatenates_columns() {
        let a = table(&["Program", "A"], &[("ln", &[1]), ("od", &[2])]);
        let b = table(&["Program", "B", "C"], &[("ln", &[3, 4]), ("od", &[5, 6])]);
        let m = merge(&a, &b).unwrap();
        assert_eq!(m.header().names(), &["Program", "A", "B", "C"]);
        assert_eq!(m.records()[1].values(), &[Value::Int(2), Value::Int(5), Value::Int(6)]);
    }

    #[test]
    fn test_merge_length_mismatch() {
        let a = table(&["Program", "A"], &[("ln", &[1])]);
        let b = table(&["Program", "B"], &[]);
        assert!(matches!(merge(&a, &b), Err(TableError::Alignment { .. })));
    }

    #[test]
    fn test_merge_key_name_mismatch() {
        let a = table(&["Program", "A"], &[("ln", &[1])]);
        let b = table(&["Name", "B"], &[("ln", &[1])]);
        let err = merge(&a, &b).unwrap_err();
        assert!(err.to_string().contains("'Program' vs 'Name'"));
    }

    #[test]
    fn test_merge_duplicate_fields_sorted() {
        let a = table(&["Program", "Z", "A"], &[("ln", &[1, 2])]);
        let b = table(&["Program", "Z", "A"], &[("ln", &[1, 2])]);
        assert_eq!(
            merge(&a, &b).unwrap_err(),
            TableError::DuplicateField {
                fields: vec!["A".to_string(), "Z".to_string()]
            }
        );
    }

    #[test]
    fn test_merge_misaligned_keys() {
        let a = table(&["Program", "A"], &[("ln", &[1]), ("od", &[2])]);
        let b = table(&["Program", "B"], &[("od", &[1]), ("ln", &[2])]);
        let err = merge(&a, &b).unwrap_err();
        assert!(err.to_string().contains("row 0"));
    }

    #[test]
    fn test_duplicates_reported_before_key_misalignment() {
        let a = table(&["Program", "A"], &[("ln", &[1])]);
        let b = table(&["Program", "A"], &[("od", &[1])]);
        assert!(matches!(merge(&a, &b), Err(TableError::DuplicateField { .. })));
    }
}
