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

//! Schema-checked result rows.

use crate::error::{Result, TableError};
use crate::value::Value;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashSet;
use std::sync::Arc;

/// Column names of a results table. The first name is the key column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
}

impl Header {
    /// Build a header from column names.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Schema`] if there are no columns, a column name
    /// is empty, or a name appears twice.
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(TableError::schema("header has no columns"));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for (position, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(TableError::schema(format!(
                    "column {} has an empty name",
                    position
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(TableError::schema(format!(
                    "column '{}' appears more than once",
                    name
                )));
            }
        }

        Ok(Self { names })
    }

    /// Name of the identifying column.
    pub fn key_name(&self) -> &str {
        &self.names[0]
    }

    /// Every column name, key first.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Non-key column names.
    pub fn fields(&self) -> &[String] {
        &self.names[1..]
    }

    /// Number of columns including the key.
    pub fn width(&self) -> usize {
        self.names.len()
    }

    /// Column index of `name`, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

/// One immutable row of a results table.
///
/// The record shares its [`Header`] with every other row of its table. The
/// key cell is always stored as text.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    header: Arc<Header>,
    values: Vec<Value>,
}

impl ResultRecord {
    /// Build a record from its key and non-key values.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Schema`] if the number of values does not match
    /// the header's non-key column count.
    pub fn new(header: Arc<Header>, key: impl Into<String>, values: Vec<Value>) -> Result<Self> {
        let key = key.into();
        if values.len() + 1 != header.width() {
            return Err(TableError::schema(format!(
                "row '{}' has {} fields, header expects {}",
                key,
                values.len() + 1,
                header.width()
            )));
        }

        let mut cells = Vec::with_capacity(header.width());
        cells.push(Value::Text(key));
        cells.extend(values);
        Ok(Self {
            header,
            values: cells,
        })
    }

    /// The record's key, usually a program name.
    pub fn key(&self) -> &str {
        match &self.values[0] {
            Value::Text(s) => s,
            // new() always stores the key as text
            _ => "",
        }
    }

    /// The shared header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    pub(crate) fn header_arc(&self) -> &Arc<Header> {
        &self.header
    }

    /// Look a field up by name. The key column is addressable too.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnknownField`] if `name` is not in the schema.
    pub fn field(&self, name: &str) -> Result<&Value> {
        self.header
            .position(name)
            .map(|i| &self.values[i])
            .ok_or_else(|| TableError::UnknownField {
                field: name.to_string(),
                key: Some(self.key().to_string()),
            })
    }

    /// Non-key values in header order.
    pub fn values(&self) -> &[Value] {
        &self.values[1..]
    }

    /// All cells, key first.
    pub fn cells(&self) -> &[Value] {
        &self.values
    }

    /// Iterate `(name, value)` over non-key fields.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.header
            .fields()
            .iter()
            .map(String::as_str)
            .zip(self.values[1..].iter())
    }
}

impl Serialize for ResultRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.header.names().iter().zip(self.values.iter()) {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
