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

//! Reading results tables.

use crate::error::{Result, StoreError};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use symbench_core::{ResultTable, TableError, Value};

/// Default maximum number of rows accepted from one file.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Configuration for reading results tables.
///
/// # Examples
///
/// ```
/// use symbench_csv::LoadConfig;
///
/// let config = LoadConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(config.trim);
/// ```
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Field delimiter (default `,`).
    pub delimiter: u8,
    /// Trim surrounding whitespace from every field (default `true`).
    pub trim: bool,
    /// Reject files with more rows than this.
    pub max_rows: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Load a results table from a file.
///
/// # Errors
///
/// - [`StoreError::Io`] if the file cannot be opened
/// - [`StoreError::Table`] wrapping [`TableError::Schema`] if the file is
///   empty, has no data rows, has a bad header, or has rows whose width
///   differs from the header
/// - [`StoreError::Parse`] for undecodable records
pub fn load(path: impl AsRef<Path>) -> Result<ResultTable> {
    load_with_config(path, LoadConfig::default())
}

/// Load a results table from a file with custom settings.
///
/// # Errors
///
/// See [`load`].
pub fn load_with_config(path: impl AsRef<Path>, config: LoadConfig) -> Result<ResultTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
    from_csv_reader_with_config(file, config).map_err(|e| match e {
        StoreError::Table(TableError::Schema { reason }) => {
            StoreError::Table(TableError::schema(format!("{}: {}", path.display(), reason)))
        }
        other => other,
    })
}

/// Parse a results table from a string.
///
/// # Errors
///
/// See [`load`].
pub fn from_csv_str(csv: &str) -> Result<ResultTable> {
    from_csv_reader(csv.as_bytes())
}

/// Parse a results table from any reader.
///
/// # Errors
///
/// See [`load`].
pub fn from_csv_reader<R: Read>(reader: R) -> Result<ResultTable> {
    from_csv_reader_with_config(reader, LoadConfig::default())
}

/// Parse a results table from any reader with custom settings.
///
/// # Errors
///
/// See [`load`].
pub fn from_csv_reader_with_config<R: Read>(reader: R, config: LoadConfig) -> Result<ResultTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(parse_error)?.clone();
    if headers.is_empty() {
        return Err(TableError::schema("file is empty").into());
    }

    let names: Vec<String> = headers.iter().map(str::to_string).collect();
    let mut table = ResultTable::new(names)?;

    for (row_idx, result) in csv_reader.records().enumerate() {
        if row_idx >= config.max_rows {
            return Err(StoreError::RowLimit {
                limit: config.max_rows,
            });
        }

        let record = result.map_err(parse_error)?;
        let mut cells = record.iter();
        let key = cells.next().unwrap_or_default().to_string();
        if key.is_empty() {
            return Err(TableError::schema(format!("row {} has an empty key", row_idx + 1)).into());
        }

        let values = cells.map(Value::parse).collect();
        table.push(key, values)?;
    }

    if table.is_empty() {
        return Err(TableError::schema("table has a header but no rows").into());
    }

    Ok(table)
}

/// Read only the header row of a table file.
///
/// # Errors
///
/// Fails if the file cannot be opened or its first record is not valid CSV.
pub(crate) fn read_header(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);
    let headers = csv_reader.headers().map_err(parse_error)?;
    Ok(headers.iter().map(str::to_string).collect())
}

fn parse_error(e: csv::Error) -> StoreError {
    let line = e.position().map(|p| p.line()).unwrap_or(0);
    match e.kind() {
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => TableError::schema(format!(
            "row at line {} has {} fields, header has {}",
            line, len, expected_len
        ))
        .into(),
        _ => StoreError::Parse {
            line,
            message: e.to_string(),
        },
    }
}
