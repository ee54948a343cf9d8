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

//! Writing results tables.

use crate::error::{Result, StoreError};
use crate::reader;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use symbench_core::{Header, ResultRecord, ResultTable, TableError, Value};
use tracing::debug;

/// Serialize a whole table to a CSV string.
///
/// # Errors
///
/// Only fails if the CSV writer fails.
pub fn to_csv_string(table: &ResultTable) -> Result<String> {
    let mut buffer = Vec::new();
    to_csv_writer(table, &mut buffer)?;
    // csv only writes the UTF-8 it was given
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Serialize a whole table into a writer.
///
/// # Errors
///
/// Fails if writing fails.
pub fn to_csv_writer<W: Write>(table: &ResultTable, writer: W) -> Result<()> {
    let mut wtr = csv_writer(writer);
    wtr.write_record(table.header().names())?;
    for record in table.records() {
        write_record(&mut wtr, record)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Save a whole table, replacing any existing file.
///
/// # Errors
///
/// Fails if the file cannot be created or written.
pub fn save(table: &ResultTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    create_parent(path)?;
    let file = File::create(path).map_err(|e| StoreError::io(path, e))?;
    to_csv_writer(table, file)
}

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}

fn write_record<W: Write>(wtr: &mut csv::Writer<W>, record: &ResultRecord) -> Result<()> {
    wtr.write_record(record.cells().iter().map(Value::to_string))?;
    Ok(())
}

fn create_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))
        }
        _ => Ok(()),
    }
}

/// Append-only writer for a results table that grows one row per run.
///
/// Every row is flushed to disk as soon as it is written, so if a batch
/// aborts, the file still holds every row recorded before the failure and
/// the batch can be resumed with [`ResultWriter::resume`].
///
/// # Examples
///
/// ```no_run
/// use symbench_core::Value;
/// use symbench_csv::ResultWriter;
///
/// # fn main() -> Result<(), symbench_csv::StoreError> {
/// let mut writer = ResultWriter::create(
///     "results/pooling.csv",
///     vec!["Program".into(), "Baseline Time".into(), "Pooling Time".into()],
/// )?;
/// writer.write_row("base64", vec![Value::Float(10.5), Value::Float(6.25)])?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ResultWriter {
    path: PathBuf,
    header: Arc<Header>,
    writer: csv::Writer<File>,
    rows_written: usize,
}

impl ResultWriter {
    /// Create (or truncate) the file and write the header row.
    ///
    /// # Errors
    ///
    /// Fails for an invalid header or if the file cannot be created.
    pub fn create(path: impl Into<PathBuf>, names: Vec<String>) -> Result<Self> {
        let path = path.into();
        let header = Arc::new(Header::new(names)?);
        create_parent(&path)?;
        let file = File::create(&path).map_err(|e| StoreError::io(&path, e))?;

        let mut writer = csv_writer(file);
        writer.write_record(header.names())?;
        writer.flush().map_err(|e| StoreError::io(&path, e))?;
        debug!(path = %path.display(), "created results table");

        Ok(Self {
            path,
            header,
            writer,
            rows_written: 0,
        })
    }

    /// Reopen an existing table for appending.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::HeaderMismatch`] if the file's header differs
    /// from `names`, or an I/O error if it cannot be opened.
    pub fn resume(path: impl Into<PathBuf>, names: Vec<String>) -> Result<Self> {
        let path = path.into();
        let header = Arc::new(Header::new(names)?);

        let existing = match reader::load(&path) {
            Ok(table) => table,
            // a header-only file is a valid place to resume from
            Err(StoreError::Table(TableError::Schema { .. })) => {
                let found = reader::read_header(&path)?;
                if found.as_slice() != header.names() {
                    return Err(StoreError::HeaderMismatch {
                        path,
                        found: found.join(", "),
                        expected: header.names().join(", "),
                    });
                }
                ResultTable::with_header(Arc::clone(&header))
            }
            Err(e) => return Err(e),
        };

        if existing.header() != header.as_ref() {
            return Err(StoreError::HeaderMismatch {
                path,
                found: existing.header().names().join(", "),
                expected: header.names().join(", "),
            });
        }

        let file = OpenOptions::new()
            .append(true)
            .open(&path)
            .map_err(|e| StoreError::io(&path, e))?;

        Ok(Self {
            path,
            header,
            writer: csv_writer(file),
            rows_written: existing.len(),
        })
    }

    /// Append one row and flush it.
    ///
    /// # Errors
    ///
    /// Returns a schema error if the row width does not match the header, or
    /// an I/O error if the write fails.
    pub fn write_row(&mut self, key: impl Into<String>, values: Vec<Value>) -> Result<()> {
        let record = ResultRecord::new(Arc::clone(&self.header), key, values)?;
        self.write_record(&record)
    }

    /// Append an existing record and flush it.
    ///
    /// # Errors
    ///
    /// See [`ResultWriter::write_row`].
    pub fn write_record(&mut self, record: &ResultRecord) -> Result<()> {
        if record.header() != self.header.as_ref() {
            return Err(TableError::schema(format!(
                "record '{}' does not match the columns of '{}'",
                record.key(),
                self.path.display()
            ))
            .into());
        }
        write_record(&mut self.writer, record)?;
        self.writer
            .flush()
            .map_err(|e| StoreError::io(&self.path, e))?;
        self.rows_written += 1;
        Ok(())
    }

    /// Path of the table.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The table header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Rows in the file, including rows present before a resume.
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Current file contents.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read.
    pub fn contents(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names() -> Vec<String> {
        vec!["Program".into(), "Baseline Time".into(), "Testee Time".into()]
    }

    #[test]
    fn test_writer_appends_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results").join("run.csv");
        let mut writer = ResultWriter::create(&path, names()).unwrap();
        writer
            .write_row("ln", vec![Value::Float(2.0), Value::Float(1.0)])
            .unwrap();
        writer
            .write_row("od", vec![Value::Float(4.5), Value::Int(3)])
            .unwrap();

        assert_eq!(
            writer.contents().unwrap(),
            "Program,Baseline Time,Testee Time\nln,2.0,1.0\nod,4.5,3\n"
        );
        assert_eq!(writer.rows_written(), 2);
    }

    #[test]
    fn test_writer_rejects_wrong_width() {
        let dir = TempDir::new().unwrap();
        let mut writer = ResultWriter::create(dir.path().join("t.csv"), names()).unwrap();
        assert!(writer.write_row("ln", vec![Value::Int(1)]).is_err());
        assert_eq!(writer.rows_written(), 0);
    }

    #[test]
    fn test_rows_visible_before_drop() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.csv");
        let mut writer = ResultWriter::create(&path, names()).unwrap();
        writer
            .write_row("ln", vec![Value::Int(1), Value::Int(2)])
            .unwrap();
        let on_disk = reader::load(&path).unwrap();
        assert_eq!(on_disk.len(), 1);
    }

    #[test]
    fn test_resume_continues_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.csv");
        {
            let mut writer = ResultWriter::create(&path, names()).unwrap();
            writer
                .write_row("ln", vec![Value::Int(1), Value::Int(2)])
                .unwrap();
        }
        let mut writer = ResultWriter::resume(&path, names()).unwrap();
        assert_eq!(writer.rows_written(), 1);
        writer
            .write_row("od", vec![Value::Int(3), Value::Int(4)])
            .unwrap();

        let table = reader::load(&path).unwrap();
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["ln", "od"]);
    }

    #[test]
    fn test_resume_header_only_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.csv");
        drop(ResultWriter::create(&path, names()).unwrap());
        let writer = ResultWriter::resume(&path, names()).unwrap();
        assert_eq!(writer.rows_written(), 0);
    }

    #[test]
    fn test_resume_header_only_file_with_quoted_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.csv");
        let quoted = vec!["Program".into(), "Time, wall".into(), "Time, solver".into()];
        drop(ResultWriter::create(&path, quoted.clone()).unwrap());

        let mut writer = ResultWriter::resume(&path, quoted).unwrap();
        assert_eq!(writer.rows_written(), 0);
        writer
            .write_row("ln", vec![Value::Float(2.5), Value::Float(1.0)])
            .unwrap();
        assert_eq!(
            writer.contents().unwrap(),
            "Program,\"Time, wall\",\"Time, solver\"\nln,2.5,1.0\n"
        );
    }

    #[test]
    fn test_resume_rejects_other_columns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.csv");
        drop(ResultWriter::create(&path, names()).unwrap());
        let err = ResultWriter::resume(&path, vec!["Program".into(), "Other".into()]).unwrap_err();
        assert!(matches!(err, StoreError::HeaderMismatch { .. }));
    }

    #[test]
    fn test_save_and_string_agree() {
        let dir = TempDir::new().unwrap();
        let mut table = ResultTable::new(vec!["Program".into(), "Queries".into()]).unwrap();
        table.push("du", vec![Value::Int(12)]).unwrap();
        let path = dir.path().join("out.csv");
        save(&table, &path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            to_csv_string(&table).unwrap()
        );
    }
}
