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

//! Save/load behavior of results tables on disk.

use proptest::prelude::*;
use symbench_core::{ResultTable, StatField, Value};
use symbench_csv::{load, save, ResultWriter, StoreError};
use symbench_test::fixtures::{stats, tables};
use tempfile::TempDir;

fn cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        (-1.0e9f64..1.0e9).prop_map(Value::Float),
        "x[a-z ]{0,8}[a-z]".prop_map(Value::Text),
    ]
}

fn table() -> impl Strategy<Value = ResultTable> {
    (1usize..5, 1usize..8).prop_flat_map(|(width, rows)| {
        proptest::collection::vec(proptest::collection::vec(cell(), width), rows).prop_map(
            move |rows| {
                let mut names = vec!["Program".to_string()];
                names.extend((0..width).map(|i| format!("Field{}", i)));
                let mut table = ResultTable::new(names).unwrap();
                for (i, values) in rows.into_iter().enumerate() {
                    table.push(format!("prog{}", i), values).unwrap();
                }
                table
            },
        )
    })
}

proptest! {
    #[test]
    fn saved_tables_load_back_unchanged(table in table()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.csv");
        save(&table, &path).unwrap();
        let loaded = load(&path).unwrap();
        prop_assert_eq!(loaded, table);
    }
}

#[test]
fn test_summarizer_row_loads_as_stats() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ln.klee-out.stats.csv");
    let row = stats::run("dump/ln.klee-out", 12.5, 48_000, 310);
    std::fs::write(&path, row.to_csv()).unwrap();

    let table = load(&path).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.header().width(), StatField::ALL.len() + 1);

    let stats = symbench_core::EngineStats::new(table.into_records().remove(0));
    assert_eq!(stats.key(), "dump/ln.klee-out");
    assert_eq!(stats.instructions().unwrap(), 48_000);
    assert_eq!(stats.queries().unwrap(), 310);
    assert_eq!(stats.time().unwrap(), 12.5);
}

#[test]
fn test_missing_column_is_reported_by_name() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("od.stats.csv");
    let row = stats::StatsRow::new("dump/od.klee-out").without(StatField::Queries);
    std::fs::write(&path, row.to_csv()).unwrap();

    let stats = symbench_core::EngineStats::new(load(&path).unwrap().into_records().remove(0));
    let err = stats.queries().unwrap_err();
    assert!(err.to_string().contains("Queries"));
}

#[test]
fn test_writer_output_matches_save() {
    let dir = TempDir::new().unwrap();
    let expected = tables::determinism_table(5000);

    let streamed = dir.path().join("streamed.csv");
    let mut writer = ResultWriter::create(&streamed, expected.header().names().to_vec()).unwrap();
    for record in expected.records() {
        writer.write_record(record).unwrap();
    }
    drop(writer);

    let saved = dir.path().join("saved.csv");
    save(&expected, &saved).unwrap();

    assert_eq!(
        std::fs::read_to_string(&streamed).unwrap(),
        std::fs::read_to_string(&saved).unwrap()
    );
    assert_eq!(load(&streamed).unwrap(), expected);
}

#[test]
fn test_resumed_writer_keeps_earlier_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.csv");
    let names = vec!["Program".to_string(), "Time".to_string()];

    let mut writer = ResultWriter::create(&path, names.clone()).unwrap();
    writer.write_row("ln", vec![Value::Float(1.5)]).unwrap();
    drop(writer);

    let mut writer = ResultWriter::resume(&path, names).unwrap();
    writer.write_row("od", vec![Value::Float(2.5)]).unwrap();
    drop(writer);

    let table = load(&path).unwrap();
    assert_eq!(table.keys().collect::<Vec<_>>(), vec!["ln", "od"]);
}

#[test]
fn test_resume_with_other_header_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.csv");
    ResultWriter::create(&path, vec!["Program".into(), "Time".into()]).unwrap();

    let err = ResultWriter::resume(&path, vec!["Program".into(), "Instrs".into()]).unwrap_err();
    assert!(matches!(err, StoreError::HeaderMismatch { .. }));
}
