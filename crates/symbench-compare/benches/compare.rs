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

//! Comparator and speedup benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use symbench_compare::{compare, default_fields, divergence_range, parse_query_log, speedup, ParseMode};
use symbench_core::{ResultTable, Value};
use symbench_test::fixtures::query_logs::{alternating, render};

fn series(n: usize) -> ResultTable {
    let mut t = ResultTable::new(vec![
        "Program".to_string(),
        "Instrs".to_string(),
        "Queries".to_string(),
    ])
    .unwrap();
    for i in 0..n {
        t.push(
            format!("prog{}", i),
            vec![Value::Int(i as i64 * 1000), Value::Int(i as i64)],
        )
        .unwrap();
    }
    t
}

fn bench_compare(c: &mut Criterion) {
    let fields = default_fields();
    let mut group = c.benchmark_group("compare");
    for n in [10, 100, 1000] {
        let t = series(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &t, |b, t| {
            b.iter(|| compare(black_box(t.records()), black_box(t.records()), &fields))
        });
    }
    group.finish();
}

fn bench_speedup(c: &mut Criterion) {
    let a: Vec<f64> = (1..=1000).map(f64::from).collect();
    let b: Vec<f64> = (1..=1000).map(|x| f64::from(x) / 2.0).collect();
    c.bench_function("speedup_1000", |bench| {
        bench.iter(|| speedup(black_box(&a), black_box(&b)))
    });
}

fn bench_query_log(c: &mut Criterion) {
    let text = render(&alternating(5000));
    c.bench_function("parse_query_log_5000", |b| {
        b.iter(|| parse_query_log(black_box(&text), ParseMode::Full))
    });
    let queries = parse_query_log(&text, ParseMode::HeadersOnly).unwrap();
    c.bench_function("divergence_range_5000", |b| {
        b.iter(|| divergence_range(black_box(&queries), black_box(&queries)))
    });
}

criterion_group!(benches, bench_compare, bench_speedup, bench_query_log);
criterion_main!(benches);
