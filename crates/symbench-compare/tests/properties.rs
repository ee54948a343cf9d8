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

//! Property tests for the comparator and the speedup aggregator.

use proptest::prelude::*;
use symbench_compare::{compare, default_fields, speedup, ComparisonReport};
use symbench_core::{ResultTable, Value};

fn series() -> impl Strategy<Value = ResultTable> {
    proptest::collection::vec((0i64..1_000_000, 0i64..10_000), 1..20).prop_map(|rows| {
        let mut t = ResultTable::new(vec![
            "Program".to_string(),
            "Instrs".to_string(),
            "Queries".to_string(),
        ])
        .unwrap();
        for (i, (instrs, queries)) in rows.into_iter().enumerate() {
            t.push(format!("prog{}", i), vec![Value::Int(instrs), Value::Int(queries)])
                .unwrap();
        }
        t
    })
}

proptest! {
    #[test]
    fn compare_is_reflexive(t in series()) {
        let report = compare(t.records(), t.records(), &default_fields()).unwrap();
        prop_assert_eq!(report, ComparisonReport::Equivalent);
    }

    #[test]
    fn single_field_change_is_reported_exactly(
        t in series(),
        pick in any::<prop::sample::Index>(),
        queries in any::<bool>(),
        delta in 1i64..1000,
    ) {
        let k = pick.index(t.len());
        let field = if queries { "Queries" } else { "Instrs" };

        let mut changed = ResultTable::with_header(t.header_arc());
        for (i, r) in t.records().iter().enumerate() {
            let mut values = r.values().to_vec();
            if i == k {
                let col = if queries { 1 } else { 0 };
                let old = values[col].as_i64().unwrap();
                values[col] = Value::Int(old + delta);
            }
            changed.push(r.key(), values).unwrap();
        }

        let report = compare(t.records(), changed.records(), &default_fields()).unwrap();
        let d = report.divergence().unwrap();
        prop_assert_eq!(d.position, k);
        prop_assert_eq!(d.key.clone(), format!("prog{}", k));
        prop_assert_eq!(d.diffs.len(), 1);
        prop_assert_eq!(d.first().field.as_str(), field);
        prop_assert_eq!(&d.first().a, t.records()[k].field(field).unwrap());
        prop_assert_eq!(&d.first().b, changed.records()[k].field(field).unwrap());
    }

    #[test]
    fn speedup_over_constant_scales(xs in proptest::collection::vec(1u32..10_000, 1..30), c in 1u32..100) {
        let a: Vec<f64> = xs.iter().map(|x| f64::from(*x) * f64::from(c)).collect();
        let b: Vec<f64> = xs.iter().map(|x| f64::from(*x)).collect();
        let s = speedup(&a, &b).unwrap();
        for r in s.values() {
            prop_assert!((r - f64::from(c)).abs() < 1e-9);
        }
        prop_assert!((s.median() - f64::from(c)).abs() < 1e-9);
    }

    #[test]
    fn median_is_an_element_between_min_and_max(
        pairs in proptest::collection::vec((0.0f64..1e6, 0.5f64..1e6), 1..30),
    ) {
        let (a, b): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        let s = speedup(&a, &b).unwrap();
        let values = s.values();
        prop_assert!(values.contains(&s.median()));
        let below = values.iter().filter(|v| **v < s.median()).count();
        prop_assert!(below <= (values.len() - 1) / 2);
    }
}
