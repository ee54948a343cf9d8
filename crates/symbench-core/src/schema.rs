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

//! The engine summarizer's statistics schema.
//!
//! The summarizer prints one row with a fixed set of named columns. The list
//! below is a versioned contract: a column the harness asks for by name must
//! be one of these, and must be present in the row. Nothing is defaulted.

use crate::error::{Result, TableError};
use std::fmt;

/// Version of the statistics column list. Bump when [`StatField`] changes.
pub const SCHEMA_VERSION: u32 = 1;

/// Numeric kind of a statistics column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Whole-number counter.
    Int,
    /// Measured quantity (seconds, MiB, percentage).
    Float,
}

impl FieldKind {
    /// Human-readable name used in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            FieldKind::Int => "integer",
            FieldKind::Float => "number",
        }
    }
}

macro_rules! stat_fields {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal, $kind:ident; )+) => {
        /// A statistics column emitted by the engine's summarizer.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum StatField {
            $( $(#[$doc])* $variant, )+
        }

        impl StatField {
            /// Every recognized column, in the summarizer's order.
            pub const ALL: &'static [StatField] = &[ $( StatField::$variant, )+ ];

            /// Exact column name as printed by the summarizer.
            pub const fn name(self) -> &'static str {
                match self {
                    $( StatField::$variant => $name, )+
                }
            }

            /// Numeric kind of the column.
            pub const fn kind(self) -> FieldKind {
                match self {
                    $( StatField::$variant => FieldKind::$kind, )+
                }
            }
        }
    };
}

stat_fields! {
    /// Wall-clock time of the run.
    Time => "Time(s)", Float;
    /// Instructions executed.
    Instructions => "Instrs", Int;
    ICovPercent => "ICov(%)", Float;
    BCovPercent => "BCov(%)", Float;
    ICount => "ICount", Int;
    SolverPercent => "TSolver(%)", Float;
    ICovered => "ICovered", Int;
    IUncovered => "IUncovered", Int;
    Branches => "Branches", Int;
    FullBranches => "FullBranches", Int;
    PartialBranches => "PartialBranches", Int;
    ExternalCalls => "ExternalCalls", Int;
    UserTime => "TUser(s)", Float;
    ResolveTime => "TResolve(s)", Float;
    ResolvePercent => "TResolve(%)", Float;
    /// Time in the counterexample cache and below.
    CexTime => "TCex(s)", Float;
    CexPercent => "TCex(%)", Float;
    /// Time in the core solver.
    QueryTime => "TQuery(s)", Float;
    /// Time in the whole solver chain.
    SolverTime => "TSolver(s)", Float;
    States => "States", Int;
    ActiveStates => "ActiveStates", Int;
    MaxActiveStates => "MaxActiveStates", Int;
    AvgActiveStates => "AvgActiveStates", Float;
    InhibitedForks => "InhibitedForks", Int;
    /// Queries issued to the solver chain.
    Queries => "Queries", Int;
    /// Queries that reached the core solver.
    SolverQueries => "SolverQueries", Int;
    SolverQueryConstructs => "SolverQueryConstructs", Int;
    QCacheMisses => "QCacheMisses", Int;
    QCacheHits => "QCacheHits", Int;
    QCexCacheMisses => "QCexCacheMisses", Int;
    QCexCacheHits => "QCexCacheHits", Int;
    Allocations => "Allocations", Int;
    Memory => "Mem(MiB)", Float;
    MaxMemory => "MaxMem(MiB)", Float;
    AvgMemory => "AvgMem(MiB)", Float;
    BrConditional => "BrConditional", Int;
    BrIndirect => "BrIndirect", Int;
    BrSwitch => "BrSwitch", Int;
    BrCall => "BrCall", Int;
    BrMemOp => "BrMemOp", Int;
    BrResolvePointer => "BrResolvePointer", Int;
    BrAlloc => "BrAlloc", Int;
    BrRealloc => "BrRealloc", Int;
    BrFree => "BrFree", Int;
    BrGetVal => "BrGetVal", Int;
    TermExit => "TermExit", Int;
    TermEarly => "TermEarly", Int;
    TermSolverErr => "TermSolverErr", Int;
    TermProgrErr => "TermProgrErr", Int;
    TermUserErr => "TermUserErr", Int;
    TermExecErr => "TermExecErr", Int;
    TermEarlyAlgo => "TermEarlyAlgo", Int;
    TermEarlyUser => "TermEarlyUser", Int;
    ArrayHashTime => "TArrayHash(s)", Float;
    ForkTime => "TFork(s)", Float;
    ForkPercent => "TFork(%)", Float;
    UserPercent => "TUser(%)", Float;
}

impl StatField {
    /// Resolve a column name.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnknownField`] for names outside the schema.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbench_core::StatField;
    ///
    /// assert_eq!(StatField::from_name("TSolver(s)").unwrap(), StatField::SolverTime);
    /// assert!(StatField::from_name("Solver Time").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name() == name)
            .ok_or_else(|| TableError::unknown_field(name))
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique() {
        let names: HashSet<_> = StatField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names.len(), StatField::ALL.len());
    }

    #[test]
    fn test_schema_size() {
        assert_eq!(StatField::ALL.len(), 57);
    }

    #[test]
    fn test_round_trip_names() {
        for field in StatField::ALL {
            assert_eq!(StatField::from_name(field.name()).unwrap(), *field);
        }
    }

    #[test]
    fn test_kinds() {
        assert_eq!(StatField::Instructions.kind(), FieldKind::Int);
        assert_eq!(StatField::SolverTime.kind(), FieldKind::Float);
    }
}
