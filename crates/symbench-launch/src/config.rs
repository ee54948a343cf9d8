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


//! Run configuration: what one engine invocation should do.

use crate::error::{LaunchError, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Default memory ceiling in MB.
pub const DEFAULT_MEMORY_MB: u64 = 2000;

/// Default policy for calls to external functions.
pub const DEFAULT_EXTERNAL_CALLS: &str = "concrete";

macro_rules! flag_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => ($label:literal, [$($flag:literal),*])),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Name used in run directory names and on the command line.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Engine flags selecting this variant.
            pub fn flags(self) -> &'static [&'static str] {
                match self {
                    $($name::$variant => &[$($flag),*]),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = LaunchError;

            fn from_str(s: &str) -> Result<Self> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label().eq_ignore_ascii_case(s))
                    .ok_or_else(|| {
                        let known: Vec<_> = $name::ALL.iter().map(|v| v.label()).collect();
                        LaunchError::invalid_config(format!(
                            "unknown {} '{}', expected one of: {}",
                            stringify!($name),
                            s,
                            known.join(", ")
                        ))
                    })
            }
        }
    };
}

flag_enum! {
    /// Constraint-solving reuse strategy.
    IncrementalityMode {
        /// No reuse between queries.
        NonIncremental => ("NonIncremental", []),
        /// Incremental solving.
        Incremental => ("Incremental", ["--use-incremental"]),
        /// Per-state solver reuse baseline.
        LocalBaseline => ("LocalBaseline", ["--incremental-baseline"]),
        /// Global solver reuse baseline.
        GlobalBaseline => ("GlobalBaseline", ["--global-incremental-baseline"]),
    }
}

flag_enum! {
    /// State-exploration order.
    SearchStrategy {
        /// Random path interleaved with coverage-new.
        DefaultHeuristic => ("DefaultHeuristic", ["--search=random-path", "--search=nurs:covnew"]),
        /// Replay of recorded inputs.
        InputReplay => ("InputReplay", ["--search=inputting"]),
        /// Depth first.
        Dfs => ("DFS", ["--search=dfs"]),
        /// Breadth first.
        Bfs => ("BFS", ["--search=bfs"]),
    }
}

flag_enum! {
    /// Core solver backend.
    Solver {
        /// Z3.
        Z3 => ("Z3", ["--solver-backend=z3"]),
        /// STP.
        Stp => ("STP", ["--solver-backend=stp"]),
    }
}

/// Solver-chain caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caching {
    /// Counterexample cache.
    pub cex: bool,
    /// Independent-constraint solver.
    pub independent: bool,
    /// Branch cache.
    pub branch: bool,
}

impl Caching {
    /// All caches on.
    pub const ON: Caching = Caching {
        cex: true,
        independent: true,
        branch: true,
    };

    /// All caches off.
    pub const OFF: Caching = Caching {
        cex: false,
        independent: false,
        branch: false,
    };
}

impl Default for Caching {
    fn default() -> Self {
        Caching::ON
    }
}

/// One engine invocation, fully specified.
///
/// Built with [`RunConfiguration::builder`]; immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfiguration {
    program: String,
    solver: Solver,
    mode: IncrementalityMode,
    search: SearchStrategy,
    caching: Caching,
    memory_mb: u64,
    max_time_secs: u64,
    max_instructions: u64,
    simplify: bool,
    solver_timeout_secs: Option<u64>,
    batch_instructions: Option<u64>,
    external_calls: String,
    dump_states_on_halt: bool,
    debug_dump_queries: bool,
    query_log: Option<PathBuf>,
    remove_output: bool,
    output_dir: Option<PathBuf>,
    extra_flags: Vec<String>,
}

impl RunConfiguration {
    /// Start building a configuration for `program`.
    pub fn builder(program: impl Into<String>) -> RunConfigurationBuilder {
        RunConfigurationBuilder::new(program)
    }

    /// Program name; its bitcode is `<program>.bc`.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Solver backend.
    pub fn solver(&self) -> Solver {
        self.solver
    }

    /// Incrementality mode.
    pub fn mode(&self) -> IncrementalityMode {
        self.mode
    }

    /// Search strategy.
    pub fn search(&self) -> SearchStrategy {
        self.search
    }

    /// Cache toggles.
    pub fn caching(&self) -> Caching {
        self.caching
    }

    /// Memory ceiling in MB.
    pub fn memory_mb(&self) -> u64 {
        self.memory_mb
    }

    /// Wall-clock ceiling in seconds; `0` means none.
    pub fn max_time_secs(&self) -> u64 {
        self.max_time_secs
    }

    /// Instruction ceiling; `0` means none.
    pub fn max_instructions(&self) -> u64 {
        self.max_instructions
    }

    /// Whether the engine's watchdog enforces the wall-clock ceiling.
    ///
    /// Off exactly when there is no wall-clock ceiling.
    pub fn watchdog(&self) -> bool {
        self.max_time_secs != 0
    }

    /// Constraint simplification (equality rewriting).
    pub fn simplify(&self) -> bool {
        self.simplify
    }

    /// Per-query solver timeout.
    pub fn solver_timeout_secs(&self) -> Option<u64> {
        self.solver_timeout_secs
    }

    /// Batching-search instruction quantum.
    pub fn batch_instructions(&self) -> Option<u64> {
        self.batch_instructions
    }

    /// External-calls policy.
    pub fn external_calls(&self) -> &str {
        &self.external_calls
    }

    /// Dump states on halt.
    pub fn dump_states_on_halt(&self) -> bool {
        self.dump_states_on_halt
    }

    /// Ask the engine to dump every Z3 query next to the output directory.
    pub fn debug_dump_queries(&self) -> bool {
        self.debug_dump_queries
    }

    /// Destination for the run's SMT2 query log, if logging is on.
    pub fn query_log(&self) -> Option<&PathBuf> {
        self.query_log.as_ref()
    }

    /// Delete the output directory once statistics are extracted.
    pub fn remove_output(&self) -> bool {
        self.remove_output
    }

    /// Explicit output directory, overriding the derived name.
    pub fn output_dir(&self) -> Option<&PathBuf> {
        self.output_dir.as_ref()
    }

    /// Passthrough engine flags.
    pub fn extra_flags(&self) -> &[String] {
        &self.extra_flags
    }

    /// Output directory name derived from the configuration:
    /// `<program><Solver><Mode><extra flags>.klee-out`.
    pub fn default_dir_name(&self) -> String {
        let extra: String = self
            .extra_flags
            .iter()
            .flat_map(|f| f.chars())
            .map(|c| if c == '/' || c.is_whitespace() { '_' } else { c })
            .collect();
        format!(
            "{}{}{}{}.klee-out",
            self.program,
            self.solver.label(),
            self.mode.label(),
            extra
        )
    }
}

/// Builder for [`RunConfiguration`].
///
/// # Examples
///
/// ```
/// use symbench_launch::{IncrementalityMode, RunConfiguration, SearchStrategy};
///
/// let config = RunConfiguration::builder("base64")
///     .mode(IncrementalityMode::Incremental)
///     .search(SearchStrategy::Dfs)
///     .max_time_secs(0)
///     .max_instructions(2_874_421)
///     .build()
///     .unwrap();
/// assert!(!config.watchdog());
/// assert_eq!(config.default_dir_name(), "base64Z3Incremental.klee-out");
/// ```
#[derive(Debug, Clone)]
pub struct RunConfigurationBuilder {
    config: RunConfiguration,
    time_set: bool,
    instructions_set: bool,
}

impl RunConfigurationBuilder {
    fn new(program: impl Into<String>) -> Self {
        Self {
            config: RunConfiguration {
                program: program.into(),
                solver: Solver::Z3,
                mode: IncrementalityMode::NonIncremental,
                search: SearchStrategy::DefaultHeuristic,
                caching: Caching::ON,
                memory_mb: DEFAULT_MEMORY_MB,
                max_time_secs: 0,
                max_instructions: 0,
                simplify: true,
                solver_timeout_secs: None,
                batch_instructions: None,
                external_calls: DEFAULT_EXTERNAL_CALLS.to_string(),
                dump_states_on_halt: false,
                debug_dump_queries: false,
                query_log: None,
                remove_output: true,
                output_dir: None,
                extra_flags: Vec::new(),
            },
            time_set: false,
            instructions_set: false,
        }
    }

    /// All caches on.
    pub fn optimized(mut self) -> Self {
        self.config.caching = Caching::ON;
        self
    }

    /// All caches off.
    pub fn unoptimized(mut self) -> Self {
        self.config.caching = Caching::OFF;
        self
    }

    pub fn solver(mut self, solver: Solver) -> Self {
        self.config.solver = solver;
        self
    }

    pub fn mode(mut self, mode: IncrementalityMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn search(mut self, search: SearchStrategy) -> Self {
        self.config.search = search;
        self
    }

    pub fn caching(mut self, caching: Caching) -> Self {
        self.config.caching = caching;
        self
    }

    pub fn memory_mb(mut self, mb: u64) -> Self {
        self.config.memory_mb = mb;
        self
    }

    /// Wall-clock ceiling. `0` disables the watchdog.
    pub fn max_time_secs(mut self, secs: u64) -> Self {
        self.config.max_time_secs = secs;
        self.time_set = true;
        self
    }

    /// Instruction ceiling.
    pub fn max_instructions(mut self, instructions: u64) -> Self {
        self.config.max_instructions = instructions;
        self.instructions_set = true;
        self
    }

    pub fn simplify(mut self, simplify: bool) -> Self {
        self.config.simplify = simplify;
        self
    }

    pub fn solver_timeout_secs(mut self, secs: u64) -> Self {
        self.config.solver_timeout_secs = Some(secs);
        self
    }

    pub fn batch_instructions(mut self, instructions: u64) -> Self {
        self.config.batch_instructions = Some(instructions);
        self
    }

    pub fn external_calls(mut self, policy: impl Into<String>) -> Self {
        self.config.external_calls = policy.into();
        self
    }

    pub fn dump_states_on_halt(mut self, dump: bool) -> Self {
        self.config.dump_states_on_halt = dump;
        self
    }

    pub fn debug_dump_queries(mut self, dump: bool) -> Self {
        self.config.debug_dump_queries = dump;
        self
    }

    /// Log every query and move the log to `dest` after the run.
    pub fn query_log(mut self, dest: impl Into<PathBuf>) -> Self {
        self.config.query_log = Some(dest.into());
        self
    }

    pub fn remove_output(mut self, remove: bool) -> Self {
        self.config.remove_output = remove;
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = Some(dir.into());
        self
    }

    /// Append one passthrough flag.
    pub fn extra_flag(mut self, flag: impl Into<String>) -> Self {
        self.config.extra_flags.push(flag.into());
        self
    }

    pub fn extra_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.extra_flags.extend(flags.into_iter().map(Into::into));
        self
    }

    /// Validate and build.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::InvalidConfig`] if the program name is empty,
    /// the memory ceiling is zero, or neither a non-zero wall-clock ceiling
    /// nor a non-zero instruction ceiling was given.
    pub fn build(self) -> Result<RunConfiguration> {
        let config = self.config;
        if config.program.trim().is_empty() {
            return Err(LaunchError::invalid_config("program name is empty"));
        }
        if config.memory_mb == 0 {
            return Err(LaunchError::invalid_config(format!(
                "memory ceiling for '{}' must be positive",
                config.program
            )));
        }
        if !self.time_set && !self.instructions_set {
            return Err(LaunchError::invalid_config(format!(
                "run of '{}' needs a wall-clock or instruction budget",
                config.program
            )));
        }
        if config.max_time_secs == 0 && config.max_instructions == 0 {
            return Err(LaunchError::invalid_config(format!(
                "run of '{}' has no non-zero stop condition",
                config.program
            )));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = RunConfiguration::builder("ln")
            .max_time_secs(60)
            .build()
            .unwrap();
        assert_eq!(c.solver(), Solver::Z3);
        assert_eq!(c.mode(), IncrementalityMode::NonIncremental);
        assert_eq!(c.search(), SearchStrategy::DefaultHeuristic);
        assert_eq!(c.memory_mb(), 2000);
        assert_eq!(c.caching(), Caching::ON);
        assert!(c.simplify());
        assert!(c.remove_output());
        assert_eq!(c.external_calls(), "concrete");
        assert!(c.watchdog());
        assert_eq!(c.max_instructions(), 0);
    }

    #[test]
    fn test_zero_wall_clock_disables_watchdog() {
        let c = RunConfiguration::builder("ln")
            .max_time_secs(0)
            .max_instructions(1000)
            .build()
            .unwrap();
        assert!(!c.watchdog());
        assert_eq!(c.max_instructions(), 1000);
    }

    #[test]
    fn test_needs_a_budget() {
        let err = RunConfiguration::builder("ln").build().unwrap_err();
        assert!(err.to_string().contains("needs a wall-clock or instruction budget"));
    }

    #[test]
    fn test_zero_budgets_rejected() {
        let err = RunConfiguration::builder("ln")
            .max_time_secs(0)
            .max_instructions(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, LaunchError::InvalidConfig { .. }));
    }

    #[test]
    fn test_presets() {
        let c = RunConfiguration::builder("ln")
            .unoptimized()
            .max_time_secs(1)
            .build()
            .unwrap();
        assert_eq!(c.caching(), Caching::OFF);
        let c = RunConfiguration::builder("ln")
            .unoptimized()
            .optimized()
            .max_time_secs(1)
            .build()
            .unwrap();
        assert_eq!(c.caching(), Caching::ON);
    }

    #[test]
    fn test_dir_name_includes_extra_flags() {
        let c = RunConfiguration::builder("base64")
            .solver(Solver::Stp)
            .mode(IncrementalityMode::GlobalBaseline)
            .extra_flag("--state-output=states")
            .max_time_secs(10)
            .build()
            .unwrap();
        assert_eq!(
            c.default_dir_name(),
            "base64STPGlobalBaseline--state-output=states.klee-out"
        );
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("dfs".parse::<SearchStrategy>().unwrap(), SearchStrategy::Dfs);
        assert_eq!(
            "GlobalBaseline".parse::<IncrementalityMode>().unwrap(),
            IncrementalityMode::GlobalBaseline
        );
        assert_eq!("stp".parse::<Solver>().unwrap(), Solver::Stp);
        let err = "sideways".parse::<SearchStrategy>().unwrap_err();
        assert!(err.to_string().contains("expected one of: DefaultHeuristic"));
    }

    #[test]
    fn test_flags() {
        assert!(IncrementalityMode::NonIncremental.flags().is_empty());
        assert_eq!(
            SearchStrategy::DefaultHeuristic.flags(),
            &["--search=random-path", "--search=nurs:covnew"]
        );
    }
}
