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


//! Command lines for the engine and its summarizer.

use crate::config::RunConfiguration;
use crate::environment::EngineEnvironment;
use crate::sym_args::sym_args_for;
use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the query log the engine writes inside its output directory.
pub const QUERY_LOG_NAME: &str = "all-queries.smt2";

/// An external command: program, arguments and optional working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to execute.
    pub program: PathBuf,
    /// Arguments, unquoted.
    pub args: Vec<String>,
    /// Working directory; inherited when `None`.
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    /// A command with no arguments yet.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run in `dir`.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Program name for messages.
    pub fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

fn quote(arg: &str) -> String {
    if !arg.is_empty() && !arg.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program.display().to_string()))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

/// Engine command line for one run writing into `output_dir`.
pub fn engine_invocation(
    env: &EngineEnvironment,
    config: &RunConfiguration,
    output_dir: &Path,
) -> Invocation {
    let caching = config.caching();
    let mut inv = Invocation::new(env.engine_path())
        .arg(format!("--env-file={}", env.env_file.display()))
        .arg(format!("--run-in-dir={}", env.sandbox_dir.display()))
        .arg(format!("--output-dir={}", output_dir.display()))
        .args(config.solver().flags().iter().copied());
    if let Some(secs) = config.solver_timeout_secs() {
        inv = inv.arg(format!("--max-solver-time={}", secs));
    }
    inv = inv.arg("--simplify-sym-indices");
    if config.query_log().is_some() {
        inv = inv.arg("--use-query-log=all:smt2");
    }
    inv = inv
        .args(["--write-cvcs", "--write-cov", "--output-module"])
        .arg(format!("--max-memory={}", config.memory_mb()))
        .args(["--disable-inlining", "--optimize", "--use-forked-solver"])
        .arg(format!("--use-cex-cache={}", caching.cex))
        .arg(format!("--use-independent-solver={}", caching.independent))
        .arg(format!("--use-branch-cache={}", caching.branch))
        .arg(format!("--rewrite-equalities={}", config.simplify()))
        .args(["--libc=uclibc", "--posix-runtime"])
        .arg(format!("--external-calls={}", config.external_calls()))
        .args([
            "--only-output-states-covering-new",
            "--max-sym-array-size=4096",
        ])
        .arg(format!("--max-time={}s", config.max_time_secs()))
        .arg(format!("--watchdog={}", config.watchdog()))
        .arg(format!("--max-instructions={}", config.max_instructions()))
        .args([
            "--max-memory-inhibit=false",
            "--max-static-fork-pct=1",
            "--max-static-solve-pct=1",
            "--max-static-cpfork-pct=1",
            "--switch-type=internal",
        ])
        .arg(format!("--dump-states-on-halt={}", config.dump_states_on_halt()))
        .args(config.search().flags().iter().copied());
    if let Some(quantum) = config.batch_instructions() {
        inv = inv
            .arg("--use-batching-search")
            .arg(format!("--batch-instructions={}", quantum));
    }
    inv = inv.args(config.mode().flags().iter().copied());
    if config.debug_dump_queries() {
        inv = inv.arg(format!("--debug-z3-dump-queries={}.dump", output_dir.display()));
    }
    inv.args(config.extra_flags().iter().cloned())
        .arg(env.bitcode_path(config.program()).display().to_string())
        .args(sym_args_for(config.program()).split_whitespace())
}

/// Summarizer command line printing all statistics of `output_dir` as CSV.
pub fn summarizer_invocation(env: &EngineEnvironment, output_dir: &Path) -> Invocation {
    Invocation::new(env.summarizer_path())
        .args(["--table-format=csv", "--print-all"])
        .arg(output_dir.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IncrementalityMode, SearchStrategy};

    fn has(inv: &Invocation, arg: &str) -> bool {
        inv.args.iter().any(|a| a == arg)
    }

    #[test]
    fn test_zero_wall_clock_invocation() {
        let env = EngineEnvironment::default();
        let config = RunConfiguration::builder("ln")
            .max_time_secs(0)
            .max_instructions(5000)
            .build()
            .unwrap();
        let inv = engine_invocation(&env, &config, Path::new("dump/ln.klee-out"));
        assert!(has(&inv, "--watchdog=false"));
        assert!(has(&inv, "--max-time=0s"));
        assert!(has(&inv, "--max-instructions=5000"));
        assert!(!has(&inv, "--watchdog=true"));
    }

    #[test]
    fn test_optional_flags() {
        let env = EngineEnvironment::default();
        let config = RunConfiguration::builder("od")
            .mode(IncrementalityMode::Incremental)
            .search(SearchStrategy::Dfs)
            .batch_instructions(10_000)
            .solver_timeout_secs(30)
            .query_log("od.log")
            .debug_dump_queries(true)
            .extra_flag("--state-output=states")
            .max_time_secs(60)
            .build()
            .unwrap();
        let inv = engine_invocation(&env, &config, Path::new("dump/od.klee-out"));
        for arg in [
            "--watchdog=true",
            "--search=dfs",
            "--use-incremental",
            "--use-batching-search",
            "--batch-instructions=10000",
            "--max-solver-time=30",
            "--use-query-log=all:smt2",
            "--debug-z3-dump-queries=dump/od.klee-out.dump",
            "--state-output=states",
        ] {
            assert!(has(&inv, arg), "missing {}", arg);
        }
        let bc = inv.args.iter().position(|a| a == "../src/od.bc").unwrap();
        assert_eq!(inv.args[bc + 1..].join(" "), sym_args_for("od"));
    }

    #[test]
    fn test_summarizer_invocation() {
        let env = EngineEnvironment::default();
        let inv = summarizer_invocation(&env, Path::new("dump/ln.klee-out"));
        assert_eq!(
            inv.to_string(),
            "klee/build/bin/klee-stats --table-format=csv --print-all dump/ln.klee-out"
        );
    }

    #[test]
    fn test_display_quotes_spaces() {
        let inv = Invocation::new("echo").arg("a b").arg("it's");
        assert_eq!(inv.to_string(), r"echo 'a b' 'it'\''s'");
    }
}
