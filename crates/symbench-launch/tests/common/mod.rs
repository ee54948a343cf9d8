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

//! Recording command runner standing in for the engine and its summarizer.

#![allow(dead_code)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use symbench_launch::{CommandOutput, CommandRunner, EngineEnvironment, Invocation};
use tempfile::TempDir;

type Summarize = Box<dyn Fn(&Path) -> String + Send + Sync>;

/// Pretends to be the engine (creates the output directory and a query log)
/// and the summarizer (prints whatever `summarize` returns for a directory).
pub struct FakeRunner {
    summarize: Summarize,
    pub calls: Mutex<Vec<Invocation>>,
    pub fail_engine: bool,
}

impl FakeRunner {
    pub fn new(summarize: impl Fn(&Path) -> String + Send + Sync + 'static) -> Self {
        Self {
            summarize: Box::new(summarize),
            calls: Mutex::new(Vec::new()),
            fail_engine: false,
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn engine_calls(&self) -> Vec<Invocation> {
        self.calls()
            .into_iter()
            .filter(|c| c.program.ends_with("klee"))
            .collect()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(|c| c.to_string()).collect()
    }
}

pub fn arg_value<'a>(inv: &'a Invocation, flag: &str) -> Option<&'a str> {
    inv.args
        .iter()
        .find_map(|a| a.strip_prefix(flag).and_then(|rest| rest.strip_prefix('=')))
}

impl CommandRunner for FakeRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        self.calls.lock().unwrap().push(invocation.clone());
        let name = invocation
            .program
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        match name.as_str() {
            "klee" => {
                if self.fail_engine {
                    return Err(io::Error::new(io::ErrorKind::NotFound, "no engine"));
                }
                let dir = PathBuf::from(arg_value(invocation, "--output-dir").unwrap());
                fs::create_dir_all(&dir)?;
                fs::write(dir.join("run.stats"), "engine output")?;
                if invocation.args.iter().any(|a| a == "--use-query-log=all:smt2") {
                    fs::write(
                        dir.join("all-queries.smt2"),
                        "; Query 0 -- Type: Truth, Instructions: 10\n",
                    )?;
                }
                Ok(CommandOutput {
                    exit_code: 0,
                    stdout: String::new(),
                    stderr: "KLEE: done".to_string(),
                })
            }
            "klee-stats" => {
                let dir = PathBuf::from(invocation.args.last().unwrap());
                Ok(CommandOutput {
                    exit_code: 0,
                    stdout: (self.summarize)(&dir),
                    stderr: String::new(),
                })
            }
            _ => Ok(CommandOutput {
                exit_code: 0,
                stdout: String::new(),
                stderr: String::new(),
            }),
        }
    }
}

/// Engine environment rooted in a temporary directory.
pub fn environment(tmp: &TempDir) -> EngineEnvironment {
    EngineEnvironment {
        dump_dir: tmp.path().join("dump"),
        results_dir: tmp.path().join("results"),
        progress_dir: tmp.path().join("progress"),
        ..Default::default()
    }
}
