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


//! Integration tests for shell completion generation

use assert_cmd::Command;
use predicates::prelude::*;

fn symbench_cmd() -> Command {
    Command::cargo_bin("symbench").expect("Failed to find symbench binary")
}

#[test]
fn test_completion_bash() {
    symbench_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_symbench()"))
        .stdout(predicate::str::contains("COMPREPLY"))
        .stdout(predicate::str::contains("diff-log"));
}

#[test]
fn test_completion_zsh() {
    symbench_cmd()
        .args(["completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef symbench"));
}

#[test]
fn test_completion_fish() {
    symbench_cmd()
        .args(["completion", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete -c symbench"));
}

#[test]
fn test_completion_powershell_alias() {
    symbench_cmd()
        .args(["completion", "pwsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Register-ArgumentCompleter"));
}

#[test]
fn test_completion_elvish() {
    symbench_cmd()
        .args(["completion", "elvish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("edit:completion:arg-completer"));
}

#[test]
fn test_completion_case_insensitive() {
    let upper = symbench_cmd().args(["completion", "BASH"]).output().unwrap();
    let lower = symbench_cmd().args(["completion", "bash"]).output().unwrap();
    assert!(upper.status.success());
    assert_eq!(upper.stdout, lower.stdout);
}

#[test]
fn test_completion_unsupported_shell() {
    symbench_cmd()
        .args(["completion", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported shell: 'tcsh'"));
}

#[test]
fn test_completion_install_instructions() {
    symbench_cmd()
        .args(["completion", "zsh", "--install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_symbench"));
}
