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


//! Symbolic argument sets per program.

/// Arguments used for programs without an entry in the table.
pub const DEFAULT_SYM_ARGS: &str =
    "--sym-args 0 1 10 --sym-args 0 2 2 --sym-files 1 8 --sym-stdin 8 --sym-stdout";

/// Symbolic input arguments passed after the bitcode for `program`.
pub fn sym_args_for(program: &str) -> &'static str {
    match program {
        "dd" => "--sym-args 0 3 10 --sym-files 1 8 --sym-stdin 8 --sym-stdout",
        "dircolors" => "--sym-args 0 3 10 --sym-files 2 12 --sym-stdin 12 --sym-stdout",
        "echo" => "--sym-args 0 4 300 --sym-files 2 30 --sym-stdin 30 --sym-stdout",
        "expr" => "--sym-args 0 1 10 --sym-args 0 3 2 --sym-stdout",
        "mknod" => {
            "--sym-args 0 1 10 --sym-args 0 3 2 --sym-files 1 8 --sym-stdin 8 --sym-stdout"
        }
        "od" => "--sym-args 0 3 10 --sym-files 2 12 --sym-stdin 12 --sym-stdout",
        "pathchk" => {
            "--sym-args 0 1 2 --sym-args 0 1 300 --sym-files 1 8 --sym-stdin 8 --sym-stdout"
        }
        "printf" => "--sym-args 0 3 10 --sym-files 2 12 --sym-stdin 12 --sym-stdout",
        _ => DEFAULT_SYM_ARGS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exception_and_default() {
        assert_eq!(
            sym_args_for("echo"),
            "--sym-args 0 4 300 --sym-files 2 30 --sym-stdin 30 --sym-stdout"
        );
        assert_eq!(sym_args_for("base64"), DEFAULT_SYM_ARGS);
    }
}
