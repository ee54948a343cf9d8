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


//! Utility commands for the SymBench CLI.

use super::Cli;
use crate::commands::{self, CompletionShell};
use crate::error::CliError;
use clap::{CommandFactory, Subcommand};
use std::io;

/// Utility commands.
#[derive(Subcommand, Debug)]
pub enum UtilityCommands {
    /// Print a shell completion script for symbench
    ///
    /// Shells: bash, zsh, fish, powershell (or pwsh), elvish
    Completion {
        /// Target shell
        #[arg(value_name = "SHELL")]
        shell: CompletionShell,

        /// Explain where to save the script instead of printing it
        #[arg(short, long)]
        install: bool,
    },
}

impl UtilityCommands {
    /// Execute the utility command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the script cannot be written to stdout.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            UtilityCommands::Completion { shell, install: true } => {
                print!("{}", shell.installation_instructions());
                Ok(())
            }
            UtilityCommands::Completion { shell, install: false } => {
                commands::write_completion(shell, &mut Cli::command(), &mut io::stdout())
            }
        }
    }
}
