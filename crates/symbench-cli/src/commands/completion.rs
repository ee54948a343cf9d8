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

//! Shell completion scripts for `symbench`.

use crate::error::CliError;
use clap::Command;
use clap_complete::{generate, Shell};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Shells a completion script can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

impl CompletionShell {
    /// Every supported shell.
    pub const ALL: [CompletionShell; 5] = [
        CompletionShell::Bash,
        CompletionShell::Zsh,
        CompletionShell::Fish,
        CompletionShell::PowerShell,
        CompletionShell::Elvish,
    ];

    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            CompletionShell::Bash => "bash",
            CompletionShell::Zsh => "zsh",
            CompletionShell::Fish => "fish",
            CompletionShell::PowerShell => "powershell",
            CompletionShell::Elvish => "elvish",
        }
    }

    fn generator(self) -> Shell {
        match self {
            CompletionShell::Bash => Shell::Bash,
            CompletionShell::Zsh => Shell::Zsh,
            CompletionShell::Fish => Shell::Fish,
            CompletionShell::PowerShell => Shell::PowerShell,
            CompletionShell::Elvish => Shell::Elvish,
        }
    }

    /// Where the generated script should live, and how to get it loaded.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbench_cli::commands::CompletionShell;
    ///
    /// let text = CompletionShell::Fish.installation_instructions();
    /// assert!(text.contains("~/.config/fish/completions/symbench.fish"));
    /// ```
    pub fn installation_instructions(self) -> String {
        let (location, steps) = match self {
            CompletionShell::Bash => (
                "the bash-completion user directory",
                "mkdir -p ~/.local/share/bash-completion/completions\n\
                 symbench completion bash > ~/.local/share/bash-completion/completions/symbench",
            ),
            CompletionShell::Zsh => (
                "a directory on $fpath, as _symbench",
                "mkdir -p ~/.zfunc\n\
                 symbench completion zsh > ~/.zfunc/_symbench\n\
                 # in ~/.zshrc, before compinit: fpath=(~/.zfunc $fpath)",
            ),
            CompletionShell::Fish => (
                "fish's per-user completions directory",
                "symbench completion fish > ~/.config/fish/completions/symbench.fish",
            ),
            CompletionShell::PowerShell => (
                "your PowerShell profile",
                "symbench completion powershell >> $PROFILE",
            ),
            CompletionShell::Elvish => (
                "an Elvish module loaded from rc.elv",
                "symbench completion elvish > ~/.config/elvish/lib/symbench.elv\n\
                 echo 'use symbench' >> ~/.config/elvish/rc.elv",
            ),
        };
        format!(
            "# symbench completions for {}\n# Save the script to {}:\n\n{}\n\n# Open a new shell to pick it up.\n",
            self, location, steps
        )
    }
}

impl fmt::Display for CompletionShell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompletionShell {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("pwsh") {
            return Ok(CompletionShell::PowerShell);
        }
        CompletionShell::ALL
            .iter()
            .copied()
            .find(|shell| shell.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let names: Vec<&str> = CompletionShell::ALL.iter().map(|s| s.name()).collect();
                CliError::invalid_input(format!(
                    "Unsupported shell: '{}'. Supported shells: {}",
                    s,
                    names.join(", ")
                ))
            })
    }
}

/// Write the completion script of `cmd` for `shell` into `out`.
///
/// # Errors
///
/// Returns [`CliError::Output`] if flushing `out` fails.
pub fn write_completion(
    shell: CompletionShell,
    cmd: &mut Command,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let name = cmd.get_name().to_string();
    generate(shell.generator(), cmd, name, out);
    out.flush().map_err(|e| CliError::Output(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shell_names() {
        assert_eq!("ZSH".parse::<CompletionShell>().unwrap(), CompletionShell::Zsh);
        assert_eq!(
            "pwsh".parse::<CompletionShell>().unwrap(),
            CompletionShell::PowerShell
        );
        for shell in CompletionShell::ALL {
            assert_eq!(shell.name().parse::<CompletionShell>().unwrap(), shell);
        }
    }

    #[test]
    fn test_unknown_shell() {
        let err = "tcsh".parse::<CompletionShell>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: Unsupported shell: 'tcsh'. Supported shells: bash, zsh, fish, powershell, elvish"
        );
    }

    #[test]
    fn test_instructions_name_the_script() {
        for shell in CompletionShell::ALL {
            let text = shell.installation_instructions();
            assert!(
                text.contains(&format!("symbench completion {}", shell)),
                "{}",
                shell
            );
        }
    }

    #[test]
    fn test_write_bash_script() {
        let mut cmd = Command::new("symbench").subcommand(Command::new("diff-log"));
        let mut out = Vec::new();
        write_completion(CompletionShell::Bash, &mut cmd, &mut out).unwrap();
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("_symbench()"));
        assert!(script.contains("diff-log"));
    }
}
