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


//! Switching the engine to another revision between batches.

use crate::error::{LaunchError, Result};
use crate::invocation::Invocation;
use crate::runner::CommandRunner;
use std::path::PathBuf;
use tracing::info;

/// Puts the engine at a given revision before a batch runs.
///
/// What a revision means is up to the implementation; the harness only
/// needs the engine binary to reflect it afterwards.
pub trait Provisioner {
    /// Make `revision` the engine that subsequent runs use.
    fn provision(&self, runner: &dyn CommandRunner, revision: &str) -> Result<()>;
}

impl<P: Provisioner + ?Sized> Provisioner for &P {
    fn provision(&self, runner: &dyn CommandRunner, revision: &str) -> Result<()> {
        (**self).provision(runner, revision)
    }
}

/// Does nothing; runs use whatever engine is installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProvisioner;

impl Provisioner for NoProvisioner {
    fn provision(&self, _runner: &dyn CommandRunner, _revision: &str) -> Result<()> {
        Ok(())
    }
}

/// Checks out and rebuilds a git branch in the engine's build directory.
#[derive(Debug, Clone)]
pub struct GitProvisioner {
    build_dir: PathBuf,
}

impl GitProvisioner {
    /// Provision inside `build_dir`.
    pub fn new(build_dir: impl Into<PathBuf>) -> Self {
        Self {
            build_dir: build_dir.into(),
        }
    }

    /// Commands run for `revision`, in order.
    pub fn steps(&self, revision: &str) -> Vec<Invocation> {
        [
            Invocation::new("git").args(["fetch", "--all"]),
            Invocation::new("git").args(["checkout", revision]),
            Invocation::new("git").arg("pull"),
            Invocation::new("make"),
        ]
        .into_iter()
        .map(|inv| inv.current_dir(&self.build_dir))
        .collect()
    }
}

impl Provisioner for GitProvisioner {
    fn provision(&self, runner: &dyn CommandRunner, revision: &str) -> Result<()> {
        info!(revision, dir = %self.build_dir.display(), "provisioning engine");
        for step in self.steps(revision) {
            let name = format!("{} {}", step.program_name(), step.args.join(" "));
            let output = runner.run(&step).map_err(|e| LaunchError::Provision {
                revision: revision.to_string(),
                step: name.trim().to_string(),
                message: e.to_string(),
            })?;
            if !output.success() {
                return Err(LaunchError::Provision {
                    revision: revision.to_string(),
                    step: name.trim().to_string(),
                    message: format!("exit code {}: {}", output.exit_code, output.stderr.trim()),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_steps() {
        let p = GitProvisioner::new("klee/build");
        let steps: Vec<String> = p.steps("pooling").iter().map(|s| s.to_string()).collect();
        assert_eq!(
            steps,
            vec!["git fetch --all", "git checkout pooling", "git pull", "make"]
        );
        assert!(p
            .steps("master")
            .iter()
            .all(|s| s.cwd.as_deref() == Some(std::path::Path::new("klee/build"))));
    }
}
