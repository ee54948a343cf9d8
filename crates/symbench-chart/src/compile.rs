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


//! Writing documents next to their CSV source and compiling them.

use crate::error::{ChartError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// `results/foo.csv` becomes `results/foo.tex`.
pub fn tex_path_for(csv_path: &Path) -> PathBuf {
    csv_path.with_extension("tex")
}

/// Write a rendered document, creating parent directories as needed.
pub fn write_tex(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ChartError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| ChartError::io(path, e))?;
    tracing::info!(path = %path.display(), "generated LaTeX document");
    Ok(())
}

/// Runs `pdflatex` over generated documents.
#[derive(Debug, Clone)]
pub struct LatexCompiler {
    program: String,
    output_dir: PathBuf,
}

impl LatexCompiler {
    /// Compile into `output_dir` with the `pdflatex` found on `PATH`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: "pdflatex".to_string(),
            output_dir: output_dir.into(),
        }
    }

    /// Use a different LaTeX binary.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Output directory for PDFs.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Compile `tex` and return the PDF path.
    ///
    /// The `.aux` and `.log` files pdflatex leaves behind are removed.
    pub fn compile(&self, tex: &Path) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).map_err(|e| ChartError::io(&self.output_dir, e))?;

        let output = Command::new(&self.program)
            .arg("-interaction=nonstopmode")
            .arg(format!("--output-directory={}", self.output_dir.display()))
            .arg(tex)
            .output()
            .map_err(|e| ChartError::Compile {
                path: tex.to_path_buf(),
                message: format!("could not run {}: {}", self.program, e),
            })?;

        let stem = tex.file_stem().map(PathBuf::from).unwrap_or_default();
        for ext in ["aux", "log"] {
            let leftover = self.output_dir.join(&stem).with_extension(ext);
            if let Err(e) = fs::remove_file(&leftover) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %leftover.display(), error = %e, "could not remove");
                }
            }
        }

        if !output.status.success() {
            return Err(ChartError::Compile {
                path: tex.to_path_buf(),
                message: format!("{} exited with {}", self.program, output.status),
            });
        }
        Ok(self.output_dir.join(stem).with_extension("pdf"))
    }
}
