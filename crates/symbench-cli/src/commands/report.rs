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


//! Reporting commands - charts, metric extraction and key statistics

use super::{emit_table, load_table};
use crate::error::CliError;
use colored::Colorize;
use std::path::{Path, PathBuf};
use symbench_chart::{
    bar_chart_tex, key_stats_tex, tex_path_for, write_tex, BarColour, ChartConfig, LatexCompiler,
    DEFAULT_PALETTE,
};
use symbench_launch::{Metric, StatsSource, KEY_STATS};

/// Options for rendering a bar chart.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// Y axis label.
    pub y_label: String,
    /// Keep column names instead of stripping a trailing " Time".
    pub keep_names: bool,
    /// Series colours; the default palette when empty.
    pub colours: Vec<BarColour>,
    /// Compile the document into this directory with pdflatex.
    pub pdf_dir: Option<String>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            y_label: "Time (s)".to_string(),
            keep_names: false,
            colours: Vec::new(),
            pdf_dir: None,
        }
    }
}

impl ChartOptions {
    fn config(&self) -> ChartConfig {
        let palette = if self.colours.is_empty() {
            DEFAULT_PALETTE.to_vec()
        } else {
            self.colours.clone()
        };
        let config = ChartConfig::default()
            .with_y_label(self.y_label.clone())
            .with_palette(palette);
        if self.keep_names {
            config.keep_column_names()
        } else {
            config
        }
    }
}

/// Compile a generated document, reporting failure without failing.
fn compile_best_effort(tex: &Path, pdf_dir: Option<&str>) {
    let Some(dir) = pdf_dir else {
        return;
    };
    match LatexCompiler::new(dir).compile(tex) {
        Ok(pdf) => println!("{} {}", "Compiled".green(), pdf.display()),
        Err(e) => tracing::warn!(error = %e, "skipping PDF"),
    }
}

/// Render a results table as a bar chart next to it (`foo.csv` → `foo.tex`).
///
/// # Errors
///
/// Returns `Err` if the table cannot be loaded, the palette is too small,
/// or a column lacks the " Time" suffix while stripping is on.
pub fn chart(file: &str, options: &ChartOptions) -> Result<(), CliError> {
    let table = load_table(file)?;
    let tex = bar_chart_tex(&table, &options.config())?;
    let path = tex_path_for(Path::new(file));
    write_tex(&path, &tex)?;
    println!("{} {}", "Generated".green(), path.display());
    compile_best_effort(&path, options.pdf_dir.as_deref());
    Ok(())
}

/// Parse a stats source given as `LABEL=PREFIX[:SUFFIX]`.
///
/// # Examples
///
/// ```
/// use symbench_cli::commands::parse_source;
///
/// let (label, source) = parse_source("Incremental=pooling-:inc", "runs").unwrap();
/// assert_eq!(label, "Incremental");
/// assert_eq!(source.prefix, "pooling-");
/// assert_eq!(source.suffix, "inc");
/// ```
pub fn parse_source(arg: &str, dir: &str) -> Result<(String, StatsSource), CliError> {
    let (label, rest) = arg.split_once('=').ok_or_else(|| {
        CliError::invalid_input(format!(
            "source '{}' must look like LABEL=PREFIX[:SUFFIX]",
            arg
        ))
    })?;
    if label.trim().is_empty() {
        return Err(CliError::invalid_input(format!(
            "source '{}' has an empty label",
            arg
        )));
    }
    let (prefix, suffix) = rest.split_once(':').unwrap_or((rest, ""));
    Ok((
        label.trim().to_string(),
        StatsSource::new(dir, prefix, suffix),
    ))
}

/// Build a `Program, <label>...` table of one metric over several sources.
///
/// With `chart`, also renders the table as a bar chart; that needs
/// `output`, since the chart is written next to the CSV file.
///
/// # Errors
///
/// Returns `Err` if a source is malformed, a stats file is missing or lacks
/// a field, or a chart is requested without an output file.
pub fn extract(
    programs: &[String],
    sources: &[String],
    dir: &str,
    metric: Metric,
    output: Option<&str>,
    chart: Option<&ChartOptions>,
) -> Result<(), CliError> {
    if sources.is_empty() {
        return Err(CliError::invalid_input("at least one --source is required"));
    }
    if chart.is_some() && output.is_none() {
        return Err(CliError::invalid_input("--chart requires --output"));
    }
    let sources = sources
        .iter()
        .map(|s| parse_source(s, dir))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(%metric, sources = sources.len(), "extracting");
    let table = symbench_launch::extract(programs, &sources, metric)?;
    emit_table(&table, output)?;

    if let (Some(options), Some(path)) = (chart, output) {
        self::chart(path, options)?;
    }
    Ok(())
}

/// Build the key-statistics table for one source and its LaTeX table.
///
/// Writes `<dir>/<prefix><suffix>key-stats.csv` (or `output`) and the
/// matching `.tex` document.
///
/// # Errors
///
/// Returns `Err` if a stats file is missing or lacks a key statistic.
pub fn key_stats(
    programs: &[String],
    dir: &str,
    prefix: &str,
    suffix: &str,
    output: Option<&str>,
    pdf_dir: Option<&str>,
) -> Result<(), CliError> {
    let source = StatsSource::new(dir, prefix, suffix);
    let table = symbench_launch::key_stats(programs, &source, KEY_STATS)?;

    let csv_path = match output {
        Some(path) => PathBuf::from(path),
        None => Path::new(dir).join(format!("{}{}key-stats.csv", prefix, suffix)),
    };
    symbench_csv::save(&table, &csv_path)?;
    println!("{} {}", "Generated".green(), csv_path.display());

    let tex_path = tex_path_for(&csv_path);
    write_tex(&tex_path, &key_stats_tex(&table))?;
    println!("{} {}", "Generated".green(), tex_path.display());
    compile_best_effort(&tex_path, pdf_dir);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_without_suffix() {
        let (label, source) = parse_source("Base=master-det", ".").unwrap();
        assert_eq!(label, "Base");
        assert_eq!(source.prefix, "master-det");
        assert_eq!(source.suffix, "");
        assert_eq!(source.dir, PathBuf::from("."));
    }

    #[test]
    fn test_parse_source_rejects_missing_label() {
        assert!(parse_source("master-det", ".").is_err());
        assert!(parse_source("=master-det", ".").is_err());
    }

    #[test]
    fn test_chart_options_palette() {
        let options = ChartOptions {
            colours: vec![BarColour::Red],
            keep_names: true,
            ..ChartOptions::default()
        };
        let config = options.config();
        assert_eq!(config.palette, vec![BarColour::Red]);
        assert!(!config.strip_time_suffix);
        assert_eq!(ChartOptions::default().config().palette.len(), 5);
    }
}
