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


//! Grouped bar charts as standalone pgfplots documents.
//!
//! Every non-key column of a [`ResultTable`] becomes one series and every
//! row one symbolic x coordinate, so a table of per-program timings renders
//! as one group of bars per program.

use crate::colour::{BarColour, DEFAULT_PALETTE};
use crate::error::{ChartError, Result};
use crate::table::escape;
use symbench_core::ResultTable;

/// Characters that break a symbolic coordinate list or its `(x,y)` pairs.
const COORDINATE_BREAKERS: &[char] = &[',', '(', ')', '{', '}', '\\', '%', '#', '~'];

/// Column suffix removed from series names when `strip_time_suffix` is set.
pub const TIME_SUFFIX: &str = " Time";

/// Chart rendering options.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Label of the y axis.
    pub y_label: String,
    /// Require every series column to end in " Time" and drop that suffix.
    pub strip_time_suffix: bool,
    /// Colours assigned to series in column order.
    pub palette: Vec<BarColour>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            y_label: "Time (s)".to_string(),
            strip_time_suffix: true,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl ChartConfig {
    /// Set the y axis label.
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Keep column names as they are.
    pub fn keep_column_names(mut self) -> Self {
        self.strip_time_suffix = false;
        self
    }

    /// Replace the palette.
    pub fn with_palette(mut self, palette: Vec<BarColour>) -> Self {
        self.palette = palette;
        self
    }
}

/// One bar series.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend entry.
    pub name: String,
    /// Fill colour.
    pub colour: BarColour,
    /// `(x, y)` coordinates, one per row.
    pub coordinates: Vec<(String, String)>,
}

/// Split a table into named, coloured series.
pub fn series(table: &ResultTable, config: &ChartConfig) -> Result<Vec<Series>> {
    let fields = table.header().fields();
    if fields.len() > config.palette.len() {
        return Err(ChartError::NotEnoughColours {
            series: fields.len(),
            colours: config.palette.len(),
        });
    }

    let mut out = Vec::with_capacity(fields.len());
    for (index, (field, colour)) in fields.iter().zip(&config.palette).enumerate() {
        let name = if config.strip_time_suffix {
            field
                .strip_suffix(TIME_SUFFIX)
                .ok_or_else(|| ChartError::MissingTimeSuffix {
                    column: field.clone(),
                })?
                .to_string()
        } else {
            field.clone()
        };

        let coordinates = table
            .records()
            .iter()
            .map(|record| (record.key().to_string(), record.values()[index].to_string()))
            .collect();

        out.push(Series {
            name,
            colour: *colour,
            coordinates,
        });
    }
    Ok(out)
}

fn check_key(key: &str) -> Result<()> {
    match key.chars().find(|c| COORDINATE_BREAKERS.contains(c)) {
        Some(character) => Err(ChartError::InvalidKey {
            key: key.to_string(),
            character,
        }),
        None => Ok(()),
    }
}

fn legend_entry(name: &str) -> String {
    let escaped = escape(name);
    if escaped.contains(',') {
        format!("{{{escaped}}}")
    } else {
        escaped
    }
}

/// Render a table as a standalone LaTeX document with a grouped bar chart.
///
/// Row keys are used verbatim as symbolic coordinates and escaped in the tick
/// labels; series names are escaped in the legend.
///
/// # Errors
///
/// Fails with [`ChartError::InvalidKey`] for a key containing a comma,
/// parenthesis, brace, backslash, `%`, `#` or `~`, in addition to the errors
/// of [`series`].
pub fn bar_chart_tex(table: &ResultTable, config: &ChartConfig) -> Result<String> {
    for key in table.keys() {
        check_key(key)?;
    }
    let series = series(table, config)?;
    tracing::debug!(
        series = series.len(),
        rows = table.len(),
        "rendering bar chart"
    );

    let names: Vec<&str> = table.keys().collect();
    let labels: Vec<String> = names.iter().map(|n| escape(n)).collect();
    let legend: Vec<String> = series.iter().map(|s| legend_entry(&s.name)).collect();

    let mut plots = String::new();
    for s in &series {
        let colour = s.colour.name();
        plots.push_str(&format!(
            "\\addplot[style={{{colour},fill={colour},mark=none}}, draw=black]\n"
        ));
        let coords: Vec<String> = s
            .coordinates
            .iter()
            .map(|(x, y)| format!("({x},{y})"))
            .collect();
        plots.push_str(&format!("\tcoordinates {{{}}};\n", coords.join(" ")));
    }

    Ok(format!(
        r"\documentclass[border=10pt]{{standalone}}
\usepackage{{xcolor}}
\usepackage{{pgfplots}}
\usepackage{{tikz}}
\begin{{document}}
\begin{{tikzpicture}}
    \begin{{axis}}[
        width  = 1.5 * \textwidth,
        height = 8cm,
        major x tick style = transparent,
        ybar=0,
        bar width=10pt,
        ylabel = {{{y_label}}},
        symbolic x coords={{{names}}},
        xtick = data,
        xticklabels={{{labels}}},
        scaled y ticks = false,
        enlarge x limits=0.05,
        ymin=0,
        legend cell align=left,
        legend style={{
                at={{(0.98,0.88)}},
                anchor=south east,
        }}
    ]
        {plots}
        \legend{{{legend}}}
    \end{{axis}}
\end{{tikzpicture}}
\end{{document}}
",
        y_label = config.y_label,
        names = names.join(","),
        labels = labels.join(","),
        plots = plots,
        legend = legend.join(","),
    ))
}
