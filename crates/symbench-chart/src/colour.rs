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


//! Bar colours.

use crate::error::ChartError;
use std::fmt;
use std::str::FromStr;

/// A pgfplots bar colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarColour {
    Cyan,
    Orange,
    Lime,
    Red,
    Blue,
}

/// Palette used when none is configured, in series order.
pub const DEFAULT_PALETTE: [BarColour; 5] = [
    BarColour::Cyan,
    BarColour::Orange,
    BarColour::Lime,
    BarColour::Red,
    BarColour::Blue,
];

impl BarColour {
    /// xcolor name.
    pub fn name(self) -> &'static str {
        match self {
            BarColour::Cyan => "cyan",
            BarColour::Orange => "orange",
            BarColour::Lime => "lime",
            BarColour::Red => "red",
            BarColour::Blue => "blue",
        }
    }
}

impl fmt::Display for BarColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BarColour {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DEFAULT_PALETTE
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChartError::UnknownColour {
                name: s.to_string(),
            })
    }
}
