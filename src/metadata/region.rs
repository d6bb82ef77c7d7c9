// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::{Deserialize, Serialize};

use crate::phoneinput::helper_constants::{FORMAT_ALTERNATION, NANPA_DIAL_CODE};

/// Phone numbering configuration of a single country or territory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// ISO 3166-1 alpha-2 code, also the key of the region in the directory.
    pub iso_code: String,
    /// International calling code, e.g. `44`. Territories inside a shared
    /// numbering plan carry their full code here, e.g. `1268` for Antigua.
    pub dial_code: String,
    /// Calling code of the numbering plan a territory belongs to (`1` for
    /// Antigua), when it differs from `dial_code`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_dial_code: Option<String>,
    /// Trunk prefix dialed in front of national numbers, e.g. `0`.
    #[serde(default)]
    pub national_prefix: String,
    /// Area code part of `dial_code` for territories of a shared plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    /// Region whose pattern tables this region formats with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_region: Option<String>,
    #[serde(default)]
    pub patterns: Vec<Pattern>,
    /// Layouts used once the number is written in international form. A
    /// present table wins over `patterns` even when it is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub international_patterns: Option<Vec<Pattern>>,
}

/// Grouping rule for national numbers of a given shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    /// Regex the national number has to match as a whole.
    #[serde(rename = "match")]
    pub match_pattern: String,
    /// Output layout with `$n` references to the groups of `match_pattern`.
    pub replace: String,
    /// Raw layout as found in the upstream data. It may list alternatives
    /// separated by `|`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Regex that has to match at the start of the national number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leading_digit_pattern: Option<String>,
}

impl Region {
    /// Calling code used for ICANN style numbers: the plan-wide code when the
    /// region belongs to a shared plan.
    pub fn icann_dial_code(&self) -> &str {
        self.country_dial_code
            .as_deref()
            .filter(|code| !code.is_empty())
            .unwrap_or(&self.dial_code)
    }

    /// Region specific part placed after the ICANN separator. Only
    /// territories of a shared plan have one.
    pub fn icann_region_code(&self) -> &str {
        match (self.country_dial_code.as_deref(), self.region_code.as_deref()) {
            (Some(code), Some(region_code)) if !code.is_empty() => region_code,
            _ => "",
        }
    }

    /// Whether the region is part of the North American Numbering Plan.
    pub fn is_nanpa(&self) -> bool {
        self.dial_code == NANPA_DIAL_CODE
            || self.country_dial_code.as_deref() == Some(NANPA_DIAL_CODE)
    }
}

impl Pattern {
    pub fn has_alternative_formats(&self) -> bool {
        self.format
            .as_deref()
            .is_some_and(|format| format.contains(FORMAT_ALTERNATION))
    }
}
