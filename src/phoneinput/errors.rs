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

use thiserror::Error;

pub use crate::regexp_cache::InvalidRegexError;

/// Defects found while loading or validating region metadata.
///
/// Formatting and cursor operations have no error type: a number that cannot
/// be formatted falls back to a less processed string.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Could not parse metadata: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not read metadata: {0}")]
    Io(#[from] std::io::Error),

    #[error("Region {iso_code} has invalid dial code {dial_code:?}")]
    InvalidDialCode {
        iso_code: String,
        dial_code: String,
    },

    #[error("Dial code map key {0:?} is not 1 to 6 digits")]
    InvalidDialCodePrefix(String),

    #[error("Dial code {dial_code} lists unknown region {iso_code}")]
    UnknownRegion {
        dial_code: String,
        iso_code: String,
    },

    #[error("Region {iso_code} takes its patterns from unknown region {pattern_region}")]
    UnknownPatternRegion {
        iso_code: String,
        pattern_region: String,
    },

    #[error("Region {iso_code} has an invalid pattern: {source}")]
    InvalidPattern {
        iso_code: String,
        #[source]
        source: InvalidRegexError,
    },
}
