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

mod dial_code_map;
mod region;

use std::io::Read;

use log::trace;
use serde::{Deserialize, Serialize};

pub use dial_code_map::{DialCodeMap, RegionDirectory};
pub use region::{Pattern, Region};

use crate::{
    phoneinput::{
        errors::MetadataError,
        helper_constants::MAX_DIAL_CODE_PROBE_LENGTH,
        helper_functions::template_probe_pattern,
    },
    regex_util::anchor_whole,
    regexp_cache::RegexCache,
};

/// Region data compiled into the crate.
const EMBEDDED_METADATA: &str = include_str!("../../resources/metadata.json");

/// Static tables the formatter works from. Loaded once and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub regions: RegionDirectory,
    pub dial_code_map: DialCodeMap,
}

impl Metadata {
    pub fn from_json_str(json: &str) -> Result<Self, MetadataError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, MetadataError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Region data shipped with the crate.
    pub fn embedded() -> Result<Self, MetadataError> {
        Self::from_json_str(EMBEDDED_METADATA)
    }

    /// Checks the integrity of the tables: dial codes are digits, every
    /// reference between tables resolves and every pattern compiles in all the
    /// forms the formatter uses it in.
    ///
    /// Bad data is a defect of the data, not of a user's input, so it is
    /// reported here once instead of on every keystroke.
    pub fn validate(&self) -> Result<(), MetadataError> {
        let cache = RegexCache::with_capacity(256);
        for (iso_code, region) in self.regions.iter() {
            trace!("Validating region {}", iso_code);
            for dial_code in std::iter::once(&region.dial_code).chain(&region.country_dial_code) {
                if dial_code.is_empty() || !dial_code.chars().all(|c| c.is_ascii_digit()) {
                    return Err(MetadataError::InvalidDialCode {
                        iso_code: iso_code.to_owned(),
                        dial_code: dial_code.to_owned(),
                    });
                }
            }
            if let Some(pattern_region) = &region.pattern_region {
                if !self.regions.contains(pattern_region) {
                    return Err(MetadataError::UnknownPatternRegion {
                        iso_code: iso_code.to_owned(),
                        pattern_region: pattern_region.to_owned(),
                    });
                }
            }
            let patterns = region
                .patterns
                .iter()
                .chain(region.international_patterns.iter().flatten());
            for pattern in patterns {
                Self::validate_pattern(&cache, iso_code, pattern)?;
            }
        }

        for (dial_code, iso_codes) in self.dial_code_map.iter() {
            let valid_prefix = (1..=MAX_DIAL_CODE_PROBE_LENGTH).contains(&dial_code.len())
                && dial_code.chars().all(|c| c.is_ascii_digit());
            if !valid_prefix {
                return Err(MetadataError::InvalidDialCodePrefix(dial_code.to_owned()));
            }
            if let Some(unknown) = iso_codes.iter().find(|iso_code| !self.regions.contains(iso_code)) {
                return Err(MetadataError::UnknownRegion {
                    dial_code: dial_code.to_owned(),
                    iso_code: unknown.to_owned(),
                });
            }
        }
        Ok(())
    }

    fn validate_pattern(cache: &RegexCache, iso_code: &str, pattern: &Pattern) -> Result<(), MetadataError> {
        let invalid = |source| MetadataError::InvalidPattern { iso_code: iso_code.to_owned(), source };

        cache.get_regex(&pattern.match_pattern).map_err(invalid)?;
        cache.get_regex(&anchor_whole(&pattern.match_pattern)).map_err(invalid)?;
        cache.get_regex(&template_probe_pattern(&pattern.match_pattern)).map_err(invalid)?;
        if let Some(leading_digit_pattern) = &pattern.leading_digit_pattern {
            cache.get_regex(leading_digit_pattern).map_err(invalid)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Metadata, MetadataError};

    const MINIMAL: &str = r#"{
        "regions": {
            "US": {
                "isoCode": "US",
                "dialCode": "1",
                "patterns": [{ "match": "(\\d{3})(\\d{3})(\\d{4})", "replace": "($1) $2-$3" }]
            },
            "CA": { "isoCode": "CA", "dialCode": "1", "patternRegion": "US" }
        },
        "dialCodeMap": { "1": ["US", "CA"] }
    }"#;

    #[test]
    fn embedded_metadata_is_valid() {
        let metadata = Metadata::embedded().expect("embedded metadata should parse");
        metadata.validate().expect("embedded metadata should be valid");
        assert!(!metadata.regions.is_empty());
    }

    #[test]
    fn loads_with_defaults() {
        let metadata = Metadata::from_reader(MINIMAL.as_bytes()).unwrap();
        metadata.validate().unwrap();

        let canada = metadata.regions.get("CA").unwrap();
        assert_eq!(canada.national_prefix, "");
        assert!(canada.patterns.is_empty());
        assert_eq!(canada.international_patterns, None);
        assert_eq!(metadata.dial_code_map.exact("1").unwrap(), ["US", "CA"]);
    }

    #[test]
    fn rejects_broken_references() {
        let mut metadata = Metadata::from_json_str(MINIMAL).unwrap();
        metadata.dial_code_map = [("1", vec!["US", "MX"])].into_iter().collect();
        assert!(matches!(
            metadata.validate(),
            Err(MetadataError::UnknownRegion { iso_code, .. }) if iso_code == "MX"
        ));

        let mut metadata = Metadata::from_json_str(MINIMAL).unwrap();
        metadata.dial_code_map = [("1234567", vec!["US"])].into_iter().collect();
        assert!(matches!(metadata.validate(), Err(MetadataError::InvalidDialCodePrefix(_))));
    }

    #[test]
    fn rejects_bad_patterns_and_dial_codes() {
        let broken = MINIMAL.replace(r#""(\\d{3})(\\d{3})(\\d{4})""#, r#""(\\d{3}""#);
        let metadata = Metadata::from_json_str(&broken).unwrap();
        assert!(matches!(metadata.validate(), Err(MetadataError::InvalidPattern { .. })));

        let broken = MINIMAL.replace(r#""patternRegion": "US""#, r#""patternRegion": "XX""#);
        let metadata = Metadata::from_json_str(&broken).unwrap();
        assert!(matches!(metadata.validate(), Err(MetadataError::UnknownPatternRegion { .. })));

        let broken = MINIMAL.replace(r#""dialCode": "1","#, r#""dialCode": "+1","#);
        let metadata = Metadata::from_json_str(&broken).unwrap();
        assert!(matches!(metadata.validate(), Err(MetadataError::InvalidDialCode { .. })));
    }

    #[test]
    fn reports_malformed_json() {
        assert!(matches!(Metadata::from_json_str("{"), Err(MetadataError::Json(_))));
    }
}
