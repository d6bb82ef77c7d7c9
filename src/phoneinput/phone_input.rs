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

use std::borrow::Cow;

use log::{debug, trace, warn};

use super::{
    PhoneNumberFormat,
    errors::MetadataError,
    helper_constants::{
        ICANN_SEPARATOR, LONGEST_NUMBER, MAX_DIAL_CODE_PROBE_LENGTH, MIN_LENGTH_TO_FORMAT,
        NANPA_DIAL_CODE, PLUS_SIGN,
    },
    helper_functions::{
        apply_template, bare_template, placeholders_for_probe_digits, template_probe_pattern,
    },
    helper_types::ProcessedNumber,
};
use crate::{
    interfaces::MatcherApi,
    macros::owned_from_cow_or,
    metadata::{Metadata, Pattern, Region},
    regex_based_matcher::RegexBasedMatcher,
    string_util::strip_non_digits,
};

/// Phone number input engine over a fixed set of region metadata.
///
/// Every operation is a pure function of its arguments and the metadata;
/// the only state kept between calls is the compiled regex cache.
pub struct PhoneInput {
    /// An API for pattern matching.
    matcher_api: Box<dyn MatcherApi>,

    /// Region directory and dial code map.
    metadata: Metadata,
}

impl PhoneInput {
    /// Builds the engine over the region data compiled into the crate.
    ///
    /// # Panics
    /// If the compiled-in data does not load, which is a bug of the crate.
    pub fn new() -> Self {
        let result = Metadata::embedded().and_then(Self::new_for_metadata);
        match result {
            Ok(instance) => instance,
            Err(err) => {
                let err_message = format!("Could not load compiled-in metadata: {}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
        }
    }

    /// Builds the engine over caller supplied region data, validating it
    /// first.
    pub fn new_for_metadata(metadata: Metadata) -> Result<Self, MetadataError> {
        metadata.validate()?;
        Ok(Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            metadata,
        })
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn get_supported_regions(&self) -> impl Iterator<Item = &str> {
        self.metadata.regions.iter().map(|(iso_code, _)| iso_code)
    }

    pub fn get_region(&self, iso_code: &str) -> Option<&Region> {
        self.metadata.regions.get(iso_code)
    }

    /// Regions dialed with exactly `dial_code`, highest priority first.
    pub fn get_regions_for_dial_code(&self, dial_code: &str) -> impl Iterator<Item = &Region> {
        self.metadata
            .dial_code_map
            .exact(dial_code)
            .unwrap_or_default()
            .iter()
            .filter_map(|iso_code| self.metadata.regions.get(iso_code))
    }

    /// Guesses the region a (possibly partial) number belongs to from its
    /// leading digits.
    ///
    /// Prefixes of one to six digits are probed in turn. A prefix owned by a
    /// single region settles it at once. A prefix shared by several regions
    /// is remembered, and its highest priority region wins once no longer
    /// prefix can narrow the choice down any more.
    pub fn find_country_from_number(&self, number: &str) -> Option<&Region> {
        let digits = strip_non_digits(number);
        let digits = digits.trim_start_matches('0');
        let dial_code_map = &self.metadata.dial_code_map;
        let mut last_exact_match: Option<&[String]> = None;

        for i in 1..=MAX_DIAL_CODE_PROBE_LENGTH {
            let query = &digits[..i.min(digits.len())];
            trace!("Probing dial code prefix {:?}", query);

            if let Some(exact_match) = dial_code_map.exact(query) {
                if exact_match.len() == 1 {
                    return self.get_region(&exact_match[0]);
                }
                if exact_match.len() > 1 {
                    last_exact_match = Some(exact_match);
                }
            }

            let prefix_match = dial_code_map.prefix_search(query);
            if prefix_match.is_empty() {
                if let Some(exact_match) = last_exact_match {
                    // the one with the highest priority
                    return self.get_region(&exact_match[0]);
                }
            }
            if let [only] = prefix_match.as_slice() {
                return self.get_region(only);
            }
        }

        last_exact_match.and_then(|exact_match| self.get_region(&exact_match[0]))
    }

    /// Splits a raw number into its display prefix and national number.
    ///
    /// A number written with a leading `+` (or any number of a North American
    /// region) loses its dial code, then the national prefix is dropped
    /// because the display prefix puts it back. The display prefix is
    /// `+CC ` for international input, `1 ` for North American numbers typed
    /// with a leading `1`, and the region's national prefix otherwise.
    pub fn process_number<'b>(&self, number: &str, region: &'b Region) -> ProcessedNumber<'b> {
        let international = number.starts_with(PLUS_SIGN);
        let digits = strip_non_digits(number);
        let mut national_number = digits.clone();

        if international || region.is_nanpa() {
            let dial_code_and_prefix = format!(
                "^(0*{})?({})?",
                regex::escape(&region.dial_code),
                regex::escape(&region.national_prefix)
            );
            national_number = owned_from_cow_or!(
                self.matcher_api.replace_first(&national_number, &dial_code_and_prefix, ""),
                national_number
            );
        }

        let national_prefix = regex::escape(&region.national_prefix);
        let repeated_prefix = if region.national_prefix.chars().count() == 1 {
            fast_cat::concat_str!("^", &national_prefix, "+")
        } else {
            fast_cat::concat_str!("^", &national_prefix)
        };
        national_number = owned_from_cow_or!(
            self.matcher_api.replace_first(&national_number, &repeated_prefix, ""),
            national_number
        );

        debug!("National number: {} for {} in {}", national_number, number, region.iso_code);

        let prefix = if international {
            Cow::Owned(fast_cat::concat_str!(PLUS_SIGN, &region.dial_code, " "))
        } else if region.dial_code == NANPA_DIAL_CODE {
            Cow::Borrowed(if digits.starts_with('1') { "1 " } else { "" })
        } else {
            Cow::Borrowed(region.national_prefix.as_str())
        };

        ProcessedNumber::new(national_number, prefix)
    }

    /// Returns the first pattern whose leading digits (if any) match the start
    /// of `number` and whose `match` accepts the whole of it.
    pub fn find_pattern<'p>(&self, number: &str, patterns: &'p [Pattern]) -> Option<&'p Pattern> {
        patterns.iter().find(|pattern| {
            self.leading_digits_match(number, pattern)
                && self.matcher_api.match_whole_number(number, &pattern.match_pattern)
        })
    }

    /// Builds a mask for a number no pattern fully matches yet, e.g. the
    /// first digits of a number being typed.
    ///
    /// The first single-layout pattern whose leading digits fit and which can
    /// seat at least as many digits as `number` has is laid out over a probe
    /// of nines, whose digits then become [`DIGIT_PLACEHOLDER`]s. Without such
    /// a pattern the template is a bare run of placeholders.
    ///
    /// [`DIGIT_PLACEHOLDER`]: super::helper_constants::DIGIT_PLACEHOLDER
    pub fn make_template(&self, number: &str, patterns: &[Pattern]) -> String {
        let number_length = number.chars().count();
        let selected = patterns.iter().find_map(|pattern| {
            if pattern.has_alternative_formats() || !self.leading_digits_match(number, pattern) {
                return None;
            }
            trace!("Probing pattern {:?} for a template", pattern.match_pattern);
            let probe_pattern = template_probe_pattern(&pattern.match_pattern);
            let matching_number = self.matcher_api.find_first(LONGEST_NUMBER, &probe_pattern)?;
            (matching_number.len() >= number_length)
                .then(|| (pattern, probe_pattern, matching_number))
        });

        let Some((pattern, probe_pattern, matching_number)) = selected else {
            return bare_template(number);
        };

        let grouped = self
            .matcher_api
            .replace_all(matching_number, &probe_pattern, &pattern.replace);
        placeholders_for_probe_digits(&grouped)
    }

    /// Renders `number` as it should appear in an input field for `region`.
    ///
    /// Numbers too short to tell anything about are echoed back as digits
    /// (with their `+`). Complete numbers are laid out by the matching
    /// pattern, partial ones through a template. When neither exists the
    /// input is returned unchanged.
    pub fn format_number<'b>(&self, number: &'b str, region: &Region) -> Cow<'b, str> {
        let digit_count = number.chars().filter(char::is_ascii_digit).count();
        if digit_count < MIN_LENGTH_TO_FORMAT || digit_count < region.dial_code.len() {
            return match number.strip_prefix(PLUS_SIGN) {
                Some(rest) => {
                    let digits = strip_non_digits(rest);
                    Cow::Owned(fast_cat::concat_str!(PLUS_SIGN, &digits))
                }
                None => Cow::Owned(strip_non_digits(number)),
            };
        }

        // Some regions share the patterns of another one.
        let region = match &region.pattern_region {
            Some(pattern_region) => self.get_region(pattern_region).unwrap_or_else(|| {
                warn!(
                    "Region {} refers to unknown pattern region {}",
                    region.iso_code, pattern_region
                );
                region
            }),
            None => region,
        };

        let ProcessedNumber { national_number, prefix } = self.process_number(number, region);

        let patterns: &[Pattern] = match &region.international_patterns {
            Some(international) if number.starts_with(['+', '1']) => international,
            _ => &region.patterns,
        };

        if let Some(pattern) = self.find_pattern(&national_number, patterns) {
            debug!(
                "Will replace {:?} with {:?} and {:?} with prefix {:?}",
                national_number, pattern.match_pattern, pattern.replace, prefix
            );
            let formatted = self
                .matcher_api
                .replace_first(&national_number, &pattern.match_pattern, &pattern.replace);
            return Cow::Owned(fast_cat::concat_str!(&prefix, &formatted));
        }

        debug!("Couldn't find a {} pattern for {}", region.iso_code, number);

        let template = self.make_template(&national_number, patterns);
        if template.is_empty() {
            return Cow::Borrowed(number);
        }
        debug!("Will replace {:?} with {:?} with prefix {:?}", national_number, template, prefix);
        let masked = apply_template(&national_number, &template, &mut 0);
        Cow::Owned(fast_cat::concat_str!(&prefix, &masked))
    }

    /// `+`, the region's dial code and the national number.
    pub fn to_e164(&self, number: &str, region: &Region) -> String {
        let ProcessedNumber { national_number, .. } = self.process_number(number, region);
        fast_cat::concat_str!(PLUS_SIGN, &region.dial_code, &national_number)
    }

    /// `+CC.NNNN` as used by domain registries. Without a region there is
    /// nothing to go on and the input is returned unchanged.
    pub fn to_icann_format<'b>(&self, number: &'b str, region: Option<&Region>) -> Cow<'b, str> {
        let Some(region) = region else {
            return Cow::Borrowed(number);
        };
        let ProcessedNumber { national_number, .. } = self.process_number(number, region);
        Cow::Owned(fast_cat::concat_str!(
            PLUS_SIGN,
            region.icann_dial_code(),
            ICANN_SEPARATOR,
            region.icann_region_code(),
            &national_number
        ))
    }

    /// Renders `number` in the requested representation.
    pub fn format<'b>(&self, number: &'b str, region: &Region, number_format: PhoneNumberFormat) -> Cow<'b, str> {
        match number_format {
            PhoneNumberFormat::Masked => self.format_number(number, region),
            PhoneNumberFormat::E164 => Cow::Owned(self.to_e164(number, region)),
            PhoneNumberFormat::Icann => self.to_icann_format(number, Some(region)),
        }
    }

    fn leading_digits_match(&self, number: &str, pattern: &Pattern) -> bool {
        pattern
            .leading_digit_pattern
            .as_deref()
            .is_none_or(|leading| self.matcher_api.match_leading_digits(number, leading))
    }
}

impl Default for PhoneInput {
    fn default() -> Self {
        Self::new()
    }
}
