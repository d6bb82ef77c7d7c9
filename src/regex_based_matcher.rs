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

use std::{borrow::Cow, sync::Arc};

use log::error;
use regex::{Captures, Regex};

use super::regex_util::{anchor_whole, RegexConsume};

use crate::{interfaces, regexp_cache::RegexCache, string_util::expand_replacement};

pub struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self { cache: RegexCache::with_capacity(128) }
    }

    fn regex(&self, pattern: &str) -> Option<Arc<Regex>> {
        match self.cache.get_regex(pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                error!("Invalid regex in region metadata! {}", err);
                None
            }
        }
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_leading_digits(&self, number: &str, pattern: &str) -> bool {
        self.regex(pattern)
            .is_some_and(|regex| regex.matches_start(number))
    }

    fn match_whole_number(&self, number: &str, pattern: &str) -> bool {
        self.regex(&anchor_whole(pattern))
            .is_some_and(|regex| regex.is_match(number))
    }

    fn find_first<'a>(&self, haystack: &'a str, pattern: &str) -> Option<&'a str> {
        let regex = self.regex(pattern)?;
        regex.find(haystack).map(|found| found.as_str())
    }

    fn replace_first<'a>(&self, number: &'a str, pattern: &str, replacement: &str) -> Cow<'a, str> {
        let Some(regex) = self.regex(pattern) else {
            return Cow::Borrowed(number);
        };
        regex.replace(number, |caps: &Captures<'_>| {
            let mut dst = String::with_capacity(replacement.len() + number.len());
            expand_replacement(caps, replacement, &mut dst);
            dst
        })
    }

    fn replace_all<'a>(&self, number: &'a str, pattern: &str, replacement: &str) -> Cow<'a, str> {
        let Some(regex) = self.regex(pattern) else {
            return Cow::Borrowed(number);
        };
        regex.replace_all(number, |caps: &Captures<'_>| {
            let mut dst = String::with_capacity(replacement.len() + number.len());
            expand_replacement(caps, replacement, &mut dst);
            dst
        })
    }
}
