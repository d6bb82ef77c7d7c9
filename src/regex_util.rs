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

use regex::{Match, Regex};

pub trait RegexConsume {
    /// True when the leftmost match of the regex begins at index 0.
    /// A match further to the right does not count, even if the regex
    /// could also have matched at the start.
    fn matches_start(&self, s: &str) -> bool {
        self.find_start(s).is_some()
    }

    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>>;
}

impl RegexConsume for Regex {
    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>> {
        let found = self.find(s)?;
        if found.start() != 0 {
            return None
        }
        Some(found)
    }
}

/// Wraps a pattern so that it only accepts the whole input.
///
/// A leftmost-first search followed by a bounds check is not enough here:
/// `\d{3}|\d{3}\d{4}` finds the three digit branch first and would reject a
/// seven digit number the anchored form accepts.
pub fn anchor_whole(pattern: &str) -> String {
    fast_cat::concat_str!("^(?:", pattern, ")$")
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::{anchor_whole, RegexConsume};

    #[test]
    fn matches_start_uses_leftmost_match() {
        let leading = Regex::new("[2-9]").unwrap();
        assert!(leading.matches_start("206"));
        assert!(!leading.matches_start("1206"));
        assert!(!leading.matches_start(""));
    }

    #[test]
    fn anchored_alternation_accepts_longer_branch() {
        let pattern = r"\d{3}|\d{3}\d{4}";
        let anchored = Regex::new(&anchor_whole(pattern)).unwrap();
        assert!(anchored.is_match("5551234"));
        assert!(anchored.is_match("555"));
        assert!(!anchored.is_match("55512"));
    }
}
