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

//! Cursor placement across re-masking.
//!
//! All positions are `char` indices into masked strings. Every scan here
//! reads the caller's sequences without consuming them.

use super::helper_constants::PLUS_SIGN;

/// Digit sequence of a masked value, decoration discarded.
pub fn unmask(value: &str) -> Vec<char> {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Approximates where the cursor belongs in `new_value` after an unknown edit
/// turned `old_value` into `new_value`, with the cursor at
/// `old_cursor_position` in `old_value` before the edit.
///
/// The cursor lands at the right edge of the rightmost changed digit. This
/// assumes edits are made from left to right and that masking and unmasking
/// are inverses of each other.
///
/// Pasting over a selection can leave the cursor short of where one would
/// expect it: replacing `oba` by `iba` in `foobar` may put it after the `i`
/// rather than after the `a`, depending on where the cursor was before.
pub fn get_updated_cursor_position(old_value: &str, new_value: &str, old_cursor_position: usize) -> usize {
    if new_value == PLUS_SIGN {
        return 1;
    }

    let old_chars: Vec<char> = old_value.chars().collect();
    let new_chars: Vec<char> = new_value.chars().collect();
    let old_digits = unmask(old_value);
    let new_digits = unmask(new_value);

    // Where the unmasked values stop agreeing, read from the right. This is
    // taken as the end of the edit until the old cursor says otherwise.
    let (idx_old, idx_new) = index_of_longest_common_suffix(&old_digits, &new_digits);

    let old_unmasked_cursor_position = num_digits_before_index(&old_chars, old_cursor_position);

    // A cursor right of that point means part of the common suffix was
    // typed as well, e.g. a digit repeated at the end.
    let idx_offset = old_unmasked_cursor_position.saturating_sub(idx_old);

    let digits_before_cursor = (idx_new + idx_offset).min(new_digits.len());
    let (offset, _) = index_of_strict_subsequence_end(&new_digits[..digits_before_cursor], &new_chars);
    offset
}

/// Returns the length of the part of each sequence that precedes their
/// longest common suffix.
///
/// `[1, 2, 3]` and `[5, 2, 3]` share `[2, 3]`, so the result is `(1, 1)`.
/// When either sequence is empty the result is both lengths.
pub fn index_of_longest_common_suffix<T: PartialEq>(first: &[T], second: &[T]) -> (usize, usize) {
    let (mut i, mut j) = (first.len(), second.len());
    while i > 0 && j > 0 && first[i - 1] == second[j - 1] {
        i -= 1;
        j -= 1;
    }
    (i, j)
}

/// Matches `needle` against `haystack` as a strict subsequence: each item of
/// `needle` is paired with the earliest unused equal item of `haystack`.
///
/// Returns the index right after the item paired with the last one of
/// `needle`, and the unread rest of `haystack`. If `haystack` runs out first,
/// the whole of it has been read and the index is its length.
pub fn index_of_strict_subsequence_end<'a, T: PartialEq>(needle: &[T], haystack: &'a [T]) -> (usize, &'a [T]) {
    let mut matched = 0;
    let mut read = 0;
    while matched < needle.len() && read < haystack.len() {
        if needle[matched] == haystack[read] {
            matched += 1;
        }
        read += 1;
    }
    (read, &haystack[read..])
}

/// Counts the characters before the first ASCII digit.
pub fn non_digits_at_start(chars: &[char]) -> usize {
    chars
        .iter()
        .take_while(|c| !c.is_ascii_digit())
        .count()
}

/// Counts the ASCII digits strictly before `index`. An index past the end
/// counts every digit.
pub fn num_digits_before_index(chars: &[char], index: usize) -> usize {
    chars[..index.min(chars.len())]
        .iter()
        .filter(|c| c.is_ascii_digit())
        .count()
}

#[cfg(test)]
mod tests {
    use super::{
        get_updated_cursor_position, index_of_longest_common_suffix,
        index_of_strict_subsequence_end, non_digits_at_start, num_digits_before_index,
    };

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn longest_common_suffix() {
        assert_eq!(index_of_longest_common_suffix(&chars("123"), &chars("523")), (1, 1));
        assert_eq!(index_of_longest_common_suffix(&chars("123"), &chars("123")), (0, 0));
        assert_eq!(index_of_longest_common_suffix(&chars("23"), &chars("123")), (0, 1));
        assert_eq!(index_of_longest_common_suffix(&chars("124"), &chars("123")), (3, 3));
        assert_eq!(index_of_longest_common_suffix(&chars(""), &chars("1")), (0, 1));
        assert_eq!(index_of_longest_common_suffix::<char>(&[], &[]), (0, 0));
    }

    #[test]
    fn longest_common_suffix_leaves_inputs_untouched() {
        let first = chars("2065");
        let second = chars("20655");
        index_of_longest_common_suffix(&first, &second);
        assert_eq!(first, chars("2065"));
        assert_eq!(second, chars("20655"));
    }

    #[test]
    fn strict_subsequence_end() {
        let masked = chars("(206) 555");
        let (index, rest) = index_of_strict_subsequence_end(&chars("2065"), &masked);
        assert_eq!(index, 7);
        assert_eq!(rest, chars("55").as_slice());

        assert_eq!(index_of_strict_subsequence_end(&[], &masked).0, 0);
        // not a subsequence: reads everything
        assert_eq!(index_of_strict_subsequence_end(&chars("7"), &masked), (9, &masked[9..]));
    }

    #[test]
    fn digit_counting() {
        assert_eq!(non_digits_at_start(&chars("+1 (206)")), 1);
        assert_eq!(non_digits_at_start(&chars("(206)")), 1);
        assert_eq!(non_digits_at_start(&chars("() -")), 4);
        assert_eq!(num_digits_before_index(&chars("(206) 5"), 4), 3);
        assert_eq!(num_digits_before_index(&chars("(206) 5"), 0), 0);
        assert_eq!(num_digits_before_index(&chars("(206) 5"), 100), 4);
    }

    #[test]
    fn plus_sign_alone() {
        assert_eq!(get_updated_cursor_position("+", "+", 1), 1);
        assert_eq!(get_updated_cursor_position("", "+", 0), 1);
    }

    #[test]
    fn first_digit() {
        assert_eq!(get_updated_cursor_position("", "1", 0), 1);
    }

    #[test]
    fn typing_at_the_end_follows_decoration() {
        assert_eq!(get_updated_cursor_position("20", "(206", 2), 4);
        assert_eq!(get_updated_cursor_position("(206", "(206) 5", 4), 7);
        assert_eq!(get_updated_cursor_position("(206) 555", "(206) 555-1", 9), 11);
    }

    #[test]
    fn repeated_digit_is_corrected_by_old_cursor() {
        // "5" typed after "2065": the common suffix "5" hides the edit
        assert_eq!(get_updated_cursor_position("(206) 5", "(206) 55", 7), 8);
    }

    #[test]
    fn typing_in_the_middle() {
        // "9" typed right after the "2" of "(2|06) 555-1234"
        assert_eq!(get_updated_cursor_position("(206) 555-1234", "29065551234", 2), 2);
    }

    #[test]
    fn deleting_a_digit() {
        // backspace on the "6" of "(206|) 555-1234"
        assert_eq!(get_updated_cursor_position("(206) 555-1234", "(205) 551-234", 4), 3);
    }

    #[test]
    fn deleting_inside_a_run_lands_at_its_start() {
        // backspace on the first "5" of "(206) 5|55-1234": the remaining fives
        // are taken as the untouched suffix, so the cursor goes to the run start
        assert_eq!(get_updated_cursor_position("(206) 555-1234", "(206) 551-234", 7), 4);
    }
}
