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

use regex::Captures;

/// Removes every character that is not an ASCII digit.
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Appends `template` to `dst`, substituting group references the way the
/// region data expects them to behave: `$1`..`$99` (two digits only when the
/// regex has that many groups), `$&` for the whole match and `$$` for a
/// literal dollar. Anything else after a `$` is copied as is.
///
/// The data is not fed to `Regex::replace` directly because `regex` reads
/// `$1x` as a group named `1x`.
pub fn expand_replacement(caps: &Captures<'_>, template: &str, dst: &mut String) {
    let group_count = caps.len() - 1;
    let bytes = template.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'$' || i + 1 == bytes.len() {
            // `$` is ascii, so `i` is always a char boundary here
            let next = template[i..].chars().next().unwrap_or_default();
            dst.push(next);
            i += next.len_utf8().max(1);
            continue;
        }
        match bytes[i + 1] {
            b'$' => {
                dst.push('$');
                i += 2;
            }
            b'&' => {
                dst.push_str(caps.get(0).map_or("", |m| m.as_str()));
                i += 2;
            }
            b'0'..=b'9' => {
                let first = usize::from(bytes[i + 1] - b'0');
                let two_digit = bytes
                    .get(i + 2)
                    .filter(|b| b.is_ascii_digit())
                    .map(|b| first * 10 + usize::from(b - b'0'))
                    .filter(|group| (1..=group_count).contains(group));
                if let Some(group) = two_digit {
                    dst.push_str(caps.get(group).map_or("", |m| m.as_str()));
                    i += 3;
                } else if (1..=group_count).contains(&first) {
                    dst.push_str(caps.get(first).map_or("", |m| m.as_str()));
                    i += 2;
                } else {
                    dst.push('$');
                    i += 1;
                }
            }
            _ => {
                dst.push('$');
                i += 1;
            }
        }
    }
}

/// Replaces every digit literal that is followed by two characters, neither
/// of which is `,` or `}`, with `\d`. Digits inside `{m}`/`{m,n}` quantifiers
/// are left alone, so `(9\d{2})(\d{3,4})` becomes `(\d\d{2})(\d{3,4})`.
pub fn widen_standalone_digits(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut widened = String::with_capacity(pattern.len() + 8);
    for (i, &c) in chars.iter().enumerate() {
        let standalone = chars
            .get(i + 1..i + 3)
            .is_some_and(|next| next.iter().all(|n| *n != ',' && *n != '}'));
        if c.is_ascii_digit() && standalone {
            widened.push_str(r"\d");
        } else {
            widened.push(c);
        }
    }
    widened
}
