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

/// Marker standing in for an unfilled digit slot of a template. It is taken
/// from a CJK block so it never collides with punctuation found in patterns.
pub const DIGIT_PLACEHOLDER: char = '\u{7003}';

/// Numbers with fewer digits than this are echoed back without a mask.
pub const MIN_LENGTH_TO_FORMAT: usize = 3;

/// Probe used to size synthesized templates: every pattern is run against it
/// and the span it matches is the widest number the pattern can seat.
pub const LONGEST_NUMBER: &str = "999999999999999";
pub const LONGEST_NUMBER_DIGIT: char = '9';

/// Dial code map keys are at most this many digits long.
pub const MAX_DIAL_CODE_PROBE_LENGTH: usize = 6;

/// Dial code shared by the North American Numbering Plan regions.
pub const NANPA_DIAL_CODE: &str = "1";

pub const PLUS_SIGN: &str = "+";
pub const ICANN_SEPARATOR: &str = ".";

/// Alternation marker inside a pattern's raw `format`. Patterns carrying it
/// describe several layouts at once and are never used to build templates.
pub const FORMAT_ALTERNATION: char = '|';

/// Character classes such as `[2-9]` or `[013]`.
pub const CHARACTER_CLASS_PATTERN: &str = r"\[[^\[\]]*\]";
pub const DIGIT_CLASS: &str = r"\d";
