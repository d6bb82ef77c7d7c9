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

/// A raw number split into what is shown in front of the mask and the
/// national significant number the mask is built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedNumber<'a> {
    /// Digits only, without dial code or national prefix.
    pub national_number: String,
    /// `+44 `, `1 `, a national prefix such as `0`, or nothing.
    pub prefix: Cow<'a, str>,
}

impl<'a> ProcessedNumber<'a> {
    pub fn new(national_number: String, prefix: Cow<'a, str>) -> Self {
        Self { national_number, prefix }
    }
}
