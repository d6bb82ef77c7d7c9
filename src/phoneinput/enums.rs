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

use strum::EnumIter;

/// Output representations of a typed number.
///
/// For the Seattle number `2065551234` typed into a United States field:
/// - **Masked**: `(206) 555-1234`
/// - **E164**: `+12065551234`
/// - **Icann**: `+1.2065551234`
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// **Display mask.**
    /// The number as it is shown in an input while it is being typed. Partial
    /// numbers are masked as far as their digits go.
    Masked,
    /// **E.164 format.**
    /// A `+`, the dial code of the region and the national number, without
    /// any punctuation.
    E164,
    /// **ICANN format.**
    /// Used by domain registries: `+CC.NNNN`. Territories of a shared
    /// numbering plan put their area code right after the dot, e.g.
    /// `+1.2685551234` for Antigua.
    Icann,
}
