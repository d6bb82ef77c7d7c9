//! Phone number input masking.
//!
//! Given raw keystrokes and per-region dialing rules, this crate infers the
//! region a partially typed number belongs to, renders its digits into the
//! punctuated mask of that region, and keeps the text cursor on the same digit
//! when the mask changes under it.

mod interfaces;
mod phoneinput;
mod regexp_cache;
mod regex_based_matcher;
pub mod metadata;
pub(crate) mod regex_util;
pub(crate) mod string_util;

/// Boilerplate that reads better as a named macro than as a few lines of
/// code repeated at every call site.
mod macros;

#[cfg(test)]
mod tests;

pub use metadata::{DialCodeMap, Metadata, Pattern, Region, RegionDirectory};
pub use phoneinput::{
    DIGIT_PLACEHOLDER, InvalidRegexError, MIN_LENGTH_TO_FORMAT, MetadataError, PHONE_INPUT,
    PhoneInput, PhoneNumberFormat, ProcessedNumber, apply_template, get_updated_cursor_position,
    index_of_longest_common_suffix, index_of_strict_subsequence_end, non_digits_at_start,
    num_digits_before_index, unmask,
};
pub use string_util::strip_non_digits;
