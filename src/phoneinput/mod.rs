pub(crate) mod helper_constants;
pub(crate) mod helper_functions;
pub mod cursor;
pub mod enums;
pub mod errors;
pub mod phone_input;
pub(self) mod helper_types;

use std::sync::LazyLock;

pub use cursor::{
    get_updated_cursor_position, index_of_longest_common_suffix, index_of_strict_subsequence_end,
    non_digits_at_start, num_digits_before_index, unmask,
};
pub use enums::PhoneNumberFormat;
pub use errors::{InvalidRegexError, MetadataError};
pub use helper_constants::{DIGIT_PLACEHOLDER, MIN_LENGTH_TO_FORMAT};
pub use helper_functions::apply_template;
pub use helper_types::ProcessedNumber;
pub use phone_input::PhoneInput;

/// Engine over the region data compiled into the crate.
pub static PHONE_INPUT: LazyLock<PhoneInput> = LazyLock::new(|| {
    PhoneInput::new()
});
