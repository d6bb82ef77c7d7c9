use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use super::helper_constants::{
    CHARACTER_CLASS_PATTERN, DIGIT_CLASS, DIGIT_PLACEHOLDER, LONGEST_NUMBER_DIGIT,
};
use crate::string_util::widen_standalone_digits;

static CHARACTER_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(CHARACTER_CLASS_PATTERN).unwrap()
});

/// Turns a pattern's `match` regex into the form it is probed with when a
/// template is synthesized: every character class and every standalone digit
/// literal accepts any digit, so the probe made of nines can match it.
///
/// `([2-9]\d{2})(\d{3})` becomes `(\d\d{2})(\d{3})`.
pub fn template_probe_pattern(match_pattern: &str) -> String {
    let classes_widened = CHARACTER_CLASS.replace_all(match_pattern, NoExpand(DIGIT_CLASS));
    widen_standalone_digits(&classes_widened)
}

/// Replaces every digit of a grouped probe with [`DIGIT_PLACEHOLDER`].
pub(super) fn placeholders_for_probe_digits(grouped_probe: &str) -> String {
    grouped_probe
        .chars()
        .map(|c| if c == LONGEST_NUMBER_DIGIT { DIGIT_PLACEHOLDER } else { c })
        .collect()
}

/// Template without any decoration, one slot per character of `number`.
pub(super) fn bare_template(number: &str) -> String {
    number.chars().map(|_| DIGIT_PLACEHOLDER).collect()
}

/// Fills `template` with the digits of `number`.
///
/// Every [`DIGIT_PLACEHOLDER`] takes the next digit, every other character is
/// copied as is. Output stops as soon as the digits run out, so a partial
/// number never ends with dangling decoration; digits that do not fit in
/// the template are dropped.
///
/// `position` is a cursor given as a number of digits. Each literal written
/// while no more than `position` digits have been consumed pushes it one to
/// the right, so on return it points at the same digit inside the mask.
pub fn apply_template(number: &str, template: &str, position: &mut usize) -> String {
    let mut digits = number.chars();
    let mut remaining = number.chars().count();
    let mut consumed = 0;
    let original_position = *position;
    let mut masked = String::with_capacity(template.len());

    for c in template.chars() {
        if remaining == 0 {
            break;
        }
        if c == DIGIT_PLACEHOLDER {
            if let Some(digit) = digits.next() {
                masked.push(digit);
            }
            consumed += 1;
            remaining -= 1;
        } else {
            masked.push(c);
            if consumed <= original_position {
                *position += 1;
            }
        }
    }
    masked
}

#[cfg(test)]
mod tests {
    use super::{apply_template, bare_template, placeholders_for_probe_digits, template_probe_pattern};
    use crate::phoneinput::helper_constants::DIGIT_PLACEHOLDER;

    fn template(shape: &str) -> String {
        shape.replace('.', &DIGIT_PLACEHOLDER.to_string())
    }

    #[test]
    fn probe_pattern_widens_classes_and_literals() {
        assert_eq!(template_probe_pattern(r"([2-9]\d{2})(\d{3})(\d{4})"), r"(\d\d{2})(\d{3})(\d{4})");
        assert_eq!(template_probe_pattern(r"(1[0-2]\d)(\d{3,4})"), r"(\d\d\d)(\d{3,4})");
        assert_eq!(template_probe_pattern(r"(\d{2})(\d{4})"), r"(\d{2})(\d{4})");
    }

    #[test]
    fn placeholders_replace_probe_digits_only() {
        assert_eq!(placeholders_for_probe_digits("(999) 999-9999"), template("(...) ...-...."));
        assert_eq!(bare_template("2065"), template("...."));
        assert_eq!(bare_template(""), "");
    }

    #[test]
    fn stops_when_digits_run_out() {
        let mut position = 0;
        assert_eq!(apply_template("206", &template("(...) ...-...."), &mut position), "(206");
        assert_eq!(apply_template("2065", &template("(...) ...-...."), &mut 0), "(206) 5");
        assert_eq!(apply_template("", &template("(...) ...-...."), &mut 0), "");
    }

    #[test]
    fn drops_digits_beyond_template() {
        assert_eq!(apply_template("20655512345", &template("(...) ...-...."), &mut 0), "(206) 555-1234");
    }

    #[test]
    fn cursor_moves_past_decoration_before_its_digit() {
        // cursor in front of the first digit only skips the opening paren
        let mut position = 0;
        apply_template("2065551234", &template("(...) ...-...."), &mut position);
        assert_eq!(position, 1);

        // after the third digit, ") " comes before the fourth one
        let mut position = 3;
        assert_eq!(apply_template("2065", &template("(...) ...-...."), &mut position), "(206) 5");
        assert_eq!(position, 6);

        // after the last digit, every literal has been passed
        let mut position = 10;
        apply_template("2065551234", &template("(...) ...-...."), &mut position);
        assert_eq!(position, 14);
    }
}
