/// Takes the owned value out of a `Cow`, or falls back to `$default` when the
/// `Cow` is borrowed.
///
/// Regex replacements hand back `Cow::Borrowed` when nothing was replaced.
/// In that case the input is still the right answer, so the input itself is
/// reused instead of copying the borrowed slice:
///
/// ```ignore
/// number = owned_from_cow_or!(regex.replace(&number, ""), number);
/// ```
macro_rules! owned_from_cow_or {
    ($getcow:expr, $default:expr) => {{
        if let std::borrow::Cow::Owned(s) = $getcow {
            s
        } else {
            $default
        }
    }};
}

pub(crate) use owned_from_cow_or;
