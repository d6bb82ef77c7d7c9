use std::borrow::Cow;

/// Internal pattern matching API used to isolate the underlying regex
/// implementation of the formatter and allow different implementations to
/// be swapped in easily.
///
/// Patterns come straight from region metadata. Implementations never fail:
/// a pattern that cannot be compiled is reported and treated as one that
/// does not match.
pub(crate) trait MatcherApi: Send + Sync {
    /// Returns whether the leftmost match of `pattern` in `number` starts at
    /// index 0.
    fn match_leading_digits(&self, number: &str, pattern: &str) -> bool;

    /// Returns whether `pattern` accepts the whole of `number`.
    fn match_whole_number(&self, number: &str, pattern: &str) -> bool;

    /// Returns the leftmost span of `haystack` matched by `pattern`.
    fn find_first<'a>(&self, haystack: &'a str, pattern: &str) -> Option<&'a str>;

    /// Substitutes the first match of `pattern` in `number` through
    /// `replacement` (which uses `$n` group references).
    fn replace_first<'a>(&self, number: &'a str, pattern: &str, replacement: &str) -> Cow<'a, str>;

    /// Same as [`MatcherApi::replace_first`] for every non-overlapping match.
    fn replace_all<'a>(&self, number: &'a str, pattern: &str, replacement: &str) -> Cow<'a, str>;
}
