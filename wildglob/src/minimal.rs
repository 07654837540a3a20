/*!
Minimal APIs that can be used in one call.

## Example
```
// cargo add wildglob --features minimal
assert!(wildglob::minimal::is_match("a*c", "abc", false));
assert!(wildglob::minimal::is_match("*.exe", "aloha.EXE", true));
```
*/
use crate::matcher::WildcardMatcher;

/// Tests `haystack`, taken in its entirety, against `pattern` in one call.
///
/// Equivalent to building a [`WildcardMatcher`] and calling
/// [`is_match()`](WildcardMatcher::is_match) once. Prefer the matcher when
/// the same pattern is applied to many subjects.
pub fn is_match(pattern: &str, haystack: &str, case_insensitive: bool) -> bool {
    WildcardMatcher::builder(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .is_match(haystack)
}
