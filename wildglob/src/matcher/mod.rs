/*!
The wildcard matcher: fixes a pattern and a case mode once, then tests any
number of subjects against them.

## Example
```
use wildglob::matcher::WildcardMatcher;

let m = WildcardMatcher::builder("a*b*c").build();
assert!(m.is_match("axxxbxxc"));
assert!(!m.is_match("axxxxxxc"));
```
*/
use bon::Builder;

mod compare;
pub mod encoding;
mod scan;

use compare::WildcardEq;
use encoding::EncodedStr;

/// A wildcard pattern with a fixed case mode, reusable across subjects.
///
/// `*` matches zero or more characters, `?` matches exactly one character
/// except the literal `.`, and everything else matches itself. The whole
/// subject must be covered for [`is_match()`](WildcardMatcher::is_match) to
/// return `true`.
///
/// Building one is cheap (a borrow and a bool): there is no compilation
/// step, so this type exists to fix the pattern and mode once rather than to
/// cache parsing work. It borrows the pattern and owns nothing else, which
/// also makes it trivially shareable across threads.
#[derive(Builder, Clone, Copy)]
pub struct WildcardMatcher<'p, PatternStr = str>
where
    PatternStr: EncodedStr + ?Sized,
{
    #[builder(start_fn)]
    pattern: &'p PatternStr,

    /// Fold ASCII letters when comparing literal and `?` positions.
    ///
    /// Folding is strictly gated on both sides being ASCII letters;
    /// non-letter characters never cross-match.
    #[builder(default = false)]
    case_insensitive: bool,
}

impl<'p, Str> WildcardMatcher<'p, Str>
where
    Str: EncodedStr + ?Sized,
{
    /// Tests `haystack`, taken in its entirety, against the pattern.
    ///
    /// Pure and total: same inputs always produce the same bool. Empty
    /// strings, metacharacter-only patterns and subjects that happen to
    /// contain `*` or `?` are all ordinary inputs with deterministic
    /// answers.
    #[cfg_attr(feature = "perf-inline", inline)]
    pub fn is_match(&self, haystack: &Str) -> bool {
        scan::match_units(
            self.pattern.units(),
            haystack.units(),
            WildcardEq {
                case_insensitive: self.case_insensitive,
            },
        )
    }

    pub fn pattern(&self) -> &'p Str {
        self.pattern
    }

    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }
}
