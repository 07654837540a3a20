/*!
glob()-style pattern syntax support: `?` and `*`.

The matcher consumes patterns as plain character sequences and needs no
parsing step; this module is for callers that want to look at a pattern
before matching with it: tokenize it, test it for wildcards, or collapse
redundant `*` runs.

## Example
```
// cargo add wildglob --features syntax-glob
use wildglob::syntax::glob::{has_wildcard, normalize};

assert!(has_wildcard("*.exe"));
assert!(!has_wildcard("readme.md"));
assert_eq!(normalize("***abc***"), "*abc*");
```
*/
use alloc::borrow::Cow;
use alloc::string::String;

use logos::Logos;

#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum WildcardToken {
    /// Matches any single character except `.`.
    #[token("?")]
    Any,

    /// Matches any run of characters, including the empty one.
    #[token("*")]
    Star,

    /// Plain text.
    #[regex("[^*?]+")]
    Text,
}

/// Whether `pattern` contains `*` or `?` at all.
///
/// Patterns without wildcards only ever match themselves, so callers keeping
/// large rule sets can route them to a plain equality check.
pub fn has_wildcard(pattern: &str) -> bool {
    let mut lex = WildcardToken::lexer(pattern);
    while let Some(Ok(token)) = lex.next() {
        if !matches!(token, WildcardToken::Text) {
            return true;
        }
    }
    false
}

/// Collapses runs of adjacent `*` into a single `*`.
///
/// Adjacent stars match exactly what one star matches, but each adds a
/// backtracking choice point; normalizing ahead of time keeps the matcher at
/// one recursion frame per distinct star.
pub fn normalize(pattern: &str) -> Cow<'_, str> {
    if !pattern.contains("**") {
        return Cow::Borrowed(pattern);
    }

    let mut lex = WildcardToken::lexer(pattern);
    let mut out = String::with_capacity(pattern.len());
    let mut last_star = false;
    while let Some(Ok(token)) = lex.next() {
        match token {
            WildcardToken::Star if last_star => {}
            WildcardToken::Star => {
                out.push('*');
                last_star = true;
            }
            WildcardToken::Any => {
                out.push('?');
                last_star = false;
            }
            WildcardToken::Text => {
                out.push_str(lex.slice());
                last_star = false;
            }
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use crate::matcher::WildcardMatcher;

    use super::*;

    #[test]
    fn wildcard_token() {
        let input = "*text?more*?text end";
        let mut lexer = WildcardToken::lexer(input);
        assert_eq!(lexer.next(), Some(Ok(WildcardToken::Star)));
        assert_eq!(lexer.next(), Some(Ok(WildcardToken::Text)));
        assert_eq!(lexer.next(), Some(Ok(WildcardToken::Any)));
        assert_eq!(lexer.next(), Some(Ok(WildcardToken::Text)));
        assert_eq!(lexer.next(), Some(Ok(WildcardToken::Star)));
        assert_eq!(lexer.next(), Some(Ok(WildcardToken::Any)));
        assert_eq!(lexer.next(), Some(Ok(WildcardToken::Text)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn wildcard_detection() {
        assert!(has_wildcard("*"));
        assert!(has_wildcard("a?c"));
        assert!(has_wildcard("ver??.txt"));
        assert!(!has_wildcard(""));
        assert!(!has_wildcard("readme.md"));
    }

    #[test]
    fn star_runs_collapse() {
        assert_eq!(normalize("***abc***"), "*abc*");
        assert_eq!(normalize("a**b"), "a*b");
        assert_eq!(normalize("**"), "*");
        // Borrowed when already normal.
        assert!(matches!(normalize("*a?c*"), Cow::Borrowed(_)));
        assert_eq!(normalize("*a?c*"), "*a?c*");
    }

    /// Normalization must not change what a pattern matches.
    #[test]
    fn normalize_preserves_matches() {
        let cases = [
            ("***abc***", "abc"),
            ("***a?c***", "xxxxxxxaxcxxxxxx"),
            ("a**b**c", "axxxbxxc"),
            ("a**b**c", "axxxxxxc"),
            ("**", ""),
            ("a**", "a.c"),
        ];
        for (pattern, subject) in cases {
            let normalized = normalize(pattern);
            let raw = WildcardMatcher::builder(pattern).build().is_match(subject);
            let norm = WildcardMatcher::builder(normalized.as_ref())
                .build()
                .is_match(subject);
            assert_eq!(raw, norm, "{pattern:?} vs {normalized:?} on {subject:?}");
        }
    }
}
