/*!
A small, flexible wildcard (glob) matcher.

`*` matches zero or more characters, `?` matches exactly one character except
the literal `.`. A match must cover the whole subject: there is no substring
search and no prefix mode.

## Features
- Full-string `?`/`*` matching with optional ASCII case insensitivity
- Generic over character sequences: `str`, `[u8]`, and (with the `encoding`
  feature) UTF-16/UTF-32 strings
- A reusable matcher that fixes the pattern and case mode once and applies
  them to any number of subjects
*/
//! ## Usage
//! ```
//! use wildglob::matcher::WildcardMatcher;
//!
//! let matcher = WildcardMatcher::builder("*.exe").case_insensitive(true).build();
//! assert!(matcher.is_match("aloha.EXE"));
//! assert!(!matcher.is_match("aloha.txt"));
//!
//! let matcher = WildcardMatcher::builder("ver??.txt").build();
//! assert!(matcher.is_match("ver92.txt"));
//! ```
/*!
## Semantics
Case-insensitive mode folds ASCII letters only: `a`–`z` and `A`–`Z` compare
equal pairwise, everything else compares exactly. There is no Unicode case
folding and no locale awareness.

`*` is resolved by lazy backtracking: each star first tries to consume
nothing and absorbs one more character only on failure. The cost is
O(|pattern| × |subject|) for well-behaved patterns but can grow exponentially
for adversarial runs of adjacent stars; callers matching untrusted patterns
can bound input lengths, or collapse star runs ahead of time with
[`syntax::glob::normalize`].

## Crate features
*/
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod matcher;
#[cfg(feature = "minimal")]
pub mod minimal;
#[cfg(feature = "syntax-glob")]
pub mod syntax;

mod private {
    pub trait Sealed {}
}
use private::Sealed;
