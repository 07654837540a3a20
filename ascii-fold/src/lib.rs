//! ASCII case utils.
/*!
## Features
- Single-bit [`fold_lower()`](case::AsciiCaseFold::fold_lower) over all fixed-width code unit types
- [`is_ascii_alpha()`](case::AsciiCaseFold::is_ascii_alpha) gating for fold-based comparisons

## Crate features
*/
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]

#[cfg(feature = "case-fold")]
pub mod case;
