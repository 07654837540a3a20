//! The sequence algorithm: a greedy literal/`?` scan with lazy backtracking
//! at each `*`.
use crate::matcher::{compare::WildcardEq, encoding::CharUnit};

/// Matches `pattern` against `subject`, both taken in their entirety.
///
/// The algorithm has exactly two modes. Scanning: literal and `?` positions
/// consume one unit from each side in lock-step, deterministically; a
/// mismatch there is unrecoverable. Branching: each `*` is a choice point,
/// resolved shortest-first. The star first tries consuming nothing (one
/// recursive call with the pattern advanced past it, so recursion depth is
/// bounded by the star count), then absorbs one subject unit at a time and
/// retries; that retry is the loop below, not a fresh call.
///
/// Runs of adjacent ambiguous `*` can degrade toward O(|subject|^k), the
/// usual lazy backtracking tradeoff; collapse star runs ahead of time when
/// patterns are untrusted.
pub(crate) fn match_units<U, P, S>(mut pattern: P, mut subject: S, cmp: WildcardEq) -> bool
where
    U: CharUnit,
    P: Iterator<Item = U> + Clone,
    S: Iterator<Item = U> + Clone,
{
    loop {
        let mut pattern_rest = pattern.clone();
        let Some(p) = pattern_rest.next() else {
            // Out of pattern: a match only if the subject is spent too.
            return subject.next().is_none();
        };

        if p == U::STAR {
            // Shortest first: try the star consuming nothing.
            if match_units(pattern_rest, subject.clone(), cmp) {
                return true;
            }
            // Nothing left for the star to absorb.
            if subject.next().is_none() {
                return false;
            }
            // The star absorbed one more unit; `pattern` still points at it.
        } else {
            let mut subject_rest = subject.clone();
            match subject_rest.next() {
                Some(s) if cmp.eq(p, s) => {
                    pattern = pattern_rest;
                    subject = subject_rest;
                }
                _ => return false,
            }
        }
    }
}
