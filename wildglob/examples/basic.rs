use wildglob::matcher::WildcardMatcher;

fn main() {
    let matcher = WildcardMatcher::builder("*.exe").case_insensitive(true).build();
    assert!(matcher.is_match("aloha.EXE"));
    assert!(!matcher.is_match("aloha.txt"));

    let matcher = WildcardMatcher::builder("ver??.txt").build();
    assert!(matcher.is_match("ver92.txt"));
    assert!(!matcher.is_match("ver9.txt"));

    let matcher = WildcardMatcher::builder("a*b*c").build();
    assert!(matcher.is_match("axxxbxxc"));
    assert!(!matcher.is_match("axxxxxxc"));

    // `?` matches any single character except `.`.
    assert!(!WildcardMatcher::builder("a?c").build().is_match("a.c"));
}
