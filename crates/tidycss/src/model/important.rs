//! `!important` detection.

use tidycss_data::WHITESPACE;

const IMPORTANT: &str = "!important";

/// Whether `value` ends in `!important`, ignoring CSS whitespace and ASCII
/// case.
///
/// ```
/// assert!(tidycss::model::is_important("red ! IMPORTANT"));
/// assert!(!tidycss::model::is_important("red"));
/// ```
pub fn is_important(value: &str) -> bool {
    let compact: Vec<char> = value.chars().filter(|c| !WHITESPACE.contains(c)).collect();
    if compact.len() < IMPORTANT.len() {
        return false;
    }
    compact[compact.len() - IMPORTANT.len()..]
        .iter()
        .zip(IMPORTANT.chars())
        .all(|(a, b)| a.eq_ignore_ascii_case(&b))
}

/// `value` without its `!important` suffix.
///
/// Values that are not important are returned trimmed of CSS whitespace and
/// otherwise untouched.
pub fn strip_important(value: &str) -> &str {
    let value = value.trim_matches(WHITESPACE);
    if !is_important(value) {
        return value;
    }
    // Walk back over "important" (9 letters, possibly spaced), then the '!'.
    let mut letters = 0;
    let mut cut = value.len();
    for (idx, c) in value.char_indices().rev() {
        if WHITESPACE.contains(&c) {
            continue;
        }
        if letters < IMPORTANT.len() - 1 {
            letters += 1;
            continue;
        }
        if c == '!' {
            cut = idx;
        }
        break;
    }
    value[..cut].trim_end_matches(WHITESPACE)
}
