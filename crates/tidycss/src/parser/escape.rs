//! Backslash escape decoding.

use tidycss_data::CssData;

const MAX_HEX_DIGITS: usize = 6;

/// Outcome of decoding one escape sequence.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Escape {
    /// Text to append in place of the sequence.
    pub text: String,
    /// Index of the first character not consumed by the sequence.
    pub next: usize,
    /// Hex digits and the character they were replaced with.
    pub substituted: Option<(String, char)>,
    /// Whether a redundant backslash was dropped.
    pub removed_backslash: bool,
    /// Newlines consumed as the whitespace terminator.
    pub newlines: u32,
}

/// Decode the escape whose backslash sits at `backslash`.
///
/// Up to six hex digits are consumed, followed by at most one whitespace
/// terminator. Code points naming an ASCII letter or digit are replaced by
/// that character; every other sequence is kept verbatim. The terminator is
/// handed back when the sequence is kept and a hex digit follows it, so the
/// two never fuse on output.
pub(crate) fn decode(
    chars: &[char],
    backslash: usize,
    data: &CssData,
    remove_redundant: bool,
) -> Escape {
    let start = backslash + 1;
    let digits: String = chars[start.min(chars.len())..]
        .iter()
        .take(MAX_HEX_DIGITS)
        .take_while(|c| c.is_ascii_hexdigit())
        .collect();
    let mut next = start + digits.len();

    let mut terminator = None;
    if let Some(&c) = chars.get(next)
        && data.is_whitespace(c)
    {
        terminator = Some(c);
        next += 1;
    }

    let mut escape = Escape::default();
    match alphanumeric(&digits) {
        Some(c) => {
            escape.text.push(c);
            escape.substituted = Some((digits, c));
        }
        None => {
            escape.text.push('\\');
            escape.text.push_str(&digits);
        }
    }

    if escape.substituted.is_none()
        && terminator.is_some()
        && chars.get(next).is_some_and(char::is_ascii_hexdigit)
    {
        terminator = None;
        next -= 1;
    }

    if terminator == Some('\n') {
        escape.newlines = 1;
    }

    if remove_redundant
        && escape.text == "\\"
        && chars.get(next).is_some_and(|&c| !data.is_token_char(c))
    {
        escape.text.clear();
        escape.removed_backslash = true;
    }

    escape.next = next;
    escape
}

/// Character named by `digits`, when it is an ASCII letter or digit.
fn alphanumeric(digits: &str) -> Option<char> {
    if digits.is_empty() {
        return None;
    }
    let code = u32::from_str_radix(digits, 16).ok()?;
    char::from_u32(code).filter(char::is_ascii_alphanumeric)
}
