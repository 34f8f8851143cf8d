//! Scan cursor over normalized input.

/// Character cursor over the input plus its trailing sentinel.
///
/// `\r\n` pairs are folded to `\n` and a single space is appended, so every
/// state sees at least one character after the last real one. Escape parity
/// is computed once up front.
pub(crate) struct Cursor {
    chars: Vec<char>,
    /// `escaped[i]` is set when an odd number of backslashes precede `i`.
    escaped: Vec<bool>,
    pos: usize,
}

impl Cursor {
    pub(crate) fn new(input: &str) -> Self {
        let mut chars: Vec<char> = input.replace("\r\n", "\n").chars().collect();
        chars.push(' ');
        let escaped = escape_parity(&chars);
        Self {
            chars,
            escaped,
            pos: 0,
        }
    }

    pub(crate) fn chars(&self) -> &[char] {
        &self.chars
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn set_pos(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub(crate) fn current(&self) -> Option<char> {
        self.at(self.pos)
    }

    pub(crate) fn at(&self, idx: usize) -> Option<char> {
        self.chars.get(idx).copied()
    }

    /// Character after the current one.
    pub(crate) fn peek(&self) -> Option<char> {
        self.at(self.pos + 1)
    }

    /// Character before the current one.
    pub(crate) fn prev(&self) -> Option<char> {
        self.pos.checked_sub(1).and_then(|idx| self.at(idx))
    }

    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    pub(crate) fn skip(&mut self, n: usize) {
        self.pos += n;
    }

    /// Whether the cursor sits on the sentinel.
    pub(crate) fn is_last(&self) -> bool {
        self.pos + 1 == self.chars.len()
    }

    /// Whether the character at `idx` is escaped.
    pub(crate) fn is_escaped(&self, idx: usize) -> bool {
        self.escaped.get(idx).copied().unwrap_or(false)
    }

    /// Whether `word` occurs at `idx`, ignoring ASCII case.
    pub(crate) fn matches_ignore_case(&self, idx: usize, word: &str) -> bool {
        let mut at = idx;
        for expected in word.chars() {
            match self.at(at) {
                Some(c) if c.eq_ignore_ascii_case(&expected) => at += 1,
                _ => return false,
            }
        }
        true
    }
}

/// Escape flag of every position: set when an odd number of backslashes
/// immediately precede it.
fn escape_parity(chars: &[char]) -> Vec<bool> {
    let mut run = 0usize;
    chars
        .iter()
        .map(|&c| {
            let escaped = run % 2 == 1;
            run = if c == '\\' { run + 1 } else { 0 };
            escaped
        })
        .collect()
}

/// Whether `buf` ends with an unescaped `c`.
pub(crate) fn ends_with_unescaped(buf: &str, c: char) -> bool {
    let mut rev = buf.chars().rev();
    if rev.next() != Some(c) {
        return false;
    }
    rev.take_while(|&p| p == '\\').count() % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_crlf_and_appends_sentinel() {
        let cursor = Cursor::new("a\r\nb");
        assert_eq!(cursor.chars(), &['a', '\n', 'b', ' ']);
    }

    #[test]
    fn escape_parity_counts_preceding_backslashes() {
        let cursor = Cursor::new(r#"a\"b\\"c\\\"d"#);
        // a \ " b \ \ " c \ \ \ " d
        assert!(!cursor.is_escaped(0));
        assert!(cursor.is_escaped(2));
        assert!(!cursor.is_escaped(6));
        assert!(cursor.is_escaped(11));
        assert!(!cursor.is_escaped(12));
        assert!(!cursor.is_escaped(400));
    }

    #[test]
    fn long_backslash_runs() {
        let even = format!("{}\"", "\\".repeat(100_000));
        let cursor = Cursor::new(&even);
        assert!(!cursor.is_escaped(100_000));
        assert!(cursor.is_escaped(99_999));

        let odd = format!("\\{even}");
        assert!(Cursor::new(&odd).is_escaped(100_001));
    }

    #[test]
    fn unescaped_suffix() {
        assert!(ends_with_unescaped("a,", ','));
        assert!(!ends_with_unescaped("a\\,", ','));
        assert!(ends_with_unescaped("a\\\\,", ','));
        assert!(!ends_with_unescaped("", ','));
    }

    #[test]
    fn keyword_match_ignores_case() {
        let cursor = Cursor::new("@MeDia screen");
        assert!(cursor.matches_ignore_case(1, "media"));
        assert!(!cursor.matches_ignore_case(1, "mediaz"));
        assert!(!cursor.matches_ignore_case(40, "media"));
    }
}
