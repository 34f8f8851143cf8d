//! Structural token stream captured in raw-preservation mode.

use std::fmt;

/// Kind of a structural parse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Comment,
    AtStart,
    AtEnd,
    SelectorStart,
    SelectorEnd,
    SelectorSeparators,
    Property,
    Value,
}

/// A structural parse event.
///
/// Comments keep their raw text and separator markers their raw offsets;
/// every other payload is trimmed when the token is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Body of a `/* ... */` comment, without the delimiters.
    Comment(String),
    /// Header of a block at-rule, e.g. `@media screen`.
    AtStart(String),
    /// Close of a block at-rule, carrying its header.
    AtEnd(String),
    /// Selector text at `{`.
    SelectorStart(String),
    /// Selector text at the closing `}`.
    SelectorEnd(String),
    /// Comma offsets of the selector that just opened.
    SelectorSeparators(Vec<usize>),
    /// Property name at `:`.
    Property(String),
    /// Finalized declaration value.
    Value(String),
}

impl Token {
    /// Build a text-carrying token with its payload trimmed.
    ///
    /// ```
    /// use tidycss::Token;
    ///
    /// let token = Token::trimmed(Token::Property, " color ");
    /// assert_eq!(token, Token::Property("color".into()));
    /// ```
    pub fn trimmed(make: fn(String) -> Self, text: &str) -> Self {
        make(text.trim().to_string())
    }

    /// The kind of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Comment(_) => TokenKind::Comment,
            Self::AtStart(_) => TokenKind::AtStart,
            Self::AtEnd(_) => TokenKind::AtEnd,
            Self::SelectorStart(_) => TokenKind::SelectorStart,
            Self::SelectorEnd(_) => TokenKind::SelectorEnd,
            Self::SelectorSeparators(_) => TokenKind::SelectorSeparators,
            Self::Property(_) => TokenKind::Property,
            Self::Value(_) => TokenKind::Value,
        }
    }

    /// Text payload, if this kind carries text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Comment(t)
            | Self::AtStart(t)
            | Self::AtEnd(t)
            | Self::SelectorStart(t)
            | Self::SelectorEnd(t)
            | Self::Property(t)
            | Self::Value(t) => Some(t),
            Self::SelectorSeparators(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectorSeparators(offsets) => write!(f, "{:?} {offsets:?}", self.kind()),
            other => write!(f, "{:?} {:?}", other.kind(), other.as_text().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_payloads() {
        let token = Token::trimmed(Token::SelectorStart, "  a, b ");
        assert_eq!(token, Token::SelectorStart("a, b".into()));
        assert_eq!(token.kind(), TokenKind::SelectorStart);

        let token = Token::Comment(" keep me ".into());
        assert_eq!(token.as_text(), Some(" keep me "));
    }

    #[test]
    fn separators_are_not_text() {
        let token = Token::SelectorSeparators(vec![2, 4]);
        assert_eq!(token.kind(), TokenKind::SelectorSeparators);
        assert_eq!(token.as_text(), None);
        assert_eq!(token.to_string(), "SelectorSeparators [2, 4]");
    }
}
