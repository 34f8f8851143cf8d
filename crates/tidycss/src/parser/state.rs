//! Lexer modes and the scope they share.

/// Current lexer mode.
///
/// Sub-lexers own their partial text and the mode to resume, so a string
/// or comment can only ever return to the mode that opened it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Reading a block at-rule header such as `@media screen`.
    AtHeader,
    /// Reading a selector, or between rules.
    Selector,
    /// Reading a property name inside a block.
    Property,
    /// Reading a declaration value.
    Value(ValueBuffer),
    /// Inside a quoted string or a parenthesized group.
    Quoted(Quoted),
    /// Inside a `/* */` comment.
    Comment(Comment),
}

/// Text gathered while scanning one rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Scope {
    /// Header of the enclosing block at-rule, empty at top level.
    pub at: String,
    pub selector: String,
    /// Byte offsets just past each comma of `selector`.
    pub separators: Vec<usize>,
    pub property: String,
    /// Set while inside an unrecognized `@` keyword.
    pub invalid_at: bool,
}

impl Scope {
    pub(crate) fn reset_rule(&mut self) {
        self.selector.clear();
        self.separators.clear();
        self.property.clear();
    }
}

/// Value being assembled, split at unquoted whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ValueBuffer {
    pub current: String,
    pub parts: Vec<String>,
}

impl ValueBuffer {
    /// Move the trimmed current sub-value into `parts` if it has content.
    pub(crate) fn flush(&mut self) {
        let trimmed = self.current.trim();
        if !trimmed.is_empty() {
            self.parts.push(trimmed.to_string());
        }
        self.current.clear();
    }

    /// Flush and join all sub-values with single spaces.
    pub(crate) fn finish(mut self) -> (String, Vec<String>) {
        self.flush();
        (self.parts.join(" "), self.parts)
    }
}

/// An open string or parenthesized group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Quoted {
    /// Character that ends the group.
    pub close: char,
    /// Text so far, including the opening character.
    pub text: String,
    /// Quote character of a string nested inside parentheses.
    pub nested: Option<char>,
    /// Keep the quotes even when the content has no whitespace.
    pub keep_quotes: bool,
    /// Whitespace run inside parentheses not yet known to be padding.
    pub pending: String,
    /// Lines of the bare newlines repaired in `pending`.
    pub pending_newlines: Vec<u32>,
    pub resume: Box<Mode>,
}

impl Quoted {
    pub(crate) fn new(open: char, keep_quotes: bool, resume: Mode) -> Self {
        let close = if open == '(' { ')' } else { open };
        Self {
            close,
            text: open.to_string(),
            nested: None,
            keep_quotes,
            pending: String::new(),
            pending_newlines: Vec::new(),
            resume: Box::new(resume),
        }
    }

    pub(crate) fn is_paren(&self) -> bool {
        self.close == ')'
    }
}

/// An open comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Comment {
    pub text: String,
    pub resume: Box<Mode>,
}

impl Comment {
    pub(crate) fn new(resume: Mode) -> Self {
        Self {
            text: String::new(),
            resume: Box::new(resume),
        }
    }
}
