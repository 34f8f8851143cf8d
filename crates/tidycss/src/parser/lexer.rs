//! Character-level state machine.
//!
//! The lexer walks the input once. Each step looks at one character in the
//! light of the current [`Mode`] and returns the next mode. Declarations are
//! committed to the document as soon as their value ends; structural tokens
//! are only recorded in raw-preservation mode.

use tidycss_data::{AtRuleKind, CssData};

use super::cursor::{Cursor, ends_with_unescaped};
use super::escape;
use super::state::{Comment, Mode, Quoted, Scope, ValueBuffer};
use crate::config::ParseConfig;
use crate::logging::targets;
use crate::model::{DEFAULT_MEDIA, Severity, Stylesheet, Token};
use crate::pipeline::{DeclarationContext, DeclarationHook};

const MEDIA_KEYWORD: &str = "@media";

pub(crate) struct Lexer<'p, H: ?Sized> {
    pub(super) config: &'p ParseConfig,
    pub(super) data: &'p CssData,
    hook: &'p mut H,
    pub(super) cursor: Cursor,
    pub(super) line: u32,
    pub(super) scope: Scope,
    pub(super) sheet: Stylesheet,
    mode: Mode,
}

impl<'p, H: DeclarationHook + ?Sized> Lexer<'p, H> {
    pub(crate) fn new(
        css: &str,
        config: &'p ParseConfig,
        data: &'p CssData,
        hook: &'p mut H,
    ) -> Self {
        Self {
            config,
            data,
            hook,
            cursor: Cursor::new(css),
            line: 1,
            scope: Scope::default(),
            sheet: Stylesheet::default(),
            mode: Mode::Selector,
        }
    }

    /// Line the cursor is on.
    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    /// Process one character. Returns `false` once the input is exhausted.
    pub(crate) fn step(&mut self) -> bool {
        let Some(c) = self.cursor.current() else {
            return false;
        };
        if c == '\n' {
            self.line += 1;
        }

        let mode = std::mem::replace(&mut self.mode, Mode::Selector);
        self.mode = match mode {
            Mode::AtHeader => self.at_header(c),
            Mode::Selector => self.selector(c),
            Mode::Property => self.property(c),
            Mode::Value(buf) => self.value(c, buf),
            Mode::Quoted(group) => self.quoted(c, group),
            Mode::Comment(comment) => self.comment(c, comment),
        };
        self.cursor.advance();
        true
    }

    /// Finish the parse and hand back the result.
    pub(crate) fn finish(mut self) -> Stylesheet {
        let unterminated = match &self.mode {
            Mode::Quoted(group) if group.is_paren() => Some("Unterminated parenthesis"),
            Mode::Quoted(_) => Some("Unterminated string"),
            Mode::Comment(_) => Some("Unterminated comment"),
            _ => None,
        };
        if let Some(message) = unterminated {
            self.log(message, Severity::Warning);
        }
        tracing::debug!(
            target: targets::PARSER,
            lines = self.line,
            diagnostics = self.sheet.log.len(),
            "parse finished"
        );
        self.sheet
    }

    fn at_header(&mut self, c: char) -> Mode {
        if !self.is_token_here(c) {
            push_collapsed(self.data, &mut self.scope.at, c);
            return Mode::AtHeader;
        }

        match c {
            '/' if self.cursor.peek() == Some('*') => self.open_comment(Mode::AtHeader),
            '{' => {
                let start = Token::trimmed(Token::AtStart, &self.scope.at);
                self.emit(start);
                Mode::Selector
            }
            ',' => {
                trim_end_in_place(&mut self.scope.at);
                self.scope.at.push(',');
                Mode::AtHeader
            }
            '\\' => {
                let text = self.escape();
                self.scope.at.push_str(&text);
                Mode::AtHeader
            }
            _ => {
                self.scope.at.push(c);
                Mode::AtHeader
            }
        }
    }

    fn selector(&mut self, c: char) -> Mode {
        if !self.is_token_here(c) {
            push_collapsed(self.data, &mut self.scope.selector, c);
            return Mode::Selector;
        }

        match c {
            '/' if self.cursor.peek() == Some('*') => self.open_comment(Mode::Selector),
            '@' if self.scope.selector.trim().is_empty() => self.at_keyword(),
            '"' | '\'' => {
                let keep_quotes = self.cursor.prev() == Some('=');
                Mode::Quoted(Quoted::new(c, keep_quotes, Mode::Selector))
            }
            ';' if self.scope.invalid_at => {
                self.scope.invalid_at = false;
                self.scope.selector.clear();
                self.scope.separators.clear();
                Mode::Selector
            }
            ';' if self.scope.selector.trim().is_empty() => Mode::Selector,
            '{' => {
                let start = Token::trimmed(Token::SelectorStart, &self.scope.selector);
                self.emit(start);
                let separators = Token::SelectorSeparators(self.scope.separators.clone());
                self.emit(separators);
                Mode::Property
            }
            '}' => self.close_at_block(),
            ',' => {
                trim_end_in_place(&mut self.scope.selector);
                self.scope.selector.push(',');
                self.scope.separators.push(self.scope.selector.len());
                Mode::Selector
            }
            '\\' => {
                let text = self.escape();
                self.scope.selector.push_str(&text);
                Mode::Selector
            }
            '*' if matches!(self.cursor.peek(), Some('.' | '#' | '[' | ':')) => Mode::Selector,
            _ => {
                self.scope.selector.push(c);
                Mode::Selector
            }
        }
    }

    /// Handle an `@` at the start of a selector.
    fn at_keyword(&mut self) -> Mode {
        let start = self.cursor.pos() + 1;
        let cursor = &self.cursor;
        let found = self
            .data
            .longest_at_rule(|name| cursor.matches_ignore_case(start, name))
            .map(|(name, kind)| (name.to_string(), kind));

        let Some((name, kind)) = found else {
            return self.invalid_at_keyword(start);
        };

        self.cursor.skip(name.chars().count());
        let keyword = format!("@{name}");
        tracing::trace!(target: targets::PARSER, line = self.line, %keyword, "at-rule");
        match kind {
            AtRuleKind::Block => {
                self.scope.at = keyword;
                Mode::AtHeader
            }
            AtRuleKind::SelectorLike => {
                self.scope.selector = keyword;
                Mode::Selector
            }
            AtRuleKind::Declaration => {
                self.scope.selector = keyword;
                Mode::Value(ValueBuffer::default())
            }
        }
    }

    fn invalid_at_keyword(&mut self, start: usize) -> Mode {
        let name: String = self.cursor.chars()[start..]
            .iter()
            .take_while(|c| c.is_ascii_alphanumeric() || **c == '-')
            .collect();
        let message = if self.config.discard_invalid_at_rules {
            format!("Invalid @-rule: {name} (removed)")
        } else {
            format!("Invalid @-rule: {name}")
        };
        self.log(message, Severity::Warning);
        self.scope.invalid_at = true;
        self.scope.selector = "@".to_string();
        Mode::Selector
    }

    /// `}` outside a rule: the enclosing at-rule block ends.
    fn close_at_block(&mut self) -> Mode {
        let end = Token::trimmed(Token::AtEnd, &self.scope.at);
        self.emit(end);
        self.scope.at.clear();
        self.scope.selector.clear();
        self.scope.separators.clear();
        Mode::Selector
    }

    fn property(&mut self, c: char) -> Mode {
        if !self.is_token_here(c) {
            if !self.data.is_whitespace(c) {
                self.scope.property.push(c);
            }
            return Mode::Property;
        }

        match c {
            ':' | '=' if !self.scope.property.is_empty() => {
                let name = self.scope.property.to_ascii_lowercase();
                if !self.config.discard_invalid_properties || self.is_valid_property(&name) {
                    let property = Token::trimmed(Token::Property, &self.scope.property);
                    self.emit(property);
                }
                Mode::Value(ValueBuffer::default())
            }
            '/' if self.cursor.peek() == Some('*') => self.open_comment(Mode::Property),
            '}' => {
                self.close_block();
                Mode::Selector
            }
            ';' => {
                self.scope.property.clear();
                Mode::Property
            }
            '\\' => {
                let text = self.escape();
                self.scope.property.push_str(&text);
                Mode::Property
            }
            _ => Mode::Property,
        }
    }

    fn value(&mut self, c: char, mut buf: ValueBuffer) -> Mode {
        let pos = self.cursor.pos();
        let implicit_end = (c == '\n' && self.property_follows(pos + 1)) || self.cursor.is_last();

        if !implicit_end && !self.is_token_here(c) {
            buf.current.push(c);
            if self.data.is_whitespace(c) {
                buf.flush();
            }
            return Mode::Value(buf);
        }

        if implicit_end {
            self.log("Added semicolon to the end of declaration", Severity::Warning);
            return self.end_declaration(buf, false);
        }

        match c {
            '/' if self.cursor.peek() == Some('*') => self.open_comment(Mode::Value(buf)),
            '"' | '\'' | '(' => Mode::Quoted(Quoted::new(c, false, Mode::Value(buf))),
            ',' => {
                let trimmed = buf.current.trim();
                buf.current = format!("{trimmed},");
                Mode::Value(buf)
            }
            '\\' => {
                let text = self.escape();
                buf.current.push_str(&text);
                Mode::Value(buf)
            }
            ';' => self.end_declaration(buf, false),
            '}' => self.end_declaration(buf, true),
            _ => {
                buf.current.push(c);
                Mode::Value(buf)
            }
        }
    }

    /// Whether a `name:` pair naming a known property starts at `start`.
    fn property_follows(&self, start: usize) -> bool {
        let mut name = String::new();
        for &c in self.cursor.chars().get(start..).unwrap_or_default() {
            match c {
                ':' => return self.data.is_known_property(&name.trim().to_ascii_lowercase()),
                c if c.is_ascii_alphanumeric() || c == '-' || self.data.is_whitespace(c) => {
                    name.push(c);
                }
                _ => return false,
            }
        }
        false
    }

    /// End the current declaration. `closes_block` is set when a `}` ended it.
    fn end_declaration(&mut self, buf: ValueBuffer, closes_block: bool) -> Mode {
        if let Some(rule) = self.declaration_at_rule() {
            let (_, parts) = buf.finish();
            self.route_side_output(&rule, parts);
            self.scope.reset_rule();
            return if closes_block {
                self.close_at_block()
            } else {
                Mode::Selector
            };
        }

        if !self.scope.selector.trim().is_empty() {
            self.commit_declaration(buf);
        }
        self.scope.property.clear();

        if closes_block {
            self.close_block();
            Mode::Selector
        } else {
            Mode::Property
        }
    }

    /// Single-declaration at-rule named by the current selector, lowercased.
    fn declaration_at_rule(&self) -> Option<String> {
        let name = self.scope.selector.strip_prefix('@')?;
        (self.data.at_rule(name) == Some(AtRuleKind::Declaration))
            .then(|| name.to_ascii_lowercase())
    }

    fn route_side_output(&mut self, rule: &str, parts: Vec<String>) {
        match rule {
            "charset" => {
                let first = parts.first().map(String::as_str).unwrap_or_default();
                self.sheet.charset = Some(format!("\"{first}\""));
            }
            "namespace" => self.sheet.namespace = Some(parts.join(" ")),
            "import" => self.sheet.imports.push(parts.join(" ")),
            other => {
                tracing::debug!(
                    target: targets::PARSER,
                    line = self.line,
                    "dropped @{other} declaration"
                );
                return;
            }
        }
        tracing::trace!(target: targets::PARSER, line = self.line, rule, "side output");
    }

    fn commit_declaration(&mut self, buf: ValueBuffer) {
        let media = self.media_key();
        let selector = self.selector_key(&self.scope.selector);
        let lower = self.scope.property.to_ascii_lowercase();
        let property = self.config.property_case.apply(&self.scope.property);
        let (mut value, _) = buf.finish();

        let context = DeclarationContext {
            media: &media,
            selector: &selector,
            property: &property,
        };
        self.hook.on_declaration(&context, &mut value);

        let valid = self.is_valid_property(&lower);
        let preserve = self.config.preserve_raw_input;
        let suppressed_by_at =
            self.scope.invalid_at && self.config.discard_invalid_at_rules && !preserve;
        let suppressed_by_property = self.config.discard_invalid_properties && !valid;

        if !suppressed_by_at && !suppressed_by_property {
            if !preserve {
                self.sheet
                    .document
                    .commit(&media, &selector, &self.scope.separators, &property, &value);
            }
            let token = Token::trimmed(Token::Value, &value);
            self.emit(token);
        }

        if !valid {
            let message = if self.config.discard_invalid_properties {
                format!("Removed invalid property: {property}")
            } else {
                format!(
                    "Invalid property in {}: {property}",
                    self.config.css_level.to_uppercase()
                )
            };
            self.log(message, Severity::Warning);
        }
    }

    fn is_valid_property(&self, lower: &str) -> bool {
        self.data.property_is_valid(lower, &self.config.css_level)
    }

    /// Media context key for the current rule.
    ///
    /// An `@media` block is keyed by its condition (`screen`). Any other
    /// block at-rule keeps its full header, so `@supports` and `@media`
    /// conditions never share a key.
    pub(super) fn media_key(&self) -> String {
        let at = self.scope.at.trim();
        if at.is_empty() {
            return DEFAULT_MEDIA.to_string();
        }
        match at.strip_prefix(MEDIA_KEYWORD).map(str::trim_start) {
            Some(condition) if !condition.is_empty() => condition.to_string(),
            _ => at.to_string(),
        }
    }

    /// Document key for a selector: trimmed and case-normalized.
    pub(super) fn selector_key(&self, selector: &str) -> String {
        self.config.selector_case.apply(selector.trim())
    }

    /// Decode the escape under the cursor and leave the cursor on its last
    /// character.
    pub(super) fn escape(&mut self) -> String {
        let pos = self.cursor.pos();
        let decoded = escape::decode(
            self.cursor.chars(),
            pos,
            self.data,
            self.config.remove_redundant_backslash,
        );
        if let Some((digits, c)) = &decoded.substituted {
            let message = format!("Replaced unicode notation: Changed \\{digits} to {c}");
            self.log(message, Severity::Information);
        }
        if decoded.removed_backslash {
            self.log("Removed unnecessary backslash", Severity::Information);
        }
        self.line += decoded.newlines;
        self.cursor.set_pos(decoded.next - 1);
        decoded.text
    }

    pub(super) fn open_comment(&mut self, resume: Mode) -> Mode {
        self.cursor.skip(1);
        Mode::Comment(Comment::new(resume))
    }

    /// Whether `c` at the cursor is an unescaped token character.
    pub(super) fn is_token_here(&self, c: char) -> bool {
        self.data.is_token_char(c) && !self.cursor.is_escaped(self.cursor.pos())
    }

    pub(super) fn emit(&mut self, token: Token) {
        if self.config.preserve_raw_input {
            self.sheet.tokens.push(token);
        }
    }

    pub(super) fn log(&mut self, message: impl Into<String>, severity: Severity) {
        self.sheet.log.record(self.line, message, severity);
    }
}

/// Append `c`, folding whitespace runs to one space and dropping whitespace
/// at the start or right after a comma.
fn push_collapsed(data: &CssData, buf: &mut String, c: char) {
    if !data.is_whitespace(c) {
        buf.push(c);
        return;
    }
    let at_boundary = buf.chars().last().is_none_or(|last| data.is_whitespace(last))
        || ends_with_unescaped(buf, ',');
    if !at_boundary {
        buf.push(' ');
    }
}

fn trim_end_in_place(buf: &mut String) {
    let len = buf.trim_end().len();
    buf.truncate(len);
}
