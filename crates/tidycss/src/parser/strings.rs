//! Quoted strings, parenthesized groups and comments.

use super::lexer::Lexer;
use super::state::{Comment, Mode, Quoted};
use crate::model::{Severity, Token};
use crate::pipeline::DeclarationHook;

const NEWLINE_FIXED: &str = "Fixed incorrect newline in string";

impl<H: DeclarationHook + ?Sized> Lexer<'_, H> {
    pub(super) fn quoted(&mut self, c: char, mut group: Quoted) -> Mode {
        let pos = self.cursor.pos();
        let escaped = self.cursor.is_escaped(pos);
        let bare_newline = c == '\n' && !self.is_line_continuation(pos);

        if group.is_paren() && matches!(c, '"' | '\'') && !escaped {
            match group.nested {
                None => group.nested = Some(c),
                Some(open) if open == c => group.nested = None,
                Some(_) => {}
            }
        }

        // Whitespace inside parentheses waits for the next character: it is
        // kept between tokens and dropped before the closing `)`.
        if group.is_paren() && group.nested.is_none() && self.data.is_whitespace(c) {
            if group.text != "(" {
                if bare_newline {
                    group.pending.push_str("\\A ");
                    group.pending_newlines.push(self.line);
                } else {
                    group.pending.push(c);
                }
            }
            return Mode::Quoted(group);
        }

        let closes = c == group.close && !escaped && group.nested.is_none();
        let pending = std::mem::take(&mut group.pending);
        let pending_newlines = std::mem::take(&mut group.pending_newlines);
        if !closes {
            group.text.push_str(&pending);
            for line in pending_newlines {
                self.sheet.log.record(line, NEWLINE_FIXED, Severity::Warning);
            }
        }

        if bare_newline {
            group.text.push_str("\\A ");
            self.log(NEWLINE_FIXED, Severity::Warning);
        } else {
            group.text.push(c);
        }

        if closes {
            return self.close_quoted(group);
        }
        Mode::Quoted(group)
    }

    /// Hand the finished group back to the mode that opened it.
    fn close_quoted(&mut self, group: Quoted) -> Mode {
        let Quoted {
            close,
            mut text,
            keep_quotes,
            resume,
            ..
        } = group;

        let is_content = self.scope.property.eq_ignore_ascii_case("content");
        let has_space = text.chars().any(|c| self.data.is_whitespace(c));
        if !keep_quotes && !is_content && !has_space {
            text = strip_quotes(&text, close);
        }

        match *resume {
            Mode::Value(mut buf) => {
                buf.current.push_str(&text);
                Mode::Value(buf)
            }
            Mode::Selector => {
                self.scope.selector.push_str(&text);
                Mode::Selector
            }
            other => other,
        }
    }

    fn is_line_continuation(&self, pos: usize) -> bool {
        pos.checked_sub(1)
            .is_some_and(|prev| self.cursor.at(prev) == Some('\\') && !self.cursor.is_escaped(prev))
    }

    pub(super) fn comment(&mut self, c: char, mut comment: Comment) -> Mode {
        if c != '*' || self.cursor.peek() != Some('/') {
            comment.text.push(c);
            return Mode::Comment(comment);
        }

        self.cursor.skip(1);
        let Comment { text, resume } = comment;
        let resume = *resume;
        let preserve = self.config.preserve_raw_input;
        match &resume {
            Mode::Selector if preserve && !self.scope.selector.trim().is_empty() => {
                self.scope.selector.push_str(&format!("/*{text}*/"));
            }
            Mode::Property if preserve && !self.scope.property.trim().is_empty() => {
                self.scope.property.push_str(&format!("/*{text}*/"));
            }
            _ => {
                self.emit(Token::Comment(text));
            }
        }
        resume
    }
}

/// Drop the delimiting quotes of a string, or the quotes just inside the
/// parentheses of a group like `("a.png")`.
fn strip_quotes(text: &str, close: char) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    match close {
        '"' | '\'' if len >= 2 => chars[1..len - 1].iter().collect(),
        ')' if len > 3 && matches!(chars[1], '"' | '\'') && chars[len - 2] == chars[1] => {
            let inner: String = chars[2..len - 2].iter().collect();
            format!("{}{inner}{}", chars[0], chars[len - 1])
        }
        _ => text.to_string(),
    }
}
