//! Comma-separated selector groups.

use super::lexer::Lexer;
use crate::model::{Severity, Token};
use crate::pipeline::DeclarationHook;

/// Split `selector` at the recorded comma offsets.
///
/// Each offset points just past its comma. Parts are trimmed; an empty part
/// marks a malformed group such as `a,,b`. Offsets that do not land just past a
/// comma are ignored.
pub(crate) fn split_selectors<'s>(selector: &'s str, separators: &[usize]) -> Vec<&'s str> {
    let mut parts = Vec::with_capacity(separators.len() + 1);
    let mut start = 0;
    for &end in separators {
        let Some(part) = end
            .checked_sub(1)
            .filter(|&comma| comma >= start && selector.as_bytes().get(comma) == Some(&b','))
            .and_then(|comma| selector.get(start..comma))
        else {
            continue;
        };
        parts.push(part.trim());
        start = end;
    }
    parts.push(selector.get(start..).unwrap_or_default().trim());
    parts
}

impl<H: DeclarationHook + ?Sized> Lexer<'_, H> {
    /// Close the current rule block.
    pub(super) fn close_block(&mut self) {
        self.split_rule_selectors();
        let end = Token::trimmed(Token::SelectorEnd, &self.scope.selector);
        self.emit(end);
        self.scope.invalid_at = false;
        self.scope.reset_rule();
    }

    /// Validate a grouped selector and, when enabled, spread its
    /// declarations over the individual selectors.
    fn split_rule_selectors(&mut self) {
        let raw = self.scope.selector.trim_end().to_string();
        let parts = split_selectors(&raw, &self.scope.separators);
        if parts.len() < 2 {
            return;
        }

        let discard = self.config.discard_invalid_selectors;
        if parts.iter().any(|part| part.is_empty()) {
            let message = if discard {
                format!("Removed invalid selector: {raw}")
            } else {
                format!("Invalid selector: {raw}")
            };
            self.log(message, Severity::Warning);
        }

        if !self.config.merge_split_selectors || self.config.preserve_raw_input {
            return;
        }

        let media = self.media_key();
        let combined = self.selector_key(&raw);
        let Some(block) = self.sheet.document.remove_block(&media, &combined) else {
            return;
        };
        for part in parts {
            if part.is_empty() && discard {
                continue;
            }
            let key = self.selector_key(part);
            self.sheet.document.merge(&media, &key, &[], block.iter());
        }
        tracing::trace!(
            target: crate::logging::targets::PARSER,
            selector = %combined,
            "spread grouped declarations"
        );
    }
}
