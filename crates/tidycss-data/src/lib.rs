//! Static CSS tables consumed by the tidycss parser.
//!
//! The parser never hard-codes which characters are structurally significant,
//! which at-rules exist or which properties belong to a CSS level. It asks a
//! [`CssData`] value instead. The [standard](CssData::standard) table set is
//! built once per process and shared by reference; custom sets can be built
//! with [`CssData::builder`].
//!
//! # Example
//!
//! ```
//! use tidycss_data::{AtRuleKind, CssData};
//!
//! let data = CssData::standard();
//! assert!(data.is_token_char('{'));
//! assert_eq!(data.at_rule("media"), Some(AtRuleKind::Block));
//! assert!(data.property_is_valid("color", "CSS2.1"));
//! assert!(!data.property_is_valid("opacity", "CSS2.1"));
//! ```

mod properties;

use std::collections::HashMap;
use std::sync::LazyLock;

/// Characters that are structurally significant to the lexer.
pub const TOKEN_CHARS: &str = "/@}{;:='\"(,\\!$%&)*+.<>?[]^`|~";

/// Characters treated as whitespace.
pub const WHITESPACE: &[char] = &[' ', '\n', '\t', '\r', '\x0B', '\x0C'];

/// Level used when a configuration does not name one.
pub const DEFAULT_LEVEL: &str = "CSS2.1";

/// What the lexer does after recognizing an at-rule keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtRuleKind {
    /// A condition header followed by a block of rules (`@media`).
    Block,
    /// A body that is parsed like a selector block (`@font-face`).
    SelectorLike,
    /// A single inline declaration terminated by `;` (`@import`).
    Declaration,
}

const AT_RULES: &[(&str, AtRuleKind)] = &[
    ("page", AtRuleKind::SelectorLike),
    ("font-face", AtRuleKind::SelectorLike),
    ("charset", AtRuleKind::Declaration),
    ("import", AtRuleKind::Declaration),
    ("namespace", AtRuleKind::Declaration),
    ("media", AtRuleKind::Block),
    ("supports", AtRuleKind::Block),
    ("keyframes", AtRuleKind::Block),
    ("-webkit-keyframes", AtRuleKind::Block),
    ("-moz-keyframes", AtRuleKind::Block),
];

static STANDARD: LazyLock<CssData> = LazyLock::new(|| {
    let mut builder = CssData::builder();
    for (name, kind) in AT_RULES {
        builder = builder.at_rule(*name, *kind);
    }
    for (name, levels) in properties::PROPERTIES {
        builder = builder.property(*name, levels.iter().copied());
    }
    builder.build()
});

/// Immutable lookup tables for the lexer.
///
/// A `CssData` is never mutated after [`CssDataBuilder::build`], so one value
/// can back any number of concurrent parses.
#[derive(Debug, Clone)]
pub struct CssData {
    token_chars: Vec<char>,
    whitespace: Vec<char>,
    at_rules: Vec<(String, AtRuleKind)>,
    properties: HashMap<String, Vec<String>>,
}

impl CssData {
    /// The standard table set, built on first use.
    pub fn standard() -> &'static CssData {
        &STANDARD
    }

    /// Start an empty table set with the standard token and whitespace characters.
    pub fn builder() -> CssDataBuilder {
        CssDataBuilder::default()
    }

    /// Whether `c` is structurally significant.
    pub fn is_token_char(&self, c: char) -> bool {
        self.token_chars.contains(&c)
    }

    /// Whether `c` is whitespace.
    pub fn is_whitespace(&self, c: char) -> bool {
        self.whitespace.contains(&c)
    }

    /// Iterate registered at-rule keywords.
    pub fn at_rules(&self) -> impl Iterator<Item = (&str, AtRuleKind)> {
        self.at_rules.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    /// Look up an at-rule keyword (without the `@`), ignoring ASCII case.
    pub fn at_rule(&self, name: &str) -> Option<AtRuleKind> {
        self.at_rules
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, kind)| *kind)
    }

    /// Find the longest registered keyword accepted by `matches`.
    ///
    /// The lexer passes a predicate that compares the keyword against the
    /// input following an `@`, so `@font-face` is never shadowed by a
    /// shorter keyword sharing its prefix.
    pub fn longest_at_rule(
        &self,
        mut matches: impl FnMut(&str) -> bool,
    ) -> Option<(&str, AtRuleKind)> {
        self.at_rules()
            .filter(|&(name, _)| matches(name))
            .max_by_key(|(name, _)| name.len())
    }

    /// Whether `name` is a property of any level.
    pub fn is_known_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Levels that define `name`.
    pub fn property_levels(&self, name: &str) -> Option<&[String]> {
        self.properties.get(name).map(Vec::as_slice)
    }

    /// Whether `name` is defined by `level` (level tags compare case-insensitively).
    pub fn property_is_valid(&self, name: &str, level: &str) -> bool {
        self.property_levels(name)
            .is_some_and(|levels| levels.iter().any(|l| l.eq_ignore_ascii_case(level)))
    }

    /// Whether any property is registered under `level`.
    pub fn has_level(&self, level: &str) -> bool {
        self.properties
            .values()
            .any(|levels| levels.iter().any(|l| l.eq_ignore_ascii_case(level)))
    }
}

/// Builder for custom [`CssData`] tables.
#[derive(Debug, Clone)]
pub struct CssDataBuilder {
    data: CssData,
}

impl Default for CssDataBuilder {
    fn default() -> Self {
        Self {
            data: CssData {
                token_chars: TOKEN_CHARS.chars().collect(),
                whitespace: WHITESPACE.to_vec(),
                at_rules: Vec::new(),
                properties: HashMap::new(),
            },
        }
    }
}

impl CssDataBuilder {
    /// Replace the structurally significant character set.
    pub fn token_chars(mut self, chars: &str) -> Self {
        self.data.token_chars = chars.chars().collect();
        self
    }

    /// Replace the whitespace set.
    pub fn whitespace(mut self, chars: &[char]) -> Self {
        self.data.whitespace = chars.to_vec();
        self
    }

    /// Register an at-rule keyword (stored lowercase, without the `@`).
    pub fn at_rule(mut self, name: impl Into<String>, kind: AtRuleKind) -> Self {
        let name = name.into().to_ascii_lowercase();
        self.data.at_rules.retain(|(known, _)| *known != name);
        self.data.at_rules.push((name, kind));
        self
    }

    /// Register a property and the levels that define it.
    pub fn property<I, S>(mut self, name: impl Into<String>, levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data.properties.insert(
            name.into().to_ascii_lowercase(),
            levels.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Finish the table set.
    pub fn build(self) -> CssData {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tokens_and_whitespace() {
        let data = CssData::standard();
        for c in ['{', '}', ';', ':', '\\', '"', '\'', '(', ')', ',', '*', '@', '/'] {
            assert!(data.is_token_char(c), "{c:?} should be a token");
        }
        assert!(!data.is_token_char('a'));
        assert!(!data.is_token_char('#'));
        assert!(!data.is_token_char('-'));
        assert!(data.is_whitespace('\n'));
        assert!(data.is_whitespace('\x0B'));
        assert!(!data.is_whitespace('x'));
    }

    #[test]
    fn at_rule_lookup_ignores_case() {
        let data = CssData::standard();
        assert_eq!(data.at_rule("MEDIA"), Some(AtRuleKind::Block));
        assert_eq!(data.at_rule("font-face"), Some(AtRuleKind::SelectorLike));
        assert_eq!(data.at_rule("charset"), Some(AtRuleKind::Declaration));
        assert_eq!(data.at_rule("bogus"), None);
    }

    #[test]
    fn longest_at_rule_prefers_longer_keyword() {
        let data = CssData::builder()
            .at_rule("font", AtRuleKind::Declaration)
            .at_rule("font-face", AtRuleKind::SelectorLike)
            .build();
        let input = "font-face{";
        let found = data.longest_at_rule(|name| input.starts_with(name));
        assert_eq!(found, Some(("font-face", AtRuleKind::SelectorLike)));
    }

    #[test]
    fn property_levels() {
        let data = CssData::standard();
        assert!(data.property_is_valid("color", "css2.1"));
        assert!(data.property_is_valid("opacity", "CSS3.0"));
        assert!(!data.property_is_valid("opacity", "CSS2.1"));
        assert!(!data.property_is_valid("size", "CSS2.1"));
        assert!(!data.is_known_property("zoom"));
        assert!(data.has_level("CSS1.0"));
        assert!(!data.has_level("CSS9"));
    }

    #[test]
    fn builder_replaces_duplicate_at_rules() {
        let data = CssData::builder()
            .at_rule("Media", AtRuleKind::SelectorLike)
            .at_rule("media", AtRuleKind::Block)
            .build();
        assert_eq!(data.at_rules().count(), 1);
        assert_eq!(data.at_rule("media"), Some(AtRuleKind::Block));
    }
}
