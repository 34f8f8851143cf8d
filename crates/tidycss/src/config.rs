//! Parser configuration.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Error, Result};

/// How the parser treats the case of selectors or property names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// Fold to ASCII lowercase.
    Lowercase,
    /// Keep the source spelling.
    Preserve,
}

impl CaseMode {
    /// Apply this mode to `text`.
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Lowercase => text.to_ascii_lowercase(),
            Self::Preserve => text.to_string(),
        }
    }
}

/// Options recognized by [`CssParser`](crate::CssParser).
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```
/// use tidycss::ParseConfig;
///
/// let config = ParseConfig::from_toml_str(r#"
/// css_level = "CSS3.0"
/// merge_split_selectors = 1
/// "#).unwrap();
/// assert!(config.merge_split_selectors);
/// assert!(config.remove_redundant_backslash);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Drop a backslash that escapes nothing significant.
    pub remove_redundant_backslash: bool,
    /// Drop declarations inside unrecognized `@` constructs.
    pub discard_invalid_at_rules: bool,
    /// Drop declarations whose property is unknown at `css_level`.
    pub discard_invalid_properties: bool,
    /// Drop empty parts of comma-joined selectors when merging.
    pub discard_invalid_selectors: bool,
    /// Register each part of `a,b{}` as its own selector.
    #[serde(deserialize_with = "flag")]
    pub merge_split_selectors: bool,
    /// Case of selectors stored in the document.
    pub selector_case: CaseMode,
    /// Case of property names stored in the document.
    pub property_case: CaseMode,
    /// Level tag used to validate properties (`CSS1.0`, `CSS2.0`, `CSS2.1`, `CSS3.0`).
    pub css_level: String,
    /// Populate the token stream instead of the document.
    pub preserve_raw_input: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            remove_redundant_backslash: true,
            discard_invalid_at_rules: true,
            discard_invalid_properties: false,
            discard_invalid_selectors: false,
            merge_split_selectors: false,
            selector_case: CaseMode::Preserve,
            property_case: CaseMode::Lowercase,
            css_level: tidycss_data::DEFAULT_LEVEL.to_string(),
            preserve_raw_input: false,
        }
    }
}

impl ParseConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserialize a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Set the CSS level used for property validation.
    pub fn with_css_level(mut self, level: impl Into<String>) -> Self {
        self.css_level = level.into();
        self
    }

    /// Enable or disable merging of comma-split selectors.
    pub fn with_merge_split_selectors(mut self, merge: bool) -> Self {
        self.merge_split_selectors = merge;
        self
    }

    /// Enable or disable raw-input preservation.
    pub fn with_preserve_raw_input(mut self, preserve: bool) -> Self {
        self.preserve_raw_input = preserve;
        self
    }

    /// Enable or disable discarding of invalid properties.
    pub fn with_discard_invalid_properties(mut self, discard: bool) -> Self {
        self.discard_invalid_properties = discard;
        self
    }

    /// Enable or disable discarding of invalid selectors.
    pub fn with_discard_invalid_selectors(mut self, discard: bool) -> Self {
        self.discard_invalid_selectors = discard;
        self
    }

    /// Enable or disable discarding of invalid at-rules.
    pub fn with_discard_invalid_at_rules(mut self, discard: bool) -> Self {
        self.discard_invalid_at_rules = discard;
        self
    }

    /// Enable or disable redundant backslash removal.
    pub fn with_remove_redundant_backslash(mut self, remove: bool) -> Self {
        self.remove_redundant_backslash = remove;
        self
    }

    /// Set the selector case mode.
    pub fn with_selector_case(mut self, mode: CaseMode) -> Self {
        self.selector_case = mode;
        self
    }

    /// Set the property case mode.
    pub fn with_property_case(mut self, mode: CaseMode) -> Self {
        self.property_case = mode;
        self
    }
}

/// Accept either a TOML boolean or the integers `0`/`1`.
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Int(value) => Ok(value == 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ParseConfig::default();
        assert!(config.remove_redundant_backslash);
        assert!(config.discard_invalid_at_rules);
        assert!(!config.discard_invalid_properties);
        assert!(!config.merge_split_selectors);
        assert_eq!(config.selector_case, CaseMode::Preserve);
        assert_eq!(config.property_case, CaseMode::Lowercase);
        assert_eq!(config.css_level, "CSS2.1");
        assert!(!config.preserve_raw_input);
    }

    #[test]
    fn toml_partial_override() {
        let config = ParseConfig::from_toml_str(
            r#"
            selector_case = "lowercase"
            merge_split_selectors = true
            discard_invalid_properties = true
            "#,
        )
        .unwrap();

        assert_eq!(config.selector_case, CaseMode::Lowercase);
        assert!(config.merge_split_selectors);
        assert!(config.discard_invalid_properties);
        assert!(config.remove_redundant_backslash);
    }

    #[test]
    fn merge_flag_accepts_integers() {
        let on = ParseConfig::from_toml_str("merge_split_selectors = 1").unwrap();
        let off = ParseConfig::from_toml_str("merge_split_selectors = 0").unwrap();
        let other = ParseConfig::from_toml_str("merge_split_selectors = 2").unwrap();
        assert!(on.merge_split_selectors);
        assert!(!off.merge_split_selectors);
        assert!(!other.merge_split_selectors);
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let err = ParseConfig::from_toml_str("selector_case = \"shouting\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tidy.toml");
        std::fs::write(&path, "css_level = \"CSS3.0\"\npreserve_raw_input = true\n").unwrap();

        let config = ParseConfig::from_file(&path).unwrap();
        assert_eq!(config.css_level, "CSS3.0");
        assert!(config.preserve_raw_input);

        let missing = ParseConfig::from_file(dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(Error::Io { .. })));
    }

    #[test]
    fn case_mode_apply() {
        assert_eq!(CaseMode::Lowercase.apply("A.Foo"), "a.foo");
        assert_eq!(CaseMode::Preserve.apply("A.Foo"), "A.Foo");
    }
}
