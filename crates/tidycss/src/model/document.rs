//! Document accumulator: media context → selector → property → value.

use std::collections::HashMap;

use super::important::is_important;
use crate::logging::targets;

/// Media context used for rules outside any block at-rule.
pub const DEFAULT_MEDIA: &str = "";

/// Declarations of one selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationBlock {
    /// Byte offsets just past each top-level comma of the selector text.
    pub separators: Vec<usize>,
    properties: HashMap<String, String>,
}

impl DeclarationBlock {
    /// Value stored for `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    /// Iterate `(property, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the block has no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Replace the value of an existing property, bypassing precedence.
    ///
    /// Intended for optimiser stages that rewrite values in place.
    pub fn rewrite(&mut self, property: &str, value: impl Into<String>) -> bool {
        match self.properties.get_mut(property) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Store `value`, honouring `!important` precedence.
    ///
    /// A non-important value never replaces an important one; any other
    /// pairing resolves to the newer value.
    fn assign(&mut self, property: &str, value: &str) -> bool {
        if let Some(existing) = self.properties.get(property)
            && is_important(existing)
            && !is_important(value)
        {
            return false;
        }
        self.properties.insert(property.to_string(), value.to_string());
        true
    }
}

/// All selectors declared under one media context.
pub type MediaBlock = HashMap<String, DeclarationBlock>;

/// The parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    media: HashMap<String, MediaBlock>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration.
    ///
    /// Empty values are ignored. The selector's separator list is replaced by
    /// `separators` on every accepted commit. Returns whether the stored
    /// value changed.
    pub fn commit(
        &mut self,
        media: &str,
        selector: &str,
        separators: &[usize],
        property: &str,
        value: &str,
    ) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }

        let block = self
            .media
            .entry(media.to_string())
            .or_default()
            .entry(selector.to_string())
            .or_default();
        block.separators = separators.to_vec();

        let stored = block.assign(property, value);
        if !stored {
            tracing::trace!(
                target: targets::DOCUMENT,
                selector,
                property,
                "kept !important value over {value:?}"
            );
        }
        stored
    }

    /// Commit every declaration of `declarations` to `selector`.
    pub fn merge<'a, I>(
        &mut self,
        media: &str,
        selector: &str,
        separators: &[usize],
        declarations: I,
    )
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (property, value) in declarations {
            self.commit(media, selector, separators, property, value);
        }
    }

    /// Value of `property` for `selector` under `media`.
    pub fn get(&self, media: &str, selector: &str, property: &str) -> Option<&str> {
        self.block(media, selector)?.get(property)
    }

    /// Declarations for `selector` under `media`.
    pub fn block(&self, media: &str, selector: &str) -> Option<&DeclarationBlock> {
        self.media.get(media)?.get(selector)
    }

    /// Remove and return the declarations for `selector` under `media`.
    pub fn remove_block(&mut self, media: &str, selector: &str) -> Option<DeclarationBlock> {
        let context = self.media.get_mut(media)?;
        let block = context.remove(selector);
        if context.is_empty() {
            self.media.remove(media);
        }
        block
    }

    /// Selectors declared under `media`.
    pub fn selectors(&self, media: &str) -> Option<&MediaBlock> {
        self.media.get(media)
    }

    /// Iterate media context keys.
    pub fn media(&self) -> impl Iterator<Item = &str> {
        self.media.keys().map(String::as_str)
    }

    /// Iterate `(media, selector, block)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &DeclarationBlock)> {
        self.media.iter().flat_map(|(media, selectors)| {
            selectors
                .iter()
                .map(move |(selector, block)| (media.as_str(), selector.as_str(), block))
        })
    }

    /// Mutable access to a block, for optimiser stages.
    pub fn block_mut(&mut self, media: &str, selector: &str) -> Option<&mut DeclarationBlock> {
        self.media.get_mut(media)?.get_mut(selector)
    }

    /// Whether no declarations were recorded.
    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_value_wins() {
        let mut doc = Document::new();
        doc.commit(DEFAULT_MEDIA, "a", &[], "color", "red");
        doc.commit(DEFAULT_MEDIA, "a", &[], "color", " blue ");
        assert_eq!(doc.get(DEFAULT_MEDIA, "a", "color"), Some("blue"));
    }

    #[test]
    fn important_is_not_displaced_by_normal() {
        let mut doc = Document::new();
        doc.commit("", "a", &[], "color", "red !important");
        assert!(!doc.commit("", "a", &[], "color", "green"));
        assert_eq!(doc.get("", "a", "color"), Some("red !important"));
    }

    #[test]
    fn important_replaces_important_and_normal() {
        let mut doc = Document::new();
        doc.commit("", "a", &[], "color", "red");
        doc.commit("", "a", &[], "color", "blue!important");
        assert_eq!(doc.get("", "a", "color"), Some("blue!important"));
        doc.commit("", "a", &[], "color", "green !important");
        assert_eq!(doc.get("", "a", "color"), Some("green !important"));
    }

    #[test]
    fn empty_values_are_ignored() {
        let mut doc = Document::new();
        assert!(!doc.commit("", "a", &[], "color", "   "));
        assert!(doc.is_empty());
    }

    #[test]
    fn commit_records_separators() {
        let mut doc = Document::new();
        doc.commit("", "a,b", &[2], "color", "red");
        assert_eq!(doc.block("", "a,b").unwrap().separators, vec![2]);
        doc.commit("", "a,b", &[], "margin", "0");
        assert!(doc.block("", "a,b").unwrap().separators.is_empty());
    }

    #[test]
    fn merge_applies_precedence() {
        let mut doc = Document::new();
        doc.commit("", "a", &[], "color", "red!important");
        doc.commit("", "a", &[], "margin", "1px");
        doc.merge("", "a", &[], [("color", "blue"), ("margin", "2px")]);

        assert_eq!(doc.get("", "a", "color"), Some("red!important"));
        assert_eq!(doc.get("", "a", "margin"), Some("2px"));
    }

    #[test]
    fn remove_block_drops_empty_media() {
        let mut doc = Document::new();
        doc.commit("print", "a", &[], "color", "red");
        let block = doc.remove_block("print", "a").unwrap();
        assert_eq!(block.get("color"), Some("red"));
        assert!(doc.is_empty());
        assert!(doc.remove_block("print", "a").is_none());
    }

    #[test]
    fn rewrite_ignores_precedence() {
        let mut doc = Document::new();
        doc.commit("", "a", &[], "color", "#ff0000 !important");
        let block = doc.block_mut("", "a").unwrap();
        assert!(block.rewrite("color", "red !important"));
        assert!(!block.rewrite("margin", "0"));
        assert_eq!(doc.get("", "a", "color"), Some("red !important"));
    }
}
