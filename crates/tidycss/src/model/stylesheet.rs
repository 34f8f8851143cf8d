//! Result of one parse call.

use super::{DiagnosticLog, Document, Token};

/// Everything a parse produces.
///
/// The document is empty when raw-input preservation is on; the token
/// stream is empty when it is off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    /// Media → selector → property → value.
    pub document: Document,
    /// Structural events, captured in raw-preservation mode.
    pub tokens: Vec<Token>,
    /// Value of the last `@charset`, re-quoted.
    pub charset: Option<String>,
    /// Value of the last `@namespace`.
    pub namespace: Option<String>,
    /// Every `@import`, in source order.
    pub imports: Vec<String>,
    /// Diagnostics recorded during the parse.
    pub log: DiagnosticLog,
}

impl Stylesheet {
    /// Whether the parse produced no content at all.
    ///
    /// Diagnostics do not count as content.
    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
            && self.tokens.is_empty()
            && self.charset.is_none()
            && self.namespace.is_none()
            && self.imports.is_empty()
    }
}
