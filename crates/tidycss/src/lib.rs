//! Fault-tolerant CSS tokenizer and parser.
//!
//! This crate reads hand-written, often broken CSS and turns it into a
//! structured document ready for an optimiser or printer:
//!
//! - **Error recovery**: missing semicolons, raw newlines in strings and
//!   unknown `@` keywords are repaired or flagged, never fatal
//! - **Document model**: media context → selector → property → value, with
//!   `!important` precedence applied as declarations arrive
//! - **Diagnostics**: a per-line log of every repair, mirrored to `tracing`
//! - **Raw mode**: a structural token stream for tools that must keep the
//!   source shape
//! - **Pipeline ports**: hooks and stages for optimisers and printers
//!
//! # Example
//!
//! ```
//! let sheet = tidycss::parse("@media screen { a, b { color: red } }");
//! assert_eq!(
//!     sheet.document.get("screen", "a,b", "color"),
//!     Some("red")
//! );
//! ```

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod pipeline;

mod error;

pub use config::{CaseMode, ParseConfig};
pub use error::{Error, Result};
pub use model::{
    DEFAULT_MEDIA, DeclarationBlock, Diagnostic, DiagnosticLog, Document, Severity, Stylesheet,
    Token, TokenKind,
};
pub use parser::CssParser;
pub use pipeline::{DeclarationContext, DeclarationHook, NoopHook, Optimise, Pipeline, Print};
pub use tidycss_data::{AtRuleKind, CssData, CssDataBuilder};

/// Parse `css` with the default configuration and built-in tables.
pub fn parse(css: &str) -> Stylesheet {
    CssParser::default().parse(css)
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::{CaseMode, ParseConfig};
    pub use crate::model::{DEFAULT_MEDIA, Document, Severity, Stylesheet, Token, TokenKind};
    pub use crate::parser::CssParser;
    pub use crate::pipeline::{DeclarationContext, DeclarationHook, Optimise, Pipeline, Print};
    pub use tidycss_data::CssData;
}
