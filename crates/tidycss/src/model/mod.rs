//! Parse results: document, token stream, side outputs and diagnostics.

mod diagnostics;
mod document;
mod important;
mod stylesheet;
mod token;

pub use diagnostics::{Diagnostic, DiagnosticLog, Severity};
pub use document::{DEFAULT_MEDIA, DeclarationBlock, Document, MediaBlock};
pub use important::{is_important, strip_important};
pub use stylesheet::Stylesheet;
pub use token::{Token, TokenKind};
