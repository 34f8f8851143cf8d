//! Fault-tolerant CSS parsing.
//!
//! [`CssParser`] turns CSS text into a [`Stylesheet`]. Malformed input never
//! aborts a parse: the lexer repairs what it can, records a diagnostic, and
//! keeps going.
//!
//! # Example
//!
//! ```
//! use tidycss::{CssParser, ParseConfig};
//!
//! let parser = CssParser::new(ParseConfig::default());
//! let sheet = parser.parse("a { color: red }");
//! assert_eq!(sheet.document.get("", "a", "color"), Some("red"));
//! ```

mod cursor;
mod escape;
mod lexer;
mod selector;
mod state;
mod strings;

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use tidycss_data::CssData;

use crate::config::ParseConfig;
use crate::error::{Error, Result};
use crate::logging::targets;
use crate::model::Stylesheet;
use crate::pipeline::{DeclarationHook, NoopHook};
use lexer::Lexer;

/// CSS parser bound to a configuration and a set of data tables.
///
/// A parser holds no per-parse state, so one instance can serve any number
/// of parses, including concurrent ones from several threads.
#[derive(Debug, Clone)]
pub struct CssParser<'d> {
    config: ParseConfig,
    data: &'d CssData,
}

impl CssParser<'static> {
    /// Create a parser over the built-in tables.
    pub fn new(config: ParseConfig) -> Self {
        Self::with_data(config, CssData::standard())
    }

    /// Create a parser over the built-in tables, rejecting unknown CSS levels.
    pub fn try_new(config: ParseConfig) -> Result<Self> {
        Self::try_with_data(config, CssData::standard())
    }
}

impl Default for CssParser<'static> {
    fn default() -> Self {
        Self::new(ParseConfig::default())
    }
}

impl<'d> CssParser<'d> {
    /// Create a parser over caller-supplied tables.
    pub fn with_data(config: ParseConfig, data: &'d CssData) -> Self {
        Self { config, data }
    }

    /// Like [`with_data`](Self::with_data), but fails when `config.css_level`
    /// names a level the tables do not define.
    pub fn try_with_data(config: ParseConfig, data: &'d CssData) -> Result<Self> {
        if !data.has_level(&config.css_level) {
            return Err(Error::unknown_level(config.css_level));
        }
        Ok(Self::with_data(config, data))
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    pub fn data(&self) -> &'d CssData {
        self.data
    }

    /// Parse `css`. Never fails; problems end up in the stylesheet's log.
    pub fn parse(&self, css: &str) -> Stylesheet {
        self.parse_with(css, &mut NoopHook)
    }

    /// Parse `css`, passing every finalized declaration through `hook`
    /// before it is committed.
    pub fn parse_with<H>(&self, css: &str, hook: &mut H) -> Stylesheet
    where
        H: DeclarationHook + ?Sized,
    {
        tracing::debug!(target: targets::PARSER, bytes = css.len(), "parsing stylesheet");
        let mut lexer = Lexer::new(css, &self.config, self.data, hook);
        while lexer.step() {}
        lexer.finish()
    }

    /// Parse `css`, stopping with [`Error::Cancelled`] once `cancel` is set.
    ///
    /// The flag is checked before every character.
    pub fn parse_cancellable(&self, css: &str, cancel: &AtomicBool) -> Result<Stylesheet> {
        let mut hook = NoopHook;
        let mut lexer = Lexer::new(css, &self.config, self.data, &mut hook);
        loop {
            if cancel.load(Ordering::Acquire) {
                let line = lexer.line();
                tracing::debug!(target: targets::PARSER, line, "parse cancelled");
                return Err(Error::Cancelled { line });
            }
            if !lexer.step() {
                return Ok(lexer.finish());
            }
        }
    }

    /// Read and parse a stylesheet file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Stylesheet> {
        let path = path.as_ref();
        let css = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(self.parse(&css))
    }
}
