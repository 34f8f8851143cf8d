//! Line-indexed diagnostic log.

use std::collections::BTreeMap;
use std::fmt;

use crate::logging::targets;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// A routine normalization, such as a substituted unicode escape.
    Information,
    /// Malformed or questionable input.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Information => write!(f, "Information"),
            Self::Warning => write!(f, "Warning"),
        }
    }
}

/// A single parse event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    /// Human-readable description.
    pub message: String,
    /// Severity of the event.
    pub severity: Severity,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Append-only diagnostics keyed by 1-based line number.
///
/// Recording the same message with the same severity twice on one line
/// keeps a single entry. Within a line, entries stay in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticLog {
    lines: BTreeMap<u32, Vec<Diagnostic>>,
}

impl DiagnosticLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic for `line`, unless an identical one exists there.
    ///
    /// Returns `true` when the entry was added.
    pub fn record(&mut self, line: u32, message: impl Into<String>, severity: Severity) -> bool {
        let diagnostic = Diagnostic {
            message: message.into(),
            severity,
        };
        let entries = self.lines.entry(line).or_default();
        if entries.contains(&diagnostic) {
            return false;
        }

        match severity {
            Severity::Information => {
                tracing::debug!(target: targets::PARSER, line, "{}", diagnostic.message)
            }
            Severity::Warning => {
                tracing::warn!(target: targets::PARSER, line, "{}", diagnostic.message)
            }
        }
        entries.push(diagnostic);
        true
    }

    /// Diagnostics recorded for `line`.
    pub fn line(&self, line: u32) -> &[Diagnostic] {
        self.lines.get(&line).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterate `(line, diagnostic)` pairs in line order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Diagnostic)> {
        self.lines
            .iter()
            .flat_map(|(line, entries)| entries.iter().map(move |d| (*line, d)))
    }

    /// Iterate warnings only.
    pub fn warnings(&self) -> impl Iterator<Item = (u32, &Diagnostic)> {
        self.iter().filter(|(_, d)| d.severity == Severity::Warning)
    }

    /// Whether any entry on any line has this message.
    pub fn contains(&self, message: &str) -> bool {
        self.iter().any(|(_, d)| d.message == message)
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.lines.values().map(Vec::len).sum()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.values().all(Vec::is_empty)
    }
}
