//! Diagnostic model shared by all checkers.

use std::fmt;

use serde::Serialize;

/// Category of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    SyntaxError,
    ParseError,
    BracketError,
    DebugCode,
    ModernJs,
    Documentation,
    MissingImport,
}

/// One finding produced by an analyzer. Immutable after creation.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// 1-based source line, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// 1-based column, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    /// Byte offset into the snippet, for character-level findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            line: None,
            column: None,
            position: None,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn at_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    pub fn at_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }
}

impl fmt::Display for Diagnostic {
    /// Human-readable form used for the aggregated error details.
    ///
    /// Bracket diagnostics embed their own positions in the message, so only
    /// the line number is prefixed here.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Outcome of analyzing one code block.
///
/// Invariant: `valid == false` iff `errors` is non-empty. Warnings and
/// suggestions are advisory and never affect `valid`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub valid: bool,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub suggestions: Vec<Diagnostic>,
}

impl AnalysisResult {
    /// Fresh result with no findings.
    pub fn clean() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn push_error(&mut self, diagnostic: Diagnostic) {
        self.valid = false;
        self.errors.push(diagnostic);
    }

    pub fn push_warning(&mut self, diagnostic: Diagnostic) {
        self.warnings.push(diagnostic);
    }

    pub fn push_suggestion(&mut self, diagnostic: Diagnostic) {
        self.suggestions.push(diagnostic);
    }

    /// Errors followed by warnings, rendered for display, in insertion order.
    pub fn detail_strings(&self) -> Vec<String> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .map(|d| d.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_tracks_errors() {
        let mut res = AnalysisResult::clean();
        assert!(res.valid);
        res.push_warning(Diagnostic::new(DiagnosticKind::DebugCode, "w"));
        assert!(res.valid);
        res.push_error(Diagnostic::new(DiagnosticKind::BracketError, "e"));
        assert!(!res.valid);
    }

    #[test]
    fn display_prefixes_line() {
        let d = Diagnostic::new(DiagnosticKind::DebugCode, "console.log found").at_line(3);
        assert_eq!(d.to_string(), "line 3: console.log found");
        let d = Diagnostic::new(DiagnosticKind::BracketError, "Unclosed bracket '('").at_position(7);
        assert_eq!(d.to_string(), "Unclosed bracket '('");
    }

    #[test]
    fn detail_strings_order_errors_first() {
        let mut res = AnalysisResult::clean();
        res.push_warning(Diagnostic::new(DiagnosticKind::DebugCode, "warn"));
        res.push_error(Diagnostic::new(DiagnosticKind::BracketError, "err"));
        assert_eq!(res.detail_strings(), vec!["err".to_string(), "warn".to_string()]);
    }
}
