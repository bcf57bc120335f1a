//! Heuristic JavaScript checker.
//!
//! This is explicitly *not* a parser: it combines the bracket balancer with
//! a handful of line-level pattern checks. The missing-semicolon check in
//! particular is best-effort and known to produce both false positives and
//! false negatives; callers must not treat it as authoritative.

use std::sync::LazyLock;

use regex::Regex;

use crate::balancer::balance_brackets;
use crate::diagnostics::{AnalysisResult, Diagnostic, DiagnosticKind};

static VAR_DECL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bvar\s+").unwrap());

const STATEMENT_KEYWORDS: [&str; 9] = [
    "if", "else", "for", "while", "function", "class", "const", "let", "var",
];

const LINE_TERMINATORS: [&str; 8] = [";", "{", "}", ",", ":", "//", "/*", "*/"];

const CONTINUATION_STARTERS: [char; 7] = ['.', '[', '(', '{', '}', ')', ']'];

/// Run all JavaScript heuristics over `code`.
pub fn analyze(code: &str) -> AnalysisResult {
    let mut result = AnalysisResult::clean();

    for diagnostic in balance_brackets(code) {
        result.push_error(diagnostic);
    }

    // Coarse per-pair count comparison. Intentionally redundant with the
    // balancer above; kept as belt-and-suspenders.
    for (opening, closing, label) in [
        ('{', '}', "curly braces"),
        ('(', ')', "parentheses"),
        ('[', ']', "square brackets"),
    ] {
        let opens = code.chars().filter(|&c| c == opening).count();
        let closes = code.chars().filter(|&c| c == closing).count();
        if opens != closes {
            result.push_error(Diagnostic::new(
                DiagnosticKind::BracketError,
                format!("Mismatched {label}"),
            ));
        }
    }

    let lines: Vec<&str> = code.lines().collect();

    for (idx, raw) in lines.iter().enumerate() {
        let line_no = idx + 1;

        if raw.contains("console.log") && !raw.to_lowercase().contains("// debug") {
            result.push_warning(
                Diagnostic::new(
                    DiagnosticKind::DebugCode,
                    "console.log found - consider removing for production",
                )
                .at_line(line_no),
            );
        }

        if VAR_DECL.is_match(raw) {
            result.push_suggestion(
                Diagnostic::new(
                    DiagnosticKind::ModernJs,
                    "Consider using 'let' or 'const' instead of 'var'",
                )
                .at_line(line_no),
            );
        }
    }

    check_missing_semicolons(&lines, &mut result);

    result
}

/// Best-effort missing-semicolon scan.
///
/// A non-blank, non-comment line is suspicious when it does not end with a
/// terminator, does not start with a statement keyword, and the next
/// non-blank line does not start with a continuation character. Advisory
/// only: findings land in `warnings` and never affect `valid`.
fn check_missing_semicolons(lines: &[&str], result: &mut AnalysisResult) {
    for (idx, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        if LINE_TERMINATORS.iter().any(|t| line.ends_with(t)) {
            continue;
        }
        if STATEMENT_KEYWORDS.iter().any(|kw| line.starts_with(kw)) {
            continue;
        }
        let Some(next) = lines[idx + 1..]
            .iter()
            .map(|l| l.trim())
            .find(|l| !l.is_empty())
        else {
            // Nothing follows; the original checker never flags the last line.
            continue;
        };
        if next.starts_with(&CONTINUATION_STARTERS[..]) {
            continue;
        }
        result.push_warning(
            Diagnostic::new(DiagnosticKind::SyntaxError, "Possible missing semicolon")
                .at_line(idx + 1),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_function_is_valid() {
        let result = analyze("function f() { return 1; }");
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn unclosed_brace_invalidates() {
        let result = analyze("function f() { return 1;");
        assert!(!result.valid);
        assert!(
            result
                .errors
                .iter()
                .any(|d| d.kind == DiagnosticKind::BracketError)
        );
        // Both the balancer and the count check fire for the same brace.
        assert!(result.errors.len() >= 2);
    }

    #[test]
    fn console_log_warns_unless_debug_marked() {
        let result = analyze("console.log(x);\nconsole.log(y); // DEBUG only\n");
        let debug: Vec<_> = result
            .warnings
            .iter()
            .filter(|d| d.kind == DiagnosticKind::DebugCode)
            .collect();
        assert_eq!(debug.len(), 1);
        assert_eq!(debug[0].line, Some(1));
    }

    #[test]
    fn var_suggests_let_or_const() {
        let result = analyze("var x = 1;\nlet y = 2;\n");
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.suggestions[0].kind, DiagnosticKind::ModernJs);
        assert_eq!(result.suggestions[0].line, Some(1));
        // Advisory only.
        assert!(result.valid);
    }

    #[test]
    fn variable_named_variant_is_not_var() {
        let result = analyze("let variant = 1;\n");
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn missing_semicolon_heuristic() {
        let result = analyze("const a = 1;\nb = 2\nc = 3;\n");
        let semis: Vec<_> = result
            .warnings
            .iter()
            .filter(|d| d.message == "Possible missing semicolon")
            .collect();
        assert_eq!(semis.len(), 1);
        assert_eq!(semis[0].line, Some(2));
    }

    #[test]
    fn continuation_line_suppresses_semicolon_warning() {
        let result = analyze("x = fetch(url)\n  .then(handle);\n");
        assert!(
            result
                .warnings
                .iter()
                .all(|d| d.message != "Possible missing semicolon")
        );
    }
}
