//! Stack-based bracket matcher shared by the JavaScript checker.
//!
//! Known limitation: brackets inside string or comment literals are not
//! excluded, so `"{"` in a string counts like any other opening bracket.

use crate::diagnostics::{Diagnostic, DiagnosticKind};

/// Scan `code` for unbalanced `{}`, `[]`, and `()` pairs.
///
/// Emits one diagnostic per finding, in scan order:
/// - a closing bracket with an empty stack → unmatched closing bracket;
/// - a closing bracket that does not pair with the popped opener →
///   mismatched brackets referencing both positions (the opener is not
///   re-pushed);
/// - openers still on the stack at end of input → unclosed bracket each.
///
/// Pure function over its input; positions are byte offsets.
pub fn balance_brackets(code: &str) -> Vec<Diagnostic> {
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut found = Vec::new();

    for (i, ch) in code.char_indices() {
        match ch {
            '{' | '[' | '(' => stack.push((ch, i)),
            '}' | ']' | ')' => match stack.pop() {
                None => found.push(
                    Diagnostic::new(
                        DiagnosticKind::BracketError,
                        format!("Unmatched closing bracket '{ch}'"),
                    )
                    .at_position(i),
                ),
                Some((opening, pos)) if closing_of(opening) != ch => found.push(
                    Diagnostic::new(
                        DiagnosticKind::BracketError,
                        format!(
                            "Mismatched brackets: '{opening}' at position {pos} and '{ch}' at position {i}"
                        ),
                    )
                    .at_position(i),
                ),
                Some(_) => {}
            },
            _ => {}
        }
    }

    for (opening, pos) in stack {
        found.push(
            Diagnostic::new(
                DiagnosticKind::BracketError,
                format!("Unclosed bracket '{opening}'"),
            )
            .at_position(pos),
        );
    }

    found
}

fn closing_of(opening: char) -> char {
    match opening {
        '{' => '}',
        '[' => ']',
        _ => ')',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_input_is_silent() {
        assert!(balance_brackets("function f() { return [1, (2)]; }").is_empty());
        assert!(balance_brackets("").is_empty());
        assert!(balance_brackets("no brackets at all").is_empty());
    }

    #[test]
    fn unmatched_closing() {
        let found = balance_brackets("a)b");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, DiagnosticKind::BracketError);
        assert_eq!(found[0].message, "Unmatched closing bracket ')'");
        assert_eq!(found[0].position, Some(1));
    }

    #[test]
    fn mismatched_pair_reports_both_positions() {
        let found = balance_brackets("(]");
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].message,
            "Mismatched brackets: '(' at position 0 and ']' at position 1"
        );
    }

    #[test]
    fn unclosed_openers_reported_at_their_positions() {
        let found = balance_brackets("{ [ ");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].message, "Unclosed bracket '{'");
        assert_eq!(found[0].position, Some(0));
        assert_eq!(found[1].message, "Unclosed bracket '['");
        assert_eq!(found[1].position, Some(2));
    }

    #[test]
    fn mismatch_does_not_repush_opener() {
        // After '(' is consumed by the mismatch, '}' has nothing to close.
        let found = balance_brackets("(]}");
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].message, "Unmatched closing bracket '}'");
    }

    #[test]
    fn pure_and_repeatable() {
        let a = balance_brackets("({[}");
        let b = balance_brackets("({[}");
        let render = |v: &[Diagnostic]| {
            v.iter()
                .map(|d| format!("{:?}@{:?}", d.message, d.position))
                .collect::<Vec<_>>()
        };
        assert_eq!(render(&a), render(&b));
    }
}
