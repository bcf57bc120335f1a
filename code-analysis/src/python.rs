//! Python static analyzer backed by Tree-sitter.
//!
//! One parse, one traversal. Collected along the way:
//! - function/class definitions without a docstring (Documentation suggestion)
//! - presence of an `if __name__ == "__main__":` guard at module scope
//! - bare call expressions at module scope (executable top-level code)
//! - imported module/symbol names
//! - loaded identifier names, for the missing-import watch-list
//!
//! Tree-sitter recovers from malformed input instead of failing, so "parse
//! failure" here means the tree contains an `ERROR` or missing node; the
//! first such node in document order is reported and analysis stops there.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tree_sitter::{Node, Parser};

use crate::diagnostics::{AnalysisResult, Diagnostic, DiagnosticKind};

/// Common standard-library modules checked for missing imports.
///
/// Deliberately a fixed watch-list, not general unresolved-name detection.
const WATCHED_MODULES: [&str; 8] = [
    "os", "sys", "json", "datetime", "typing", "math", "random", "re",
];

static IMPORT_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?x) (?P<mod>[A-Za-z_][\w\.]*) (?:\s+as\s+(?P<alias>[A-Za-z_]\w*))?").unwrap());

static IMPORT_FROM_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*from\s+([A-Za-z_][\w\.]*)\s+import\s+(.*)$").unwrap());

/// Analyze one Python snippet.
pub fn analyze(code: &str) -> AnalysisResult {
    let mut result = AnalysisResult::clean();

    let mut parser = Parser::new();
    if parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .is_err()
    {
        result.push_error(Diagnostic::new(
            DiagnosticKind::ParseError,
            "failed to load the Python grammar",
        ));
        return result;
    }

    let Some(tree) = parser.parse(code, None) else {
        result.push_error(Diagnostic::new(
            DiagnosticKind::ParseError,
            "parser produced no tree",
        ));
        return result;
    };

    let root = tree.root_node();
    if root.has_error() {
        // Unparseable input is terminal for this block: report the first
        // broken node and skip the tree walk entirely.
        let diagnostic = match first_error_node(root) {
            Some(node) => {
                let point = node.start_position();
                let message = if node.is_missing() {
                    format!("invalid syntax: missing {}", node.kind())
                } else {
                    "invalid syntax".to_string()
                };
                Diagnostic::new(DiagnosticKind::SyntaxError, message)
                    .at_line(point.row + 1)
                    .at_column(point.column + 1)
            }
            None => Diagnostic::new(DiagnosticKind::ParseError, "unparseable input"),
        };
        result.push_error(diagnostic);
        return result;
    }

    let mut walk = ModuleWalk::default();
    walk.run(root, code, &mut result);

    if walk.has_executable_code && !walk.has_main_guard {
        result.push_suggestion(Diagnostic::new(
            DiagnosticKind::Documentation,
            "Consider adding 'if __name__ == \"__main__\":' guard for executable code",
        ));
    }

    for module in WATCHED_MODULES {
        if walk.used_names.contains(module)
            && !walk.imports.contains(module)
            && !walk.defined_names.contains(module)
        {
            result.push_warning(Diagnostic::new(
                DiagnosticKind::MissingImport,
                format!("Potentially missing import: {module}"),
            ));
        }
    }

    result
}

/// State accumulated during the single tree traversal.
#[derive(Default)]
struct ModuleWalk {
    imports: HashSet<String>,
    defined_names: HashSet<String>,
    used_names: HashSet<String>,
    has_main_guard: bool,
    has_executable_code: bool,
}

impl ModuleWalk {
    fn run(&mut self, root: Node, code: &str, result: &mut AnalysisResult) {
        // Module-scope checks only look at direct children of the root.
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            match child.kind() {
                "if_statement" if is_main_guard(child, code) => self.has_main_guard = true,
                "expression_statement" => {
                    if child.named_child(0).is_some_and(|n| n.kind() == "call") {
                        self.has_executable_code = true;
                    }
                }
                _ => {}
            }
        }

        // Depth-first walk in document order (children pushed reversed).
        let mut stack: Vec<Node> = vec![root];
        while let Some(node) = stack.pop() {
            match node.kind() {
                "function_definition" | "async_function_definition" | "class_definition" => {
                    self.visit_definition(node, code, result);
                }
                "import_statement" => {
                    self.visit_import(node, code);
                    // Import children are handled textually above.
                    continue;
                }
                "import_from_statement" => {
                    self.visit_import_from(node, code);
                    continue;
                }
                "identifier" => {
                    let name = text(code, node);
                    if is_store_context(node) {
                        self.defined_names.insert(name.to_string());
                    } else {
                        self.used_names.insert(name.to_string());
                    }
                }
                _ => {}
            }

            let mut cursor = node.walk();
            let children: Vec<Node> = node.children(&mut cursor).collect();
            for child in children.into_iter().rev() {
                stack.push(child);
            }
        }
    }

    fn visit_definition(&mut self, node: Node, code: &str, result: &mut AnalysisResult) {
        let Some(name_node) = node.child_by_field_name("name") else {
            return;
        };
        let name = text(code, name_node);
        self.defined_names.insert(name.to_string());

        if !has_docstring(node) {
            let what = if node.kind() == "class_definition" {
                "Class"
            } else {
                "Function"
            };
            result.push_suggestion(
                Diagnostic::new(
                    DiagnosticKind::Documentation,
                    format!("{what} '{name}' lacks a docstring"),
                )
                .at_line(node.start_position().row + 1),
            );
        }
    }

    /// `import os, sys as s` — record each module's leading segment and alias.
    fn visit_import(&mut self, node: Node, code: &str) {
        let slice = text(code, node);
        let Some(idx) = slice.find("import") else {
            return;
        };
        let rest = &slice[idx + "import".len()..];
        for cap in IMPORT_ENTRY.captures_iter(rest) {
            let module = cap.name("mod").map(|m| m.as_str()).unwrap_or_default();
            if let Some(head) = module.split('.').next() {
                self.imports.insert(head.to_string());
            }
            if let Some(alias) = cap.name("alias") {
                self.imports.insert(alias.as_str().to_string());
            }
        }
    }

    /// `from pkg.sub import a, b as c` — record the package head and each name.
    fn visit_import_from(&mut self, node: Node, code: &str) {
        let slice = text(code, node);
        let Some(cap) = IMPORT_FROM_HEADER.captures(slice) else {
            return;
        };
        let module = cap.get(1).map(|m| m.as_str()).unwrap_or_default();
        if let Some(head) = module.split('.').next() {
            self.imports.insert(head.to_string());
        }
        let names_raw = cap.get(2).map(|m| m.as_str()).unwrap_or_default();
        for cap in IMPORT_ENTRY.captures_iter(names_raw) {
            if let Some(name) = cap.name("mod") {
                self.imports.insert(name.as_str().to_string());
            }
            if let Some(alias) = cap.name("alias") {
                self.imports.insert(alias.as_str().to_string());
            }
        }
    }
}

/// First `ERROR` or missing node in document order, pruned by `has_error`.
fn first_error_node(root: Node) -> Option<Node> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if !node.has_error() {
            continue;
        }
        let mut cursor = node.walk();
        let children: Vec<Node> = node.children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }
    None
}

/// True for `if __name__ == "__main__":` shaped conditions.
fn is_main_guard(node: Node, code: &str) -> bool {
    let Some(condition) = node.child_by_field_name("condition") else {
        return false;
    };
    if condition.kind() != "comparison_operator" {
        return false;
    }
    let Some(left) = condition.named_child(0) else {
        return false;
    };
    if left.kind() != "identifier" || text(code, left) != "__name__" {
        return false;
    }

    let mut cursor = condition.walk();
    let has_eq = condition
        .children(&mut cursor)
        .any(|c| !c.is_named() && c.kind() == "==");
    if !has_eq {
        return false;
    }

    let mut cursor = condition.walk();
    condition.children(&mut cursor).any(|c| {
        c.kind() == "string" && text(code, c).trim_matches(|q| q == '\'' || q == '"') == "__main__"
    })
}

/// Docstring = first statement of the body is a bare string expression.
fn has_docstring(definition: Node) -> bool {
    let Some(body) = definition.child_by_field_name("body") else {
        return false;
    };
    let Some(first) = body.named_child(0) else {
        return false;
    };
    first.kind() == "expression_statement"
        && first.named_child(0).is_some_and(|n| n.kind() == "string")
}

/// True when the identifier is being bound rather than read.
fn is_store_context(node: Node) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    match parent.kind() {
        "assignment" | "augmented_assignment" | "for_statement" => parent
            .child_by_field_name("left")
            .is_some_and(|left| left.id() == node.id()),
        "function_definition" | "async_function_definition" | "class_definition" => parent
            .child_by_field_name("name")
            .is_some_and(|name| name.id() == node.id()),
        "parameters" | "lambda_parameters" | "typed_parameter" | "default_parameter"
        | "typed_default_parameter" => true,
        _ => false,
    }
}

fn text<'a>(code: &'a str, node: Node) -> &'a str {
    &code[node.byte_range()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_is_terminal() {
        let result = analyze("def f(:\n  pass");
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert!(matches!(
            result.errors[0].kind,
            DiagnosticKind::SyntaxError | DiagnosticKind::ParseError
        ));
        assert!(result.errors[0].line.is_some());
        assert!(result.warnings.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn missing_docstring_suggested() {
        let result = analyze("def f():\n    pass\n");
        assert!(result.valid);
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.suggestions[0].kind, DiagnosticKind::Documentation);
        assert_eq!(result.suggestions[0].message, "Function 'f' lacks a docstring");
        assert_eq!(result.suggestions[0].line, Some(1));
    }

    #[test]
    fn docstring_silences_suggestion() {
        let result = analyze("def f():\n    \"\"\"Documented.\"\"\"\n    pass\n");
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn class_docstring_checked_too() {
        let result = analyze("class C:\n    pass\n");
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.suggestions[0].message, "Class 'C' lacks a docstring");
    }

    #[test]
    fn no_guard_suggestion_without_top_level_calls() {
        let result = analyze("def f():\n    pass\n");
        assert!(
            result
                .suggestions
                .iter()
                .all(|d| !d.message.contains("__main__"))
        );
    }

    #[test]
    fn top_level_call_without_guard_suggests_one() {
        let result = analyze("print('hi')\n");
        assert!(result.valid);
        assert!(
            result
                .suggestions
                .iter()
                .any(|d| d.message.contains("__main__"))
        );
    }

    #[test]
    fn guard_present_silences_suggestion() {
        let code = "def main():\n    \"\"\"Run.\"\"\"\n    pass\n\nif __name__ == \"__main__\":\n    main()\n";
        let result = analyze(code);
        assert!(
            result
                .suggestions
                .iter()
                .all(|d| !d.message.contains("Consider adding"))
        );
    }

    #[test]
    fn watched_module_used_without_import_warns() {
        let result = analyze("def f():\n    \"\"\"Dump.\"\"\"\n    return json.dumps({})\n");
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].kind, DiagnosticKind::MissingImport);
        assert_eq!(result.warnings[0].message, "Potentially missing import: json");
    }

    #[test]
    fn imported_module_does_not_warn() {
        let result = analyze("import json\n\ndef f():\n    \"\"\"Dump.\"\"\"\n    return json.dumps({})\n");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn from_import_counts_as_imported() {
        let result = analyze("from os import path\n\nprint(os.sep if path else '')\n");
        assert!(
            result
                .warnings
                .iter()
                .all(|d| d.message != "Potentially missing import: os")
        );
    }

    #[test]
    fn missing_import_warnings_in_watchlist_order() {
        let result = analyze("print(sys.argv, os.sep)\n");
        let names: Vec<&str> = result
            .warnings
            .iter()
            .filter(|d| d.kind == DiagnosticKind::MissingImport)
            .map(|d| d.message.rsplit(' ').next().unwrap())
            .collect();
        assert_eq!(names, vec!["os", "sys"]);
    }

    #[test]
    fn assigned_name_is_not_missing() {
        let result = analyze("json = {}\nprint(json)\n");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn documentation_suggestions_in_document_order() {
        let code = "def a():\n    pass\n\ndef b():\n    pass\n";
        let result = analyze(code);
        let docs: Vec<&str> = result
            .suggestions
            .iter()
            .map(|d| d.message.as_str())
            .collect();
        assert_eq!(
            docs,
            vec!["Function 'a' lacks a docstring", "Function 'b' lacks a docstring"]
        );
    }
}
