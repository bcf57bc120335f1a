//! Static analysis of code snippets extracted from model output.
//!
//! The crate exposes three entry points:
//! - [`extract_code_blocks`] — pull fenced code regions out of free-form text.
//! - [`analyze_code`] — dispatch a single snippet to the checker for its
//!   language tag (`python`, `javascript`/`js`); other tags are skipped.
//! - [`balance_brackets`] — the shared stack-based bracket matcher.
//!
//! Every checker returns an [`AnalysisResult`]: diagnostics are data, not
//! errors, and a failure to analyze one snippet never aborts its siblings.

mod balancer;
mod diagnostics;
mod extract;
mod javascript;
mod python;

pub use balancer::balance_brackets;
pub use diagnostics::{AnalysisResult, Diagnostic, DiagnosticKind};
pub use extract::{CodeBlock, extract_code_blocks};

/// Closed set of languages the analyzers know about.
///
/// `Unrecognized` is an explicit member so that unknown tags skip analysis
/// visibly instead of falling through a string match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Python,
    JavaScript,
    Unrecognized,
}

impl Language {
    /// Map a fenced-block language tag onto a known language.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "python" => Language::Python,
            "javascript" | "js" => Language::JavaScript,
            _ => Language::Unrecognized,
        }
    }
}

/// Analyze a single code snippet according to its language tag.
///
/// Returns `None` when the tag is not recognized — no analysis is attempted
/// for such blocks.
pub fn analyze_code(code: &str, language_tag: &str) -> Option<AnalysisResult> {
    match Language::from_tag(language_tag) {
        Language::Python => Some(python::analyze(code)),
        Language::JavaScript => Some(javascript::analyze(code)),
        Language::Unrecognized => {
            tracing::debug!(tag = language_tag, "skipping analysis for unrecognized language");
            None
        }
    }
}
