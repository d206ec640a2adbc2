//! Diagnostics collected by strict-mode parsing.
//!
//! The parser never rejects a document; strict mode reports what the
//! permissive pass silently skipped so authors can validate their files.

use std::fmt;

use thiserror::Error;

/// Structural rule a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Title,
    Heading,
    Media,
    TypeDirective,
    AnswerDirective,
    Option,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Heading => "heading",
            Self::Media => "media",
            Self::TypeDirective => "type directive",
            Self::AnswerDirective => "answer directive",
            Self::Option => "option",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a line was flagged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    #[error("no question is open at this line")]
    Dangling,

    #[error("question has no **Type:** directive")]
    MissingType,

    #[error("unrecognized question type: {0}")]
    UnknownType(String),
}

/// A structured note about a line the permissive parser glossed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number in the source document.
    pub line: usize,
    pub rule: Rule,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} ({}): {}", self.line, self.rule, self.kind)
    }
}
