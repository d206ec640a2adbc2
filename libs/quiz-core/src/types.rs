//! Core types for the quiz domain.
//!
//! Field names serialize in camelCase and absent values as `null`, matching
//! the JSON the HTTP API exposes to the client.

use serde::{Deserialize, Serialize};

/// Kind of a question, as declared by its `**Type:**` directive.
///
/// The directive vocabulary is open: the two kinds the renderer understands
/// get their own variants, anything else is preserved verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionKind {
    MultipleChoice,
    FreeText,
    Other(String),
}

impl QuestionKind {
    /// The raw directive value this kind was parsed from.
    pub fn as_str(&self) -> &str {
        match self {
            Self::MultipleChoice => "Multiple Choice",
            Self::FreeText => "Free Text",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for QuestionKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Multiple Choice" => Self::MultipleChoice,
            "Free Text" => Self::FreeText,
            _ => Self::Other(raw),
        }
    }
}

impl From<QuestionKind> for String {
    fn from(kind: QuestionKind) -> Self {
        kind.as_str().to_string()
    }
}

/// One selectable choice of a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    pub text: String,
    pub is_correct: bool,
}

/// One quiz item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// 1-based position in the document, sequential with no gaps.
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: Option<QuestionKind>,
    /// Relative path of the media file shown with the question, if any.
    pub media: Option<String>,
    /// Empty unless the question is multiple-choice.
    pub options: Vec<QuizOption>,
    pub answer: Option<String>,
    pub is_bonus: bool,
}

/// A parsed quiz document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    /// Trimmed text of the first top-level heading, or empty if none.
    pub title: String,
    /// Questions in source document order.
    pub questions: Vec<Question>,
    /// All referenced media paths, deduplicated, in order of first appearance.
    pub media_files: Vec<String>,
}
