//! API types

use serde::{Deserialize, Serialize};

// Re-export shared types from quiz-core
pub use quiz_core::types::{Question, QuestionKind, Quiz, QuizOption};

/// One entry in the quiz listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSummary {
    pub name: String,
    /// Path of the quiz document on disk.
    pub path: String,
}

/// Full parsed quiz, with the library name it was loaded under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub name: String,
    #[serde(flatten)]
    pub quiz: Quiz,
}
