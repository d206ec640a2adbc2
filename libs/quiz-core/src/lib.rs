//! Core quiz library shared by the backend application.
//!
//! Provides:
//! - Markdown parser for quiz documents (permissive by default, strict opt-in)
//! - Keyboard session state machine for quiz playback
//! - Shared types (Quiz, Question, QuizOption)

pub mod diagnostics;
pub mod parser;
pub mod session;
pub mod types;

pub use diagnostics::{Diagnostic, DiagnosticKind, Rule};
pub use parser::{parse, parse_strict, StrictParse};
pub use session::{update, Key, Phase, SessionEnv, SessionState};
pub use types::{Question, QuestionKind, Quiz, QuizOption};
