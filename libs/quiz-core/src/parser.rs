//! Markdown parser for quiz documents.
//!
//! # Format
//! ```markdown
//! # Quiz Title
//!
//! ### Question Title Bonus
//! ![scene](scene.png)
//! **Type:** Multiple Choice
//! - [ ] an option
//! - [x] the correct option
//! **Answer:** a free-text answer
//! ```
//!
//! Sections repeat per question; any field may be absent except the question
//! heading. A line is matched against the rules in a fixed order and the first
//! match wins, so a line never fires more than one rule. Lines that match
//! nothing are prose and are skipped.

use crate::diagnostics::{Diagnostic, DiagnosticKind, Rule};
use crate::types::{Question, QuestionKind, Quiz, QuizOption};

/// Parse a quiz document permissively.
///
/// Never fails: malformed constructs degrade to ignored prose. Repeated
/// directives within one question overwrite each other, so the last one wins.
pub fn parse(content: &str) -> Quiz {
    Parser::new(false).run(content).quiz
}

/// Parse a quiz document and collect structured diagnostics.
///
/// The returned quiz is identical to what [`parse`] produces; the diagnostics
/// are a side list, so documents with authoring mistakes still load.
pub fn parse_strict(content: &str) -> StrictParse {
    Parser::new(true).run(content)
}

/// Result of a strict parse: the quiz plus everything worth flagging.
#[derive(Debug, Clone)]
pub struct StrictParse {
    pub quiz: Quiz,
    pub diagnostics: Vec<Diagnostic>,
}

struct QuestionBuilder {
    id: u32,
    title: String,
    kind: Option<QuestionKind>,
    media: Option<String>,
    options: Vec<QuizOption>,
    answer: Option<String>,
    is_bonus: bool,
    heading_line: usize,
}

impl QuestionBuilder {
    fn build(self) -> Question {
        Question {
            id: self.id,
            title: self.title,
            kind: self.kind,
            media: self.media,
            options: self.options,
            answer: self.answer,
            is_bonus: self.is_bonus,
        }
    }
}

struct Parser {
    title: Option<String>,
    current: Option<QuestionBuilder>,
    questions: Vec<Question>,
    media_files: Vec<String>,
    diagnostics: Vec<Diagnostic>,
    strict: bool,
}

impl Parser {
    fn new(strict: bool) -> Self {
        Self {
            title: None,
            current: None,
            questions: Vec::new(),
            media_files: Vec::new(),
            diagnostics: Vec::new(),
            strict,
        }
    }

    fn run(mut self, content: &str) -> StrictParse {
        for (idx, line) in content.lines().enumerate() {
            self.process_line(line, idx + 1);
        }
        // The last question has no following heading to trigger its push.
        self.flush_question();

        StrictParse {
            quiz: Quiz {
                title: self.title.unwrap_or_default(),
                questions: self.questions,
                media_files: self.media_files,
            },
            diagnostics: self.diagnostics,
        }
    }

    fn process_line(&mut self, line: &str, line_num: usize) {
        match classify(line) {
            // Only the first top-level heading before any question counts;
            // later ones (including inside question bodies) are prose.
            LineType::Title(text) => {
                if self.title.is_none() && self.current.is_none() && self.questions.is_empty() {
                    self.title = Some(text.to_string());
                }
            }
            LineType::Heading(text) => {
                self.flush_question();
                self.current = Some(QuestionBuilder {
                    id: self.questions.len() as u32 + 1,
                    title: text.to_string(),
                    kind: None,
                    media: None,
                    options: Vec::new(),
                    answer: None,
                    is_bonus: line.to_lowercase().contains("bonus"),
                    heading_line: line_num,
                });
            }
            LineType::Media(path) => match &mut self.current {
                Some(question) => {
                    question.media = Some(path.to_string());
                    if !self.media_files.iter().any(|known| known == path) {
                        self.media_files.push(path.to_string());
                    }
                }
                None => self.dangling(Rule::Media, line_num),
            },
            LineType::Kind(raw) => match &mut self.current {
                Some(question) => {
                    let kind = QuestionKind::from(raw.to_string());
                    if self.strict {
                        if let QuestionKind::Other(other) = &kind {
                            self.diagnostics.push(Diagnostic {
                                line: line_num,
                                rule: Rule::TypeDirective,
                                kind: DiagnosticKind::UnknownType(other.clone()),
                            });
                        }
                    }
                    question.kind = Some(kind);
                }
                None => self.dangling(Rule::TypeDirective, line_num),
            },
            LineType::Answer(text) => match &mut self.current {
                Some(question) => question.answer = Some(text.to_string()),
                None => self.dangling(Rule::AnswerDirective, line_num),
            },
            LineType::Option { text, correct } => match &mut self.current {
                Some(question) => question.options.push(QuizOption {
                    text: text.to_string(),
                    is_correct: correct,
                }),
                None => self.dangling(Rule::Option, line_num),
            },
            LineType::Prose => {}
        }
    }

    fn flush_question(&mut self) {
        if let Some(question) = self.current.take() {
            if self.strict && question.kind.is_none() {
                self.diagnostics.push(Diagnostic {
                    line: question.heading_line,
                    rule: Rule::Heading,
                    kind: DiagnosticKind::MissingType,
                });
            }
            self.questions.push(question.build());
        }
    }

    fn dangling(&mut self, rule: Rule, line_num: usize) {
        if self.strict {
            self.diagnostics.push(Diagnostic {
                line: line_num,
                rule,
                kind: DiagnosticKind::Dangling,
            });
        }
    }
}

enum LineType<'a> {
    Title(&'a str),
    Heading(&'a str),
    Media(&'a str),
    Kind(&'a str),
    Answer(&'a str),
    Option { text: &'a str, correct: bool },
    Prose,
}

fn classify(line: &str) -> LineType<'_> {
    if let Some(rest) = line.strip_prefix("# ") {
        return LineType::Title(rest.trim());
    }
    if let Some(rest) = line.strip_prefix("### ") {
        return LineType::Heading(rest.trim());
    }
    if let Some(path) = media_path(line) {
        return LineType::Media(path);
    }
    if let Some(value) = directive_value(line, "**Type:**") {
        return LineType::Kind(value);
    }
    if let Some(value) = directive_value(line, "**Answer:**") {
        return LineType::Answer(value);
    }
    if let Some((text, correct)) = task_list_item(line) {
        return LineType::Option { text, correct };
    }
    LineType::Prose
}

/// Extract the path from an inline `![alt](path)` reference. The alt text is
/// ignored; the path must be non-empty.
fn media_path(line: &str) -> Option<&str> {
    let start = line.find("![")?;
    let rest = &line[start + 2..];
    let alt_end = rest.find("](")?;
    let target = &rest[alt_end + 2..];
    let end = target.find(')')?;
    (end > 0).then(|| &target[..end])
}

/// Extract the trimmed value after a bold-marked label like `**Type:**`.
fn directive_value<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let idx = line.find(label)?;
    let value = line[idx + label.len()..].trim();
    (!value.is_empty()).then_some(value)
}

/// Match an optionally indented task-list item: `- [ ] text` or `- [x] TEXT`.
/// The bracket test is case-insensitive for `x`.
fn task_list_item(line: &str) -> Option<(&str, bool)> {
    let rest = line.trim_start().strip_prefix("- [")?;
    let mut chars = rest.chars();
    let mark = chars.next()?;
    if !matches!(mark, ' ' | 'x' | 'X') {
        return None;
    }
    let text = chars.as_str().strip_prefix(']')?;
    Some((text.trim(), matches!(mark, 'x' | 'X')))
}
