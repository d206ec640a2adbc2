//! Filesystem quiz library.
//!
//! Quizzes live under a root directory, one folder per quiz, with the document
//! at `<root>/<name>/<name>.md` and media files beside it.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use thiserror::Error;
use tokio::sync::RwLock;

use quiz_core::Quiz;

use crate::models::QuizSummary;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("quiz not found: {0}")]
    NotFound(String),

    #[error("invalid name: {0}")]
    InvalidName(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

struct CachedQuiz {
    modified: SystemTime,
    quiz: Arc<Quiz>,
}

/// Read-through quiz store over a directory tree.
///
/// Parses are cached per quiz and reused until the document's modification
/// time changes, so repeated API calls don't re-read unchanged files.
pub struct QuizLibrary {
    root: PathBuf,
    cache: RwLock<HashMap<String, CachedQuiz>>,
}

impl QuizLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List available quizzes: directories under the root that contain their
    /// own `<name>.md`, sorted by name.
    pub async fn list(&self) -> Result<Vec<QuizSummary>, LibraryError> {
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        let mut quizzes = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_dir() {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            let doc = self.document_path(&name);
            if tokio::fs::try_exists(&doc).await? {
                quizzes.push(QuizSummary {
                    name,
                    path: doc.to_string_lossy().into_owned(),
                });
            }
        }

        quizzes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(quizzes)
    }

    /// Load and parse a quiz by name.
    ///
    /// A missing quiz is a distinct `NotFound`, never an empty quiz, so
    /// callers can tell "no such quiz" from "quiz with zero questions".
    pub async fn load(&self, name: &str) -> Result<Arc<Quiz>, LibraryError> {
        validate_name(name)?;
        let doc = self.document_path(name);

        let metadata = match tokio::fs::metadata(&doc).await {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(LibraryError::NotFound(format!("quiz {name}")));
            }
            Err(err) => return Err(err.into()),
        };
        let modified = metadata.modified()?;

        if let Some(cached) = self.cache.read().await.get(name) {
            if cached.modified == modified {
                return Ok(cached.quiz.clone());
            }
        }

        let content = match tokio::fs::read_to_string(&doc).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(LibraryError::NotFound(format!("quiz {name}")));
            }
            Err(err) => return Err(err.into()),
        };

        let quiz = Arc::new(quiz_core::parse(&content));
        tracing::debug!(
            quiz = name,
            questions = quiz.questions.len(),
            "parsed quiz document"
        );

        self.cache.write().await.insert(
            name.to_string(),
            CachedQuiz {
                modified,
                quiz: quiz.clone(),
            },
        );
        Ok(quiz)
    }

    /// Resolve a media file inside a quiz's directory.
    pub async fn media_path(&self, quiz: &str, filename: &str) -> Result<PathBuf, LibraryError> {
        validate_name(quiz)?;
        validate_name(filename)?;

        let path = self.root.join(quiz).join(filename);
        if !tokio::fs::try_exists(&path).await? {
            return Err(LibraryError::NotFound(format!("media {quiz}/{filename}")));
        }
        Ok(path)
    }

    fn document_path(&self, name: &str) -> PathBuf {
        self.root.join(name).join(format!("{name}.md"))
    }
}

/// Reject names that could escape the library root.
fn validate_name(name: &str) -> Result<(), LibraryError> {
    let traversal = name == "." || name == ".." || name.contains(['/', '\\']);
    if name.is_empty() || traversal {
        return Err(LibraryError::InvalidName(name.to_string()));
    }
    Ok(())
}
