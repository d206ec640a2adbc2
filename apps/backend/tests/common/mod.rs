//! Common test utilities for integration tests.
//!
//! Each test context owns a throwaway directory tree (quizzes plus a public
//! dir) and a router built over it, so tests run fully self-contained and in
//! parallel.

pub mod fixtures;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use uuid::Uuid;

use quizmd_backend::services::library::QuizLibrary;
use quizmd_backend::{build_router, AppState};

/// Test context owning a temporary quiz library and the router over it.
pub struct TestContext {
    base: PathBuf,
    quizzes: PathBuf,
    public: PathBuf,
    app: Router,
}

impl TestContext {
    /// Create a context with an empty quiz directory.
    pub fn new() -> Self {
        let base = std::env::temp_dir().join(format!("quizmd-test-{}", Uuid::new_v4()));
        let quizzes = base.join("quizzes");
        let public = base.join("public");
        std::fs::create_dir_all(&quizzes).expect("create quizzes dir");
        std::fs::create_dir_all(&public).expect("create public dir");

        let state = AppState {
            library: Arc::new(QuizLibrary::new(quizzes.clone())),
        };
        let app = build_router(state, &public);

        Self {
            base,
            quizzes,
            public,
            app,
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Write a quiz document under `<quizzes>/<name>/<name>.md`.
    pub fn add_quiz(&self, name: &str, content: &str) {
        let dir = self.quizzes.join(name);
        std::fs::create_dir_all(&dir).expect("create quiz dir");
        std::fs::write(dir.join(format!("{name}.md")), content).expect("write quiz document");
    }

    /// Create a quiz directory without a matching document.
    pub fn add_empty_dir(&self, name: &str) {
        std::fs::create_dir_all(self.quizzes.join(name)).expect("create dir");
    }

    /// Write a media file beside a quiz document.
    pub fn add_media(&self, quiz: &str, filename: &str, bytes: &[u8]) {
        let dir = self.quizzes.join(quiz);
        std::fs::create_dir_all(&dir).expect("create quiz dir");
        std::fs::write(dir.join(filename), bytes).expect("write media file");
    }

    /// Write a static frontend file into the public dir.
    pub fn add_public_file(&self, name: &str, content: &str) {
        std::fs::write(self.public.join(name), content).expect("write public file");
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.base);
    }
}
