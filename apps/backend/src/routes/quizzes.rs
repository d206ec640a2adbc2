//! Quiz listing and fetch endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::models::{QuizResponse, QuizSummary};
use crate::AppState;

/// GET /api/quizzes
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<QuizSummary>>> {
    let quizzes = state.library.list().await?;
    Ok(Json(quizzes))
}

/// GET /api/quiz/{name}
pub async fn get(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<QuizResponse>> {
    let quiz = state.library.load(&name).await?;
    Ok(Json(QuizResponse {
        name,
        quiz: (*quiz).clone(),
    }))
}
