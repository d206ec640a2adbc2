//! Media streaming endpoint

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::error::Result;
use crate::AppState;

/// GET /api/media/{quiz}/{filename}
pub async fn get(
    State(state): State<AppState>,
    Path((quiz, filename)): Path<(String, String)>,
) -> Result<impl IntoResponse> {
    let path = state.library.media_path(&quiz, &filename).await?;
    let bytes = tokio::fs::read(&path).await?;
    let content_type = content_type_for(&filename);
    Ok(([(header::CONTENT_TYPE, content_type)], bytes))
}

/// Content type from the file extension. Unknown extensions stream as opaque
/// bytes rather than failing.
fn content_type_for(filename: &str) -> &'static str {
    let ext = std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        _ => "application/octet-stream",
    }
}
