use axum::{extract::State, Json};

use crate::state::AppState;

pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<domain::Post>>, (axum::http::StatusCode, String)> {
    let posts = state
        .backend
        .fetch_posts()
        .await
        .map_err(|e| (axum::http::StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(posts))
}
