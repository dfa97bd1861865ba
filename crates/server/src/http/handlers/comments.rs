use axum::{extract::State, http::StatusCode, Json};
use domain::NewComment;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateCommentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub comment: Option<String>,
    #[serde(rename = "postId")]
    pub post_id: Option<String>,
}

// body 手动解析：解析失败也要按本端点自己的 500 契约应答，
// 而不是框架默认的 4xx
pub async fn create_comment(
    State(state): State<AppState>,
    body: String,
) -> (StatusCode, Json<Value>) {
    let payload: CreateCommentRequest = match serde_json::from_str(&body) {
        Ok(p) => p,
        Err(e) => {
            error!("Rejected comment payload: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "message": "Error submitting comment",
                    "error": "invalid request body"
                })),
            );
        }
    };

    // 缺失字段原样转发，由后端的 schema 校验裁决
    let record = NewComment {
        name: payload.name,
        email: payload.email,
        comment: payload.comment,
        post_id: payload.post_id,
    };

    match state.backend.create_comment(record).await {
        Ok(id) => {
            info!("Comment relayed to content backend: {}", id);
            (
                StatusCode::OK,
                Json(json!({ "message": "Comment submitted" })),
            )
        }
        Err(e) => {
            error!("Failed to relay comment: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "message": "Error submitting comment",
                    "error": "content backend rejected the comment"
                })),
            )
        }
    }
}

pub async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "message": "Method not allowed" })),
    )
}
