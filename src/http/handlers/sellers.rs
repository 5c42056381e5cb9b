use crate::error::FailureBody;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateSellerRequest {
    pub name: String,
    pub email: String,
}

pub async fn create_seller(
    State(state): State<AppState>,
    Json(req): Json<CreateSellerRequest>,
) -> impl IntoResponse {
    match state.onboarding.create_seller(req.name, req.email).await {
        Ok(seller) => (
            axum::http::StatusCode::CREATED,
            Json(serde_json::json!({"success": true, "seller": seller})),
        )
            .into_response(),
        Err(e) => (e.status(), Json(FailureBody::from_error(&e))).into_response(),
    }
}

pub async fn get_seller(State(state): State<AppState>, Path(id): Path<u64>) -> impl IntoResponse {
    match state.onboarding.get_seller(id).await {
        Ok(seller) => (
            axum::http::StatusCode::OK,
            Json(serde_json::json!({"success": true, "seller": seller})),
        )
            .into_response(),
        Err(e) => (e.status(), Json(FailureBody::from_error(&e))).into_response(),
    }
}
