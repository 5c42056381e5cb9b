use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;

// The body stays raw here: the signature covers the exact bytes the gateway
// sent, so this handler must never go through a Json extractor.
pub async fn handle_delivery(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let signature = headers
        .get("stripe-signature")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");

    match state.reconciler.handle(&body, signature).await {
        Ok(ack) => (axum::http::StatusCode::OK, Json(ack)).into_response(),
        Err(e) => (e.status(), format!("Webhook Error: {e}")).into_response(),
    }
}
