use crate::domain::payment::CreatePaymentRequest;
use crate::error::FailureBody;
use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

pub async fn create_payment(
    State(state): State<AppState>,
    Json(req): Json<CreatePaymentRequest>,
) -> impl IntoResponse {
    match state.payment_service.create_payment(req).await {
        Ok(intent) => (
            axum::http::StatusCode::OK,
            Json(serde_json::json!({"success": true, "paymentIntent": intent})),
        )
            .into_response(),
        Err(e) => (e.status(), Json(FailureBody::from_error(&e))).into_response(),
    }
}
