use crate::error::FailureBody;
use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachPaymentMethodRequest {
    pub payment_method_id: String,
    pub seller_stripe_account_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

pub async fn attach_payment_method(
    State(state): State<AppState>,
    Json(req): Json<AttachPaymentMethodRequest>,
) -> impl IntoResponse {
    match state
        .customer_resolver
        .resolve(
            &req.seller_stripe_account_id,
            &req.email,
            &req.name,
            &req.phone,
            Some(&req.payment_method_id),
        )
        .await
    {
        Ok(customer) => (
            axum::http::StatusCode::OK,
            Json(serde_json::json!({"success": true, "customerId": customer.id})),
        )
            .into_response(),
        Err(e) => (e.status(), Json(FailureBody::from_error(&e))).into_response(),
    }
}
