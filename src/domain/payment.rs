use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub payment_method_id: String,
    pub seller_stripe_account_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

// Local record of an intent the gateway accepted. `status` carries the
// gateway's reported intent status verbatim; that set is gateway-defined and
// open, so it stays a string rather than an enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub payment_intent_id: String,
    pub amount_minor: i64,
    pub seller_account_id: String,
    pub status: String,
}
