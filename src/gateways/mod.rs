use crate::error::OrchestratorError;
use serde::{Deserialize, Serialize};

pub mod mock;
pub mod stripe;

#[derive(Debug, Clone)]
pub struct CreateAccountRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectedAccount {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
}

#[derive(Debug, Clone)]
pub struct CreateCustomerRequest {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub payment_method_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentMetadata {
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone)]
pub struct PaymentIntentRequest {
    pub amount_minor: i64,
    pub currency: String,
    pub customer_id: String,
    pub payment_method_id: String,
    pub application_fee_minor: i64,
    pub destination_account_id: String,
    pub receipt_email: String,
    pub metadata: IntentMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub client_secret: Option<String>,
}

/// The external payment gateway as seen by the orchestration layer. Customer
/// operations are scoped to a seller's connected account; every failure
/// surfaces as `OrchestratorError::Gateway` carrying the gateway's message.
#[async_trait::async_trait]
pub trait ConnectGateway: Send + Sync {
    fn name(&self) -> &'static str;

    async fn create_account(
        &self,
        request: CreateAccountRequest,
    ) -> Result<ConnectedAccount, OrchestratorError>;

    async fn find_customer_by_email(
        &self,
        stripe_account_id: &str,
        email: &str,
    ) -> Result<Option<Customer>, OrchestratorError>;

    async fn create_customer(
        &self,
        stripe_account_id: &str,
        request: CreateCustomerRequest,
    ) -> Result<Customer, OrchestratorError>;

    async fn create_payment_intent(
        &self,
        stripe_account_id: &str,
        request: PaymentIntentRequest,
    ) -> Result<PaymentIntent, OrchestratorError>;
}
