use crate::error::OrchestratorError;
use crate::gateways::{
    ConnectGateway, ConnectedAccount, CreateAccountRequest, CreateCustomerRequest, Customer,
    PaymentIntent, PaymentIntentRequest,
};
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct MockCustomer {
    pub account_id: String,
    pub email: String,
    pub customer: Customer,
    pub payment_method: Option<String>,
}

/// In-process stand-in for the real gateway. Customers are kept in an
/// insertion-ordered registry so lookup scoping behaves like the hosted API.
pub struct MockGateway {
    pub behavior: String,
    pub intent_status: String,
    customers: Mutex<Vec<MockCustomer>>,
    intents: Mutex<Vec<(String, PaymentIntentRequest)>>,
}

impl MockGateway {
    pub fn new(behavior: &str) -> Self {
        Self::with_intent_status(behavior, "succeeded")
    }

    pub fn with_intent_status(behavior: &str, intent_status: &str) -> Self {
        Self {
            behavior: behavior.to_string(),
            intent_status: intent_status.to_string(),
            customers: Mutex::new(Vec::new()),
            intents: Mutex::new(Vec::new()),
        }
    }

    pub async fn seed_customer(&self, account_id: &str, email: &str) -> Customer {
        let customer = Customer {
            id: format!("cus_mock_{}", uuid::Uuid::new_v4()),
        };
        self.customers.lock().await.push(MockCustomer {
            account_id: account_id.to_string(),
            email: email.to_string(),
            customer: customer.clone(),
            payment_method: None,
        });
        customer
    }

    pub async fn customer_count(&self) -> usize {
        self.customers.lock().await.len()
    }

    pub async fn customers(&self) -> Vec<MockCustomer> {
        self.customers.lock().await.clone()
    }

    pub async fn intent_requests(&self) -> Vec<(String, PaymentIntentRequest)> {
        self.intents.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl ConnectGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn create_account(
        &self,
        _request: CreateAccountRequest,
    ) -> Result<ConnectedAccount, OrchestratorError> {
        match self.behavior.as_str() {
            "REJECT_ACCOUNT" => Err(OrchestratorError::Gateway(
                "mock account rejection".to_string(),
            )),
            _ => Ok(ConnectedAccount {
                id: format!("acct_mock_{}", uuid::Uuid::new_v4()),
            }),
        }
    }

    async fn find_customer_by_email(
        &self,
        stripe_account_id: &str,
        email: &str,
    ) -> Result<Option<Customer>, OrchestratorError> {
        let customers = self.customers.lock().await;
        Ok(customers
            .iter()
            .find(|c| c.account_id == stripe_account_id && c.email == email)
            .map(|c| c.customer.clone()))
    }

    async fn create_customer(
        &self,
        stripe_account_id: &str,
        request: CreateCustomerRequest,
    ) -> Result<Customer, OrchestratorError> {
        match self.behavior.as_str() {
            "REJECT_CUSTOMER" => Err(OrchestratorError::Gateway(
                "mock customer rejection".to_string(),
            )),
            _ => {
                let customer = Customer {
                    id: format!("cus_mock_{}", uuid::Uuid::new_v4()),
                };
                self.customers.lock().await.push(MockCustomer {
                    account_id: stripe_account_id.to_string(),
                    email: request.email,
                    customer: customer.clone(),
                    payment_method: request.payment_method_id,
                });
                Ok(customer)
            }
        }
    }

    async fn create_payment_intent(
        &self,
        stripe_account_id: &str,
        request: PaymentIntentRequest,
    ) -> Result<PaymentIntent, OrchestratorError> {
        self.intents
            .lock()
            .await
            .push((stripe_account_id.to_string(), request.clone()));

        match self.behavior.as_str() {
            "DECLINE_INTENT" => Err(OrchestratorError::Gateway("mock decline".to_string())),
            _ => {
                let id = format!("pi_mock_{}", uuid::Uuid::new_v4());
                Ok(PaymentIntent {
                    client_secret: Some(format!("{id}_secret_mock")),
                    id,
                    amount: request.amount_minor,
                    currency: request.currency,
                    status: self.intent_status.clone(),
                })
            }
        }
    }
}
