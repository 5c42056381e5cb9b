use crate::error::OrchestratorError;
use crate::gateways::{
    ConnectGateway, ConnectedAccount, CreateAccountRequest, CreateCustomerRequest, Customer,
    PaymentIntent, PaymentIntentRequest,
};
use serde::Deserialize;

pub struct StripeGateway {
    pub base_url: String,
    pub secret_key: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Deserialize)]
struct CustomerList {
    data: Vec<Customer>,
}

impl StripeGateway {
    fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_ms)
    }
}

fn failure(status: reqwest::StatusCode, body: String) -> OrchestratorError {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(&body) {
        if let Some(message) = envelope.error.and_then(|e| e.message) {
            return OrchestratorError::Gateway(message);
        }
    }
    OrchestratorError::Gateway(format!(
        "HTTP_{} {}",
        status.as_u16(),
        body.chars().take(200).collect::<String>()
    ))
}

fn transport(e: reqwest::Error) -> OrchestratorError {
    if e.is_timeout() {
        OrchestratorError::Gateway("gateway timeout".to_string())
    } else {
        OrchestratorError::Gateway(e.to_string())
    }
}

#[async_trait::async_trait]
impl ConnectGateway for StripeGateway {
    fn name(&self) -> &'static str {
        "stripe"
    }

    async fn create_account(
        &self,
        request: CreateAccountRequest,
    ) -> Result<ConnectedAccount, OrchestratorError> {
        let url = format!("{}/v1/accounts", self.base_url);
        let form = [
            ("type", "express"),
            ("country", "US"),
            ("email", request.email.as_str()),
            ("capabilities[card_payments][requested]", "true"),
            ("capabilities[transfers][requested]", "true"),
        ];

        let resp = self
            .client
            .post(url)
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&form)
            .timeout(self.timeout())
            .send()
            .await;

        match resp {
            Ok(r) if r.status().is_success() => r
                .json::<ConnectedAccount>()
                .await
                .map_err(|e| OrchestratorError::Gateway(e.to_string())),
            Ok(r) => {
                let status = r.status();
                let body = r.text().await.unwrap_or_default();
                Err(failure(status, body))
            }
            Err(e) => Err(transport(e)),
        }
    }

    async fn find_customer_by_email(
        &self,
        stripe_account_id: &str,
        email: &str,
    ) -> Result<Option<Customer>, OrchestratorError> {
        let url = format!("{}/v1/customers", self.base_url);

        let resp = self
            .client
            .get(url)
            .basic_auth(&self.secret_key, None::<&str>)
            .header("Stripe-Account", stripe_account_id)
            .query(&[("email", email)])
            .timeout(self.timeout())
            .send()
            .await;

        match resp {
            Ok(r) if r.status().is_success() => {
                let list = r
                    .json::<CustomerList>()
                    .await
                    .map_err(|e| OrchestratorError::Gateway(e.to_string()))?;
                Ok(list.data.into_iter().next())
            }
            Ok(r) => {
                let status = r.status();
                let body = r.text().await.unwrap_or_default();
                Err(failure(status, body))
            }
            Err(e) => Err(transport(e)),
        }
    }

    async fn create_customer(
        &self,
        stripe_account_id: &str,
        request: CreateCustomerRequest,
    ) -> Result<Customer, OrchestratorError> {
        let url = format!("{}/v1/customers", self.base_url);
        let mut form: Vec<(&str, String)> = vec![
            ("email", request.email),
            ("name", request.name),
            ("phone", request.phone),
        ];
        if let Some(payment_method) = request.payment_method_id {
            form.push(("payment_method", payment_method));
        }

        let resp = self
            .client
            .post(url)
            .basic_auth(&self.secret_key, None::<&str>)
            .header("Stripe-Account", stripe_account_id)
            .form(&form)
            .timeout(self.timeout())
            .send()
            .await;

        match resp {
            Ok(r) if r.status().is_success() => r
                .json::<Customer>()
                .await
                .map_err(|e| OrchestratorError::Gateway(e.to_string())),
            Ok(r) => {
                let status = r.status();
                let body = r.text().await.unwrap_or_default();
                Err(failure(status, body))
            }
            Err(e) => Err(transport(e)),
        }
    }

    async fn create_payment_intent(
        &self,
        stripe_account_id: &str,
        request: PaymentIntentRequest,
    ) -> Result<PaymentIntent, OrchestratorError> {
        let url = format!("{}/v1/payment_intents", self.base_url);
        let form: Vec<(&str, String)> = vec![
            ("amount", request.amount_minor.to_string()),
            ("currency", request.currency),
            ("customer", request.customer_id),
            ("payment_method", request.payment_method_id),
            ("confirm", "true".to_string()),
            ("receipt_email", request.receipt_email),
            ("metadata[name]", request.metadata.name),
            ("metadata[phone]", request.metadata.phone),
            ("metadata[address]", request.metadata.address),
            (
                "application_fee_amount",
                request.application_fee_minor.to_string(),
            ),
            ("transfer_data[destination]", request.destination_account_id),
        ];

        let resp = self
            .client
            .post(url)
            .basic_auth(&self.secret_key, None::<&str>)
            .header("Stripe-Account", stripe_account_id)
            .form(&form)
            .timeout(self.timeout())
            .send()
            .await;

        match resp {
            Ok(r) if r.status().is_success() => r
                .json::<PaymentIntent>()
                .await
                .map_err(|e| OrchestratorError::Gateway(e.to_string())),
            Ok(r) => {
                let status = r.status();
                let body = r.text().await.unwrap_or_default();
                Err(failure(status, body))
            }
            Err(e) => Err(transport(e)),
        }
    }
}
