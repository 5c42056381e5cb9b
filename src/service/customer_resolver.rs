use crate::error::OrchestratorError;
use crate::gateways::{ConnectGateway, CreateCustomerRequest, Customer};
use std::sync::Arc;

#[derive(Clone)]
pub struct CustomerResolver {
    pub gateway: Arc<dyn ConnectGateway>,
}

impl CustomerResolver {
    /// Finds the customer for `email` under the seller's connected account,
    /// creating one if none is listed. Lookup and create are two separate
    /// gateway calls, so concurrent resolves for a brand-new email can each
    /// create a customer; later resolves settle on whichever the gateway
    /// lists first.
    pub async fn resolve(
        &self,
        seller_account_id: &str,
        email: &str,
        name: &str,
        phone: &str,
        payment_method_id: Option<&str>,
    ) -> Result<Customer, OrchestratorError> {
        // First match in the gateway's native list order, not by recency.
        if let Some(existing) = self
            .gateway
            .find_customer_by_email(seller_account_id, email)
            .await?
        {
            return Ok(existing);
        }

        self.gateway
            .create_customer(
                seller_account_id,
                CreateCustomerRequest {
                    email: email.to_string(),
                    name: name.to_string(),
                    phone: phone.to_string(),
                    payment_method_id: payment_method_id.map(str::to_string),
                },
            )
            .await
    }
}
