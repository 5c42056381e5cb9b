use crate::domain::payment::{CreatePaymentRequest, PaymentRecord};
use crate::error::OrchestratorError;
use crate::gateways::{ConnectGateway, IntentMetadata, PaymentIntent, PaymentIntentRequest};
use crate::repo::payments_repo::PaymentsRepo;
use crate::service::customer_resolver::CustomerResolver;
use std::sync::Arc;

/// Fixed charge policy: every checkout charges the same amount and takes the
/// same platform fee, with the remainder routed to the seller's account.
#[derive(Debug, Clone)]
pub struct PaymentPolicy {
    pub amount_minor: i64,
    pub application_fee_minor: i64,
    pub currency: String,
}

impl Default for PaymentPolicy {
    fn default() -> Self {
        Self {
            amount_minor: 5000,
            application_fee_minor: 500,
            currency: "usd".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct PaymentService {
    pub payments_repo: PaymentsRepo,
    pub resolver: CustomerResolver,
    pub gateway: Arc<dyn ConnectGateway>,
    pub policy: PaymentPolicy,
}

impl PaymentService {
    pub async fn create_payment(
        &self,
        req: CreatePaymentRequest,
    ) -> Result<PaymentIntent, OrchestratorError> {
        let customer = self
            .resolver
            .resolve(
                &req.seller_stripe_account_id,
                &req.email,
                &req.name,
                &req.phone,
                Some(&req.payment_method_id),
            )
            .await?;

        let intent = self
            .gateway
            .create_payment_intent(
                &req.seller_stripe_account_id,
                PaymentIntentRequest {
                    amount_minor: self.policy.amount_minor,
                    currency: self.policy.currency.clone(),
                    customer_id: customer.id,
                    payment_method_id: req.payment_method_id.clone(),
                    application_fee_minor: self.policy.application_fee_minor,
                    destination_account_id: req.seller_stripe_account_id.clone(),
                    receipt_email: req.email.clone(),
                    metadata: IntentMetadata {
                        name: req.name.clone(),
                        phone: req.phone.clone(),
                        address: req.address.clone(),
                    },
                },
            )
            .await?;

        tracing::info!(
            "payment intent {} for account {} is {}",
            intent.id,
            req.seller_stripe_account_id,
            intent.status
        );

        // Status is stored exactly as the gateway reported it.
        self.payments_repo
            .insert(PaymentRecord {
                payment_intent_id: intent.id.clone(),
                amount_minor: intent.amount,
                seller_account_id: req.seller_stripe_account_id,
                status: intent.status.clone(),
            })
            .await?;

        Ok(intent)
    }
}
