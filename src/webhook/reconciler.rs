use crate::error::OrchestratorError;
use crate::repo::payments_repo::PaymentsRepo;
use crate::webhook::event::{EventKind, WebhookEvent};
use crate::webhook::signature;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Ack {
    pub received: bool,
}

#[derive(Clone)]
pub struct WebhookReconciler {
    pub payments_repo: PaymentsRepo,
    pub signing_secret: String,
    pub tolerance_secs: i64,
}

impl WebhookReconciler {
    /// Verifies the delivery against the raw body bytes and applies it.
    /// Deliveries that verify but do not concern us (unknown event types,
    /// intents we never recorded) are acknowledged without changing anything,
    /// so the gateway stops redelivering them.
    pub async fn handle(
        &self,
        raw_body: &[u8],
        signature_header: &str,
    ) -> Result<Ack, OrchestratorError> {
        signature::verify(
            raw_body,
            signature_header,
            &self.signing_secret,
            self.tolerance_secs,
            chrono::Utc::now().timestamp(),
        )?;

        let event: WebhookEvent = serde_json::from_slice(raw_body)
            .map_err(|e| OrchestratorError::Signature(format!("unparseable event payload: {e}")))?;

        match EventKind::from_type(&event.event_type) {
            EventKind::PaymentIntentSucceeded => {
                if let Some(intent_id) = event.object_id() {
                    let updated = self.payments_repo.mark_status(intent_id, "succeeded").await;
                    if updated {
                        tracing::info!("payment intent {} marked succeeded", intent_id);
                    } else {
                        tracing::warn!("no payment record for intent {}", intent_id);
                    }
                }
            }
            EventKind::Other => {
                tracing::info!("unhandled event type: {}", event.event_type);
            }
        }

        Ok(Ack { received: true })
    }
}
