use crate::domain::payment::PaymentRecord;
use crate::error::OrchestratorError;
use crate::store::RecordStore;

#[derive(Clone)]
pub struct PaymentsRepo {
    pub store: RecordStore,
}

impl PaymentsRepo {
    /// Appends a record for an accepted intent. At most one record may exist
    /// per payment intent id.
    pub async fn insert(&self, record: PaymentRecord) -> Result<(), OrchestratorError> {
        let mut inner = self.store.write().await;
        if inner
            .payments
            .iter()
            .any(|p| p.payment_intent_id == record.payment_intent_id)
        {
            return Err(OrchestratorError::DuplicatePayment(
                record.payment_intent_id,
            ));
        }
        inner.payments.push(record);
        Ok(())
    }

    /// Sets the status of the record matching `payment_intent_id`. Returns
    /// whether a record matched; a miss is not an error.
    pub async fn mark_status(&self, payment_intent_id: &str, status: &str) -> bool {
        let mut inner = self.store.write().await;
        match inner
            .payments
            .iter_mut()
            .find(|p| p.payment_intent_id == payment_intent_id)
        {
            Some(record) => {
                record.status = status.to_string();
                true
            }
            None => false,
        }
    }

    pub async fn find(&self, payment_intent_id: &str) -> Option<PaymentRecord> {
        let inner = self.store.read().await;
        inner
            .payments
            .iter()
            .find(|p| p.payment_intent_id == payment_intent_id)
            .cloned()
    }

    pub async fn all(&self) -> Vec<PaymentRecord> {
        let inner = self.store.read().await;
        inner.payments.clone()
    }
}
