use crate::domain::payment::PaymentRecord;
use crate::domain::seller::Seller;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
pub struct StoreInner {
    pub(crate) seller_id_seq: u64,
    pub(crate) sellers: Vec<Seller>,
    pub(crate) payments: Vec<PaymentRecord>,
}

/// Process-lifetime record store shared by every component. One lock guards
/// both collections, so each read-modify-write sequence is a single critical
/// section; the lock is never held across a gateway call.
#[derive(Clone, Default)]
pub struct RecordStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().await
    }
}
