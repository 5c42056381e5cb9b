use crate::domain::seller::Seller;
use crate::store::RecordStore;

#[derive(Clone)]
pub struct SellersRepo {
    pub store: RecordStore,
}

impl SellersRepo {
    /// Appends a seller under the next id from the store-owned counter. Ids
    /// are monotonic and never reused, independent of collection length.
    pub async fn insert(&self, name: &str, email: &str, stripe_account_id: &str) -> Seller {
        let mut inner = self.store.write().await;
        inner.seller_id_seq += 1;
        let seller = Seller {
            id: inner.seller_id_seq,
            name: name.to_string(),
            email: email.to_string(),
            stripe_account_id: stripe_account_id.to_string(),
        };
        inner.sellers.push(seller.clone());
        seller
    }

    pub async fn get(&self, id: u64) -> Option<Seller> {
        let inner = self.store.read().await;
        inner.sellers.iter().find(|s| s.id == id).cloned()
    }

    pub async fn count(&self) -> usize {
        let inner = self.store.read().await;
        inner.sellers.len()
    }
}
