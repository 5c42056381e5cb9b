use crate::domain::seller::Seller;
use crate::error::OrchestratorError;
use crate::gateways::{ConnectGateway, CreateAccountRequest};
use crate::repo::sellers_repo::SellersRepo;
use std::sync::Arc;

#[derive(Clone)]
pub struct SellerOnboarding {
    pub sellers_repo: SellersRepo,
    pub gateway: Arc<dyn ConnectGateway>,
}

impl SellerOnboarding {
    pub async fn create_seller(
        &self,
        name: String,
        email: String,
    ) -> Result<Seller, OrchestratorError> {
        // Connected account first, so a gateway rejection leaves no local state.
        let account = self
            .gateway
            .create_account(CreateAccountRequest {
                email: email.clone(),
            })
            .await?;

        let seller = self.sellers_repo.insert(&name, &email, &account.id).await;
        tracing::info!(
            "seller {} onboarded with account {}",
            seller.id,
            seller.stripe_account_id
        );
        Ok(seller)
    }

    pub async fn get_seller(&self, id: u64) -> Result<Seller, OrchestratorError> {
        self.sellers_repo
            .get(id)
            .await
            .ok_or(OrchestratorError::SellerNotFound(id))
    }
}
