use {
    super::{
        models,
        Repository,
    },
    crate::{
        auction::entities,
        error::ContractError,
        kernel::entities::AuctionId,
    },
};

impl Repository {
    pub async fn put_auction(
        &self,
        auction_id: &AuctionId,
        auction: &entities::Auction,
    ) -> Result<(), ContractError> {
        let document = models::Auction::new_document(auction);
        let raw = serde_json::to_vec(&document)
            .map_err(|e| ContractError::Ledger(format!("failed to encode auction record: {e}")))?;

        self.ledger
            .put_state(auction_id.clone(), raw)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = e.to_string(),
                    auction_id = auction_id.as_str(),
                    "Failed to write auction record"
                );
                ContractError::from(e)
            })
    }
}
