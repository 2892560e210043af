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
    pub async fn get_auction(
        &self,
        auction_id: &AuctionId,
    ) -> Result<entities::Auction, ContractError> {
        let raw = self
            .ledger
            .get_state(auction_id.clone())
            .await?
            .ok_or_else(|| {
                ContractError::NotFound(format!("auction {auction_id} does not exist"))
            })?;

        let document: models::Auction = serde_json::from_slice(&raw).map_err(|e| {
            tracing::error!(
                error = e.to_string(),
                auction_id = auction_id.as_str(),
                "Failed to decode auction record"
            );
            ContractError::Ledger(format!("auction record {auction_id} is not decodable: {e}"))
        })?;

        document.get_auction_entity().map_err(|e| {
            tracing::error!(
                error = e.to_string(),
                auction_id = auction_id.as_str(),
                "Auction record is not a valid auction"
            );
            ContractError::Ledger(e.to_string())
        })
    }
}
