use {
    super::{
        verification,
        Service,
    },
    crate::{
        auction::entities::AuctionStatus,
        error::ContractError,
        kernel::entities::{
            AuctionId,
            ClientIdentity,
        },
    },
};

pub struct EndAuctionInput {
    pub auction_id: AuctionId,
    pub submitter:  ClientIdentity,
}

impl Service {
    /// Finalizes a closed auction: resolves the winner from the revealed bids
    /// and verifies, as far as this peer can, that no better bid is still
    /// sealed. On success the record becomes final.
    #[tracing::instrument(skip_all, fields(auction_id = %input.auction_id))]
    pub async fn end_auction(&self, input: EndAuctionInput) -> Result<(), ContractError> {
        let mut auction = self.repo.get_auction(&input.auction_id).await?;

        if auction.seller != input.submitter.id {
            return Err(ContractError::Forbidden(
                "the auction can only be ended by the seller".to_string(),
            ));
        }
        if !auction.status.is_closed() {
            return Err(ContractError::InvalidState(format!(
                "can only end a closed auction, not an {} one",
                auction.status
            )));
        }
        if auction.revealed_bids.is_empty() {
            return Err(ContractError::NoBids);
        }

        verification::resolve_winner(&mut auction);
        self.check_for_unrevealed_bid(&auction).await?;

        auction.status = AuctionStatus::Ended;
        self.repo.put_auction(&input.auction_id, &auction).await?;

        tracing::info!(
            winner = auction.winner.as_deref().unwrap_or_default(),
            price = auction.price,
            "Ended auction"
        );
        Ok(())
    }
}
