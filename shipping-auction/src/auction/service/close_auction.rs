use {
    super::Service,
    crate::{
        auction::entities::AuctionStatus,
        error::ContractError,
        kernel::entities::{
            AuctionId,
            ClientIdentity,
        },
    },
};

pub struct CloseAuctionInput {
    pub auction_id: AuctionId,
    pub submitter:  ClientIdentity,
}

impl Service {
    /// Stops the bidding phase. No further hashes can be registered once the
    /// auction is closed; bidders may start revealing.
    #[tracing::instrument(skip_all, fields(auction_id = %input.auction_id))]
    pub async fn close_auction(&self, input: CloseAuctionInput) -> Result<(), ContractError> {
        let mut auction = self.repo.get_auction(&input.auction_id).await?;

        if auction.seller != input.submitter.id {
            return Err(ContractError::Forbidden(
                "the auction can only be closed by the seller".to_string(),
            ));
        }
        if !auction.status.is_open() {
            return Err(ContractError::InvalidState(format!(
                "cannot close an auction that is {}",
                auction.status
            )));
        }

        auction.status = AuctionStatus::Closed;
        self.repo.put_auction(&input.auction_id, &auction).await?;

        tracing::info!("Closed auction");
        Ok(())
    }
}
