use {
    super::Service,
    crate::{
        auction::entities::Auction,
        error::ContractError,
        kernel::entities::AuctionId,
    },
};

pub struct GetAuctionInput {
    pub auction_id: AuctionId,
}

impl Service {
    /// Public read of the auction record, available to every member of the
    /// channel.
    pub async fn get_auction(&self, input: GetAuctionInput) -> Result<Auction, ContractError> {
        self.repo.get_auction(&input.auction_id).await
    }
}
