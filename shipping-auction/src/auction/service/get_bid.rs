use {
    super::Service,
    crate::{
        auction::entities::{
            BidKey,
            RevealedBid,
            SealedBid,
        },
        error::ContractError,
        kernel::entities::{
            AuctionId,
            ClientIdentity,
        },
    },
};

pub struct GetBidInput {
    pub auction_id: AuctionId,
    pub bid_key:    BidKey,
    pub submitter:  ClientIdentity,
}

impl Service {
    /// Reads the caller's own sealed bid back from their organization's
    /// private collection, independent of public revelation. Denied for
    /// everyone but the bidder who committed it.
    #[tracing::instrument(skip_all, fields(auction_id = %input.auction_id, bid_key = %input.bid_key))]
    pub async fn get_bid(&self, input: GetBidInput) -> Result<RevealedBid, ContractError> {
        if input.submitter.org != self.config.peer_org {
            return Err(ContractError::WrongGroupPeer(format!(
                "cannot read a bid of {} on a peer of {}",
                input.submitter.org, self.config.peer_org
            )));
        }

        let payload = self
            .repo
            .get_private_bid(&input.submitter.org, &input.bid_key)
            .await?;

        let sealed: SealedBid = serde_json::from_slice(&payload).map_err(|e| {
            ContractError::BadParameters(format!("sealed bid is not a valid bid document: {e}"))
        })?;

        if sealed.bidder != input.submitter.id {
            return Err(ContractError::Forbidden(format!(
                "client {} is not the owner of the bid",
                input.submitter.id
            )));
        }

        Ok(RevealedBid {
            price:  sealed.price,
            org:    sealed.org,
            bidder: sealed.bidder,
        })
    }
}
