use {
    super::Service,
    crate::{
        auction::entities::{
            digest_hex,
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

pub struct RevealBidInput {
    pub auction_id: AuctionId,
    pub bid_key:    BidKey,
    /// The same out-of-band bytes that were committed; must match to the byte.
    pub sealed_bid: Vec<u8>,
    pub submitter:  ClientIdentity,
}

impl Service {
    /// Discloses a committed bid. The supplied payload must hash to both the
    /// digest held by the private store and the digest registered on the
    /// record; binding to two independent sources means neither a lying
    /// bidder nor a silently diverged public record can pass.
    #[tracing::instrument(skip_all, fields(auction_id = %input.auction_id, bid_key = %input.bid_key))]
    pub async fn reveal_bid(&self, input: RevealBidInput) -> Result<(), ContractError> {
        let store_hash = self
            .repo
            .get_bid_hash(&input.submitter.org, &input.bid_key)
            .await?;

        let mut auction = self.repo.get_auction(&input.auction_id).await?;

        if !auction.status.is_closed() {
            return Err(ContractError::InvalidState(format!(
                "cannot reveal a bid on a {} auction",
                auction.status
            )));
        }

        let computed_hash = digest_hex(&input.sealed_bid);
        if computed_hash != store_hash {
            return Err(ContractError::HashMismatch(format!(
                "payload hash {computed_hash} does not match the stored commitment {store_hash}"
            )));
        }

        let registered_hash = auction
            .private_bids
            .get(&input.bid_key)
            .map(|commitment| commitment.hash.as_str())
            .unwrap_or_default();
        if computed_hash != registered_hash {
            return Err(ContractError::HashMismatch(format!(
                "payload hash {computed_hash} does not match the hash registered on the \
                 auction, the bid must have changed since it was added"
            )));
        }

        let sealed: SealedBid = serde_json::from_slice(&input.sealed_bid).map_err(|e| {
            ContractError::BadParameters(format!("sealed bid is not a valid bid document: {e}"))
        })?;

        // The payload alone does not prove authorship
        if sealed.bidder != input.submitter.id {
            return Err(ContractError::Forbidden(format!(
                "client {} is not the owner of the bid",
                input.submitter.id
            )));
        }

        auction.record_reveal(
            input.bid_key.clone(),
            RevealedBid {
                price:  sealed.price,
                org:    sealed.org,
                bidder: input.submitter.id,
            },
        );
        self.repo.put_auction(&input.auction_id, &auction).await?;

        tracing::info!("Revealed bid");
        Ok(())
    }
}
