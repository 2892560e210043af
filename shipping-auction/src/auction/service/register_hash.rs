use {
    super::Service,
    crate::{
        auction::entities::{
            BidCommitment,
            BidKey,
        },
        error::ContractError,
        kernel::entities::{
            AuctionId,
            ClientIdentity,
        },
    },
};

pub struct RegisterHashInput {
    pub auction_id: AuctionId,
    /// Key returned by the commit step
    pub bid_key:    BidKey,
    pub submitter:  ClientIdentity,
}

impl Service {
    /// Second half of a bid: publishes the digest of the previously committed
    /// payload on the auction record, binding the bidder without disclosing
    /// the value. Joining organizations are added to the record's endorsement
    /// policy so their peers can co-endorse later writes.
    #[tracing::instrument(skip_all, fields(auction_id = %input.auction_id, bid_key = %input.bid_key))]
    pub async fn register_hash(&self, input: RegisterHashInput) -> Result<(), ContractError> {
        let mut auction = self.repo.get_auction(&input.auction_id).await?;

        if !auction.status.is_open() {
            return Err(ContractError::InvalidState(format!(
                "cannot join a {} auction",
                auction.status
            )));
        }

        // The digest comes from the private store, not from the submitter; a
        // fabricated hash can therefore never enter the record.
        let hash = self
            .repo
            .get_bid_hash(&input.submitter.org, &input.bid_key)
            .await?;

        let new_org = auction.record_commitment(
            input.bid_key.clone(),
            BidCommitment {
                org: input.submitter.org.clone(),
                hash,
            },
        );
        if new_org {
            self.repo
                .add_endorser(&input.auction_id, &input.submitter.org)
                .await?;
        }

        self.repo.put_auction(&input.auction_id, &auction).await?;

        tracing::info!(org = input.submitter.org.as_str(), "Registered bid hash");
        Ok(())
    }
}
