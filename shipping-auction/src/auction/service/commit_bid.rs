use {
    super::Service,
    crate::{
        auction::entities::BidKey,
        error::ContractError,
        kernel::entities::{
            AuctionId,
            ClientIdentity,
            TxId,
        },
    },
};

pub struct CommitBidInput {
    pub auction_id: AuctionId,
    pub tx_id:      TxId,
    /// Raw bid document bytes, supplied out-of-band so they never enter the
    /// durable transaction record.
    pub sealed_bid: Vec<u8>,
    pub submitter:  ClientIdentity,
}

impl Service {
    /// First half of a bid: stores the sealed payload in the submitter
    /// organization's private collection under a key derived from the
    /// transaction id. The public record is not touched until the hash is
    /// registered.
    #[tracing::instrument(skip_all, fields(auction_id = %input.auction_id, tx_id = %input.tx_id))]
    pub async fn commit_bid(&self, input: CommitBidInput) -> Result<BidKey, ContractError> {
        if input.submitter.org != self.config.peer_org {
            return Err(ContractError::WrongGroupPeer(format!(
                "cannot store a bid for {} on a peer of {}",
                input.submitter.org, self.config.peer_org
            )));
        }

        let bid_key = BidKey::new(&input.auction_id, &input.tx_id);
        self.repo
            .add_private_bid(&input.submitter.org, &bid_key, input.sealed_bid)
            .await?;

        tracing::info!(bid_key = %bid_key, "Committed sealed bid");
        Ok(bid_key)
    }
}
