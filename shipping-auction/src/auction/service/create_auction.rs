use {
    super::Service,
    crate::{
        auction::entities::{
            Auction,
            Item,
        },
        error::ContractError,
        kernel::entities::{
            AuctionId,
            ClientIdentity,
        },
    },
};

pub struct CreateAuctionInput {
    pub auction_id: AuctionId,
    pub item:       Item,
    pub submitter:  ClientIdentity,
}

impl Service {
    /// Opens a new auction under the given key. The submitting identity
    /// becomes the seller and its organization becomes the first endorser of
    /// the record.
    #[tracing::instrument(skip_all, fields(auction_id = %input.auction_id))]
    pub async fn create_auction(
        &self,
        input: CreateAuctionInput,
    ) -> Result<AuctionId, ContractError> {
        let auction = Auction::new(input.item, input.submitter.id, input.submitter.org.clone());

        self.repo.put_auction(&input.auction_id, &auction).await?;
        self.repo
            .add_endorser(&input.auction_id, &input.submitter.org)
            .await?;

        tracing::info!(seller = auction.seller.as_str(), "Created auction");
        Ok(input.auction_id)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::CreateAuctionInput,
        crate::{
            auction::{
                repository::Repository,
                service::{
                    tests::{
                        identity,
                        sample_item,
                        SELLER_ORG,
                    },
                    Config,
                    Service,
                },
            },
            error::ContractError,
            kernel::ledger::{
                MockEndorsementPolicy,
                MockLedgerState,
                MockPrivateBidStore,
            },
        },
        anyhow::anyhow,
        std::sync::Arc,
    };

    #[tokio::test]
    async fn a_failed_ledger_write_aborts_creation() {
        let mut ledger = MockLedgerState::new();
        ledger
            .expect_put_state()
            .returning(|_, _| Err(anyhow!("endorsement policy failure during simulation")));

        let service = Service::new(
            Config {
                peer_org: SELLER_ORG.to_string(),
            },
            Repository::new(
                Arc::new(ledger),
                Arc::new(MockPrivateBidStore::new()),
                Arc::new(MockEndorsementPolicy::new()),
            ),
        );

        let result = service
            .create_auction(CreateAuctionInput {
                auction_id: "ship42".to_string(),
                item:       sample_item(),
                submitter:  identity("seller1", SELLER_ORG),
            })
            .await;
        assert!(matches!(result.unwrap_err(), ContractError::Ledger(_)));
    }
}
