use {
    super::Repository,
    crate::{
        auction::entities::BidKey,
        error::ContractError,
        kernel::{
            entities::OrgId,
            ledger::implicit_collection,
        },
    },
};

impl Repository {
    /// Sealed payload bytes from the organization's private collection. Only
    /// succeeds on a peer of the owning organization.
    pub async fn get_private_bid(
        &self,
        org: &OrgId,
        bid_key: &BidKey,
    ) -> Result<Vec<u8>, ContractError> {
        self.bid_store
            .get_private(implicit_collection(org), bid_key.as_str().to_owned())
            .await?
            .ok_or_else(|| ContractError::NotFound(format!("bid {bid_key} does not exist")))
    }
}
