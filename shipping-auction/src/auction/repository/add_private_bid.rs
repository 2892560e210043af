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
    /// Stores the sealed payload bytes in the organization's private
    /// collection. The public record is untouched.
    pub async fn add_private_bid(
        &self,
        org: &OrgId,
        bid_key: &BidKey,
        payload: Vec<u8>,
    ) -> Result<(), ContractError> {
        self.bid_store
            .put_private(implicit_collection(org), bid_key.as_str().to_owned(), payload)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = e.to_string(),
                    org = org.as_str(),
                    bid_key = %bid_key,
                    "Failed to store sealed bid"
                );
                ContractError::from(e)
            })
    }
}
