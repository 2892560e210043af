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
    /// Digest of the sealed payload stored under the bid key, as computed by
    /// the organization's private store. Readable regardless of membership.
    pub async fn get_bid_hash(
        &self,
        org: &OrgId,
        bid_key: &BidKey,
    ) -> Result<String, ContractError> {
        let digest = self
            .bid_store
            .get_private_hash(implicit_collection(org), bid_key.as_str().to_owned())
            .await?
            .ok_or_else(|| {
                ContractError::NotFound(format!("no bid commitment exists for {bid_key}"))
            })?;
        Ok(hex::encode(digest))
    }
}
