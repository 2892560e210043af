use {
    super::Repository,
    crate::{
        error::ContractError,
        kernel::entities::{
            AuctionId,
            OrgId,
        },
    },
};

impl Repository {
    pub async fn add_endorser(
        &self,
        auction_id: &AuctionId,
        org: &OrgId,
    ) -> Result<(), ContractError> {
        self.policy
            .add_endorser(auction_id.clone(), org.clone())
            .await
            .map_err(|e| {
                tracing::error!(
                    error = e.to_string(),
                    auction_id = auction_id.as_str(),
                    org = org.as_str(),
                    "Failed to extend endorsement policy"
                );
                ContractError::from(e)
            })
    }
}
