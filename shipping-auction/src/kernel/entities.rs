use serde::{
    Deserialize,
    Serialize,
};

pub type AuctionId = String;
pub type TxId = String;
pub type ClientId = String;
pub type OrgId = String;

/// The authenticated identity a transaction was submitted with: the client's
/// enrollment id plus the organization it belongs to. Both are established by
/// the platform's identity layer before the contract runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientIdentity {
    pub id:  ClientId,
    pub org: OrgId,
}

impl ClientIdentity {
    pub fn new(id: impl Into<ClientId>, org: impl Into<OrgId>) -> Self {
        Self {
            id:  id.into(),
            org: org.into(),
        }
    }
}
