#[cfg(test)]
use mockall::automock;
use {
    crate::kernel::entities::OrgId,
    async_trait::async_trait,
};

/// Name of the implicit private collection owned by an organization. Every
/// organization has one; its contents are invisible outside the organization
/// while digests of its entries are readable by anyone.
pub fn implicit_collection(org: &OrgId) -> String {
    format!("_implicit_org_{org}")
}

/// Versioned key/value world state of the shared ledger. Writes are applied
/// atomically with the rest of the transaction's write set by the platform;
/// a key is only written once per transaction.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LedgerState: Send + Sync + 'static {
    async fn get_state(&self, key: String) -> anyhow::Result<Option<Vec<u8>>>;
    async fn put_state(&self, key: String, value: Vec<u8>) -> anyhow::Result<()>;
}

/// Per-organization private store holding sealed bid payloads. The payload is
/// returned only to members of the owning organization; the digest is
/// computed by the store itself over the stored bytes, never by the caller.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PrivateBidStore: Send + Sync + 'static {
    async fn put_private(
        &self,
        collection: String,
        key: String,
        value: Vec<u8>,
    ) -> anyhow::Result<()>;

    async fn get_private(&self, collection: String, key: String)
        -> anyhow::Result<Option<Vec<u8>>>;

    /// SHA-256 digest of the stored payload, or None if nothing is stored
    /// under the key.
    async fn get_private_hash(
        &self,
        collection: String,
        key: String,
    ) -> anyhow::Result<Option<Vec<u8>>>;
}

/// State-based endorsement policy for a ledger key. The contract extends the
/// policy as new organizations join an auction so their peers can co-endorse
/// later writes to the record.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EndorsementPolicy: Send + Sync + 'static {
    async fn add_endorser(&self, key: String, org: OrgId) -> anyhow::Result<()>;
}
