use {
    super::repository::Repository,
    crate::kernel::entities::OrgId,
    std::sync::Arc,
};

pub mod close_auction;
pub mod commit_bid;
pub mod create_auction;
pub mod end_auction;
pub mod get_auction;
pub mod get_bid;
pub mod register_hash;
pub mod reveal_bid;
pub mod verification;

/// Configuration of the peer this contract instance executes on.
pub struct Config {
    /// Organization of the executing peer. Private submissions must target a
    /// peer of the submitter's own organization, and only bids of this
    /// organization can be fully verified by the liveness check.
    pub peer_org: OrgId,
}

pub struct ServiceInner {
    config: Config,
    repo:   Repository,
}

#[derive(Clone)]
pub struct Service(Arc<ServiceInner>);
impl std::ops::Deref for Service {
    type Target = ServiceInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Service {
    pub fn new(config: Config, repo: Repository) -> Self {
        Self(Arc::new(ServiceInner { config, repo }))
    }
}

#[cfg(test)]
pub mod tests {
    use {
        super::{
            Config,
            Service,
        },
        crate::{
            auction::{
                entities::{
                    Item,
                    SealedBid,
                },
                repository::Repository,
            },
            kernel::{
                entities::{
                    ClientIdentity,
                    OrgId,
                },
                ledger::{
                    EndorsementPolicy,
                    LedgerState,
                    PrivateBidStore,
                },
            },
        },
        async_trait::async_trait,
        sha2::{
            Digest,
            Sha256,
        },
        std::{
            collections::HashMap,
            sync::{
                Arc,
                Mutex,
            },
        },
    };

    pub const SELLER_ORG: &str = "Org1MSP";
    pub const BIDDER_ORG: &str = "Org2MSP";
    pub const OTHER_ORG: &str = "Org3MSP";

    /// World state held in memory.
    #[derive(Default)]
    pub struct FakeLedger {
        state: Mutex<HashMap<String, Vec<u8>>>,
    }

    #[async_trait]
    impl LedgerState for FakeLedger {
        async fn get_state(&self, key: String) -> anyhow::Result<Option<Vec<u8>>> {
            Ok(self.state.lock().unwrap().get(&key).cloned())
        }

        async fn put_state(&self, key: String, value: Vec<u8>) -> anyhow::Result<()> {
            self.state.lock().unwrap().insert(key, value);
            Ok(())
        }
    }

    /// Private collections; digests are computed over the stored bytes the
    /// way the platform computes them.
    #[derive(Default)]
    pub struct FakeBidStore {
        data: Mutex<HashMap<(String, String), Vec<u8>>>,
    }

    impl FakeBidStore {
        /// Simulates purged private data, e.g. an organization deleting its
        /// collection entry after committing.
        pub fn remove(&self, collection: &str, key: &str) {
            self.data
                .lock()
                .unwrap()
                .remove(&(collection.to_owned(), key.to_owned()));
        }
    }

    #[async_trait]
    impl PrivateBidStore for FakeBidStore {
        async fn put_private(
            &self,
            collection: String,
            key: String,
            value: Vec<u8>,
        ) -> anyhow::Result<()> {
            self.data.lock().unwrap().insert((collection, key), value);
            Ok(())
        }

        async fn get_private(
            &self,
            collection: String,
            key: String,
        ) -> anyhow::Result<Option<Vec<u8>>> {
            Ok(self.data.lock().unwrap().get(&(collection, key)).cloned())
        }

        async fn get_private_hash(
            &self,
            collection: String,
            key: String,
        ) -> anyhow::Result<Option<Vec<u8>>> {
            Ok(self
                .data
                .lock()
                .unwrap()
                .get(&(collection, key))
                .map(|value| Sha256::digest(value).to_vec()))
        }
    }

    #[derive(Default)]
    pub struct FakePolicy {
        pub endorsers: Mutex<HashMap<String, Vec<OrgId>>>,
    }

    impl FakePolicy {
        pub fn endorsers_for(&self, key: &str) -> Vec<OrgId> {
            self.endorsers
                .lock()
                .unwrap()
                .get(key)
                .cloned()
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl EndorsementPolicy for FakePolicy {
        async fn add_endorser(&self, key: String, org: OrgId) -> anyhow::Result<()> {
            self.endorsers.lock().unwrap().entry(key).or_default().push(org);
            Ok(())
        }
    }

    /// One shared ledger plus per-organization peers, the topology the
    /// contract actually runs in.
    pub struct Fixture {
        pub ledger:    Arc<FakeLedger>,
        pub bid_store: Arc<FakeBidStore>,
        pub policy:    Arc<FakePolicy>,
    }

    impl Fixture {
        pub fn new() -> Self {
            Self {
                ledger:    Arc::new(FakeLedger::default()),
                bid_store: Arc::new(FakeBidStore::default()),
                policy:    Arc::new(FakePolicy::default()),
            }
        }

        /// A contract instance executing on a peer of the given organization,
        /// sharing this fixture's ledger and stores.
        pub fn peer(&self, org: &str) -> Service {
            Service::new(
                Config {
                    peer_org: org.to_owned(),
                },
                Repository::new(
                    self.ledger.clone(),
                    self.bid_store.clone(),
                    self.policy.clone(),
                ),
            )
        }
    }

    pub fn identity(id: &str, org: &str) -> ClientIdentity {
        ClientIdentity::new(id, org)
    }

    pub fn sample_item() -> Item {
        Item {
            name:   "container of machine parts".to_string(),
            dest:   "Hamburg".to_string(),
            weight: 800,
            days:   21,
        }
    }

    pub fn sealed_bid_bytes(price: u64, org: &str, bidder: &str) -> Vec<u8> {
        SealedBid {
            price,
            org: org.to_owned(),
            bidder: bidder.to_owned(),
        }
        .to_bytes()
    }
}
