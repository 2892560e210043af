use {
    crate::kernel::ledger::{
        EndorsementPolicy,
        LedgerState,
        PrivateBidStore,
    },
    std::sync::Arc,
};

mod add_endorser;
mod add_private_bid;
mod get_auction;
mod get_bid_hash;
mod get_private_bid;
mod models;
mod put_auction;

pub use models::*;

/// Persistence surface of the contract: every read and write goes through the
/// external collaborators held here. One file per operation.
pub struct Repository {
    ledger:    Arc<dyn LedgerState>,
    bid_store: Arc<dyn PrivateBidStore>,
    policy:    Arc<dyn EndorsementPolicy>,
}

impl Repository {
    pub fn new(
        ledger: Arc<dyn LedgerState>,
        bid_store: Arc<dyn PrivateBidStore>,
        policy: Arc<dyn EndorsementPolicy>,
    ) -> Self {
        Self {
            ledger,
            bid_store,
            policy,
        }
    }
}
