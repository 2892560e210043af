use thiserror::Error;

/// Every contract operation terminates with one of these kinds. A failure
/// aborts the whole transaction before anything is persisted; retry policy
/// belongs to the dispatch layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractError {
    /// The auction record, bid commitment, or private payload is absent
    #[error("not found: {0}")]
    NotFound(String),
    /// The caller lacks the required identity, organization, or ownership
    #[error("permission denied: {0}")]
    Forbidden(String),
    /// The operation was attempted outside its valid auction status
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// The revealed payload is inconsistent with its commitment
    #[error("hash mismatch: {0}")]
    HashMismatch(String),
    /// Ending an auction before any bid has been revealed
    #[error("no bids have been revealed")]
    NoBids,
    /// A superior unrevealed bid was detected while ending the auction
    #[error("live bid outstanding: {0}")]
    LiveBidOutstanding(String),
    /// A private submission targeted a peer outside the submitter's organization
    #[error("wrong peer for organization: {0}")]
    WrongGroupPeer(String),
    /// The request carried data that could not be interpreted
    #[error("bad parameters: {0}")]
    BadParameters(String),
    /// An external collaborator call failed
    #[error("ledger unavailable: {0}")]
    Ledger(String),
}

impl From<anyhow::Error> for ContractError {
    fn from(err: anyhow::Error) -> Self {
        ContractError::Ledger(format!("{err:#}"))
    }
}
