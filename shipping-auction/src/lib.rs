//! Sealed-bid reverse auction contract for shipping jobs, executed against a
//! shared multi-party ledger. The ledger itself, the per-organization private
//! stores, and the endorsement-policy mechanics are external collaborators;
//! this crate owns the auction state machine and the commitment protocol.

pub mod auction;
pub mod error;
pub mod kernel;
