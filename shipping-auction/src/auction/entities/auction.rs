use {
    super::bid::{
        BidCommitment,
        BidKey,
        RevealedBid,
    },
    crate::kernel::entities::{
        ClientId,
        OrgId,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    std::collections::BTreeMap,
    strum::Display,
};

/// Price recorded before any bid is revealed. Worse than any real bid in a
/// lowest-price-wins auction, so the first revealed bid always takes the lead.
pub const OPENING_PRICE: u64 = 100_000_000;

/// The shipping job being auctioned. Set at creation, never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "item")]
    pub name:   String,
    pub dest:   String,
    pub weight: u32,
    pub days:   u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AuctionStatus {
    /// Accepting bid commitments and hash registrations
    Open,
    /// Bidding stopped, bids may be revealed
    Closed,
    /// Winner determined, record final
    Ended,
}

impl AuctionStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, AuctionStatus::Open)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, AuctionStatus::Closed)
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, AuctionStatus::Ended)
    }
}

/// One auction, stored under its auction key in public world state. Treated
/// as an immutable value per transaction: operations load it, build the next
/// value, and write it back exactly once.
#[derive(Clone, Debug, PartialEq)]
pub struct Auction {
    pub item:          Item,
    pub seller:        ClientId,
    /// Organizations with at least one registered bid hash, in join order.
    /// The seller's organization is seeded at creation. Append-only.
    pub orgs:          Vec<OrgId>,
    pub private_bids:  BTreeMap<BidKey, BidCommitment>,
    pub revealed_bids: BTreeMap<BidKey, RevealedBid>,
    pub winner:        Option<ClientId>,
    pub price:         u64,
    pub status:        AuctionStatus,
}

impl Auction {
    pub fn new(item: Item, seller: ClientId, seller_org: OrgId) -> Self {
        Self {
            item,
            seller,
            orgs: vec![seller_org],
            private_bids: BTreeMap::new(),
            revealed_bids: BTreeMap::new(),
            winner: None,
            price: OPENING_PRICE,
            status: AuctionStatus::Open,
        }
    }

    /// Records a bid commitment. Returns true when the committing
    /// organization was not a participant before, in which case the
    /// endorsement policy for this auction must be extended.
    pub fn record_commitment(&mut self, key: BidKey, commitment: BidCommitment) -> bool {
        let new_org = !self.orgs.contains(&commitment.org);
        if new_org {
            self.orgs.push(commitment.org.clone());
        }
        self.private_bids.insert(key, commitment);
        new_org
    }

    pub fn record_reveal(&mut self, key: BidKey, bid: RevealedBid) {
        self.revealed_bids.insert(key, bid);
    }
}
