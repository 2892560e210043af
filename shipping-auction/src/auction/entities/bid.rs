use {
    crate::kernel::entities::{
        AuctionId,
        ClientId,
        OrgId,
        TxId,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    sha2::{
        Digest,
        Sha256,
    },
    std::fmt::{
        self,
        Display,
        Formatter,
    },
};

pub const BID_KEY_TYPE: &str = "bid";

/// Composite key correlating a bid commitment with its eventual reveal.
/// Encoded the way the ledger encodes composite keys, NUL-delimited type and
/// attributes, so the same (auction, transaction) pair always reproduces the
/// same key. Callers treat it as opaque.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BidKey(String);

impl BidKey {
    pub fn new(auction_id: &AuctionId, tx_id: &TxId) -> Self {
        BidKey(format!(
            "\u{0}{BID_KEY_TYPE}\u{0}{auction_id}\u{0}{tx_id}\u{0}"
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for BidKey {
    // NUL delimiters would vanish in log output, render them as dots
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.replace('\u{0}', "."))
    }
}

/// Hash-only record published to the shared ledger, binding a bidder to a
/// sealed value without disclosing it. The hash is produced by the private
/// bid store, not supplied by the committer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BidCommitment {
    pub org:  OrgId,
    pub hash: String,
}

/// A bid disclosed during the reveal phase, inserted only after both hash
/// checks passed. Immutable once recorded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealedBid {
    pub price:  u64,
    pub org:    OrgId,
    pub bidder: ClientId,
}

/// The out-of-band bid document. Its raw bytes are what get sealed: they are
/// written to the submitter organization's private collection and hashed
/// exactly as supplied, so a single byte of drift breaks the later reveal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedBid {
    pub price:  u64,
    pub org:    OrgId,
    pub bidder: ClientId,
}

impl SealedBid {
    pub fn to_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(self).expect("bid document is always serializable")
    }
}

/// Lowercase-hex SHA-256, the form commitment digests are recorded in.
pub fn digest_hex(payload: &[u8]) -> String {
    hex::encode(Sha256::digest(payload))
}
