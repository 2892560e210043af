use {
    crate::{
        auction::entities,
        kernel::entities::{
            ClientId,
            OrgId,
        },
    },
    anyhow::anyhow,
    serde::{
        Deserialize,
        Serialize,
    },
    std::collections::BTreeMap,
};

pub const OBJECT_TYPE: &str = "shipping";

/// Wire form of the auction record as persisted under the auction key. Field
/// names are part of the multi-party record format and must not drift.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Auction {
    #[serde(rename = "objectType")]
    pub object_type:   String,
    pub item:          entities::Item,
    pub seller:        ClientId,
    #[serde(rename = "organizations")]
    pub orgs:          Vec<OrgId>,
    #[serde(rename = "privateBids")]
    pub private_bids:  BTreeMap<entities::BidKey, BidHash>,
    #[serde(rename = "revealedBids")]
    pub revealed_bids: BTreeMap<entities::BidKey, FullBid>,
    /// Empty string until the auction has ended
    pub winner:        ClientId,
    pub price:         u64,
    pub status:        entities::AuctionStatus,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BidHash {
    pub org:  OrgId,
    pub hash: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FullBid {
    #[serde(rename = "objectType")]
    pub object_type: String,
    pub price:       u64,
    pub org:         OrgId,
    pub bidder:      ClientId,
}

impl Auction {
    pub fn new_document(auction: &entities::Auction) -> Self {
        Self {
            object_type:   OBJECT_TYPE.to_string(),
            item:          auction.item.clone(),
            seller:        auction.seller.clone(),
            orgs:          auction.orgs.clone(),
            private_bids:  auction
                .private_bids
                .iter()
                .map(|(key, commitment)| {
                    (
                        key.clone(),
                        BidHash {
                            org:  commitment.org.clone(),
                            hash: commitment.hash.clone(),
                        },
                    )
                })
                .collect(),
            revealed_bids: auction
                .revealed_bids
                .iter()
                .map(|(key, bid)| {
                    (
                        key.clone(),
                        FullBid {
                            object_type: entities::BID_KEY_TYPE.to_string(),
                            price:       bid.price,
                            org:         bid.org.clone(),
                            bidder:      bid.bidder.clone(),
                        },
                    )
                })
                .collect(),
            winner:        auction.winner.clone().unwrap_or_default(),
            price:         auction.price,
            status:        auction.status,
        }
    }

    pub fn get_auction_entity(&self) -> anyhow::Result<entities::Auction> {
        if self.object_type != OBJECT_TYPE {
            return Err(anyhow!(
                "record has object type {}, expected {}",
                self.object_type,
                OBJECT_TYPE
            ));
        }
        Ok(entities::Auction {
            item:          self.item.clone(),
            seller:        self.seller.clone(),
            orgs:          self.orgs.clone(),
            private_bids:  self
                .private_bids
                .iter()
                .map(|(key, bid)| {
                    (
                        key.clone(),
                        entities::BidCommitment {
                            org:  bid.org.clone(),
                            hash: bid.hash.clone(),
                        },
                    )
                })
                .collect(),
            revealed_bids: self
                .revealed_bids
                .iter()
                .map(|(key, bid)| {
                    (
                        key.clone(),
                        entities::RevealedBid {
                            price:  bid.price,
                            org:    bid.org.clone(),
                            bidder: bid.bidder.clone(),
                        },
                    )
                })
                .collect(),
            winner:        (!self.winner.is_empty()).then(|| self.winner.clone()),
            price:         self.price,
            status:        self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::auction::entities::{
            AuctionStatus,
            BidCommitment,
            BidKey,
            Item,
            RevealedBid,
            OPENING_PRICE,
        },
    };

    fn sample_auction() -> entities::Auction {
        let mut auction = entities::Auction::new(
            Item {
                name:   "machine parts".to_string(),
                dest:   "Rotterdam".to_string(),
                weight: 1200,
                days:   14,
            },
            "seller1".to_string(),
            "Org1MSP".to_string(),
        );
        let key = BidKey::new(&"ship1".to_string(), &"tx1".to_string());
        auction.record_commitment(
            key.clone(),
            BidCommitment {
                org:  "Org2MSP".to_string(),
                hash: "ab".repeat(32),
            },
        );
        auction.record_reveal(
            key,
            RevealedBid {
                price:  700,
                org:    "Org2MSP".to_string(),
                bidder: "bidder1".to_string(),
            },
        );
        auction
    }

    #[test]
    fn document_uses_record_field_names() {
        let document = Auction::new_document(&sample_auction());
        let json: serde_json::Value =
            serde_json::from_slice(&serde_json::to_vec(&document).unwrap()).unwrap();

        let object = json.as_object().unwrap();
        for field in [
            "objectType",
            "item",
            "seller",
            "organizations",
            "privateBids",
            "revealedBids",
            "winner",
            "price",
            "status",
        ] {
            assert!(object.contains_key(field), "missing field {field}");
        }
        assert_eq!(json["objectType"], "shipping");
        assert_eq!(json["status"], "open");
        assert_eq!(json["winner"], "");
        assert_eq!(json["price"], OPENING_PRICE);
        assert_eq!(json["item"]["item"], "machine parts");
        assert_eq!(json["item"]["dest"], "Rotterdam");
    }

    #[test]
    fn document_round_trips_to_entity() {
        let auction = sample_auction();
        let document = Auction::new_document(&auction);
        let decoded: Auction =
            serde_json::from_slice(&serde_json::to_vec(&document).unwrap()).unwrap();
        assert_eq!(decoded.get_auction_entity().unwrap(), auction);
    }

    #[test]
    fn foreign_object_type_is_rejected() {
        let mut document = Auction::new_document(&sample_auction());
        document.object_type = "invoice".to_string();
        assert!(document.get_auction_entity().is_err());
    }

    #[test]
    fn empty_winner_maps_to_none_and_back() {
        let mut auction = sample_auction();
        assert_eq!(Auction::new_document(&auction).winner, "");

        auction.winner = Some("bidder1".to_string());
        auction.status = AuctionStatus::Ended;
        let document = Auction::new_document(&auction);
        assert_eq!(document.winner, "bidder1");
        assert_eq!(
            document.get_auction_entity().unwrap().winner,
            Some("bidder1".to_string())
        );
    }
}
