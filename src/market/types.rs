//! Order types for the energy and carbon markets

use crate::crypto::CommitmentRecord;
use crate::types::{OrderId, OrderSide, TradeKind, TradeParameters};
use serde::{Deserialize, Serialize};

/// Order as held by the order book
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub trader: String,
    pub kind: TradeKind,
    pub side: OrderSide,
    #[serde(flatten)]
    pub params: TradeParameters,
    pub active: bool,
}

impl Order {
    pub fn is_buy(&self) -> bool {
        self.side == OrderSide::Buy
    }

    pub fn is_sell(&self) -> bool {
        self.side == OrderSide::Sell
    }
}

/// What gets handed to the order-submission collaborator.
///
/// Carries the raw trade terms only; the commitment record stays with the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub kind: TradeKind,
    pub side: OrderSide,
    pub params: TradeParameters,
}

/// Acknowledgement from the order-submission collaborator
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub order_id: OrderId,
    pub kind: TradeKind,
    pub side: OrderSide,
}

/// Result of placing an order: the receipt plus the locally held proof
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub receipt: SubmissionReceipt,
    pub proof: CommitmentRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_wire_shape() {
        let json = r#"{
            "id": 3,
            "trader": "0xseller",
            "kind": "carbon",
            "side": "sell",
            "amount": 50,
            "minPrice": 8,
            "maxPrice": 12,
            "active": true
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();

        assert_eq!(order.id, OrderId(3));
        assert_eq!(order.kind, TradeKind::Carbon);
        assert!(order.is_sell());
        assert!(!order.is_buy());
        assert_eq!(order.params, TradeParameters::new(50, 8, 12));
    }

    #[test]
    fn test_request_has_no_proof_fields() {
        let request = OrderRequest {
            kind: TradeKind::Energy,
            side: OrderSide::Buy,
            params: TradeParameters::new(10, 1, 5),
        };

        let json = serde_json::to_value(&request).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();

        assert_eq!(keys.len(), 3);
        assert!(json.get("commitment").is_none());
        assert!(json.get("nullifier").is_none());
    }
}
