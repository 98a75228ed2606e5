//! GridCommit application wiring the hash engine, proofs and order book

use crate::config::ProofConfig;
use crate::crypto::{field, CommitmentRecord, CommitmentService, EngineConfig, Field, HashEngine};
use crate::error::Result;
use crate::market::{find_matching_orders, InMemoryOrderBook, Order, PlacedOrder, TradeDesk};
use crate::types::{parse_unsigned, OrderId, OrderSide, TradeKind, TradeParameters};
use std::path::Path;

/// Trader name used for orders placed from the command line
const LOCAL_TRADER: &str = "local";

/// Main GridCommit application
#[derive(Clone, Debug)]
pub struct GridCommitApp {
    proofs: CommitmentService,
}

impl GridCommitApp {
    /// Build the application around one shared, not yet constructed engine
    pub fn new(config: ProofConfig) -> Result<Self> {
        let engine = HashEngine::shared(EngineConfig::from(&config));
        Ok(Self {
            proofs: CommitmentService::new(engine, config)?,
        })
    }

    pub fn proofs(&self) -> &CommitmentService {
        &self.proofs
    }

    /// Generate a trade proof
    pub async fn prove(&self, kind: TradeKind, params: &TradeParameters) -> Result<CommitmentRecord> {
        self.proofs.generate_proof_for(kind, params).await
    }

    /// Verify a stored record against disclosed terms
    pub async fn verify(&self, record: &CommitmentRecord, params: &TradeParameters) -> Result<bool> {
        self.proofs.verify(record, params).await
    }

    /// Hash decimal or `0x` hex inputs, returning minimal hex
    pub async fn hash(&self, inputs: &[String]) -> Result<String> {
        let fields = inputs
            .iter()
            .map(|raw| parse_field(raw))
            .collect::<Result<Vec<Field>>>()?;

        let hash = self.proofs.engine().hash(&fields).await?;
        Ok(field::to_hex(&hash))
    }

    /// Place one order against a fresh in-memory book
    pub async fn place(
        &self,
        kind: TradeKind,
        side: OrderSide,
        params: TradeParameters,
    ) -> Result<PlacedOrder> {
        let desk = TradeDesk::new(self.proofs.clone(), InMemoryOrderBook::new(LOCAL_TRADER));
        desk.place_order(kind, side, params).await
    }

    /// Eligible sell orders for `buy_id` among `orders`
    pub fn match_orders(&self, orders: &[Order], buy_id: OrderId) -> Vec<OrderId> {
        let matches = find_matching_orders(buy_id, orders);
        tracing::info!(
            "Buy order {} has {} eligible sell order(s)",
            buy_id,
            matches.len()
        );
        matches
    }

    pub fn load_record(path: &Path) -> Result<CommitmentRecord> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn load_orders(path: &Path) -> Result<Vec<Order>> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

fn parse_field(raw: &str) -> Result<Field> {
    let trimmed = raw.trim();
    if trimmed.starts_with("0x") || trimmed.starts_with("0X") {
        field::from_hex(trimmed)
    } else {
        parse_unsigned("input", trimmed).map(field::from_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridCommitError;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gridcommit_{}_{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn test_hash_known_answer() {
        let app = GridCommitApp::new(ProofConfig::default()).unwrap();
        let hash = app.hash(&["1".to_string(), "0x2".to_string()]).await.unwrap();
        assert_eq!(
            hash,
            "115cc0f5e7d690413df64c6b9662e9cf2a3617f2743245519e19607a4417189a"
        );
    }

    #[tokio::test]
    async fn test_hash_rejects_negative_input() {
        let app = GridCommitApp::new(ProofConfig::default()).unwrap();
        let result = app.hash(&["-1".to_string()]).await;
        assert!(matches!(result, Err(GridCommitError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_record_file_round_trip() {
        let app = GridCommitApp::new(ProofConfig::default()).unwrap();
        let params = TradeParameters::new(100, 5, 10);
        let record = app.prove(TradeKind::Energy, &params).await.unwrap();

        let path = temp_path("record.json");
        std::fs::write(&path, serde_json::to_string_pretty(&record).unwrap()).unwrap();
        let loaded = GridCommitApp::load_record(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, record);
        assert!(app.verify(&loaded, &params).await.unwrap());
        assert!(!app
            .verify(&loaded, &TradeParameters::new(100, 5, 11))
            .await
            .unwrap());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ProofConfig {
            salt_bound: 0,
            ..ProofConfig::default()
        };
        assert!(matches!(
            GridCommitApp::new(config),
            Err(GridCommitError::InvalidConfig(_))
        ));
    }

    #[tokio::test]
    async fn test_load_record_missing_file() {
        let result = GridCommitApp::load_record(Path::new("/nonexistent/record.json"));
        assert!(matches!(result, Err(GridCommitError::Io(_))));
    }

    #[tokio::test]
    async fn test_place_order() {
        let app = GridCommitApp::new(ProofConfig::default()).unwrap();
        let params = TradeParameters::new(20, 3, 6);

        let placed = app
            .place(TradeKind::Carbon, OrderSide::Sell, params)
            .await
            .unwrap();

        assert_eq!(placed.receipt.order_id, OrderId(1));
        assert_eq!(placed.receipt.kind, TradeKind::Carbon);
        assert!(app.verify(&placed.proof, &params).await.unwrap());
    }

    #[test]
    fn test_match_orders_from_file() {
        let path = temp_path("orders.json");
        std::fs::write(
            &path,
            r#"[
                {"id":1,"trader":"0xa","kind":"energy","side":"buy","amount":100,"minPrice":5,"maxPrice":10,"active":true},
                {"id":2,"trader":"0xb","kind":"energy","side":"sell","amount":100,"minPrice":9,"maxPrice":14,"active":true},
                {"id":3,"trader":"0xc","kind":"carbon","side":"sell","amount":100,"minPrice":9,"maxPrice":14,"active":true}
            ]"#,
        )
        .unwrap();
        let orders = GridCommitApp::load_orders(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let app = GridCommitApp::new(ProofConfig::default()).unwrap();
        assert_eq!(app.match_orders(&orders, OrderId(1)), vec![OrderId(2)]);
    }
}
