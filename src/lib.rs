//! GridCommit
//!
//! Trade commitments for a peer-to-peer energy and carbon-credit market.
//!
//! - Poseidon hash engine (circom-compatible, BN254), built once per handle
//! - Commitment/nullifier derivation and verification for trade terms
//! - Order matching and order placement behind a submission seam

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod market;
pub mod types;

// Re-export commonly used types
pub use config::ProofConfig;
pub use crypto::{
    Commitment, CommitmentRecord, CommitmentService, EngineConfig, HashEngine, Nullifier, Salt,
};
pub use error::{GridCommitError, Result};
pub use market::{InMemoryOrderBook, Order, OrderSubmitter, TradeDesk};
pub use types::{OrderId, OrderSide, TradeKind, TradeParameters};
