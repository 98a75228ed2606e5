//! Cryptographic primitives for GridCommit
//!
//! Poseidon hash engine and the trade commitment scheme built on it.

pub mod commitment;
pub mod engine;
pub mod field;
pub mod types;

pub use commitment::CommitmentService;
pub use engine::{EngineConfig, HashEngine};
pub use field::Field;
pub use types::{Commitment, CommitmentRecord, Nullifier, Salt};
