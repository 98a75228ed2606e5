//! Commitment scheme for private trade terms
//!
//! A trade proof is a hash commitment plus a nullifier:
//!
//! - `commitment = H(amount, minPrice, maxPrice, salt)`
//! - `nullifier  = H(commitment, nonce)`
//!
//! This is commit-and-reveal, not a zero-knowledge proof. Verification only
//! checks that the disclosed terms and salt reproduce the stored commitment, and
//! the salt travels with the record.

use crate::config::ProofConfig;
use crate::error::Result;
use crate::types::{TradeKind, TradeParameters};
use rand::Rng;
use std::sync::Arc;

use super::engine::HashEngine;
use super::field::{from_u64, Field};
use super::types::{Commitment, CommitmentRecord, Nullifier, Salt};

/// Derives and checks trade commitments over a shared hash engine
#[derive(Clone, Debug)]
pub struct CommitmentService {
    engine: Arc<HashEngine>,
    config: ProofConfig,
}

impl CommitmentService {
    /// Fails with `InvalidConfig` when `config` does not validate
    pub fn new(engine: Arc<HashEngine>, config: ProofConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { engine, config })
    }

    pub fn engine(&self) -> &Arc<HashEngine> {
        &self.engine
    }

    pub fn config(&self) -> &ProofConfig {
        &self.config
    }

    /// Commit to `params` under a fresh salt
    pub async fn generate_trade_proof(&self, params: &TradeParameters) -> Result<CommitmentRecord> {
        self.engine.initialize().await?;

        let salt = self.draw_salt();
        let record = self.commit_with_salt(params, salt).await?;

        tracing::debug!(
            "Generated trade proof: commitment={} salt={}",
            record.commitment,
            record.salt
        );
        Ok(record)
    }

    pub async fn generate_energy_trade_proof(
        &self,
        params: &TradeParameters,
    ) -> Result<CommitmentRecord> {
        self.generate_proof_for(TradeKind::Energy, params).await
    }

    pub async fn generate_carbon_trade_proof(
        &self,
        params: &TradeParameters,
    ) -> Result<CommitmentRecord> {
        self.generate_proof_for(TradeKind::Carbon, params).await
    }

    /// Both markets share one derivation; the kind only labels the failure
    pub async fn generate_proof_for(
        &self,
        kind: TradeKind,
        params: &TradeParameters,
    ) -> Result<CommitmentRecord> {
        self.generate_trade_proof(params).await.map_err(|e| {
            tracing::error!("Error generating {} trade proof: {}", kind, e);
            e
        })
    }

    /// Deterministic derivation for a known salt
    pub async fn commit_with_salt(
        &self,
        params: &TradeParameters,
        salt: Salt,
    ) -> Result<CommitmentRecord> {
        let commitment = self.compute_commitment(params, salt).await?;
        let nullifier = self.nullifier_for(&commitment).await?;

        Ok(CommitmentRecord {
            commitment,
            nullifier,
            salt,
            values: *params,
        })
    }

    /// H(amount, minPrice, maxPrice, salt)
    pub async fn compute_commitment(
        &self,
        params: &TradeParameters,
        salt: Salt,
    ) -> Result<Commitment> {
        let inputs: Vec<Field> = params
            .as_array()
            .into_iter()
            .chain(std::iter::once(salt.value()))
            .map(from_u64)
            .collect();

        self.engine.hash(&inputs).await.map(Commitment::from_field)
    }

    /// H(commitment, nonce)
    pub async fn nullifier_for(&self, commitment: &Commitment) -> Result<Nullifier> {
        let inputs = [*commitment.as_field(), from_u64(self.config.nullifier_nonce)];
        self.engine.hash(&inputs).await.map(Nullifier::from_field)
    }

    /// Check that `public_inputs` and the record's salt reproduce its commitment
    pub async fn verify(
        &self,
        record: &CommitmentRecord,
        public_inputs: &TradeParameters,
    ) -> Result<bool> {
        self.engine.initialize().await?;

        let reconstructed = self.compute_commitment(public_inputs, record.salt).await?;
        let valid = reconstructed == record.commitment;

        if !valid {
            tracing::debug!(
                "Commitment mismatch: expected {} got {}",
                record.commitment,
                reconstructed
            );
        }
        Ok(valid)
    }

    fn draw_salt(&self) -> Salt {
        Salt(rand::thread_rng().gen_range(0..self.config.salt_bound))
    }
}
