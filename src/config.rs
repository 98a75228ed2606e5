//! Proof service configuration

use crate::error::{GridCommitError, Result};
use std::env;
use std::str::FromStr;

/// Exclusive upper bound for trade salts
pub const DEFAULT_SALT_BOUND: u64 = 1_000_000;

/// Second input of the nullifier hash
pub const DEFAULT_NULLIFIER_NONCE: u64 = 1;

/// Largest arity supported by the circom Poseidon parameters
pub const MAX_CIRCOM_INPUTS: usize = 12;

/// Widest hash a trade proof needs: amount, minPrice, maxPrice, salt
pub const COMMITMENT_INPUTS: usize = 4;

pub const ENV_SALT_BOUND: &str = "GRIDCOMMIT_SALT_BOUND";
pub const ENV_NULLIFIER_NONCE: &str = "GRIDCOMMIT_NULLIFIER_NONCE";
pub const ENV_MAX_INPUTS: &str = "GRIDCOMMIT_MAX_INPUTS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofConfig {
    /// Salts are drawn uniformly from `[0, salt_bound)`
    pub salt_bound: u64,
    pub nullifier_nonce: u64,
    /// Widest input sequence the hash engine accepts
    pub max_inputs: usize,
}

impl Default for ProofConfig {
    fn default() -> Self {
        Self {
            salt_bound: DEFAULT_SALT_BOUND,
            nullifier_nonce: DEFAULT_NULLIFIER_NONCE,
            max_inputs: MAX_CIRCOM_INPUTS,
        }
    }
}

impl ProofConfig {
    /// Defaults overridden by `GRIDCOMMIT_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (environment, file, test map)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            salt_bound: read_var(&lookup, ENV_SALT_BOUND)?.unwrap_or(defaults.salt_bound),
            nullifier_nonce: read_var(&lookup, ENV_NULLIFIER_NONCE)?
                .unwrap_or(defaults.nullifier_nonce),
            max_inputs: read_var(&lookup, ENV_MAX_INPUTS)?.unwrap_or(defaults.max_inputs),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.salt_bound == 0 {
            return Err(GridCommitError::InvalidConfig(
                "salt bound must be greater than zero".to_string(),
            ));
        }
        if !(COMMITMENT_INPUTS..=MAX_CIRCOM_INPUTS).contains(&self.max_inputs) {
            return Err(GridCommitError::InvalidConfig(format!(
                "max inputs must be within {}..={}, got {}",
                COMMITMENT_INPUTS, MAX_CIRCOM_INPUTS, self.max_inputs
            )));
        }
        Ok(())
    }
}

fn read_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|e| {
            GridCommitError::InvalidConfig(format!("{}='{}': {}", key, raw, e))
        }),
    }
}
