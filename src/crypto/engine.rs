//! Poseidon hash engine
//!
//! Circom-compatible Poseidon over the BN254 scalar field, the same primitive
//! `circomlibjs` exposes to the dashboard. The engine is built lazily, at most
//! once per handle, and is read-only afterwards so any number of tasks may hash
//! through a shared `Arc<HashEngine>` without further locking.

use crate::config::{ProofConfig, MAX_CIRCOM_INPUTS};
use crate::error::{GridCommitError, Result};
use futures::future::try_join_all;
use light_poseidon::{Poseidon, PoseidonHasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::OnceCell;

use super::field::Field;

/// Hash engine construction parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Widest input sequence accepted by `hash`
    pub max_inputs: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_inputs: MAX_CIRCOM_INPUTS,
        }
    }
}

impl From<&ProofConfig> for EngineConfig {
    fn from(config: &ProofConfig) -> Self {
        Self {
            max_inputs: config.max_inputs,
        }
    }
}

/// Built engine; immutable once constructed
#[derive(Debug)]
struct PoseidonEngine {
    max_inputs: usize,
}

impl PoseidonEngine {
    fn build(config: &EngineConfig) -> std::result::Result<Self, String> {
        if config.max_inputs == 0 || config.max_inputs > MAX_CIRCOM_INPUTS {
            return Err(format!(
                "max_inputs must be within 1..={}, got {}",
                MAX_CIRCOM_INPUTS, config.max_inputs
            ));
        }

        // Load every parameter set up front so a bad arity fails here, not mid-trade
        for arity in 1..=config.max_inputs {
            Poseidon::<Field>::new_circom(arity)
                .map_err(|e| format!("poseidon parameters for arity {}: {}", arity, e))?;
        }

        Ok(Self {
            max_inputs: config.max_inputs,
        })
    }

    fn hash(&self, inputs: &[Field]) -> Result<Field> {
        if inputs.is_empty() {
            return Err(GridCommitError::Engine(
                "cannot hash an empty input sequence".to_string(),
            ));
        }
        if inputs.len() > self.max_inputs {
            return Err(GridCommitError::Engine(format!(
                "{} inputs exceed the engine limit of {}",
                inputs.len(),
                self.max_inputs
            )));
        }

        let mut hasher = Poseidon::<Field>::new_circom(inputs.len())
            .map_err(|e| GridCommitError::Engine(e.to_string()))?;
        hasher
            .hash(inputs)
            .map_err(|e| GridCommitError::Engine(e.to_string()))
    }
}

/// Shared, lazily constructed hash engine handle.
///
/// A construction failure is kept: every caller of this handle sees the same
/// `Engine` error. Recovering means building a fresh handle.
pub struct HashEngine {
    config: EngineConfig,
    instance: OnceCell<std::result::Result<PoseidonEngine, String>>,
    constructions: AtomicUsize,
}

impl HashEngine {
    /// Create a cold engine handle; nothing is built until first use
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            instance: OnceCell::new(),
            constructions: AtomicUsize::new(0),
        }
    }

    /// Cold handle ready to be passed around
    pub fn shared(config: EngineConfig) -> Arc<Self> {
        Arc::new(Self::new(config))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build the engine if no caller has yet. Idempotent.
    pub async fn initialize(&self) -> Result<()> {
        self.instance().await.map(|_| ())
    }

    /// True once construction has completed successfully
    pub fn is_ready(&self) -> bool {
        matches!(self.instance.get(), Some(Ok(_)))
    }

    /// Number of construction attempts made through this handle
    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::SeqCst)
    }

    /// Poseidon hash of an ordered input sequence
    pub async fn hash(&self, inputs: &[Field]) -> Result<Field> {
        self.instance().await?.hash(inputs)
    }

    /// Hash each sequence independently; output order follows input order
    pub async fn multi_hash(&self, input_arrays: &[Vec<Field>]) -> Result<Vec<Field>> {
        try_join_all(input_arrays.iter().map(|inputs| self.hash(inputs))).await
    }

    async fn instance(&self) -> Result<&PoseidonEngine> {
        let built = self
            .instance
            .get_or_init(|| async {
                self.constructions.fetch_add(1, Ordering::SeqCst);
                let result = PoseidonEngine::build(&self.config);
                match &result {
                    Ok(engine) => tracing::info!(
                        "Poseidon engine ready (arity 1..={})",
                        engine.max_inputs
                    ),
                    Err(e) => tracing::error!("Poseidon engine construction failed: {}", e),
                }
                result
            })
            .await;

        built
            .as_ref()
            .map_err(|e| GridCommitError::Engine(e.clone()))
    }
}

impl std::fmt::Debug for HashEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashEngine")
            .field("config", &self.config)
            .field("ready", &self.is_ready())
            .field("constructions", &self.constructions())
            .finish()
    }
}
