//! Trade desk: proof generation followed by order submission

use crate::crypto::CommitmentService;
use crate::error::Result;
use crate::types::{OrderSide, TradeKind, TradeParameters};

use super::submission::OrderSubmitter;
use super::types::{OrderRequest, PlacedOrder};

/// Places orders through an `OrderSubmitter`, producing a trade proof first.
///
/// The proof is returned to the caller but not submitted: the submitter only
/// ever sees the raw trade terms.
#[derive(Debug)]
pub struct TradeDesk<S> {
    proofs: CommitmentService,
    submitter: S,
}

impl<S: OrderSubmitter> TradeDesk<S> {
    pub fn new(proofs: CommitmentService, submitter: S) -> Self {
        Self { proofs, submitter }
    }

    pub fn proofs(&self) -> &CommitmentService {
        &self.proofs
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    /// Generate a proof for `params`, then submit the raw terms.
    ///
    /// Nothing is submitted when proof generation fails.
    pub async fn place_order(
        &self,
        kind: TradeKind,
        side: OrderSide,
        params: TradeParameters,
    ) -> Result<PlacedOrder> {
        let proof = self.proofs.generate_proof_for(kind, &params).await?;

        let receipt = self
            .submitter
            .submit(OrderRequest { kind, side, params })
            .await
            .map_err(|e| {
                tracing::error!("Order submission failed: {}", e);
                e
            })?;

        tracing::info!(
            "Placed {} {:?} order {} (commitment {})",
            kind,
            side,
            receipt.order_id,
            proof.commitment
        );

        Ok(PlacedOrder { receipt, proof })
    }
}
