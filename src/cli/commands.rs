//! CLI command definitions

use crate::error::Result;
use crate::types::TradeParameters;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gridcommit")]
#[command(about = "GridCommit - trade commitments for the P2P energy and carbon market", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Exclusive upper bound for salts (overrides GRIDCOMMIT_SALT_BOUND)
    #[arg(long, global = true)]
    pub salt_bound: Option<u64>,

    /// Nonce hashed into nullifiers (overrides GRIDCOMMIT_NULLIFIER_NONCE)
    #[arg(long, global = true)]
    pub nullifier_nonce: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a commitment and nullifier for trade terms
    Prove {
        /// Market (energy, carbon)
        #[arg(short, long, default_value = "energy")]
        kind: String,

        #[command(flatten)]
        terms: TermsArgs,
    },

    /// Check a commitment record against disclosed trade terms
    Verify {
        /// Path to the commitment record JSON
        #[arg(short, long)]
        record: PathBuf,

        #[command(flatten)]
        terms: TermsArgs,
    },

    /// Poseidon hash of decimal or 0x-prefixed hex inputs
    Hash {
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Place an order against an in-memory book
    Place {
        /// Market (energy, carbon)
        #[arg(short, long, default_value = "energy")]
        kind: String,

        /// Order side (buy, sell)
        #[arg(short, long)]
        side: String,

        #[command(flatten)]
        terms: TermsArgs,
    },

    /// List sell orders eligible for a buy order
    Match {
        /// Path to a JSON array of orders
        #[arg(short, long)]
        orders: PathBuf,

        /// Buy order id
        #[arg(short, long)]
        buy_id: u64,
    },
}

/// Trade terms as typed by the user
#[derive(Args, Debug, Clone)]
pub struct TermsArgs {
    /// Amount to trade
    #[arg(short, long)]
    pub amount: String,

    /// Minimum acceptable price
    #[arg(short = 'p', long)]
    pub min_price: String,

    /// Maximum acceptable price
    #[arg(short = 'P', long)]
    pub max_price: String,
}

impl TermsArgs {
    pub fn to_params(&self) -> Result<TradeParameters> {
        TradeParameters::parse(&self.amount, &self.min_price, &self.max_price)
    }
}
