//! GridCommit CLI binary

use anyhow::Context;
use clap::Parser;
use gridcommit::cli::{Cli, Commands, GridCommitApp};
use gridcommit::config::ProofConfig;
use gridcommit::types::{OrderId, OrderSide, TradeKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ProofConfig::from_env().context("reading GRIDCOMMIT_* environment")?;
    if let Some(salt_bound) = cli.salt_bound {
        config.salt_bound = salt_bound;
    }
    if let Some(nonce) = cli.nullifier_nonce {
        config.nullifier_nonce = nonce;
    }
    let app = GridCommitApp::new(config)?;

    match cli.command {
        Commands::Prove { kind, terms } => {
            let kind: TradeKind = kind.parse()?;
            let params = terms.to_params()?;

            let record = app.prove(kind, &params).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }

        Commands::Verify { record, terms } => {
            let params = terms.to_params()?;
            let stored = GridCommitApp::load_record(&record)
                .with_context(|| format!("loading record from {}", record.display()))?;

            if app.verify(&stored, &params).await? {
                println!("valid");
            } else {
                println!("invalid");
                std::process::exit(1);
            }
        }

        Commands::Hash { inputs } => {
            println!("{}", app.hash(&inputs).await?);
        }

        Commands::Place { kind, side, terms } => {
            let kind: TradeKind = kind.parse()?;
            let side: OrderSide = side.parse()?;
            let params = terms.to_params()?;

            let placed = app.place(kind, side, params).await?;
            println!("{}", serde_json::to_string_pretty(&placed)?);
        }

        Commands::Match { orders, buy_id } => {
            let book = GridCommitApp::load_orders(&orders)
                .with_context(|| format!("loading orders from {}", orders.display()))?;

            let matches = app.match_orders(&book, OrderId(buy_id));
            println!("{}", serde_json::to_string(&matches)?);
        }
    }

    Ok(())
}
