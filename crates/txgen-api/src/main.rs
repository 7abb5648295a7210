use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use keystore::provider::FileKeyProvider;
use txgen_api::server::{self, AppState};

/// Ethereum transaction generator API.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Address the HTTP server listens on
    #[arg(long, default_value = "0.0.0.0:8080")]
    listen: String,

    /// Path to the JSON credential file holding the signing mnemonic
    #[arg(long, default_value = "Account.json")]
    account_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let state = Arc::new(AppState {
        provider: FileKeyProvider::new(args.account_file),
        signer_lock: Mutex::new(()),
    });

    let app = server::router(state);

    info!("starting transaction generator API on {}", args.listen);
    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
