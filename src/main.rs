//! randomgen server — weighted random numbers with goodness-of-fit checks
//! over HTTP.
//!
//! # Endpoints
//!
//! - `GET  /api/v1/randomgen?numbers=N` — draws via the inverse-CDF sampler
//! - `GET  /api/v2/randomgen?numbers=N` — draws via the weighted-choice sampler
//! - `POST /api/config`                — replace the distribution
//! - `GET|POST /api/reset`             — restore the defaults

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use randomgen::server::{app, AppState};
use randomgen::service::{ServiceOptions, DEFAULT_MAX_QUANTITY};
use randomgen::statistical_tests::DEFAULT_ALPHA;

/// Weighted random number generator with chi-square validation.
#[derive(Parser, Debug)]
#[command(name = "randomgen-server", version, about)]
struct Cli {
    /// Port to listen on.
    #[arg(short, long, default_value = "5000")]
    port: u16,

    /// Bind address.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Largest number of draws accepted by a single generate request.
    #[arg(long, default_value_t = DEFAULT_MAX_QUANTITY)]
    max_quantity: usize,

    /// Significance level of the chi-square test.
    #[arg(long, default_value_t = DEFAULT_ALPHA)]
    alpha: f64,

    /// Seed for reproducible draws (omit to seed from OS entropy).
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let cli = Cli::parse();

    let options = ServiceOptions::new(cli.max_quantity, cli.alpha, cli.seed)?;
    let state = Arc::new(AppState::new(options));

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    tracing::info!(
        %addr,
        max_quantity = cli.max_quantity,
        alpha = cli.alpha,
        seeded = cli.seed.is_some(),
        version = env!("CARGO_PKG_VERSION"),
        "randomgen-server starting"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
