//! Trivia Server Binary
//!
//! Loads the question set and serves it over HTTP.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;
use trivia::network::Server;
use trivia::{Config, TriviaService};
use tracing_subscriber::{fmt, EnvFilter};

/// Trivia Server
#[derive(Parser, Debug)]
#[command(name = "trivia-server")]
#[command(about = "Read-only trivia question service")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    listen: String,

    /// Questions per page
    #[arg(short, long, default_value = "4")]
    page_size: NonZeroUsize,

    /// JSON file with the question set (defaults to the built-in deck)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Prefix for hypermedia links, e.g. https://trivia.example.com
    #[arg(short, long, default_value = "")]
    base_url: String,

    /// Seed for random question selection
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,trivia=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("Trivia Server v{}", trivia::VERSION);
    tracing::info!("Listen address: {}", args.listen);
    tracing::info!("Page size: {}", args.page_size);

    // Build config from args
    let mut builder = Config::builder()
        .listen_addr(&args.listen)
        .page_size(args.page_size)
        .public_base_url(&args.base_url);
    if let Some(path) = &args.questions {
        builder = builder.questions_file(path);
    }
    if let Some(seed) = args.seed {
        builder = builder.random_seed(seed);
    }
    let config = builder.build();

    // Load questions; an invalid set must never be served
    let service = match TriviaService::open(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to load questions: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Serving {} questions", service.count());

    let server = Server::new(config, service);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
