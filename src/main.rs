use gh_lookupd::engine::cache::ResultCache;
use gh_lookupd::engine::executors::QueryExecutors;
use gh_lookupd::engine::pending::PendingRegistry;
use gh_lookupd::engine::processor::Processor;
use gh_lookupd::engine::reaper::{REAP_INTERVAL, Reaper};
use gh_lookupd::github::client::GithubClient;
use gh_lookupd::github::queries::register_executors;
use gh_lookupd::server::listener;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:7311".parse()?;
    let mut token = std::env::var("GITHUB_TOKEN").unwrap_or_default();
    let mut ttl = Duration::from_secs(60);
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--token" => {
                token = args[i + 1].clone();
                i += 2;
            }
            "--ttl" => {
                ttl = Duration::from_secs(args[i + 1].parse()?);
                i += 2;
            }
            "--verbose" => {
                verbose = true;
                i += 1;
            }
            _ => {
                i += 1;
            }
        }
    }

    tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    if token.is_empty() {
        eprintln!(
            "Usage: {} [--bind <addr:port>] [--token <github-token>] [--ttl <seconds>] [--verbose]",
            args[0]
        );
        eprintln!("A token is required: pass --token or set GITHUB_TOKEN.");
        std::process::exit(1);
    }

    // 1. Engine state:
    let cache = Arc::new(ResultCache::new());
    let pending = Arc::new(PendingRegistry::new());
    let executors = QueryExecutors::new();

    // 2. Remote lookup executors:
    let client = Arc::new(GithubClient::new(token));
    register_executors(&executors, client);

    let processor = Processor::new(cache.clone(), pending.clone(), executors, ttl);

    // 3. Spawn the reaper:
    Reaper::new(processor.clone(), REAP_INTERVAL).start();

    // 4. Spawn stats reporter:
    let stats_cache = cache.clone();
    let stats_pending = pending.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30));

        loop {
            interval.tick().await;
            tracing::info!(
                "Engine stats: {} cached results, {} pending executions",
                stats_cache.len(),
                stats_pending.len()
            );
        }
    });

    // 5. Serve the line protocol:
    tracing::info!("Listening on {} (ttl: {:?})", bind_addr, ttl);
    tracing::info!("Press Ctrl+C to shutdown");

    let tcp_listener = tokio::net::TcpListener::bind(bind_addr).await?;
    listener::serve(tcp_listener, processor).await?;

    Ok(())
}
