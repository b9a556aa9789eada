use clap::Parser;

use qrserv::cli::Cli;
use qrserv::lifecycle::signals;
use qrserv::observability::{logging, metrics};
use qrserv::{CachePolicy, HttpServer, Listener, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    logging::init(&config.observability)?;

    tracing::info!("qrserv v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        unix_socket = ?config.listener.unix_socket,
        module_size = config.render.module_size,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Computed once; every response reuses the same Expires value.
    let cache = CachePolicy::from_process_start()?;
    tracing::info!(expires = ?cache.expires(), "Cache policy fixed");

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = Listener::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(shutdown.clone());

    let server = HttpServer::new(config, cache);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
