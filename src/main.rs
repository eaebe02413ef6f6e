// src/main.rs

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use calc_server::config::CONFIG;
use calc_server::web;

#[derive(Parser)]
#[command(name = "calc-server")]
#[command(about = "Calculator API with an embedded web UI")]
#[command(version)]
struct Cli {
    /// Address to bind (overrides CALC_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides CALC_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CONFIG.clone();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    let level = if cli.debug { Level::DEBUG } else { config.log_level() };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let app = web::create_router(&config);
    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Calculator UI on http://{}/", bind_address);
    info!("Calculator API on http://{}/api/calc", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for ctrl-c, running until killed: {}", e);
                std::future::pending::<()>().await;
            }
            info!("Shutting down");
        })
        .await?;

    Ok(())
}
