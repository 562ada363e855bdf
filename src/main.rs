use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cynthia_voice::call::{TracingIndicator, UnavailableSessionFactory};
use cynthia_voice::{
    create_router, AppState, CallBackend, CallController, Config, HttpCallBackend, ToggleOutcome,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "cynthia-voice", version, about = "Voice assistant call service")]
struct Cli {
    /// Config file path (extension optional)
    #[arg(short, long, default_value = "config/cynthia-voice")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the call-initiation HTTP service
    Serve,
    /// Perform one backend handshake and print the join locator
    Handshake,
    /// Start a call through the call controller
    StartCall,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    info!("Cynthia Voice v{}", env!("CARGO_PKG_VERSION"));
    info!("Loaded config: {}", cfg.service.name);

    match cli.command {
        Command::Serve => serve(&cfg).await,
        Command::Handshake => handshake(&cfg).await,
        Command::StartCall => start_call(&cfg).await,
    }
}

async fn serve(cfg: &Config) -> Result<()> {
    let state = AppState::from_config(cfg)?;
    let app = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutdown signal received");
        })
        .await
        .context("HTTP server failed")?;

    Ok(())
}

fn call_backend(cfg: &Config) -> Result<HttpCallBackend> {
    HttpCallBackend::new(
        &cfg.backend.base_url,
        &cfg.backend.start_call_path,
        Duration::from_secs(cfg.backend.timeout_secs),
    )
}

/// Headless hosts have no real-time media capability, so the controller
/// completes the handshake and then reports the missing capability.
async fn start_call(cfg: &Config) -> Result<()> {
    let controller = CallController::new(
        Arc::new(call_backend(cfg)?),
        Arc::new(UnavailableSessionFactory),
        Arc::new(TracingIndicator),
        cfg.call.settings(),
    );

    let outcome = controller.toggle().await;
    controller.shutdown().await;

    match outcome {
        Ok(ToggleOutcome::Started) => {
            info!("Call started");
            Ok(())
        }
        Ok(other) => {
            info!("Call not started: {:?}", other);
            Ok(())
        }
        Err(e) => {
            warn!("Call failed ({:?}): {}", e.kind(), e);
            Err(e).context("Call could not start")
        }
    }
}

async fn handshake(cfg: &Config) -> Result<()> {
    let backend = call_backend(cfg)?;

    let descriptor = backend
        .request_session()
        .await
        .context("Call handshake failed")?;

    info!("Session descriptor received");
    println!("{}", descriptor.join_address);

    Ok(())
}
