//! Demo host server for the SOAJS mesh middleware.
//!
//! ```text
//! SOAJS_REGISTRY_API / SOAJS_ENV + --config file
//!     → init_middleware (one registry fetch, Ctrl-C cancels)
//!     → axum Router with MeshLayer + TraceLayer
//!     → GET / echoes the request's ContextData as JSON
//! ```

use std::path::PathBuf;

use axum::{routing::get, Json, Router};
use clap::Parser;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use soajs_mesh::config::{load_config, Config};
use soajs_mesh::lifecycle::signals::spawn_signal_listener;
use soajs_mesh::observability::logging::init_logging;
use soajs_mesh::{init_middleware, ContextData, Shutdown};

#[derive(Parser)]
#[command(name = "soajs-mesh-demo")]
#[command(about = "Echo server wrapped in the SOAJS mesh middleware", long_about = None)]
struct Cli {
    /// Address to listen on.
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    bind: String,

    /// Optional TOML file with service identity and registry settings.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging("soajs_mesh=debug,soajs_mesh_demo=debug,tower_http=debug");

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    let shutdown = Shutdown::new();
    let _signals = spawn_signal_listener(shutdown.clone());

    let mesh = init_middleware(shutdown.cancelled(), config).await?;

    let app = Router::new()
        .route("/", get(echo))
        .layer(mesh)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&cli.bind).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn echo(ctx: Option<ContextData>) -> Json<Option<ContextData>> {
    Json(ctx)
}
