use axum::{routing::get, Router};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use siafu_content::ContentStore;
use siafu_render::resolve_preview_widths;
use siafu_site::handlers::page_handler;
use siafu_site::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "siafu-site")]
#[command(about = "Web server for the Siafu project website")]
struct Cli {
    /// Directory containing site content (sections, widgets, simulations.json)
    #[arg(long, default_value = "content")]
    content: PathBuf,

    /// Directory containing image assets and stylesheets
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// TCP address to bind the web server
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "siafu_site=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    info!("Loading content from: {}", cli.content.display());
    let store = match ContentStore::load(&cli.content) {
        Ok(store) => store,
        Err(err) => {
            error!("Failed to load content: {err}");
            std::process::exit(1);
        }
    };

    // Preview dimensions are probed once; the store never changes while
    // the process runs.
    let widths = resolve_preview_widths(store.records(), &cli.assets);
    let state = AppState::new(store, widths);

    info!("Serving assets from: {}", cli.assets.display());

    let app = Router::new()
        .route("/", get(page_handler))
        .nest_service("/assets", ServeDir::new(&cli.assets))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = match TcpListener::bind(cli.bind).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind {}: {err}", cli.bind);
            std::process::exit(1);
        }
    };

    info!("");
    info!("Siafu project site: http://{}", cli.bind);
    info!("");

    if let Err(err) = axum::serve(listener, app).await {
        error!("Server error: {err}");
    }
}
