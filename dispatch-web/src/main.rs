//! Callback gateway server entry point.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use dispatch::config::load_config;
use dispatch_web::routes;
use dispatch_web::state::AppState;

#[derive(Parser)]
#[command(name = "dispatch-web")]
#[command(about = "Callback redirect gateway for the booking front-end")]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value = "3000")]
    port: u16,

    /// Path to gateway.toml (defaults apply when the file is missing)
    #[arg(long, default_value = "gateway.toml")]
    config: PathBuf,

    /// Directory containing the static site pages
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dispatch_web=info".parse()?)
                .add_directive("dispatch=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let config = load_config(&args.config)?;
    info!(remote_origin = %config.remote_origin, "loaded gateway config");

    let state = AppState::new(config);
    let mut app = routes::router().with_state(state);

    // Serve the static marketing pages if a directory was given.
    if let Some(static_dir) = args.static_dir {
        if static_dir.exists() {
            info!(static_dir = %static_dir.display(), "serving static site pages");
            app = app
                .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true));
        } else {
            info!(static_dir = %static_dir.display(), "static directory not found, gateway-only mode");
        }
    }

    let app = app.layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
