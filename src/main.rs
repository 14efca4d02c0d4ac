use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod approval;
mod cli;
mod config;
mod errors;
mod jobs;
mod models;
mod resolver;
mod shell;

use approval::{ApprovalTracker, HttpApprovalClient};
use shell::DashboardShell;

/// Shared application state passed to handlers.
pub struct AppState {
    pub shell: RwLock<DashboardShell>,
    pub config: config::Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "viewgate=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = config::load()?;
    let args = cli::Cli::parse();

    let result = match args.command {
        Some(cli::Commands::Serve { port }) => run_server(cfg, port).await,
        Some(cli::Commands::Resolve {
            role,
            selection,
            approved,
        }) => resolve_once(&role, &selection, approved),
        None => {
            let port = cfg.port;
            run_server(cfg, port).await
        }
    };

    if let Err(ref e) = result {
        eprintln!("Error: {:?}", e);
    }
    result
}

async fn run_server(cfg: config::Config, port: u16) -> anyhow::Result<()> {
    let client = HttpApprovalClient::new(
        &cfg.approval_url,
        Duration::from_secs(cfg.fetch_timeout_secs),
    );
    let tracker = Arc::new(ApprovalTracker::new(Arc::new(client)));

    let state = Arc::new(AppState {
        shell: RwLock::new(DashboardShell::new(tracker.clone())),
        config: cfg,
    });

    jobs::approval_refresh::spawn(tracker, state.config.approval_refresh_secs);

    let app = axum::Router::new()
        // Health endpoint (no session required)
        .route("/healthz", axum::routing::get(|| async { "ok" }))
        // Shell API — nested under /api/v1
        .nest("/api/v1", api::api_router())
        .with_state(state.clone())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        // Only the dashboard front-end talks to this service
        .layer({
            use axum::http::{HeaderName, Method};
            use tower_http::cors::AllowOrigin;
            let dashboard_origin = std::env::var("DASHBOARD_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string());
            CorsLayer::new()
                .allow_origin(AllowOrigin::predicate(move |origin, _| {
                    let origin_str = origin.to_str().unwrap_or("");
                    origin_str == dashboard_origin
                        || origin_str.starts_with("http://localhost:")
                        || origin_str.starts_with("http://127.0.0.1:")
                }))
                .allow_methods([Method::GET, Method::PUT, Method::POST, Method::OPTIONS])
                .allow_headers([HeaderName::from_static("content-type")])
        });

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("viewgate listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Offline rule-table check for one triple: prints the outcome as JSON.
fn resolve_once(role: &str, selection: &str, approved: bool) -> anyhow::Result<()> {
    let role = models::Role::from_str(role);
    let section = models::Section::from_label(selection);
    let outcome = resolver::resolve(&role, approved, &section);
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
