mod config;
mod logging;
mod signals;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use axum::Router;
use axum::http::{HeaderName, Request, Response};
use axum::routing::get;
use clap::{Parser, Subcommand};
use metadata_catalog::config::MetadataCatalogConfig;
use metadata_catalog::module::MetadataCatalogModule;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::config::AppConfig;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Metadata catalog server: typed relational metadata over REST
#[derive(Parser)]
#[command(name = "metadata-server")]
#[command(about = "Metadata catalog server: typed relational metadata over REST")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.config.as_deref().filter(|p| !p.is_file()) {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port, cli.verbose)?;

    logging::init_logging(&config.logging);

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    let module_cfg: MetadataCatalogConfig =
        config.module_config_or_default(MetadataCatalogModule::NAME)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(&config, &module_cfg).await,
        Commands::Check => check_config(&config, &module_cfg),
    }
}

fn check_config(config: &AppConfig, module_cfg: &MetadataCatalogConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    config.bind_addr()?;
    MetadataCatalogModule::init(module_cfg)?;
    println!("Configuration is valid");
    Ok(())
}

async fn run_server(config: &AppConfig, module_cfg: &MetadataCatalogConfig) -> Result<()> {
    let addr = config.bind_addr()?;
    let module = MetadataCatalogModule::init(module_cfg)?;
    let router = build_router(&module);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "metadata-server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = signals::wait_for_shutdown().await {
                tracing::error!(error = %e, "Shutdown signal handling failed");
            }
        })
        .await
        .context("HTTP server terminated with an error")?;

    tracing::info!("metadata-server stopped");
    Ok(())
}

/// Module routes plus `/health`, wrapped in request-id and tracing layers.
fn build_router(module: &MetadataCatalogModule) -> Router {
    let router = module.register_routes(Router::new().route("/health", get(|| async { "ok" })));

    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<axum::body::Body>| {
                    let rid = req
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("n/a");
                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        uri = %req.uri().path(),
                        version = ?req.version(),
                        request_id = %rid,
                        status = Empty,
                        latency_ms = Empty
                    )
                })
                .on_response(
                    |res: &Response<axum::body::Body>,
                     latency: std::time::Duration,
                     span: &tracing::Span| {
                        span.record("status", res.status().as_u16());
                        span.record("latency_ms", latency.as_millis());
                    },
                ),
        )
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use tower::ServiceExt as _;

    #[tokio::test]
    async fn test_health_and_request_id() {
        let module = MetadataCatalogModule::init(&MetadataCatalogConfig::default()).unwrap();
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = build_router(&module).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_module_routes_are_mounted() {
        let module = MetadataCatalogModule::init(&MetadataCatalogConfig::default()).unwrap();
        let request = Request::builder()
            .uri("/metadata-catalog/v1/users/alice/supported-types")
            .body(Body::empty())
            .unwrap();
        let response = build_router(&module).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
