mod probe;
mod roll;

use crate::cli::Args;
use crate::entropy::Entropy;
use crate::metrics;
use crate::metrics::Metrics;
use crate::readiness::Readiness;
use crate::telemetry;
use axum::extract::Request;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use probe::Relation;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;
use tracing::info;
use tracing::warn;
use tracing::Span;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use tracing_unwrap::ResultExt;

/// Everything a request handler may touch, passed explicitly
#[derive(Clone)]
pub struct AppState {
    pub readiness: Arc<Readiness>,
    pub entropy: Arc<Entropy>,
    pub metrics: Arc<Metrics>,
    pub relations: Arc<Vec<Relation>>,
}

impl AppState {
    pub fn new(entropy: Entropy) -> Self {
        AppState {
            readiness: Arc::new(Readiness::new()),
            entropy: Arc::new(entropy),
            metrics: Arc::new(Metrics::new(env!("CARGO_PKG_VERSION"))),
            relations: Arc::new(probe::default_relations()),
        }
    }
}

/// Join the API prefix and a route, both normalized to a single leading `/`
fn api_path(base_path: &str, route: &str) -> String {
    let base = base_path.trim_matches('/');
    if base.is_empty() {
        format!("/{route}")
    } else {
        format!("/{base}/{route}")
    }
}

/// Server span of a request, child of the caller's trace when one is propagated
fn request_span(request: &Request) -> Span {
    let span = tracing::info_span!(
        "request",
        otel.kind = "server",
        http.method = %request.method(),
        http.target = %request.uri(),
    );
    span.set_parent(telemetry::remote_context(request.headers()));
    span
}

/// Build the API router
pub fn router(state: AppState, base_path: &str) -> Router {
    let rolls = Router::new()
        .route("/", get(roll::roll))
        .route(&api_path(base_path, "roll"), get(roll::roll))
        .layer(CorsLayer::permissive());

    Router::new()
        .merge(rolls)
        .route("/health", get(probe::health))
        .route("/readiness", get(probe::readiness))
        .route("/relation", get(probe::relations))
        .route(&api_path(base_path, "relations"), get(probe::relations))
        .route("/metrics", get(probe::metrics))
        .route_layer(middleware::from_fn_with_state(state.clone(), metrics::track))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect_or_log("Could not register Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect_or_log("Could not register SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}

/// Serve until SIGINT or SIGTERM
///
/// The readiness gate opens after the startup delay and closes as soon as a
/// shutdown signal arrives, before in-flight requests are drained.
pub async fn run(args: &Args) {
    let state = AppState::new(Entropy::new(args.seed));
    if args.seed.is_some() {
        info!("Rolling from a seeded generator");
    }

    let listener = TcpListener::bind(args.bind)
        .await
        .expect_or_log("Could not bind listener");
    let local_addr = listener.local_addr().expect_or_log("No local address");
    info!("Listening on `{}`", local_addr);

    let router = router(state.clone(), &args.base_path);
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown_rx.changed().await.ok();
            })
            .await
    });

    let readiness = state.readiness.clone();
    let startup_delay = args.startup_delay();
    tokio::spawn(async move {
        tokio::time::sleep(startup_delay).await;
        if readiness.mark_ready() {
            info!("Ready after {:?}", startup_delay);
        }
    });

    shutdown_signal().await;
    let previous = state.readiness.begin_shutdown();
    info!("Shutting down, was {:?}", previous);
    let _ = shutdown_tx.send(true);

    let grace: Duration = args.shutdown_grace();
    match tokio::time::timeout(grace, server).await {
        Ok(Ok(Ok(()))) => info!("Server stopped"),
        Ok(Ok(Err(err))) => error!("Server error `{}`", err),
        Ok(Err(err)) => error!("Server task failed `{}`", err),
        Err(_) => warn!("In-flight requests still running after {:?}", grace),
    }
}
