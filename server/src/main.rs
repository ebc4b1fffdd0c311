#![cfg_attr(test, allow(clippy::disallowed_methods))]
// Forbid unwrap() in production code to prevent panics on bad requests.
// Test code is allowed to use unwrap() for convenience.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use server::server::{FragmentParams, RequestError};
use server::{FragmentServer, backend, config::ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Media type of every fragment response body.
const FRAGMENT_CONTENT_TYPE: &str = "text/turtle";

/// `Cache-Control` for fragment responses; a page never changes under its
/// request URI.
const FRAGMENT_CACHE_CONTROL: &str = "max-age=30";

#[derive(Clone)]
#[allow(clippy::disallowed_methods)] // Arc::clone is safe and expected for shared state
struct AppState {
    /// The composed request pipeline. The backend inside is read-only, so
    /// one instance serves all connections.
    fragments: Arc<FragmentServer>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment variables
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Loaded configuration: backend={}, listen_port={}",
        config.backend,
        config.listen_port
    );

    // Resolve the backend exactly once; serving must not start without it.
    let backend = match backend::resolve(&config.backend) {
        Ok(backend) => backend,
        Err(e) => {
            tracing::error!("Failed to initialize backend: {e}");
            std::process::exit(1);
        }
    };

    let state = AppState {
        fragments: Arc::new(FragmentServer::new(backend)),
    };

    let app = Router::new()
        .route("/", get(fragment_handler))
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.listen_port));
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind: {e}");
            std::process::exit(1);
        });

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    });
}

async fn fragment_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<FragmentParams>,
) -> Response {
    match state.fragments.handle(&root_uri(&headers), &params) {
        Ok(body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, FRAGMENT_CONTENT_TYPE),
                (header::CACHE_CONTROL, FRAGMENT_CACHE_CONTROL),
            ],
            body,
        )
            .into_response(),
        Err(error @ RequestError::MalformedPattern(_)) => {
            tracing::warn!("rejected request: {error}");
            (StatusCode::BAD_REQUEST, error.to_string()).into_response()
        }
        Err(error @ RequestError::Backend(_)) => {
            tracing::error!("backend failed: {error}");
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()).into_response()
        }
    }
}

/// Derive the fragment root URI from the request's Host header. The root
/// doubles as the base of every URI the response echoes back.
fn root_uri(headers: &HeaderMap) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");
    format!("http://{host}/")
}
