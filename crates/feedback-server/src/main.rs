//! Feedback Server
//!
//! Accepts name/feedback submissions over HTTP, stores them in PostgreSQL and
//! returns the stored list. Optionally serves the built web client.

mod config;
mod error;
mod handlers;
mod storage;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use config::{Config, StoreKind};
use storage::{FeedbackStore, MemoryStore, PostgresStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FeedbackStore>,
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Feedback Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, store={}, postgres={:?}",
        config.bind_address, config.store, config.postgres
    );

    let store = build_store(&config);
    let state = AppState {
        store: store.clone(),
    };

    if let Some(dir) = &config.static_dir {
        info!("Static files directory: {}", dir.display());
    }
    let app = build_router(state, config.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .context("Failed to bind to address")?;
    info!("Backend running on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down, closing {} store", store.backend_name());
    store.close().await;

    Ok(())
}

fn build_store(config: &Config) -> Arc<dyn FeedbackStore> {
    match config.store {
        StoreKind::Memory => {
            warn!("Using in-memory store, records are lost on restart");
            Arc::new(MemoryStore::new())
        }
        StoreKind::Postgres => {
            let store = Arc::new(PostgresStore::connect_lazy(&config.postgres));

            // Runs in the background so the listener comes up even when the
            // database does not.
            let bootstrap = store.clone();
            tokio::spawn(async move {
                match bootstrap.ensure_schema().await {
                    Ok(()) => info!("feedbacks table ready"),
                    Err(e) => warn!("Could not ensure feedbacks table: {}", e),
                }
            });

            store
        }
    }
}

pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .merge(api_routes())
        // Same routes for clients that reach us without a path-stripping proxy
        .nest("/api", api_routes());

    if let Some(dir) = static_dir {
        let index_path = dir.join("index.html");
        router = router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index_path)));
    }

    router
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::health)).route(
        "/feedback",
        get(handlers::feedback::list).post(handlers::feedback::create),
    )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_static_dir_served_as_fallback() {
        let dir = std::env::temp_dir().join(format!("feedback-static-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<h1>Feedback</h1>").unwrap();
        std::fs::write(dir.join("style.css"), "body {}").unwrap();

        let state = AppState {
            store: Arc::new(MemoryStore::new()),
        };
        let app = build_router(state, Some(dir.as_path()));

        let (status, body) = get_text(app.clone(), "/style.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body {}");

        let (status, body) = get_text(app.clone(), "/index.html").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Feedback"));

        // Liveness keeps the root path.
        let (status, body) = get_text(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Backend is running"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_no_static_dir_unknown_path_is_404() {
        let state = AppState {
            store: Arc::new(MemoryStore::new()),
        };
        let app = build_router(state, None);

        let (status, _) = get_text(app, "/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let state = AppState {
            store: Arc::new(MemoryStore::new()),
        };
        let app = build_router(state, None);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/feedback")
                    .header("origin", "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }
}
