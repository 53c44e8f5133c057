// src/api/mod.rs — HTTP server: dashboard page and channel API

pub mod handlers;
pub mod page;
pub mod types;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::core::{Binder, DashboardContext, ViewState};
use crate::infra::config::ServerConfig;
use crate::infra::errors::DashResult;

/// Shared state for API handlers. Everything behind the `Arc`s is read-only.
#[derive(Clone)]
pub struct ApiState {
    pub ctx: Arc<DashboardContext>,
    pub binder: Binder,
    /// Every channel computed with its default input, used for first paint.
    pub initial: Arc<ViewState>,
    pub title: String,
}

impl ApiState {
    pub fn new(ctx: Arc<DashboardContext>, title: impl Into<String>) -> DashResult<Self> {
        ctx.ensure_populated()?;
        let binder = Binder::new();
        let initial = ViewState::initial(&binder, &ctx)?;
        Ok(Self {
            ctx,
            binder,
            initial: Arc::new(initial),
            title: title.into(),
        })
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", o);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

/// Build the axum router with all routes.
pub fn build_router(state: ApiState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/v1/options", get(handlers::options))
        .route("/api/v1/events", post(handlers::fire_event))
        .route("/api/v1/summary", get(handlers::summary))
        .route("/api/v1/health", get(handlers::health))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server and run until ctrl-c.
pub async fn start_server(config: &ServerConfig, state: ApiState) -> anyhow::Result<()> {
    let addr = config.addr();
    let router = build_router(state, &config.cors_origins);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Dashboard listening on http://{addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await?;
    Ok(())
}
