//! Router construction and server lifecycle

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::post;
use tracing::info;

use crate::api::auth::require_bearer;
use crate::api::handler::get_params;
use crate::config::Config;
use crate::release::source::TagSource;
use crate::release::sources::GitHubTags;

/// Path the ApplicationSet controller invokes for parameter generation
pub const GETPARAMS_PATH: &str = "/api/v1/getparams.execute";

/// Shared state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tags: Arc<dyn TagSource>,
}

/// Builds the application router.
///
/// Authorization wraps only the registered route, so requests against
/// unknown paths get a plain 404 without a token exchange.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(GETPARAMS_PATH, post(get_params))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ))
        .with_state(state)
}

/// Binds the configured port and serves until the process is stopped.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let tags = match &config.github_token {
        Some(token) => GitHubTags::default().with_token(token.clone()),
        None => GitHubTags::default(),
    };

    let state = AppState {
        config: Arc::new(config),
        tags: Arc::new(tags),
    };

    let addr = format!("0.0.0.0:{}", state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, router(state)).await?;

    Ok(())
}
