//! # REST API HTTP Server
//!
//! Router construction and application assembly: the user routes are
//! mounted under `/api/users`, unmatched paths fall through to a JSON
//! 404, and handler errors render with the status they carry.

use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

use super::errors::ApiError;
use super::handlers::{create_user, delete_user, get_user, list_users, update_user, AppState};

/// Base path the user routes are mounted under.
pub const USERS_BASE_PATH: &str = "/api/users";

/// Routes for the user collection, relative to the mount point.
///
/// The `:id` segment is forwarded verbatim; the handler owns
/// identifier validation.
pub fn users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Health probe for liveness checks; not part of the CRUD contract.
async fn health() -> &'static str {
    "ok"
}

/// Fallback for unmatched routes.
async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    app_with_cors(state, &[])
}

/// Build the application router with CORS origins from configuration.
pub fn app_with_cors(state: AppState, cors_origins: &[String]) -> Router {
    let cors = if cors_origins.is_empty() {
        // No origins configured: permissive, for development
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/health", get(health))
        .nest(USERS_BASE_PATH, users_router())
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until the task is stopped.
pub async fn serve(config: &AppConfig, state: AppState) -> Result<(), std::io::Error> {
    let addr: SocketAddr = config
        .socket_addr()
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let app = app_with_cors(state, &config.cors_origins);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        addr = %addr,
        env = config.env.as_str(),
        "listening"
    );
    axum::serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::store::InMemoryUserStore;

    use super::*;

    #[test]
    fn test_app_builds() {
        let store = Arc::new(InMemoryUserStore::connect("userbase_test"));
        let _router = app(AppState::new(store));
    }
}
