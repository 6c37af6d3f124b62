//! # REST API Handlers
//!
//! The five CRUD operations over the user collection. Each handler is
//! stateless: it parses its inputs, makes one short sequence of gateway
//! calls, and maps the outcome to an HTTP response. Store failures
//! convert to [`ApiError`](super::errors::ApiError) via `?`.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use crate::model::{DocumentId, NewUser, User, UserPatch};
use crate::store::UserStore;

use super::errors::ApiResult;
use super::extract::JsonOrForm;
use super::response::DeleteResponse;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn UserStore {
        self.store.as_ref()
    }
}

/// Parses a path parameter into a typed id.
///
/// The router passes the segment verbatim; rejecting ill-formed tokens
/// here is what keeps malformed-id (400) distinct from not-found (404).
fn parse_id(raw: &str) -> ApiResult<DocumentId> {
    Ok(raw.parse::<DocumentId>()?)
}

/// `GET /` — list every user.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = state.store().find_all()?;
    Ok(Json(users))
}

/// `GET /:id` — fetch a single user.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let id = parse_id(&id)?;
    let user = state.store().find_by_id(id)?;
    Ok(Json(user))
}

/// `POST /` — create a user; the store assigns the id.
pub async fn create_user(
    State(state): State<AppState>,
    JsonOrForm(candidate): JsonOrForm<NewUser>,
) -> ApiResult<Json<User>> {
    let user = state.store().insert(candidate)?;
    tracing::info!(id = %user.id, "user created");
    Ok(Json(user))
}

/// `PUT /:id` — replace the fields present in the body.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonOrForm(patch): JsonOrForm<UserPatch>,
) -> ApiResult<Json<User>> {
    let id = parse_id(&id)?;
    let user = state.store().update_by_id(id, patch)?;
    tracing::info!(id = %user.id, "user updated");
    Ok(Json(user))
}

/// `DELETE /:id` — remove the user permanently.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = parse_id(&id)?;
    state.store().delete_by_id(id)?;
    tracing::info!(id = %id, "user deleted");
    Ok(Json(DeleteResponse::success(id)))
}
