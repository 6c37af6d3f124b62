//! # REST API
//!
//! The HTTP surface over the user collection:
//!
//! - `GET    /api/users`      — list all users
//! - `GET    /api/users/:id`  — fetch one user
//! - `POST   /api/users`      — create a user
//! - `PUT    /api/users/:id`  — update a user
//! - `DELETE /api/users/:id`  — delete a user
//!
//! Errors carry their HTTP status and serialize as `{error, code}`.

mod errors;
mod extract;
mod handlers;
mod response;
mod server;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use extract::JsonOrForm;
pub use handlers::AppState;
pub use response::DeleteResponse;
pub use server::{app, app_with_cors, serve, users_router, USERS_BASE_PATH};
