//! Request body extraction
//!
//! Create and update accept both JSON and URL-encoded bodies; the
//! Content-Type header selects the parser. Parse failures map to the
//! invalid-body error rather than axum's default rejection so the
//! response keeps the standard `{error, code}` envelope.

use axum::async_trait;
use axum::extract::{Form, FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Json;
use serde::de::DeserializeOwned;

use super::errors::ApiError;

/// Body extractor accepting `application/json` (the default) or
/// `application/x-www-form-urlencoded`.
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send + 'static,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::InvalidBody(e.to_string()))?;
            return Ok(Self(value));
        }

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::InvalidBody(e.to_string()))?;
        Ok(Self(value))
    }
}
