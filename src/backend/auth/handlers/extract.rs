/**
 * Request Body Extraction
 *
 * Browser forms post `application/x-www-form-urlencoded` bodies while API
 * clients send JSON. `JsonOrForm` accepts either, choosing by content type,
 * and reports unreadable bodies as a `BackendError`.
 */

use axum::{
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;

/// Body extractor accepting JSON or url-encoded form data
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| BackendError::handler(e.status(), e.body_text()))?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| BackendError::handler(e.status(), e.body_text()))?;
            Ok(Self(value))
        }
    }
}
