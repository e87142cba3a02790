//! Request body and path extraction with the crate's error shape.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use boxoffice_core::error::CoreError;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body.
///
/// Behaves like [`axum::Json`] but rejects with a `VALIDATION_ERROR` body
/// instead of axum's plain-text rejection, so malformed or mistyped payloads
/// surface as 400 with the usual `{"error", "code"}` JSON.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    let message = match &rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Expected request with `Content-Type: application/json`".to_string()
        }
        _ => rejection.body_text(),
    };
    AppError::Core(CoreError::Validation(message))
}

/// Path parameters.
///
/// Like [`axum::extract::Path`], but an id that fails to parse (`/api/Movie/abc`)
/// is a JSON `VALIDATION_ERROR` rather than a plain-text 400.
#[derive(Debug)]
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(PathParam(value)),
            Err(rejection) => Err(path_rejection_to_error(rejection)),
        }
    }
}

fn path_rejection_to_error(rejection: PathRejection) -> AppError {
    match rejection {
        PathRejection::FailedToDeserializePathParams(_) => {
            AppError::Core(CoreError::Validation(rejection.body_text()))
        }
        // Route/extractor mismatch: a wiring bug, not bad input.
        other => AppError::InternalError(other.body_text()),
    }
}
