//! Activity name path extractor.
//!
//! Wraps axum's `Path` so a malformed segment (bad percent-encoding,
//! invalid UTF-8) answers with the usual `{"detail": ...}` body.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::http::error::AppError;

/// The `{activity_name}` segment, percent-decoded.
#[derive(Debug)]
pub struct ActivityName(pub String);

impl<S> FromRequestParts<S> for ActivityName
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(name) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(Self(name))
    }
}
