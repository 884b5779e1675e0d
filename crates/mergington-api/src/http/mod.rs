//! HTTP/REST API layer.
//!
//! Axum-based API serving the activity directory, plain `{"detail": ...}`
//! error bodies, static assets and CORS support.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod router;
