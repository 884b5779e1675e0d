//! Infrastructure layer for the Mergington activities service.
//!
//! Contains implementations of the repository traits defined in
//! `mergington-core` (the in-memory activity store) and the loaders for
//! `config.toml` and seed catalog files.

pub mod config;
pub mod memory;
