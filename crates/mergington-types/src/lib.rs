//! Shared domain types for the Mergington activities service.
//!
//! This crate contains the core domain types used across the workspace:
//! Activity, Directory, roster changes, configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod activity;
pub mod config;
pub mod error;
