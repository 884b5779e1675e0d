//! Roster rules and repository trait definitions for the activities service.
//!
//! This crate defines the "ports" (repository traits) that the infrastructure
//! layer implements. It depends only on `mergington-types` -- never on
//! `mergington-infra` or any storage crate.

pub mod catalog;
pub mod repository;
pub mod service;
