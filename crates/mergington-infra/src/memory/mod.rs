//! In-memory repository implementations.
//!
//! State lives for the lifetime of the process; nothing is persisted.

pub mod activity;

pub use activity::InMemoryActivityRepository;
