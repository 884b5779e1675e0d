//! Request extractors.

pub mod activity;
pub mod email;
