//! Server configuration types.
//!
//! `ServerConfig` represents the `config.toml` that controls the listen
//! address, static asset directory, capacity enforcement and an optional
//! seed catalog file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::activity::Activity;

/// Top-level configuration for the activities service.
///
/// All fields have sensible defaults, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served under `/static`.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Reject signups once `max_participants` is reached.
    #[serde(default)]
    pub enforce_capacity: bool,

    /// TOML file replacing the built-in activity catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            enforce_capacity: false,
            seed_file: None,
        }
    }
}

/// Contents of a seed file: a list of `[[activities]]` tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedCatalog {
    #[serde(default)]
    pub activities: Vec<Activity>,
}
