//! Configuration and seed catalog loaders.
//!
//! Reads `config.toml` and deserializes it into [`ServerConfig`], falling
//! back to sensible defaults when the file is missing or malformed. The seed
//! catalog named by `seed_file` is stricter: a seed that cannot be read,
//! parsed or validated is an error, since serving a half-loaded directory
//! would break the roster invariants.

use std::path::Path;

use mergington_core::catalog::{self, default_activities};
use mergington_types::activity::Activity;
use mergington_types::config::{SeedCatalog, ServerConfig};
use mergington_types::error::SeedError;

/// Load server configuration from `config_path`.
///
/// - If the file does not exist, returns [`ServerConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_config(config_path: &Path) -> ServerConfig {
    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", config_path.display());
            return ServerConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ServerConfig::default();
        }
    };

    match toml::from_str::<ServerConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ServerConfig::default()
        }
    }
}

/// Resolve the activities the directory starts with.
///
/// Uses `config.seed_file` when set, otherwise the built-in catalog.
/// Either way the result has passed [`catalog::validate`].
pub async fn load_seed(config: &ServerConfig) -> Result<Vec<Activity>, SeedError> {
    let activities = match &config.seed_file {
        Some(path) => load_seed_file(path).await?,
        None => default_activities(),
    };
    catalog::validate(&activities)?;
    Ok(activities)
}

async fn load_seed_file(path: &Path) -> Result<Vec<Activity>, SeedError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SeedError::Io(format!("{}: {e}", path.display())))?;
    let seed: SeedCatalog =
        toml::from_str(&content).map_err(|e| SeedError::Parse(e.to_string()))?;
    tracing::info!(
        path = %path.display(),
        count = seed.activities.len(),
        "loaded activity seed file"
    );
    Ok(seed.activities)
}
