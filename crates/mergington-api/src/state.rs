//! Application state wiring the activity service.
//!
//! AppState holds the concrete service instance used by both CLI and REST API.
//! The service is generic over the repository trait, but AppState pins it to
//! the in-memory infra implementation.

use std::sync::Arc;

use mergington_core::service::activity::ActivityService;
use mergington_infra::config::load_seed;
use mergington_infra::memory::InMemoryActivityRepository;
use mergington_types::activity::Activity;
use mergington_types::config::ServerConfig;

/// Concrete type alias for the service generic pinned to the infra implementation.
pub type ConcreteActivityService = ActivityService<InMemoryActivityRepository>;

/// Shared application state.
///
/// Cloned into every request handler; the directory itself is shared
/// through the `Arc`, never copied.
#[derive(Clone)]
pub struct AppState {
    pub activity_service: Arc<ConcreteActivityService>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Initialize the application state: load the seed and wire the service.
    pub async fn init(config: ServerConfig) -> anyhow::Result<Self> {
        let activities = load_seed(&config).await?;
        tracing::debug!(count = activities.len(), "seeded activity directory");
        Ok(Self::from_seed(activities, config))
    }

    /// Wire the service around an already validated seed.
    pub fn from_seed(activities: Vec<Activity>, config: ServerConfig) -> Self {
        let repo = InMemoryActivityRepository::new(activities);
        let activity_service = ActivityService::new(repo, config.enforce_capacity);

        Self {
            activity_service: Arc::new(activity_service),
            config: Arc::new(config),
        }
    }
}
