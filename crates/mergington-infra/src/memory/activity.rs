//! In-memory implementation of ActivityRepository.
//!
//! The whole directory sits behind one `tokio::sync::RwLock`. Listing takes
//! the read lock and clones a snapshot; `update` holds the write lock for
//! the duration of the caller's closure, which makes each signup or
//! unregister a single atomic read-modify-write.

use tokio::sync::RwLock;

use mergington_core::repository::activity::ActivityRepository;
use mergington_types::activity::Activity;
use mergington_types::error::RepositoryError;

/// Process-local activity directory.
///
/// Activities keep the order they were seeded in. No activity is ever
/// added or removed after construction.
pub struct InMemoryActivityRepository {
    activities: RwLock<Vec<Activity>>,
}

impl InMemoryActivityRepository {
    /// Create a repository seeded with `activities`.
    ///
    /// Callers are expected to have validated the seed
    /// (see `mergington_core::catalog::validate`).
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }
}

impl ActivityRepository for InMemoryActivityRepository {
    async fn list(&self) -> Result<Vec<Activity>, RepositoryError> {
        let activities = self.activities.read().await;
        Ok(activities.clone())
    }

    async fn update<F, T>(&self, name: &str, apply: F) -> Result<Option<T>, RepositoryError>
    where
        F: FnOnce(&mut Activity) -> T + Send,
        T: Send,
    {
        let mut activities = self.activities.write().await;
        let result = activities.iter_mut().find(|a| a.name == name).map(apply);
        if result.is_none() {
            tracing::debug!(activity = %name, "update on unknown activity");
        }
        Ok(result)
    }
}
