//! Activity repository trait definition.

use mergington_types::activity::Activity;
use mergington_types::error::RepositoryError;

/// Repository trait for the activity directory.
///
/// Implementations live in mergington-infra (e.g., InMemoryActivityRepository).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait ActivityRepository: Send + Sync {
    /// Snapshot of every activity in insertion order.
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<Activity>, RepositoryError>> + Send;

    /// Apply `apply` to the named activity as one atomic read-modify-write.
    ///
    /// Returns `Ok(None)` without calling `apply` when no activity has that
    /// name. No other writer observes the activity while `apply` runs.
    fn update<F, T>(
        &self,
        name: &str,
        apply: F,
    ) -> impl std::future::Future<Output = Result<Option<T>, RepositoryError>> + Send
    where
        F: FnOnce(&mut Activity) -> T + Send,
        T: Send;
}
