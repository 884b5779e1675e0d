use thiserror::Error;

/// Errors from roster operations.
///
/// The display strings are the user-facing `detail` messages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student already signed up for this activity")]
    AlreadySignedUp,

    #[error("Email is required")]
    MissingEmail,

    #[error("Student not registered for this activity")]
    NotRegistered,

    #[error("Activity is full")]
    Full,

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors from repository operations (used by trait definitions in mergington-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage unavailable")]
    Unavailable,

    #[error("query error: {0}")]
    Query(String),
}

/// Errors raised while loading a seed catalog.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(String),

    #[error("failed to parse seed file: {0}")]
    Parse(String),

    #[error("duplicate activity name '{0}'")]
    DuplicateActivity(String),

    #[error("activity '{activity}' lists '{email}' more than once")]
    DuplicateParticipant { activity: String, email: String },

    #[error("activity '{0}' must allow at least one participant")]
    ZeroCapacity(String),
}
