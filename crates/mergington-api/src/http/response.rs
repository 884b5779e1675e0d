//! Response bodies.
//!
//! Successful mutations answer `{"message": "..."}`; every error answers
//! `{"detail": "..."}`. The directory listing is returned bare.

use serde::{Deserialize, Serialize};

use mergington_types::activity::RosterChange;

/// Confirmation returned by signup and unregister.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<RosterChange> for MessageResponse {
    fn from(change: RosterChange) -> Self {
        Self {
            message: change.to_string(),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
