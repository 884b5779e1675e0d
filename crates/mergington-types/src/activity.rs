use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use std::fmt;

/// An extracurricular activity with its roster.
///
/// The `name` is the primary key and doubles as the URL segment
/// (`/activities/{name}/signup`), so it may contain spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique human-readable name ("Chess Club").
    pub name: String,
    /// Free-text description shown on the activity card.
    pub description: String,
    /// Free-text meeting days and times.
    pub schedule: String,
    /// Advertised capacity.
    pub max_participants: u32,
    /// Student emails in signup order. Never contains duplicates.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Whether `email` is on the roster (exact match).
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Remaining places, saturating at zero when the roster is over capacity.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }
}

/// Snapshot of every activity, keyed by name.
///
/// Serializes as a JSON object `name -> {description, schedule,
/// max_participants, participants}` in seed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    activities: Vec<Activity>,
}

impl Directory {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    /// Look up an activity by exact name.
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }
}

/// Activity body as it appears under its name in the directory listing.
#[derive(Serialize)]
struct ActivityEntry<'a> {
    description: &'a str,
    schedule: &'a str,
    max_participants: u32,
    participants: &'a [String],
}

impl Serialize for Directory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(
                &activity.name,
                &ActivityEntry {
                    description: &activity.description,
                    schedule: &activity.schedule,
                    max_participants: activity.max_participants,
                    participants: &activity.participants,
                },
            )?;
        }
        map.end()
    }
}

/// Kind of roster mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterAction {
    SignedUp,
    Unregistered,
}

/// Outcome of a successful signup or unregister.
///
/// The `Display` output is the confirmation message returned to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterChange {
    pub action: RosterAction,
    pub activity: String,
    pub email: String,
}

impl RosterChange {
    pub fn signed_up(activity: &str, email: &str) -> Self {
        Self {
            action: RosterAction::SignedUp,
            activity: activity.to_string(),
            email: email.to_string(),
        }
    }

    pub fn unregistered(activity: &str, email: &str) -> Self {
        Self {
            action: RosterAction::Unregistered,
            activity: activity.to_string(),
            email: email.to_string(),
        }
    }
}

impl fmt::Display for RosterChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            RosterAction::SignedUp => write!(f, "Signed up {} for {}", self.email, self.activity),
            RosterAction::Unregistered => {
                write!(f, "Unregistered {} from {}", self.email, self.activity)
            }
        }
    }
}
