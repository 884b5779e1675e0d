//! Built-in activity catalog and seed validation.
//!
//! The directory is seeded once at startup, either from this catalog or
//! from a seed file loaded by the infra layer. Both paths go through
//! [`validate`] so the directory invariants hold from the first request.

use std::collections::HashSet;

use mergington_types::activity::Activity;
use mergington_types::error::SeedError;

fn activity(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        name: name.to_string(),
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// The nine Mergington High School activities with their starting rosters.
pub fn default_activities() -> Vec<Activity> {
    vec![
        activity(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        activity(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        activity(
            "Basketball Team",
            "Join the competitive basketball team and participate in tournaments",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
            &["alex@mergington.edu"],
        ),
        activity(
            "Tennis Club",
            "Learn tennis skills and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
            10,
            &["james@mergington.edu", "lucy@mergington.edu"],
        ),
        activity(
            "Art Studio",
            "Explore painting, drawing, and visual arts techniques",
            "Wednesdays and Saturdays, 3:00 PM - 4:30 PM",
            16,
            &["maya@mergington.edu"],
        ),
        activity(
            "Music Band",
            "Play instruments and perform in school concerts",
            "Mondays and Thursdays, 3:30 PM - 5:00 PM",
            25,
            &["noah@mergington.edu", "ava@mergington.edu"],
        ),
        activity(
            "Debate Club",
            "Develop public speaking and critical thinking skills through debates",
            "Fridays, 4:00 PM - 5:30 PM",
            18,
            &["lucas@mergington.edu"],
        ),
        activity(
            "Science Olympiad",
            "Compete in science competitions and build scientific projects",
            "Tuesdays, 3:30 PM - 5:00 PM",
            14,
            &["isabella@mergington.edu", "ethan@mergington.edu"],
        ),
    ]
}

/// Check a seed set against the directory invariants.
///
/// Names must be unique, rosters must not repeat an email, and every
/// activity must seat at least one participant. Rosters larger than
/// `max_participants` are accepted.
pub fn validate(activities: &[Activity]) -> Result<(), SeedError> {
    let mut names = HashSet::new();
    for activity in activities {
        if !names.insert(activity.name.as_str()) {
            return Err(SeedError::DuplicateActivity(activity.name.clone()));
        }
        if activity.max_participants == 0 {
            return Err(SeedError::ZeroCapacity(activity.name.clone()));
        }

        let mut emails = HashSet::new();
        for email in &activity.participants {
            if !emails.insert(email.as_str()) {
                return Err(SeedError::DuplicateParticipant {
                    activity: activity.name.clone(),
                    email: email.clone(),
                });
            }
        }
    }
    Ok(())
}
