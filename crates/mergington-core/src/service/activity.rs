//! Activity directory service.
//!
//! Owns the roster rules: which error wins when several conditions fail at
//! once, and when a signup or unregister is allowed to touch the roster.
//! Every mutation runs inside a single repository `update`, so a rejected
//! request leaves the roster untouched.

use mergington_types::activity::{Directory, RosterChange};
use mergington_types::error::{ActivityError, RepositoryError};

use crate::repository::activity::ActivityRepository;

/// Service serving ListActivities, SignUp and Unregister.
///
/// Generic over the repository trait to maintain clean architecture --
/// mergington-core never depends on mergington-infra.
pub struct ActivityService<R: ActivityRepository> {
    repo: R,
    enforce_capacity: bool,
}

impl<R: ActivityRepository> ActivityService<R> {
    /// Create a new ActivityService.
    ///
    /// With `enforce_capacity` off, `max_participants` is informational only.
    pub fn new(repo: R, enforce_capacity: bool) -> Self {
        Self {
            repo,
            enforce_capacity,
        }
    }

    /// Return the full directory in insertion order.
    pub async fn list_activities(&self) -> Result<Directory, ActivityError> {
        let activities = self.repo.list().await.map_err(storage_error)?;
        Ok(Directory::new(activities))
    }

    /// Append `email` to the roster of `activity_name`.
    ///
    /// Checks, in order: email present, activity exists, email not already
    /// on the roster, then capacity (only when enforcement is on).
    pub async fn sign_up(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<RosterChange, ActivityError> {
        if email.is_empty() {
            return Err(ActivityError::MissingEmail);
        }

        let enforce_capacity = self.enforce_capacity;
        let outcome = self
            .repo
            .update(activity_name, |activity| {
                if activity.has_participant(email) {
                    return Err(ActivityError::AlreadySignedUp);
                }
                if enforce_capacity && activity.is_full() {
                    return Err(ActivityError::Full);
                }
                activity.participants.push(email.to_string());
                Ok(())
            })
            .await
            .map_err(storage_error)?;

        match outcome {
            None => Err(ActivityError::NotFound),
            Some(Err(e)) => Err(e),
            Some(Ok(())) => {
                tracing::info!(activity = %activity_name, email = %email, "participant signed up");
                Ok(RosterChange::signed_up(activity_name, email))
            }
        }
    }

    /// Remove `email` from the roster of `activity_name`.
    ///
    /// Checks, in order: email present, activity exists, email on the roster.
    pub async fn unregister(
        &self,
        activity_name: &str,
        email: Option<&str>,
    ) -> Result<RosterChange, ActivityError> {
        let email = match email {
            Some(e) if !e.is_empty() => e,
            _ => return Err(ActivityError::MissingEmail),
        };

        let outcome = self
            .repo
            .update(activity_name, |activity| {
                let position = activity
                    .participants
                    .iter()
                    .position(|p| p == email)
                    .ok_or(ActivityError::NotRegistered)?;
                activity.participants.remove(position);
                Ok(())
            })
            .await
            .map_err(storage_error)?;

        match outcome {
            None => Err(ActivityError::NotFound),
            Some(Err(e)) => Err(e),
            Some(Ok(())) => {
                tracing::info!(activity = %activity_name, email = %email, "participant unregistered");
                Ok(RosterChange::unregistered(activity_name, email))
            }
        }
    }
}

fn storage_error(e: RepositoryError) -> ActivityError {
    ActivityError::StorageError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use mergington_types::activity::{Activity, RosterAction};

    use crate::catalog::default_activities;

    // --- Mock repository for testing ---

    struct MockRepository {
        activities: Mutex<Vec<Activity>>,
    }

    impl MockRepository {
        fn seeded() -> Self {
            Self {
                activities: Mutex::new(default_activities()),
            }
        }

        fn roster(&self, name: &str) -> Vec<String> {
            self.activities
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.name == name)
                .map(|a| a.participants.clone())
                .unwrap_or_default()
        }
    }

    impl ActivityRepository for MockRepository {
        async fn list(&self) -> Result<Vec<Activity>, RepositoryError> {
            Ok(self.activities.lock().unwrap().clone())
        }

        async fn update<F, T>(&self, name: &str, apply: F) -> Result<Option<T>, RepositoryError>
        where
            F: FnOnce(&mut Activity) -> T + Send,
            T: Send,
        {
            let mut activities = self.activities.lock().unwrap();
            Ok(activities.iter_mut().find(|a| a.name == name).map(apply))
        }
    }

    /// Repository whose every call fails.
    struct BrokenRepository;

    impl ActivityRepository for BrokenRepository {
        async fn list(&self) -> Result<Vec<Activity>, RepositoryError> {
            Err(RepositoryError::Unavailable)
        }

        async fn update<F, T>(&self, _name: &str, _apply: F) -> Result<Option<T>, RepositoryError>
        where
            F: FnOnce(&mut Activity) -> T + Send,
            T: Send,
        {
            Err(RepositoryError::Unavailable)
        }
    }

    fn service() -> ActivityService<MockRepository> {
        ActivityService::new(MockRepository::seeded(), false)
    }

    #[tokio::test]
    async fn list_returns_seeded_chess_club() {
        let directory = service().list_activities().await.unwrap();
        let chess = directory.get("Chess Club").unwrap();
        assert!(chess.has_participant("michael@mergington.edu"));
        assert!(chess.has_participant("daniel@mergington.edu"));
        assert_eq!(directory.len(), 9);
    }

    #[tokio::test]
    async fn sign_up_appends_to_end_of_roster() {
        let svc = service();
        let change = svc.sign_up("Chess Club", "test@mergington.edu").await.unwrap();
        assert_eq!(change.action, RosterAction::SignedUp);
        assert_eq!(change.to_string(), "Signed up test@mergington.edu for Chess Club");

        let roster = svc.repo.roster("Chess Club");
        assert_eq!(
            roster,
            vec![
                "michael@mergington.edu",
                "daniel@mergington.edu",
                "test@mergington.edu"
            ]
        );
    }

    #[tokio::test]
    async fn sign_up_twice_conflicts() {
        let svc = service();
        svc.sign_up("Chess Club", "dup@mergington.edu").await.unwrap();
        let err = svc.sign_up("Chess Club", "dup@mergington.edu").await.unwrap_err();
        assert_eq!(err, ActivityError::AlreadySignedUp);
        assert_eq!(svc.repo.roster("Chess Club").len(), 3);
    }

    #[tokio::test]
    async fn unknown_activity_is_not_found_for_both_operations() {
        let svc = service();
        for name in ["Nonexistent Activity", "chess club", ""] {
            assert_eq!(
                svc.sign_up(name, "x@y.edu").await.unwrap_err(),
                ActivityError::NotFound
            );
            assert_eq!(
                svc.unregister(name, Some("x@y.edu")).await.unwrap_err(),
                ActivityError::NotFound
            );
        }
    }

    #[tokio::test]
    async fn unregister_removes_exactly_one_email() {
        let svc = service();
        let before = svc.repo.roster("Chess Club");
        let change = svc
            .unregister("Chess Club", Some("michael@mergington.edu"))
            .await
            .unwrap();
        assert_eq!(
            change.to_string(),
            "Unregistered michael@mergington.edu from Chess Club"
        );

        let after = svc.repo.roster("Chess Club");
        assert_eq!(after.len(), before.len() - 1);
        assert_eq!(after, vec!["daniel@mergington.edu"]);
    }

    #[tokio::test]
    async fn unregister_not_on_roster_leaves_roster_unchanged() {
        let svc = service();
        let before = svc.repo.roster("Chess Club");
        let err = svc
            .unregister("Chess Club", Some("notregistered@mergington.edu"))
            .await
            .unwrap_err();
        assert_eq!(err, ActivityError::NotRegistered);
        assert_eq!(svc.repo.roster("Chess Club"), before);
    }

    #[tokio::test]
    async fn missing_email_wins_over_unknown_activity_on_unregister() {
        let svc = service();
        assert_eq!(
            svc.unregister("Nonexistent Activity", None).await.unwrap_err(),
            ActivityError::MissingEmail
        );
        assert_eq!(
            svc.unregister("Chess Club", Some("")).await.unwrap_err(),
            ActivityError::MissingEmail
        );
    }

    #[tokio::test]
    async fn missing_email_wins_over_unknown_activity_on_sign_up() {
        let svc = service();
        assert_eq!(
            svc.sign_up("Nonexistent Activity", "").await.unwrap_err(),
            ActivityError::MissingEmail
        );
        assert_eq!(svc.repo.roster("Chess Club").len(), 2);
    }

    #[tokio::test]
    async fn sign_up_checks_existence_before_duplicate() {
        let svc = service();
        // michael is on Chess Club, but the unknown activity is reported first.
        let err = svc
            .sign_up("Nonexistent Activity", "michael@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, ActivityError::NotFound);
    }

    #[tokio::test]
    async fn sign_up_then_unregister_restores_roster() {
        let svc = service();
        let before = svc.repo.roster("Programming Class");
        svc.sign_up("Programming Class", "workflow@mergington.edu")
            .await
            .unwrap();
        svc.unregister("Programming Class", Some("workflow@mergington.edu"))
            .await
            .unwrap();
        assert_eq!(svc.repo.roster("Programming Class"), before);
    }

    #[tokio::test]
    async fn capacity_is_informational_by_default() {
        let svc = service();
        // Tennis Club seats 10 and starts with 2.
        for i in 0..12 {
            svc.sign_up("Tennis Club", &format!("player{i}@mergington.edu"))
                .await
                .unwrap();
        }
        assert_eq!(svc.repo.roster("Tennis Club").len(), 14);
    }

    #[tokio::test]
    async fn capacity_enforced_when_enabled() {
        let svc = ActivityService::new(MockRepository::seeded(), true);
        for i in 0..8 {
            svc.sign_up("Tennis Club", &format!("player{i}@mergington.edu"))
                .await
                .unwrap();
        }
        let err = svc
            .sign_up("Tennis Club", "late@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, ActivityError::Full);

        // A duplicate on a full roster still reports the duplicate.
        let err = svc
            .sign_up("Tennis Club", "james@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, ActivityError::AlreadySignedUp);
        assert_eq!(svc.repo.roster("Tennis Club").len(), 10);
    }

    #[tokio::test]
    async fn storage_failures_surface_as_storage_errors() {
        let svc = ActivityService::new(BrokenRepository, false);
        assert!(matches!(
            svc.list_activities().await.unwrap_err(),
            ActivityError::StorageError(_)
        ));
        assert!(matches!(
            svc.sign_up("Chess Club", "a@b.edu").await.unwrap_err(),
            ActivityError::StorageError(_)
        ));
    }
}
