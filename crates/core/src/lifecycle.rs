//! Completion side effect for project status changes.
//!
//! A project's `completed_at` must be non-null exactly when its status
//! is `completed`. Order status changes carry no side effect.

use crate::status::ProjectStatus;
use crate::types::Timestamp;

/// Resolve the `completed_at` value a project carries after a status
/// change to `status` at time `now`.
///
/// Entering [`ProjectStatus::Completed`] stamps the transition time.
/// Every other target clears the timestamp — including a reversal out
/// of `completed`, which discards the earlier completion time.
pub fn completed_at_after(status: ProjectStatus, now: Timestamp) -> Option<Timestamp> {
    match status {
        ProjectStatus::Completed => Some(now),
        ProjectStatus::Planned | ProjectStatus::InProgress => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn completing_sets_timestamp() {
        let now = Utc::now();
        assert_eq!(
            completed_at_after(ProjectStatus::Completed, now),
            Some(now)
        );
    }

    #[test]
    fn reverting_clears_timestamp() {
        let now = Utc::now();
        assert_eq!(completed_at_after(ProjectStatus::InProgress, now), None);
        assert_eq!(completed_at_after(ProjectStatus::Planned, now), None);
    }

    #[test]
    fn recompleting_restamps() {
        // A completed -> completed update takes the new transition time.
        let first = Utc::now();
        let second = first + chrono::Duration::seconds(90);
        assert_eq!(
            completed_at_after(ProjectStatus::Completed, second),
            Some(second)
        );
        assert_ne!(
            completed_at_after(ProjectStatus::Completed, second),
            Some(first)
        );
    }
}
