//! Search and facet filtering for the projects list.
//!
//! The list screen fetches the full project list once and filters it in
//! memory on every keystroke or facet change; the same predicate runs
//! server-side here so the API returns exactly what the screen shows.

use crate::status::{ProjectPriority, ProjectStatus};

/// Filter criteria for the projects list.
///
/// `None` facets impose no constraint — the UI's "all" selection. An
/// empty or whitespace-only query matches everything.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    /// Free-text search over culture type and client name.
    pub query: Option<String>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<ProjectPriority>,
}

impl ProjectFilter {
    /// Whether the filter passes everything through unchanged.
    pub fn is_unconstrained(&self) -> bool {
        self.normalized_query().is_none() && self.status.is_none() && self.priority.is_none()
    }

    /// The lowercased query, or `None` when blank.
    fn normalized_query(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// Whether a project with the given fields passes the filter.
    ///
    /// The query is a case-insensitive substring match against the
    /// culture type and the joined client name; both facets are exact
    /// matches. All three predicates must hold.
    pub fn matches(
        &self,
        culture_type: &str,
        client_name: Option<&str>,
        status: ProjectStatus,
        priority: ProjectPriority,
    ) -> bool {
        let query_ok = match self.normalized_query() {
            None => true,
            Some(q) => {
                culture_type.to_lowercase().contains(&q)
                    || client_name.is_some_and(|name| name.to_lowercase().contains(&q))
            }
        };

        query_ok
            && self.status.is_none_or(|s| s == status)
            && self.priority.is_none_or(|p| p == priority)
    }
}
