//! Derived dashboard metrics.
//!
//! Pure functions over a full in-memory list snapshot, recomputed on
//! every request. Nothing here is cached; the caller refetches after a
//! mutation and recomputes.

use serde::Serialize;

use crate::status::{OrderStatus, ProjectStatus};

/// Aggregate counters for the projects page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectStats {
    pub total: u64,
    /// Projects still moving: planned or in progress.
    pub active: u64,
    pub completed: u64,
    /// Share of completed projects, rounded to a whole percent.
    /// Defined as 0 for an empty list.
    pub completion_rate: u8,
}

/// Compute project counters from the statuses of a list snapshot.
pub fn project_stats<'a, I>(statuses: I) -> ProjectStats
where
    I: IntoIterator<Item = &'a ProjectStatus>,
{
    let mut total = 0u64;
    let mut active = 0u64;
    let mut completed = 0u64;

    for status in statuses {
        total += 1;
        match status {
            ProjectStatus::Planned | ProjectStatus::InProgress => active += 1,
            ProjectStatus::Completed => completed += 1,
        }
    }

    let completion_rate = if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u8
    };

    ProjectStats {
        total,
        active,
        completed,
        completion_rate,
    }
}

/// Aggregate counters for the orders page header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderStats {
    pub total: u64,
    pub pending: u64,
    pub delivered: u64,
    /// Sum of order amounts. Non-finite amounts count as 0.
    pub revenue: f64,
}

/// Compute order counters from `(status, total_amount)` pairs of a list
/// snapshot.
pub fn order_stats<'a, I>(orders: I) -> OrderStats
where
    I: IntoIterator<Item = (&'a OrderStatus, f64)>,
{
    let mut total = 0u64;
    let mut pending = 0u64;
    let mut delivered = 0u64;
    let mut revenue = 0.0f64;

    for (status, amount) in orders {
        total += 1;
        match status {
            OrderStatus::Pending => pending += 1,
            OrderStatus::Delivered => delivered += 1,
            OrderStatus::Validated => {}
        }
        if amount.is_finite() {
            revenue += amount;
        }
    }

    OrderStats {
        total,
        pending,
        delivered,
        revenue,
    }
}
