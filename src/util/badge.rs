#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

use crate::net::types::{BugPriority, BugStatus};

/// Badge classes for a bug status.
///
/// Total over the enum: unrecognized wire values land on `Unknown` and get
/// the neutral gray badge.
pub fn status_badge_class(status: BugStatus) -> &'static str {
    match status {
        BugStatus::Open => "bg-red-100 text-red-800",
        BugStatus::InProgress => "bg-yellow-100 text-yellow-800",
        BugStatus::Closed => "bg-green-100 text-green-800",
        BugStatus::Unknown => "bg-gray-100 text-gray-800",
    }
}

/// Badge classes for a bug priority.
pub fn priority_badge_class(priority: BugPriority) -> &'static str {
    match priority {
        BugPriority::High => "bg-red-100 text-red-800",
        BugPriority::Medium => "bg-yellow-100 text-yellow-800",
        BugPriority::Low => "bg-green-100 text-green-800",
        BugPriority::Unknown => "bg-gray-100 text-gray-800",
    }
}
