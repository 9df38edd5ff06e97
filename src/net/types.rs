#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

/// A bug record as returned by the backend.
///
/// The `id` is assigned by the backend on creation and is the address for
/// update/delete calls (stringified into the URL path). The frontend never
/// generates identifiers.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Bug {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: BugStatus,
    pub priority: BugPriority,
}

/// Workflow status of a bug.
///
/// `Unknown` absorbs any wire value this frontend does not recognize, so a
/// newer backend enum member degrades to a neutral badge instead of a
/// decode failure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BugStatus {
    #[default]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Closed,
    #[serde(other)]
    Unknown,
}

impl BugStatus {
    /// Statuses offered in the edit form, in display order.
    pub const ALL: [Self; 3] = [Self::Open, Self::InProgress, Self::Closed];

    /// Wire/display form of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Closed => "Closed",
            Self::Unknown => "Unknown",
        }
    }

    /// Parse a form select value back into a status.
    pub fn parse(s: &str) -> Self {
        match s {
            "Open" => Self::Open,
            "In Progress" => Self::InProgress,
            "Closed" => Self::Closed,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for BugStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority of a bug.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BugPriority {
    Low,
    #[default]
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

impl BugPriority {
    /// Priorities offered in the edit form, in display order.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Wire/display form of the priority.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Unknown => "Unknown",
        }
    }

    /// Parse a form select value back into a priority.
    pub fn parse(s: &str) -> Self {
        match s {
            "Low" => Self::Low,
            "Medium" => Self::Medium,
            "High" => Self::High,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for BugPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload for creating a bug. The backend assigns id, status, and priority.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BugDraft {
    pub title: String,
    pub description: String,
}

/// Partial update payload. `None` fields are omitted from the request body
/// so the backend only touches submitted fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BugPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BugStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<BugPriority>,
}
