#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::util::query::encode_component;

/// Query flag set after a successful create, paired with [`CREATED_TITLE`].
pub const CREATE_FLAG: &str = "showCreateNotification";
/// Query parameter carrying the title of the created bug.
pub const CREATED_TITLE: &str = "createdBugTitle";
/// Query flag set after a successful delete, paired with [`DELETED_TITLE`].
pub const DELETE_FLAG: &str = "showDeleteNotification";
/// Query parameter carrying the title of the deleted bug.
pub const DELETED_TITLE: &str = "deletedBugTitle";

/// What a one-shot success notification is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Created,
    Deleted,
}

/// One-shot success notification derived from route query parameters.
///
/// The mutation gateway plants the flags via a replace navigation; this
/// object is the explicit read side, and [`Notification::dismiss_path`]
/// is the explicit clear side (another replace navigation to the bare
/// route, dropping the flags from the URL).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
}

impl Notification {
    /// Read a notification out of the current query parameters.
    ///
    /// A flag counts only when its value is the literal `true`; a flag
    /// without its title parameter falls back to an empty title. Create
    /// wins if both flags are somehow present.
    pub fn from_query(get: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let flagged = |flag: &str| get(flag).is_some_and(|v| v == "true");

        if flagged(CREATE_FLAG) {
            return Some(Self {
                kind: NotificationKind::Created,
                title: get(CREATED_TITLE).unwrap_or_default(),
            });
        }
        if flagged(DELETE_FLAG) {
            return Some(Self {
                kind: NotificationKind::Deleted,
                title: get(DELETED_TITLE).unwrap_or_default(),
            });
        }
        None
    }

    /// User-facing message text.
    pub fn message(&self) -> String {
        match self.kind {
            NotificationKind::Created => {
                format!("successfully created bug \"{}\"", self.title)
            }
            NotificationKind::Deleted => {
                format!("successfully deleted bug \"{}\"", self.title)
            }
        }
    }

    /// Route that clears the notification flags.
    pub fn dismiss_path() -> &'static str {
        "/"
    }
}

/// Route carrying the create-success flags for the next render cycle.
pub fn created_path(title: &str) -> String {
    format!("/?{CREATE_FLAG}=true&{CREATED_TITLE}={}", encode_component(title))
}

/// Route carrying the delete-success flags for the next render cycle.
pub fn deleted_path(title: &str) -> String {
    format!("/?{DELETE_FLAG}=true&{DELETED_TITLE}={}", encode_component(title))
}
