#[cfg(test)]
#[path = "bugs_test.rs"]
mod bugs_test;

use crate::net::types::Bug;

/// Fixed user-facing message for a failed bug collection fetch.
pub const LOAD_ERROR: &str = "Failed to fetch bugs";

/// Bug list state: the latest snapshot of the backend collection plus
/// loading/error flags and the armed delete confirmation.
///
/// The snapshot is fully replaced after every successful fetch; the view
/// never owns authoritative state. `pending_delete` holds the id of the
/// row whose delete confirmation is currently armed, if any.
#[derive(Clone, Debug)]
pub struct BugsState {
    pub bugs: Vec<Bug>,
    pub loading: bool,
    pub error: Option<String>,
    pub pending_delete: Option<i64>,
}

impl Default for BugsState {
    fn default() -> Self {
        // A fresh view is pending until the first fetch settles.
        Self {
            bugs: Vec::new(),
            loading: true,
            error: None,
            pending_delete: None,
        }
    }
}

impl BugsState {
    /// Mark a fetch as in flight.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Replace the snapshot with a freshly fetched collection.
    ///
    /// Clears any previous error and disarms any pending delete
    /// confirmation, since the row it pointed at may be gone.
    pub fn finish_load(&mut self, bugs: Vec<Bug>) {
        self.bugs = bugs;
        self.loading = false;
        self.error = None;
        self.pending_delete = None;
    }

    /// Record a failed fetch. Terminal until another fetch is triggered.
    pub fn fail_load(&mut self) {
        self.loading = false;
        self.error = Some(LOAD_ERROR.to_owned());
    }

    /// Arm the delete confirmation for one row. Only one row can be armed
    /// at a time; arming a different row moves the confirmation there.
    pub fn arm_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    /// Disarm the delete confirmation.
    pub fn disarm_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Whether the delete confirmation is armed for this row.
    pub fn delete_armed(&self, id: i64) -> bool {
        self.pending_delete == Some(id)
    }
}
