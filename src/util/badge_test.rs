use super::*;

// =============================================================
// Status badges
// =============================================================

#[test]
fn open_status_highlights_red() {
    assert_eq!(status_badge_class(BugStatus::Open), "bg-red-100 text-red-800");
}

#[test]
fn in_progress_status_highlights_yellow() {
    assert_eq!(
        status_badge_class(BugStatus::InProgress),
        "bg-yellow-100 text-yellow-800"
    );
}

#[test]
fn closed_status_highlights_green() {
    assert_eq!(
        status_badge_class(BugStatus::Closed),
        "bg-green-100 text-green-800"
    );
}

#[test]
fn unknown_status_gets_neutral_badge() {
    assert_eq!(
        status_badge_class(BugStatus::Unknown),
        "bg-gray-100 text-gray-800"
    );
}

#[test]
fn open_is_distinct_from_in_progress() {
    assert_ne!(
        status_badge_class(BugStatus::Open),
        status_badge_class(BugStatus::InProgress)
    );
}

// =============================================================
// Priority badges
// =============================================================

#[test]
fn high_priority_highlights_red() {
    assert_eq!(
        priority_badge_class(BugPriority::High),
        "bg-red-100 text-red-800"
    );
}

#[test]
fn medium_priority_highlights_yellow() {
    assert_eq!(
        priority_badge_class(BugPriority::Medium),
        "bg-yellow-100 text-yellow-800"
    );
}

#[test]
fn low_priority_highlights_green() {
    assert_eq!(
        priority_badge_class(BugPriority::Low),
        "bg-green-100 text-green-800"
    );
}

#[test]
fn unknown_priority_gets_neutral_badge() {
    assert_eq!(
        priority_badge_class(BugPriority::Unknown),
        "bg-gray-100 text-gray-800"
    );
}

#[test]
fn high_is_distinct_from_medium() {
    assert_ne!(
        priority_badge_class(BugPriority::High),
        priority_badge_class(BugPriority::Medium)
    );
}
