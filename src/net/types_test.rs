use super::*;

// =============================================================
// Bug wire decoding
// =============================================================

#[test]
fn bug_decodes_from_wire_json() {
    let bug: Bug = serde_json::from_value(serde_json::json!({
        "id": 2,
        "title": "Bug 2",
        "description": "Test",
        "status": "In Progress",
        "priority": "Medium"
    }))
    .expect("bug");

    assert_eq!(bug.id, 2);
    assert_eq!(bug.title, "Bug 2");
    assert_eq!(bug.status, BugStatus::InProgress);
    assert_eq!(bug.priority, BugPriority::Medium);
}

#[test]
fn bug_collection_preserves_returned_order() {
    let bugs: Vec<Bug> = serde_json::from_value(serde_json::json!([
        {"id": 1, "title": "Bug 1", "description": "", "status": "Open", "priority": "High"},
        {"id": 2, "title": "Bug 2", "description": "", "status": "Closed", "priority": "Low"}
    ]))
    .expect("bugs");

    let titles: Vec<&str> = bugs.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["Bug 1", "Bug 2"]);
}

#[test]
fn missing_description_defaults_to_empty() {
    let bug: Bug = serde_json::from_value(serde_json::json!({
        "id": 1,
        "title": "Bug 1",
        "status": "Open",
        "priority": "High"
    }))
    .expect("bug");
    assert_eq!(bug.description, "");
}

#[test]
fn unrecognized_status_decodes_to_unknown() {
    let bug: Bug = serde_json::from_value(serde_json::json!({
        "id": 1,
        "title": "Bug 1",
        "description": "",
        "status": "Triaged",
        "priority": "Critical"
    }))
    .expect("bug");

    assert_eq!(bug.status, BugStatus::Unknown);
    assert_eq!(bug.priority, BugPriority::Unknown);
}

// =============================================================
// Status / priority forms
// =============================================================

#[test]
fn status_parse_round_trips_known_values() {
    for status in BugStatus::ALL {
        assert_eq!(BugStatus::parse(status.as_str()), status);
    }
}

#[test]
fn priority_parse_round_trips_known_values() {
    for priority in BugPriority::ALL {
        assert_eq!(BugPriority::parse(priority.as_str()), priority);
    }
}

#[test]
fn parse_falls_back_to_unknown() {
    assert_eq!(BugStatus::parse("Reopened"), BugStatus::Unknown);
    assert_eq!(BugPriority::parse(""), BugPriority::Unknown);
}

#[test]
fn in_progress_serializes_with_space() {
    let v = serde_json::to_value(BugStatus::InProgress).expect("json");
    assert_eq!(v, serde_json::json!("In Progress"));
}

// =============================================================
// Mutation payloads
// =============================================================

#[test]
fn draft_serializes_title_and_description() {
    let draft = BugDraft {
        title: "New Bug".to_owned(),
        description: "Test".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&draft).expect("json"),
        serde_json::json!({"title": "New Bug", "description": "Test"})
    );
}

#[test]
fn patch_omits_unsubmitted_fields() {
    let patch = BugPatch {
        title: Some("Updated Bug".to_owned()),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_value(&patch).expect("json"),
        serde_json::json!({"title": "Updated Bug"})
    );
}

#[test]
fn full_patch_serializes_every_field() {
    let patch = BugPatch {
        title: Some("Updated Bug".to_owned()),
        description: Some("Test".to_owned()),
        status: Some(BugStatus::InProgress),
        priority: Some(BugPriority::Low),
    };
    assert_eq!(
        serde_json::to_value(&patch).expect("json"),
        serde_json::json!({
            "title": "Updated Bug",
            "description": "Test",
            "status": "In Progress",
            "priority": "Low"
        })
    );
}
