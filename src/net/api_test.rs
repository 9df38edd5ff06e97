use super::*;

// =============================================================
// Endpoint addressing
// =============================================================

#[test]
fn bug_url_appends_stringified_id() {
    assert_eq!(bug_url("1"), "/api/bugs/1");
    assert_eq!(bug_url("42"), "/api/bugs/42");
}

#[test]
fn collection_endpoint_is_stable() {
    assert_eq!(BUGS_ENDPOINT, "/api/bugs");
}

// =============================================================
// Error display
// =============================================================

#[test]
fn api_error_display_forms() {
    assert_eq!(
        ApiError::Transport("connection refused".to_owned()).to_string(),
        "request failed: connection refused"
    );
    assert_eq!(ApiError::Status(500).to_string(), "server returned status 500");
    assert_eq!(
        ApiError::Decode("expected a list".to_owned()).to_string(),
        "invalid response body: expected a list"
    );
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
