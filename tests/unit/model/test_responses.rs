use firestore_peek::model::responses::{AuthorizationFailure, classify_error, first_error_status};
use serde_json::json;

#[test]
fn test_classify_unauthenticated() {
    let body = json!([{
        "error": {"code": 401, "message": "Request had invalid authentication credentials.", "status": "UNAUTHENTICATED"}
    }]);
    assert_eq!(
        classify_error(&body),
        Some(AuthorizationFailure::Unauthenticated)
    );
}

#[test]
fn test_classify_permission_denied() {
    let body = json!([{
        "error": {"code": 403, "message": "Missing or insufficient permissions.", "status": "PERMISSION_DENIED"}
    }]);
    assert_eq!(
        classify_error(&body),
        Some(AuthorizationFailure::PermissionDenied)
    );
}

#[test]
fn test_classify_reads_only_first_element() {
    let body = json!([
        {"error": {"code": 400, "status": "INVALID_ARGUMENT"}},
        {"error": {"code": 403, "status": "PERMISSION_DENIED"}}
    ]);
    assert_eq!(classify_error(&body), None);
}

#[test]
fn test_classify_other_shapes_are_not_authorization_failures() {
    let shapes = [
        json!({"error": {"code": 403, "status": "PERMISSION_DENIED"}}),
        json!([]),
        json!([{"error": {"code": "403"}}]),
        json!([{"message": "no error field"}]),
        json!(null),
        json!("Forbidden"),
    ];
    for body in shapes {
        assert_eq!(classify_error(&body), None, "body {body}");
    }
}

#[test]
fn test_first_error_status_keeps_message_and_status() {
    let body = json!([{"error": {"code": 404, "message": "not found", "status": "NOT_FOUND"}}]);
    let status = first_error_status(&body).unwrap();
    assert_eq!(status.code, 404);
    assert_eq!(status.message.as_deref(), Some("not found"));
    assert_eq!(status.status.as_deref(), Some("NOT_FOUND"));
}
