use assert_json_diff::assert_json_eq;
use firestore_peek::error::AppError;
use firestore_peek::model::requests::{Limit, QueryRequest};
use serde_json::json;

#[test]
fn test_limit_parse() {
    assert_eq!(Limit::parse("25"), Limit::Count(25));
    assert_eq!(Limit::parse(" 3 "), Limit::Count(3));
    assert_eq!(Limit::parse("0"), Limit::Count(0));
    assert_eq!(Limit::parse("-4"), Limit::Count(-4));
    assert_eq!(Limit::parse("ten"), Limit::Unparsed("ten".to_string()));
}

#[test]
fn test_limit_parse_uses_leading_integer() {
    assert_eq!(Limit::parse("3.5"), Limit::Count(3));
    assert_eq!(Limit::parse("12abc"), Limit::Count(12));
    assert_eq!(Limit::parse(" 7"), Limit::Count(7));
    assert_eq!(Limit::parse("+8"), Limit::Count(8));
    assert_eq!(Limit::parse("-2.9"), Limit::Count(-2));
}

#[test]
fn test_limit_parse_without_leading_digit_is_unparsed() {
    for raw in ["abc", "", "   ", "-", "+-5", ".5", "NaN", "99999999999999999999"] {
        assert_eq!(Limit::parse(raw), Limit::Unparsed(raw.to_string()), "raw {raw:?}");
    }
}

#[test]
fn test_query_body_sends_leading_integer_of_decimal_limit() {
    let request = QueryRequest::new("messages", Limit::parse("3.5"), false).unwrap();
    let body = serde_json::to_value(request.to_body()).unwrap();
    assert_eq!(body["structuredQuery"]["limit"], json!(3));
}

#[test]
fn test_limit_default_is_ten() {
    assert_eq!(Limit::default(), Limit::Count(10));
}

#[test]
fn test_limit_is_positive() {
    assert!(Limit::Count(1).is_positive());
    assert!(!Limit::Count(0).is_positive());
    assert!(!Limit::Count(-1).is_positive());
    assert!(!Limit::Unparsed("x".into()).is_positive());
}

#[test]
fn test_query_body_without_recent_has_no_order_by() {
    let request = QueryRequest::new("messages", Limit::Count(10), false).unwrap();
    let body = serde_json::to_value(request.to_body()).unwrap();

    assert_json_eq!(
        body,
        json!({
            "structuredQuery": {
                "from": [{"collectionId": "messages", "allDescendants": false}],
                "limit": 10
            }
        })
    );
    assert!(body["structuredQuery"].get("orderBy").is_none());
}

#[test]
fn test_query_body_with_recent_orders_by_created_at_descending() {
    let request = QueryRequest::new("messages", Limit::Count(3), true).unwrap();
    let body = serde_json::to_value(request.to_body()).unwrap();

    assert_json_eq!(
        body,
        json!({
            "structuredQuery": {
                "from": [{"collectionId": "messages", "allDescendants": false}],
                "limit": 3,
                "orderBy": [{
                    "field": {"fieldPath": "created_at"},
                    "direction": "DESCENDING"
                }]
            }
        })
    );
}

#[test]
fn test_query_body_passes_non_positive_limit_through() {
    let request = QueryRequest::new("messages", Limit::Count(-2), false).unwrap();
    let body = serde_json::to_value(request.to_body()).unwrap();
    assert_eq!(body["structuredQuery"]["limit"], json!(-2));
}

#[test]
fn test_query_body_sends_unparsed_limit_as_null() {
    let request = QueryRequest::new("messages", Limit::parse("lots"), false).unwrap();
    let body = serde_json::to_value(request.to_body()).unwrap();

    let query = body["structuredQuery"].as_object().unwrap();
    assert!(query.contains_key("limit"));
    assert!(query["limit"].is_null());
}

#[test]
fn test_query_request_rejects_empty_collection() {
    for name in ["", "   "] {
        let result = QueryRequest::new(name, Limit::default(), false);
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
