/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use serde::Deserialize;
use serde_json::Value;

/// One element of the error array returned by `runQuery`
#[derive(Debug, Clone, Deserialize)]
pub struct QueryErrorItem {
    /// The error status
    pub error: ErrorStatus,
}

/// Error status reported by the document service
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorStatus {
    /// Numeric error code, mirrors the HTTP status
    pub code: i64,
    /// Human readable message
    #[serde(default)]
    pub message: Option<String>,
    /// Canonical status name, e.g. `PERMISSION_DENIED`
    #[serde(default)]
    pub status: Option<String>,
}

/// Authorization failure kinds a query can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationFailure {
    /// Error code 401
    Unauthenticated,
    /// Error code 403
    PermissionDenied,
}

/// Reads the error status from the first element of an error array
///
/// Any other shape (an object, an empty array, an element without a numeric
/// `error.code`) yields `None`.
pub fn first_error_status(body: &Value) -> Option<ErrorStatus> {
    let first = body.as_array()?.first()?;
    serde_json::from_value::<QueryErrorItem>(first.clone())
        .ok()
        .map(|item| item.error)
}

/// Classifies a failed query body into an authorization failure, if it is one
pub fn classify_error(body: &Value) -> Option<AuthorizationFailure> {
    match first_error_status(body)?.code {
        401 => Some(AuthorizationFailure::Unauthenticated),
        403 => Some(AuthorizationFailure::PermissionDenied),
        _ => None,
    }
}
