use firestore_peek::error::{AppError, SignInMethod};
use reqwest::StatusCode;

#[test]
fn test_app_error_display_sign_in_anonymous() {
    let error = AppError::SignIn {
        method: SignInMethod::Anonymous,
        status: StatusCode::BAD_REQUEST,
    };
    assert_eq!(
        error.to_string(),
        "error signing in anonymously: 400 Bad Request"
    );
}

#[test]
fn test_app_error_display_sign_in_password() {
    let error = AppError::SignIn {
        method: SignInMethod::Password,
        status: StatusCode::UNAUTHORIZED,
    };
    assert_eq!(
        error.to_string(),
        "error signing in with password: 401 Unauthorized"
    );
}

#[test]
fn test_app_error_display_query() {
    let error = AppError::Query(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        error.to_string(),
        "error fetching documents: 500 Internal Server Error"
    );
}

#[test]
fn test_app_error_display_credentials_required() {
    let error = AppError::CredentialsRequired;
    assert!(error.to_string().contains("credentials are required"));
}

#[test]
fn test_app_error_display_missing_collection() {
    assert_eq!(
        AppError::MissingCollection.to_string(),
        "The --collection argument is required."
    );
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("collection name must not be empty".to_string());
    assert_eq!(
        error.to_string(),
        "invalid input: collection name must not be empty"
    );
}

#[test]
fn test_app_error_is_authorization() {
    assert!(AppError::Unauthenticated.is_authorization());
    assert!(AppError::PermissionDenied.is_authorization());
    assert!(!AppError::CredentialsRequired.is_authorization());
    assert!(!AppError::Query(StatusCode::FORBIDDEN).is_authorization());
    assert!(
        !AppError::SignIn {
            method: SignInMethod::Anonymous,
            status: StatusCode::FORBIDDEN,
        }
        .is_authorization()
    );
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}
