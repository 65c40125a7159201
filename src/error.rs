/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

/// Which sign-in call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInMethod {
    /// Anonymous sign-up
    Anonymous,
    /// Email and password sign-in
    Password,
}

impl fmt::Display for SignInMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignInMethod::Anonymous => write!(f, "anonymously"),
            SignInMethod::Password => write!(f, "with password"),
        }
    }
}

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum AppError {
    /// The identity service rejected a sign-in request
    #[error("error signing in {method}: {status}")]
    SignIn {
        /// Sign-in call that failed
        method: SignInMethod,
        /// HTTP status returned by the identity service
        status: StatusCode,
    },
    /// The query was rejected with error code 401
    #[error("unauthenticated")]
    Unauthenticated,
    /// The query was rejected with error code 403
    #[error("permission denied")]
    PermissionDenied,
    /// Any other non-success query response
    #[error("error fetching documents: {0}")]
    Query(StatusCode),
    /// Escalation needed an email and a password that were not supplied
    #[error("user credentials are required for authenticated access")]
    CredentialsRequired,
    /// `--collection` was not given
    #[error("The --collection argument is required.")]
    MissingCollection,
    /// Invalid command-line or request input
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Transport level failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Filesystem or terminal write failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON encoding or decoding failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Returns true for the query failures that can be recovered by signing in with a password
    #[must_use]
    pub fn is_authorization(&self) -> bool {
        matches!(self, AppError::Unauthenticated | AppError::PermissionDenied)
    }
}
