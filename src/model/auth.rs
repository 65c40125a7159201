/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};
use std::fmt;

/// Authentication state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthState {
    /// Token obtained through anonymous sign-up
    Anonymous,
    /// Token obtained through email/password sign-in
    Authenticated,
}

impl fmt::Display for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthState::Anonymous => write!(f, "anonymous"),
            AuthState::Authenticated => write!(f, "authenticated"),
        }
    }
}

/// Body of the email/password sign-in request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordSignInRequest<'a> {
    /// Account email
    pub email: &'a str,
    /// Account password
    pub password: &'a str,
    /// Ask for an ID and refresh token pair
    pub return_secure_token: bool,
}

/// Response of both sign-up and sign-in endpoints; only the ID token is read
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    /// Bearer token presented to the document service
    pub id_token: String,
}

impl SignInResponse {
    /// Converts the response into a session in the given state
    pub fn into_session(self, state: AuthState) -> Session {
        Session {
            id_token: self.id_token,
            state,
        }
    }
}

/// Bearer session valid for the remainder of a run
#[derive(Clone)]
pub struct Session {
    /// Bearer token
    pub id_token: String,
    /// How the token was obtained
    pub state: AuthState,
}

impl Session {
    /// Value of the `Authorization` header for this session
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.id_token)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id_token", &"***")
            .field("state", &self.state)
            .finish()
    }
}

/// Email/password pair used when escalating out of the anonymous state
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordCredentials {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

impl PasswordCredentials {
    /// Pairs an email with a password; both must be present
    pub fn from_parts(email: Option<String>, password: Option<String>) -> Option<Self> {
        match (email, password) {
            (Some(email), Some(password)) => Some(Self { email, password }),
            _ => None,
        }
    }

    /// Request body for the password sign-in endpoint
    pub fn to_request(&self) -> PasswordSignInRequest<'_> {
        PasswordSignInRequest {
            email: &self.email,
            password: &self.password,
            return_secure_token: true,
        }
    }
}

impl fmt::Debug for PasswordCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordCredentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}
