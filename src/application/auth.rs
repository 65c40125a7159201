/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Sign-in against the identity toolkit
//!
//! Two calls are supported:
//! - anonymous sign-up, the starting point of every run
//! - email/password sign-in, used only after the anonymous token was rejected
//!
//! Both send the configured referer, since API keys restricted by HTTP
//! referer refuse anonymous sign-up otherwise. A failed call is a single
//! failure: nothing is retried.

use crate::application::config::Config;
use crate::error::{AppError, SignInMethod};
use crate::model::auth::{AuthState, PasswordCredentials, Session, SignInResponse};
use crate::model::http::{post_json, read_error_body};
use reqwest::{Client, Response};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Identity service client
#[derive(Clone)]
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    referer: String,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration holding the API key and identity endpoint
    /// * `client` - HTTP client shared with the query executor
    /// * `referer` - Value of the `Referer` header; empty to omit it
    pub fn new(config: Arc<Config>, client: Client, referer: impl Into<String>) -> Self {
        Self {
            config,
            client,
            referer: referer.into(),
        }
    }

    /// Signs up as a new anonymous user
    ///
    /// # Returns
    /// * `Ok(Session)` - Anonymous session
    /// * `Err(AppError::SignIn)` - If the identity service answers with a non-success status
    pub async fn sign_in_anonymously(&self) -> Result<Session, AppError> {
        info!("Signing in anonymously with referer {}", self.referer);

        let url = self.config.sign_up_url();
        let response = post_json(
            &self.client,
            &url,
            self.headers(),
            &serde_json::json!({}),
        )
        .await?;

        let session = Self::read_session(response, SignInMethod::Anonymous).await?;
        info!("Successfully signed in anonymously.");
        Ok(session)
    }

    /// Signs in with an email and a password
    ///
    /// # Returns
    /// * `Ok(Session)` - Authenticated session
    /// * `Err(AppError::SignIn)` - If the identity service answers with a non-success status
    pub async fn sign_in_with_password(
        &self,
        credentials: &PasswordCredentials,
    ) -> Result<Session, AppError> {
        info!("Signing in as {}", credentials.email);

        let url = self.config.sign_in_with_password_url();
        let response = post_json(
            &self.client,
            &url,
            self.headers(),
            &credentials.to_request(),
        )
        .await?;

        let session = Self::read_session(response, SignInMethod::Password).await?;
        info!("Successfully signed in as {}.", credentials.email);
        Ok(session)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        if self.referer.is_empty() {
            Vec::new()
        } else {
            vec![("Referer", self.referer.as_str())]
        }
    }

    async fn read_session(response: Response, method: SignInMethod) -> Result<Session, AppError> {
        let status = response.status();
        if !status.is_success() {
            error!("Sign-in {} failed with status {}", method, status);
            if let Some(body) = read_error_body(response).await {
                debug!("Sign-in error body: {}", body);
            }
            return Err(AppError::SignIn { method, status });
        }

        let state = match method {
            SignInMethod::Anonymous => AuthState::Anonymous,
            SignInMethod::Password => AuthState::Authenticated,
        };
        let session = response.json::<SignInResponse>().await?.into_session(state);
        debug!("Obtained {} session", session.state);
        Ok(session)
    }
}
