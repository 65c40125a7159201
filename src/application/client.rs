/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::query::QueryExecutor;
use crate::error::AppError;
use crate::model::auth::{AuthState, PasswordCredentials};
use crate::model::http::build_http_client;
use crate::model::requests::QueryRequest;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// Payload of a successful fetch together with the state that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    /// Response of the query endpoint
    pub payload: Value,
    /// Whether the payload was read anonymously or after password sign-in
    pub state: AuthState,
}

/// Document client with the anonymous-first authentication flow
///
/// Every fetch starts with an anonymous sign-up. If the query is refused with
/// `UNAUTHENTICATED` or `PERMISSION_DENIED` the client signs in with the
/// password credentials and retries the query exactly once.
#[derive(Clone)]
pub struct Client {
    auth: Auth,
    query: QueryExecutor,
}

impl Client {
    /// Creates a client with its own HTTP client built from `config.http`
    pub fn new(config: Arc<Config>, referer: impl Into<String>) -> Result<Self, AppError> {
        let http_client = build_http_client(&config.http)?;
        Ok(Self {
            auth: Auth::new(config.clone(), http_client.clone(), referer),
            query: QueryExecutor::new(config, http_client),
        })
    }

    /// Fetches the documents described by `request`
    ///
    /// # Arguments
    /// * `request` - What to fetch
    /// * `credentials` - Email/password used if the anonymous token is refused
    ///
    /// # Returns
    /// * `Ok(FetchOutcome)` - The payload and the state it was read in
    /// * `Err(AppError::SignIn)` - Anonymous or password sign-in failed
    /// * `Err(AppError::CredentialsRequired)` - Escalation needed without credentials
    /// * `Err(_)` - Any other query failure, or any failure of the retried query
    pub async fn fetch(
        &self,
        request: &QueryRequest,
        credentials: Option<&PasswordCredentials>,
    ) -> Result<FetchOutcome, AppError> {
        let session = self.auth.sign_in_anonymously().await?;

        match self.query.run(&session, request).await {
            Ok(payload) => Ok(FetchOutcome {
                payload,
                state: session.state,
            }),
            Err(e) if e.is_authorization() => {
                let Some(credentials) = credentials else {
                    warn!("Anonymous access refused ({}) and no credentials supplied", e);
                    return Err(AppError::CredentialsRequired);
                };
                info!("Anonymous access refused ({}), signing in with password", e);

                let session = self.auth.sign_in_with_password(credentials).await?;
                let payload = self.query.run(&session, request).await?;
                Ok(FetchOutcome {
                    payload,
                    state: session.state,
                })
            }
            Err(e) => Err(e),
        }
    }
}
