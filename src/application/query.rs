/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::error::AppError;
use crate::model::auth::Session;
use crate::model::http::{post_json, read_error_body};
use crate::model::requests::QueryRequest;
use crate::model::responses::{AuthorizationFailure, classify_error};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Runs structured queries against the document service
#[derive(Clone)]
pub struct QueryExecutor {
    config: Arc<Config>,
    client: Client,
}

impl QueryExecutor {
    /// Creates a query executor sharing the given HTTP client
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self { config, client }
    }

    /// Runs `request` with the bearer token of `session`
    ///
    /// # Returns
    /// * `Ok(Value)` - The response payload, untouched
    /// * `Err(AppError::Unauthenticated)` / `Err(AppError::PermissionDenied)` - When the
    ///   first element of the error array carries code 401 / 403
    /// * `Err(AppError::Query)` - Any other non-success response
    pub async fn run(&self, session: &Session, request: &QueryRequest) -> Result<Value, AppError> {
        if !request.limit().is_positive() {
            warn!(
                "Limit {} is not a positive integer, sending it unchanged",
                request.limit()
            );
        }

        info!(
            "Fetching documents from the \"{}\" collection.",
            request.collection()
        );

        let url = self.config.run_query_url();
        let bearer = session.bearer();
        let headers = vec![("Authorization", bearer.as_str())];

        let response = post_json(&self.client, &url, headers, &request.to_body()).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<Value>().await?);
        }

        let body = match read_error_body(response).await {
            Some(text) => {
                debug!("Query error body: {}", text);
                serde_json::from_str(&text).unwrap_or(Value::Null)
            }
            None => Value::Null,
        };

        match classify_error(&body) {
            Some(AuthorizationFailure::Unauthenticated) => {
                error!("Unauthorized status to the collection.");
                Err(AppError::Unauthenticated)
            }
            Some(AuthorizationFailure::PermissionDenied) => {
                error!("Permission denied for accessing the collection.");
                Err(AppError::PermissionDenied)
            }
            None => {
                error!("Query failed with status {}", status);
                Err(AppError::Query(status))
            }
        }
    }
}
