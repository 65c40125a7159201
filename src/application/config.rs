use crate::constants::{DEFAULT_DOCUMENTS_URL, DEFAULT_IDENTITY_URL, DEFAULT_MONITOR_INTERVAL_SECS};
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Project credentials shared by the identity and document calls
pub struct ProjectCredentials {
    /// Web API key of the project
    #[serde(skip_serializing)]
    pub api_key: String,
    /// Project identifier
    pub project_id: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Base URLs of the remote services
pub struct EndpointConfig {
    /// Base URL of the identity toolkit (sign-up / sign-in)
    pub identity_url: String,
    /// Base URL of the document database (runQuery)
    pub documents_url: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Transport policy of the HTTP client instance
pub struct HttpConfig {
    /// Proxy every request goes through, if any
    pub proxy: Option<String>,
    /// Skip TLS certificate validation for this client
    pub accept_invalid_certs: bool,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration, built once at startup and shared read-only
pub struct Config {
    /// Project credentials
    pub credentials: ProjectCredentials,
    /// Remote endpoints
    pub endpoints: EndpointConfig,
    /// HTTP client policy
    pub http: HttpConfig,
    /// Seconds between two polls in monitor mode
    pub monitor_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment and an optional `.env` file
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_or_default("FIRESTORE_API_KEY", String::from("default_api_key"));
        let project_id =
            get_env_or_default("FIRESTORE_PROJECT_ID", String::from("default_project_id"));

        if api_key == "default_api_key" {
            error!("FIRESTORE_API_KEY not found in environment variables or .env file");
        }
        if project_id == "default_project_id" {
            error!("FIRESTORE_PROJECT_ID not found in environment variables or .env file");
        }

        Config {
            credentials: ProjectCredentials {
                api_key,
                project_id,
            },
            endpoints: EndpointConfig {
                identity_url: get_env_or_default(
                    "FIRESTORE_IDENTITY_URL",
                    String::from(DEFAULT_IDENTITY_URL),
                ),
                documents_url: get_env_or_default(
                    "FIRESTORE_DOCUMENTS_URL",
                    String::from(DEFAULT_DOCUMENTS_URL),
                ),
            },
            http: HttpConfig {
                proxy: get_env_or_none("FIRESTORE_PROXY"),
                accept_invalid_certs: get_env_flag("FIRESTORE_ACCEPT_INVALID_CERTS", false),
            },
            monitor_interval_secs: get_env_or_default(
                "FIRESTORE_MONITOR_INTERVAL_SECS",
                DEFAULT_MONITOR_INTERVAL_SECS,
            ),
        }
    }

    /// URL of the anonymous sign-up endpoint
    pub fn sign_up_url(&self) -> String {
        format!(
            "{}/v1/accounts:signUp?key={}",
            self.endpoints.identity_url.trim_end_matches('/'),
            self.credentials.api_key
        )
    }

    /// URL of the email/password sign-in endpoint
    pub fn sign_in_with_password_url(&self) -> String {
        format!(
            "{}/v1/accounts:signInWithPassword?key={}",
            self.endpoints.identity_url.trim_end_matches('/'),
            self.credentials.api_key
        )
    }

    /// URL of the structured query endpoint of the default database
    pub fn run_query_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents:runQuery?key={}",
            self.endpoints.documents_url.trim_end_matches('/'),
            self.credentials.project_id,
            self.credentials.api_key
        )
    }

    /// Delay between two polls in monitor mode
    pub fn monitor_interval(&self) -> Duration {
        Duration::from_secs(self.monitor_interval_secs)
    }
}
