// Common utilities for integration tests

use firestore_peek::application::config::{Config, EndpointConfig, HttpConfig, ProjectCredentials};
use mockito::Matcher;
use std::sync::Arc;

pub const API_KEY: &str = "test-api-key";
pub const PROJECT_ID: &str = "test-project";
pub const REFERER: &str = "https://app.example.com/";
pub const SIGN_UP_PATH: &str = "/v1/accounts:signUp";
pub const SIGN_IN_PATH: &str = "/v1/accounts:signInWithPassword";
pub const RUN_QUERY_PATH: &str = "/v1/projects/test-project/databases/(default)/documents:runQuery";

/// Configuration pointing both services at a mock server
pub fn test_config(server_url: &str) -> Arc<Config> {
    Arc::new(Config {
        credentials: ProjectCredentials {
            api_key: API_KEY.to_string(),
            project_id: PROJECT_ID.to_string(),
        },
        endpoints: EndpointConfig {
            identity_url: server_url.to_string(),
            documents_url: server_url.to_string(),
        },
        http: HttpConfig::default(),
        monitor_interval_secs: 0,
    })
}

/// Matches the `?key=` parameter every endpoint receives
pub fn key_param() -> Matcher {
    Matcher::UrlEncoded("key".into(), API_KEY.into())
}

/// Sign-in response body carrying `token`
pub fn sign_in_body(token: &str) -> String {
    serde_json::json!({
        "idToken": token,
        "refreshToken": format!("refresh-{token}"),
        "expiresIn": "3600",
        "localId": format!("uid-{token}")
    })
    .to_string()
}

/// Error array body as returned by `runQuery`
pub fn query_error_body(code: u16, status: &str) -> String {
    serde_json::json!([{
        "error": {"code": code, "message": "rejected", "status": status}
    }])
    .to_string()
}

/// A typical successful `runQuery` payload
pub fn documents_payload() -> serde_json::Value {
    serde_json::json!([
        {
            "document": {
                "name": "projects/test-project/databases/(default)/documents/messages/1",
                "fields": {"text": {"stringValue": "hello"}},
                "createTime": "2026-10-14T09:00:00Z",
                "updateTime": "2026-10-14T09:00:00Z"
            },
            "readTime": "2026-10-14T10:00:00Z"
        }
    ])
}
