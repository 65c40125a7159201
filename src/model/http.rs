/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::config::HttpConfig;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::{Client, Proxy, Response};
use serde::Serialize;
use tracing::{debug, warn};

/// Builds the HTTP client shared by every call of a run
///
/// The proxy and certificate policy apply to this client instance only. With
/// no proxy configured, proxies from the environment are ignored as well so
/// that requests go exactly where the configuration says.
pub fn build_http_client(config: &HttpConfig) -> Result<Client, AppError> {
    let mut builder = Client::builder().user_agent(USER_AGENT);

    builder = match &config.proxy {
        Some(proxy) => {
            debug!("Routing requests through proxy {}", proxy);
            builder.proxy(Proxy::all(proxy.as_str())?)
        }
        None => builder.no_proxy(),
    };

    if config.accept_invalid_certs {
        warn!("TLS certificate validation is disabled for this client");
        builder = builder.danger_accept_invalid_certs(true);
    }

    Ok(builder.build()?)
}

/// Sends a single JSON POST request and returns the raw response
///
/// The body sets `Content-Type: application/json`; `headers` adds the rest.
///
/// No retry is attempted and the status is not inspected: every endpoint
/// interprets failures differently, so that is left to the caller.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Request body, serialized to JSON
pub async fn post_json<B: Serialize + ?Sized>(
    client: &Client,
    url: &str,
    headers: Vec<(&str, &str)>,
    body: &B,
) -> Result<Response, AppError> {
    debug!("POST {}", redact_key(url));

    let mut request = client.post(url).json(body);
    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    let response = request.send().await?;
    debug!("Response status: {}", response.status());
    Ok(response)
}

/// Reads the body of a failed response for logging
///
/// # Returns
/// * `Some(String)` - The body text
/// * `None` - If the body could not be read; the read error is logged at debug level
pub async fn read_error_body(response: Response) -> Option<String> {
    match response.text().await {
        Ok(text) => Some(text),
        Err(e) => {
            debug!("Failed to read error response body: {}", e);
            None
        }
    }
}

/// Strips the `key` query parameter from a URL before it is logged
pub fn redact_key(url: &str) -> String {
    match url.split_once("?key=") {
        Some((base, _)) => format!("{base}?key=***"),
        None => url.to_string(),
    }
}
