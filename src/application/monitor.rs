use crate::error::AppError;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

/// Result of a monitoring session
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    /// First payload that differs from the baseline
    pub payload: Value,
    /// Number of polls made, including the one that saw the change
    pub polls: u64,
}

/// Polls `fetch` every `interval` until it returns a payload that differs from `baseline`
///
/// Payloads are compared structurally. The first error returned by `fetch`
/// ends monitoring and is propagated unchanged.
pub async fn monitor_until_changed<F, Fut>(
    interval: Duration,
    baseline: &Value,
    mut fetch: F,
) -> Result<Change, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Value, AppError>>,
{
    info!("Monitoring for changes every {}s", interval.as_secs());
    let mut polls = 0;

    loop {
        tokio::time::sleep(interval).await;
        polls += 1;

        let payload = fetch().await?;
        if payload != *baseline {
            info!("Change detected after {} poll(s)", polls);
            return Ok(Change { payload, polls });
        }
        debug!("Poll {}: no change", polls);
    }
}
