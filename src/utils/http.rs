use crate::error::{Error, Result};
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, warn};

pub fn create_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
    let client = ClientBuilder::new()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .pool_max_idle_per_host(6)
        .build()?;

    Ok(client)
}

/// POST a JSON body with bounded exponential backoff. Retries both transport
/// errors and non-success statuses.
pub async fn post_json_with_retry<T: Serialize + ?Sized>(
    client: &Client,
    url: &str,
    body: &T,
    max_retries: u32,
) -> Result<Response> {
    let mut attempts = 0;
    let mut last_error: Option<Error> = None;

    while attempts < max_retries {
        match client.post(url).json(body).send().await {
            Ok(response) => {
                if response.status().is_success() {
                    return Ok(response);
                }
                let status = response.status();
                warn!("HTTP error {}: {}", status, url);
                last_error = Some(Error::Endpoint(format!("HTTP error: {status}")));
            }
            Err(e) => {
                error!("Request failed for {}: {}", url, e);
                last_error = Some(e.into());
            }
        }

        attempts += 1;
        if attempts < max_retries {
            let delay = Duration::from_secs(2u64.pow(attempts));
            warn!(
                "Retrying in {:?}... (attempt {}/{})",
                delay,
                attempts + 1,
                max_retries
            );
            sleep(delay).await;
        }
    }

    Err(last_error
        .unwrap_or_else(|| Error::Endpoint(format!("failed to reach {url}: no attempts made"))))
}
