use crate::services::site_audit_service::error::AuditError;
use log::debug;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub final_url: String,
    pub status: StatusCode,
    pub body: String,
    pub load_time: Duration,
}

pub fn build_client(timeout: Option<Duration>) -> Result<Client, reqwest::Error> {
    let mut builder =
        Client::builder().user_agent(concat!("seoaudit/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// GET `url` and read the whole body. `load_time` covers the request, the
/// status check and the body download.
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, AuditError> {
    let started = Instant::now();
    let response = client.get(url).send().await?;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(AuditError::Status {
            status,
            url: response.url().to_string(),
        });
    }

    let final_url = response.url().to_string();
    let body = response.text().await?;
    let load_time = started.elapsed();
    debug!(
        "GET {} -> {} ({} bytes, {:.3}s)",
        url,
        status,
        body.len(),
        load_time.as_secs_f64()
    );

    Ok(FetchedPage {
        final_url,
        status,
        body,
        load_time,
    })
}
