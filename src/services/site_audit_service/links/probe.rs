use crate::models::app::MAX_LINK_CONCURRENCY;
use crate::utils::resolve_link;
use futures::future;
use futures::stream::{self, StreamExt};
use log::{debug, warn};
use reqwest::{Client, StatusCode, Url};

/// Count broken links among `hrefs`.
///
/// Each href is resolved against `page_url` and probed once with a HEAD
/// request (redirects followed). A link is broken when it cannot be resolved,
/// the request errors, or the final status is anything but 200.
/// With `concurrency <= 1` probes run one at a time in document order.
pub async fn probe_links(
    client: &Client,
    page_url: &str,
    hrefs: &[String],
    concurrency: usize,
) -> usize {
    let base = match Url::parse(page_url) {
        Ok(base) => base,
        Err(e) => {
            warn!("Cannot resolve links against {}: {}", page_url, e);
            return hrefs.len();
        }
    };
    let targets: Vec<Option<Url>> = hrefs
        .iter()
        .map(|href| resolve_link(&base, href))
        .collect();

    if concurrency <= 1 {
        let mut broken = 0;
        for target in &targets {
            if !link_is_alive(client, target.as_ref()).await {
                broken += 1;
            }
        }
        return broken;
    }

    stream::iter(targets.iter())
        .map(|target| link_is_alive(client, target.as_ref()))
        .buffer_unordered(concurrency.min(MAX_LINK_CONCURRENCY))
        .filter(|alive| future::ready(!*alive))
        .count()
        .await
}

async fn link_is_alive(client: &Client, target: Option<&Url>) -> bool {
    let Some(target) = target else {
        return false;
    };
    match client.head(target.clone()).send().await {
        Ok(response) if response.status() == StatusCode::OK => true,
        Ok(response) => {
            debug!("Broken link {} ({})", target, response.status());
            false
        }
        Err(e) => {
            debug!("Broken link {} ({})", target, e);
            false
        }
    }
}
