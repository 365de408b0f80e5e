use crate::models::app::AuditOptions;
use crate::models::seo::AuditReport;
use crate::services::site_audit_service::compute::evaluate;
use crate::services::site_audit_service::links::probe_links;
use crate::services::site_audit_service::page::{extract_signals, fetch_page};
use log::{debug, info, warn};
use reqwest::Client;

/// Audit a single page.
///
/// A failed page fetch yields a one-row error report; every other problem is
/// reported as a "Not Optimal" row.
pub async fn audit(client: &Client, url: &str, options: &AuditOptions) -> AuditReport {
    info!("Starting SEO audit for {}", url);

    let page = match fetch_page(client, url).await {
        Ok(page) => page,
        Err(e) => {
            warn!("Audit of {} aborted: {}", url, e);
            return AuditReport::failed(url, e.to_string());
        }
    };
    info!(
        "Fetched {} ({}) in {:.2} seconds",
        page.final_url,
        page.status,
        page.load_time.as_secs_f64()
    );

    let signals = extract_signals(&page.body);
    debug!(
        "Found {} links, {} images, {} characters of text",
        signals.hrefs.len(),
        signals.images_total,
        signals.visible_text.chars().count()
    );

    info!(
        "Checking {} links (concurrency {})",
        signals.hrefs.len(),
        options.link_concurrency
    );
    let broken_links = probe_links(client, url, &signals.hrefs, options.link_concurrency).await;
    if broken_links > 0 {
        warn!("{} broken links on {}", broken_links, url);
    }

    let checks = evaluate(&signals, url, page.load_time, broken_links, &options.params);
    let report = AuditReport::completed(url, checks);
    if let Some(summary) = report.summary() {
        info!("{}", summary.status);
    }
    report
}
