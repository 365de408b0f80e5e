use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use log::info;
use seoaudit::models::{AuditSettings, ParamsRunAudit};
use seoaudit::services::{audit, build_client};
use seoaudit::utils::{init_logging, save_report_json, save_report_xlsx};

#[tokio::main]
async fn main() -> Result<()> {
    // .env first so clap sees the SEO_AUDIT_* fallbacks
    dotenv().ok();

    let params = ParamsRunAudit::parse();
    let settings = AuditSettings::try_from(params).context("Invalid configuration")?;
    init_logging(settings.log_level, settings.log_file.as_deref())?;

    let client = build_client(settings.timeout).context("Failed to build HTTP client")?;
    let report = audit(&client, &settings.url, &settings.options).await;

    save_report_xlsx(&settings.output, &report)?;
    if let Some(json_path) = &settings.json_output {
        save_report_json(json_path, &report)?;
        info!("JSON report saved to {}", json_path.display());
    }

    println!("SEO report saved to {}", settings.output.display());
    Ok(())
}
