use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_URL: &str = "https://oesparaguay.com/";
pub const DEFAULT_OUTPUT: &str = "seo_report.xlsx";

#[derive(Debug, Parser)]
#[command(name = "seoaudit", version)]
#[command(about = "Audit the on-page SEO signals of a single web page")]
pub struct ParamsRunAudit {
    /// Absolute http(s) URL of the page to audit
    #[arg(env = "SEO_AUDIT_URL", default_value = DEFAULT_URL)]
    pub url: String,
    #[arg(short, long, env = "SEO_AUDIT_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
    /// Also write the report as JSON to this path
    #[arg(long, env = "SEO_AUDIT_JSON")]
    pub json: Option<PathBuf>,
    /// Maximum number of link probes in flight (1 probes strictly in order)
    #[arg(long, env = "SEO_AUDIT_LINK_CONCURRENCY", default_value_t = 1)]
    pub link_concurrency: usize,
    #[arg(long, env = "SEO_AUDIT_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
    #[arg(long, env = "SEO_AUDIT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "SEO_AUDIT_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}
