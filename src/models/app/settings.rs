use crate::models::api::ParamsRunAudit;
use crate::models::seo::OptimalParams;
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

// Hard ceiling on simultaneous link probes against the audited site.
pub const MAX_LINK_CONCURRENCY: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("no URL to audit was given")]
    MissingUrl,

    #[error("link concurrency must be between 1 and {max}, got {value}")]
    InvalidConcurrency { value: usize, max: usize },

    #[error("timeout must be at least one second")]
    InvalidTimeout,

    #[error("unknown log level: {0}")]
    InvalidLogLevel(String),
}

/// Inputs of a single audit run.
#[derive(Debug, Clone)]
pub struct AuditOptions {
    pub params: OptimalParams,
    pub link_concurrency: usize,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            params: OptimalParams::default(),
            link_concurrency: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuditSettings {
    pub url: String,
    pub output: PathBuf,
    pub json_output: Option<PathBuf>,
    pub timeout: Option<Duration>,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
    pub options: AuditOptions,
}

impl TryFrom<ParamsRunAudit> for AuditSettings {
    type Error = SettingsError;

    fn try_from(params: ParamsRunAudit) -> Result<Self, Self::Error> {
        let url = params.url.trim().to_string();
        if url.is_empty() {
            return Err(SettingsError::MissingUrl);
        }

        if params.link_concurrency == 0 || params.link_concurrency > MAX_LINK_CONCURRENCY {
            return Err(SettingsError::InvalidConcurrency {
                value: params.link_concurrency,
                max: MAX_LINK_CONCURRENCY,
            });
        }

        let timeout = match params.timeout_secs {
            Some(0) => return Err(SettingsError::InvalidTimeout),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        let log_level = LevelFilter::from_str(&params.log_level)
            .map_err(|_| SettingsError::InvalidLogLevel(params.log_level.clone()))?;

        Ok(Self {
            url,
            output: params.output,
            json_output: params.json,
            timeout,
            log_level,
            log_file: params.log_file,
            options: AuditOptions {
                params: OptimalParams::default(),
                link_concurrency: params.link_concurrency,
            },
        })
    }
}
