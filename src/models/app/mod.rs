pub mod settings;

pub use settings::{AuditOptions, AuditSettings, SettingsError, MAX_LINK_CONCURRENCY};
