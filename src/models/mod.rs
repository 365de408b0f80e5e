// src/models/mod.rs

pub mod api;
pub mod app;
pub mod seo;

pub use api::ParamsRunAudit;
pub use app::{AuditOptions, AuditSettings, SettingsError};
pub use seo::{AuditReport, CellValue, OptimalParams, ReportRow, Rule, Status};
