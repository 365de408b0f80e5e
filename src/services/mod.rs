pub mod site_audit_service;

pub use site_audit_service::{audit, build_client, AuditError};
