// src/services/site_audit_service/mod.rs

pub mod audit;
pub mod compute;
pub mod error;
pub mod links;
pub mod page;

pub use audit::audit;
pub use compute::evaluate;
pub use error::AuditError;
pub use links::probe_links;
pub use page::{build_client, extract_signals, fetch_page, FetchedPage, PageSignals};
