pub mod params;
pub mod report;
pub mod row;
pub mod status;

pub use params::{OptimalParams, Rule};
pub use report::{summary_line, AuditReport, REPORT_HEADERS};
pub use row::{CellValue, ReportRow};
pub use status::Status;
