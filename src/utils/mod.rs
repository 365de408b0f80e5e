pub mod file_utils;
pub mod log_utils;
pub mod url_utils;

pub use file_utils::{save_report_json, save_report_xlsx, ReportError};
pub use log_utils::init_logging;
pub use url_utils::{has_path_separator, is_https, is_internal, resolve_link};
