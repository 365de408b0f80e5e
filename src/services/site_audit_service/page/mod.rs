pub mod fetch;
pub mod signals;

pub use fetch::{build_client, fetch_page, FetchedPage};
pub use signals::{extract_signals, PageSignals};
