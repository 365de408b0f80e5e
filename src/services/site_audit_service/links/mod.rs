pub mod probe;

pub use probe::probe_links;
