pub mod checks;
pub mod density;

pub use checks::evaluate;
pub use density::{contains_keyword, keyword_density, KeywordDensity};
