use serde::{Deserialize, Serialize};
use std::fmt;

// Outcome of a single check
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    #[serde(rename = "Optimal")]
    Optimal,
    #[serde(rename = "Not Optimal")]
    NotOptimal,
}

impl Status {
    pub fn from_flag(optimal: bool) -> Self {
        if optimal {
            Status::Optimal
        } else {
            Status::NotOptimal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Optimal => "Optimal",
            Status::NotOptimal => "Not Optimal",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
