use crate::models::seo::status::Status;
use serde::Serialize;
use std::fmt;

/// A printable spreadsheet cell. `Empty` stands for a blank cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Bool(bool),
    Int(i64),
    Empty,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => write!(f, "{}", text),
            CellValue::Bool(flag) => write!(f, "{}", flag),
            CellValue::Int(n) => write!(f, "{}", n),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::Int(value as i64)
    }
}

impl From<Status> for CellValue {
    fn from(value: Status) -> Self {
        CellValue::Text(value.as_str().to_string())
    }
}

// One line of the report: parameter, observed value, additional info, status
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub parameter: String,
    pub value: CellValue,
    pub extra: CellValue,
    pub status: String,
}

impl ReportRow {
    pub fn check(
        parameter: &str,
        value: impl Into<CellValue>,
        extra: impl Into<CellValue>,
        status: Status,
    ) -> Self {
        Self {
            parameter: parameter.to_string(),
            value: value.into(),
            extra: extra.into(),
            status: status.as_str().to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            parameter: "Error".to_string(),
            value: CellValue::Text(message.into()),
            extra: CellValue::Empty,
            status: String::new(),
        }
    }

    pub fn summary(status: String) -> Self {
        Self {
            parameter: "Summary".to_string(),
            value: CellValue::Empty,
            extra: CellValue::Empty,
            status,
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.status == Status::Optimal.as_str()
    }
}
