use crate::models::seo::row::ReportRow;
use chrono::Utc;
use serde::Serialize;

pub const REPORT_HEADERS: [&str; 4] = ["Parameter", "Value", "Additional Info", "Optimization Status"];

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub url: String,
    pub generated_at: String,
    pub rows: Vec<ReportRow>,
}

impl AuditReport {
    /// Report for an audit whose page fetch failed: a single `Error` row.
    pub fn failed(url: &str, message: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            rows: vec![ReportRow::error(message)],
        }
    }

    /// Report for a completed audit. The summary row is appended after `checks`.
    pub fn completed(url: &str, mut checks: Vec<ReportRow>) -> Self {
        let summary = summary_line(&checks);
        checks.push(ReportRow::summary(summary));
        Self {
            url: url.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            rows: checks,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.rows.as_slice(), [only] if only.parameter == "Error")
    }

    // Check rows only, without the trailing summary
    pub fn checks(&self) -> &[ReportRow] {
        if self.is_error() {
            return &[];
        }
        match self.rows.split_last() {
            Some((_, checks)) => checks,
            None => &[],
        }
    }

    pub fn summary(&self) -> Option<&ReportRow> {
        self.rows.last().filter(|row| row.parameter == "Summary")
    }
}

pub fn summary_line(checks: &[ReportRow]) -> String {
    let total = checks.len();
    let optimal = checks.iter().filter(|row| row.is_optimal()).count();
    let percentage = if total == 0 {
        0.0
    } else {
        optimal as f64 / total as f64 * 100.0
    };
    format!(
        "Optimal Parameters: {}/{} ({:.2}%)",
        optimal, total, percentage
    )
}
