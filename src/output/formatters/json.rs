//! JSON output formatter

use crate::file_processor::RunReport;
use crate::output::ReportFormatter;

/// JSON formatter for machine-readable output
#[derive(Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_report(&self, report: &RunReport) -> String {
        let mut output = serde_json::to_string_pretty(report).unwrap_or_default();
        output.push('\n');
        output
    }
}
