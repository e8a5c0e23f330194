//! Default text output formatter

use crate::file_processor::{RunMode, RunReport};
use crate::output::ReportFormatter;
use colored::*;

/// Human-readable formatter, optionally colored
pub struct TextFormatter {
    use_colors: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    fn header(&self, report: &RunReport) -> String {
        let mut header = match report.mode {
            RunMode::InPlace => "Patched files:".to_string(),
            RunMode::Proposed => format!(
                "Proposed files created under {}:",
                report.output_dir.as_deref().unwrap_or_default()
            ),
        };
        if report.dry_run {
            header.push_str(" (dry run)");
        }

        if self.use_colors {
            header.green().bold().to_string()
        } else {
            header
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format_report(&self, report: &RunReport) -> String {
        if report.is_empty() {
            let message = "No files changed";
            return if self.use_colors {
                format!("{}\n", message.dimmed())
            } else {
                format!("{message}\n")
            };
        }

        let mut output = self.header(report);
        output.push('\n');
        for path in &report.paths {
            output.push_str(" - ");
            if self.use_colors {
                output.push_str(&path.blue().to_string());
            } else {
                output.push_str(path);
            }
            output.push('\n');
        }
        output
    }

    fn use_colors(&self) -> bool {
        self.use_colors
    }
}
