//! Output formatting for run reports
//!
//! A report is rendered either as human-readable text or as JSON.

use crate::file_processor::RunReport;
use std::io::{self, Write};

pub mod formatters;

pub use formatters::*;

/// Trait for report formatters
pub trait ReportFormatter {
    /// Render the whole report, including a trailing newline
    fn format_report(&self, report: &RunReport) -> String;

    /// Whether this formatter should use colors
    fn use_colors(&self) -> bool {
        false
    }
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable list of touched files
    #[default]
    Text,
    /// The report as a JSON object
    Json,
}

impl OutputFormat {
    /// Create a formatter instance for this format
    pub fn create_formatter(&self, use_colors: bool) -> Box<dyn ReportFormatter> {
        match self {
            OutputFormat::Text if use_colors => Box::new(TextFormatter::new()),
            OutputFormat::Text => Box::new(TextFormatter::without_colors()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

/// Writes rendered output to stdout unless silenced
pub struct OutputWriter {
    quiet: bool,
}

impl OutputWriter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn write(&self, content: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()
    }
}
