pub mod annotations;
pub mod config;
pub mod exit_codes;
pub mod file_processor;
pub mod fix_context;
pub mod output;
pub mod pipeline;
pub mod rule;
pub mod rule_config_serde;
pub mod rules;
pub mod utils;

pub use annotations::AnnotationTable;
pub use config::Config;
pub use file_processor::{RunError, RunMode, RunReport, Runner};
pub use fix_context::FixOptions;
pub use pipeline::{FixOutcome, Pipeline};
pub use rules::*;

/// Normalize one document with the default rule set.
///
/// `file_name` enables title insertion and `language` tags code blocks,
/// as in proposed mode.
pub fn normalize(content: &str, file_name: Option<&str>, language: Option<&str>) -> FixOutcome {
    let options = FixOptions {
        language,
        file_name,
    };
    Pipeline::default().apply(content, options)
}
