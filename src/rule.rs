//!
//! This module defines the Rule trait and related types for implementing fixing rules in mdtidy.
//! Every rule is a pure, total `text -> text` rewrite; whether it changed anything is always
//! derived from comparing its input and output.

use dyn_clone::DynClone;

use crate::fix_context::FixContext;

/// Type of rule, used for grouping in `mdtidy rules`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    Heading,
    List,
    CodeBlock,
    Link,
    Whitespace,
}

impl RuleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::Heading => "heading",
            RuleCategory::List => "list",
            RuleCategory::CodeBlock => "code-block",
            RuleCategory::Link => "link",
            RuleCategory::Whitespace => "whitespace",
        }
    }
}

/// Result of running one rule over one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub content: String,
    pub changed: bool,
}

pub trait Rule: DynClone + Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn category(&self) -> RuleCategory;

    /// Rewrite the document. Must be idempotent: fixing the output again returns it unchanged.
    fn fix(&self, ctx: &FixContext) -> String;

    /// Quick content check that lets the pipeline skip the rule entirely
    fn should_skip(&self, _ctx: &FixContext) -> bool {
        false
    }

    /// Run the rule and report whether the text changed
    fn apply(&self, ctx: &FixContext) -> RuleOutcome {
        if self.should_skip(ctx) {
            return RuleOutcome {
                content: ctx.content.to_string(),
                changed: false,
            };
        }

        let content = self.fix(ctx);
        let changed = content != ctx.content;
        RuleOutcome { content, changed }
    }

    /// Factory: create a rule from config (if present), or use defaults.
    fn from_config(config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized;
}

// Implement the cloning logic for the Rule trait object
dyn_clone::clone_trait_object!(Rule);
