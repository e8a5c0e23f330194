pub mod code_fence_utils;
pub mod front_matter_utils;
pub mod heading_utils;
pub mod list_utils;

mod md004_unordered_list_style;
mod md012_no_multiple_blanks;
mod md022_blanks_around_headings;
mod md025_single_title;
mod md026_no_trailing_punctuation;
mod md029_ordered_list_prefix;
mod md031_blanks_around_fences;
mod md032_blanks_around_lists;
mod md034_no_bare_urls;
mod md036_no_emphasis_only_first;
mod md040_fenced_code_language;
mod md041_first_line_heading;
mod md046_code_block_style;
mod md047_single_trailing_newline;

pub use md004_unordered_list_style::MD004UnorderedListStyle;
pub use md012_no_multiple_blanks::{MD012Config, MD012NoMultipleBlanks};
pub use md022_blanks_around_headings::MD022BlanksAroundHeadings;
pub use md025_single_title::MD025SingleTitle;
pub use md026_no_trailing_punctuation::{MD026Config, MD026NoTrailingPunctuation};
pub use md029_ordered_list_prefix::MD029OrderedListPrefix;
pub use md031_blanks_around_fences::MD031BlanksAroundFences;
pub use md032_blanks_around_lists::MD032BlanksAroundLists;
pub use md034_no_bare_urls::MD034NoBareUrls;
pub use md036_no_emphasis_only_first::MD036NoEmphasisAsHeading;
pub use md040_fenced_code_language::{MD040Config, MD040FencedCodeLanguage};
pub use md041_first_line_heading::{MD041Config, MD041FirstLineHeading};
pub use md046_code_block_style::{MD046CodeBlockStyle, MD046Config};
pub use md047_single_trailing_newline::MD047SingleTrailingNewline;

use crate::rule::Rule;

/// Every rule in the order the pipeline applies them.
///
/// Content rewrites come first so the spacing rules see the final headings,
/// fences and list items, and the blank-line collapse and end-of-file trim run
/// after every rule that can insert blank lines.
pub fn all_rules(config: &crate::config::Config) -> Vec<Box<dyn Rule>> {
    macro_rules! rule {
        ($ctor:ident) => {
            $ctor::from_config(config)
        };
    }
    vec![
        rule!(MD046CodeBlockStyle),
        rule!(MD040FencedCodeLanguage),
        rule!(MD036NoEmphasisAsHeading),
        rule!(MD041FirstLineHeading),
        rule!(MD025SingleTitle),
        rule!(MD026NoTrailingPunctuation),
        rule!(MD004UnorderedListStyle),
        rule!(MD029OrderedListPrefix),
        rule!(MD034NoBareUrls),
        rule!(MD031BlanksAroundFences),
        rule!(MD022BlanksAroundHeadings),
        rule!(MD032BlanksAroundLists),
        rule!(MD012NoMultipleBlanks),
        rule!(MD047SingleTrailingNewline),
    ]
}

/// Names of all rules, in pipeline order
pub fn rule_names() -> Vec<&'static str> {
    all_rules(&crate::config::Config::default())
        .iter()
        .map(|rule| rule.name())
        .collect()
}
