/// Utility functions for detecting YAML front matter at the top of a document
pub struct FrontMatterUtils;

impl FrontMatterUtils {
    /// Return the index of the closing delimiter line when `lines` starts with
    /// a complete `---` ... `---` (or `...`) front matter block.
    pub fn front_matter_end(lines: &[&str]) -> Option<usize> {
        let first = lines.first()?;
        if first.trim_end() != "---" {
            return None;
        }

        lines
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, line)| {
                let trimmed = line.trim_end();
                trimmed == "---" || trimmed == "..."
            })
            .map(|(i, _)| i)
    }
}
