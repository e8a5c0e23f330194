//! File discovery and path filtering

use ignore::WalkBuilder;
use std::path::{Component, Path, PathBuf};

use super::RunError;
use crate::config::Config;

/// Path fragments that exclude a file or directory when they occur anywhere in
/// its root-relative path. Matching is plain substring matching, so `.git` also
/// excludes `.github`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    fragments: Vec<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fragments = fragments
            .into_iter()
            .map(|fragment| fragment.as_ref().trim().replace('\\', "/"))
            .filter(|fragment| !fragment.is_empty())
            .collect();
        Self { fragments }
    }

    /// The first fragment contained in `relative_path`, if any
    pub fn matching_fragment(&self, relative_path: &str) -> Option<&str> {
        self.fragments
            .iter()
            .find(|fragment| relative_path.contains(fragment.as_str()))
            .map(String::as_str)
    }

    pub fn matches(&self, relative_path: &str) -> bool {
        self.matching_fragment(relative_path).is_some()
    }
}

/// Decides which paths under the root are documents to process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFilter {
    exclusions: ExclusionSet,
    /// Lowercase, without the leading dot
    extensions: Vec<String>,
}

impl Default for PathFilter {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl PathFilter {
    pub fn new(exclusions: ExclusionSet, extensions: &[String]) -> Self {
        let extensions = extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { exclusions, extensions }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(ExclusionSet::new(&config.global.exclude), &config.global.extensions)
    }

    pub fn has_document_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
    }

    /// `relative_path` is relative to the traversal root
    pub fn is_excluded(&self, relative_path: &Path) -> bool {
        self.exclusions.matches(&normalize_relative(relative_path))
    }

    /// A document extension and no excluded fragment in the path
    pub fn is_eligible(&self, relative_path: &Path) -> bool {
        self.has_document_extension(relative_path) && !self.is_excluded(relative_path)
    }
}

/// Render a relative path with `/` separators, dropping `.` components
pub fn normalize_relative(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect();
    parts.join("/")
}

/// Find every eligible document under `root`, in file-name order.
///
/// Excluded directories are pruned during the walk, so nothing inside them is
/// ever opened. Only a failure to list the root itself is an error.
pub fn discover_files(root: &Path, filter: &PathFilter, respect_gitignore: bool) -> Result<Vec<PathBuf>, RunError> {
    std::fs::read_dir(root).map_err(|source| RunError::Traversal {
        path: root.display().to_string(),
        source,
    })?;

    let mut walk_builder = WalkBuilder::new(root);
    walk_builder.standard_filters(false);
    walk_builder.hidden(false); // Include hidden files and directories
    walk_builder.git_ignore(respect_gitignore);
    walk_builder.git_exclude(respect_gitignore);
    walk_builder.ignore(respect_gitignore);
    walk_builder.require_git(false); // Process git ignores even if no repo detected
    walk_builder.follow_links(false);
    walk_builder.sort_by_file_name(|a, b| a.cmp(b));

    let prune_root = root.to_path_buf();
    let prune_filter = filter.clone();
    walk_builder.filter_entry(move |entry| match entry.path().strip_prefix(&prune_root) {
        Ok(relative) if !relative.as_os_str().is_empty() => {
            let excluded = prune_filter.is_excluded(relative);
            if excluded {
                log::debug!("[mdtidy] Excluded: {}", normalize_relative(relative));
            }
            !excluded
        }
        _ => true,
    });

    let mut files = Vec::new();
    for result in walk_builder.build() {
        match result {
            Ok(entry) => {
                let is_file = entry.file_type().is_some_and(|file_type| file_type.is_file());
                if is_file && filter.has_document_extension(entry.path()) {
                    files.push(entry.into_path());
                }
            }
            Err(err) => {
                log::warn!("[WARN] Error walking directory: {err}");
            }
        }
    }

    log::debug!("[mdtidy] Discovered {} documents under {}", files.len(), root.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn relative_names(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|file| normalize_relative(file.strip_prefix(root).unwrap()))
            .collect()
    }

    #[test]
    fn test_default_exclusions() {
        let filter = PathFilter::default();
        assert!(filter.is_eligible(Path::new("docs/guide.md")));
        assert!(filter.is_eligible(Path::new("README.MD")));
        assert!(!filter.is_eligible(Path::new("node_modules/pkg/README.md")));
        assert!(!filter.is_eligible(Path::new(".git/info.md")));
        assert!(!filter.is_eligible(Path::new(".github/proposed/a.md")));
        assert!(!filter.is_eligible(Path::new("dev/Lib/site.md")));
        assert!(!filter.is_eligible(Path::new("venv/lib/site-packages/x/README.md")));
        assert!(!filter.is_eligible(Path::new("notes.txt")));
    }

    #[test]
    fn test_exclusion_is_substring_based() {
        let exclusions = ExclusionSet::new(["build"]);
        assert!(exclusions.matches("rebuild-notes.md"));
        assert_eq!(exclusions.matching_fragment("a/build/x.md"), Some("build"));
        assert!(!exclusions.matches("docs/bui.md"));
    }

    #[test]
    fn test_exclusion_matches_windows_style_fragments() {
        let filter = PathFilter::new(ExclusionSet::new(["dev\\Lib"]), &["md".to_string()]);
        assert!(filter.is_excluded(Path::new("dev/Lib/x.md")));
    }

    #[test]
    fn test_custom_extensions() {
        let filter = PathFilter::new(ExclusionSet::default(), &[".markdown".to_string(), "md".to_string()]);
        assert!(filter.is_eligible(Path::new("a.markdown")));
        assert!(filter.is_eligible(Path::new("a.md")));
        assert!(!filter.is_eligible(Path::new("a.mdx")));
        assert!(!filter.is_eligible(Path::new("md")));
    }

    #[test]
    fn test_normalize_relative() {
        assert_eq!(normalize_relative(Path::new("./a/b.md")), "a/b.md");
        assert_eq!(normalize_relative(Path::new("a/./b.md")), "a/b.md");
    }

    #[test]
    fn test_discover_files_prunes_and_sorts() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("docs/sub")).unwrap();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::create_dir_all(root.join(".github/proposed")).unwrap();
        fs::write(root.join("b.md"), "b").unwrap();
        fs::write(root.join("a.md"), "a").unwrap();
        fs::write(root.join("docs/sub/c.md"), "c").unwrap();
        fs::write(root.join("docs/notes.txt"), "txt").unwrap();
        fs::write(root.join("node_modules/pkg/README.md"), "x").unwrap();
        fs::write(root.join(".github/proposed/a.md"), "x").unwrap();

        let files = discover_files(root, &PathFilter::default(), false).unwrap();
        assert_eq!(relative_names(root, &files), vec!["a.md", "b.md", "docs/sub/c.md"]);
    }

    #[test]
    fn test_gitignore_respected_when_enabled() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::write(root.join(".gitignore"), "ignored.md\n").unwrap();
        fs::write(root.join("ignored.md"), "x").unwrap();
        fs::write(root.join("kept.md"), "x").unwrap();

        let filter = PathFilter::default();
        let all = discover_files(root, &filter, false).unwrap();
        assert_eq!(relative_names(root, &all), vec!["ignored.md", "kept.md"]);

        let respected = discover_files(root, &filter, true).unwrap();
        assert_eq!(relative_names(root, &respected), vec!["kept.md"]);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let err = discover_files(&temp_dir.path().join("nope"), &PathFilter::default(), false).unwrap_err();
        assert!(matches!(err, RunError::Traversal { .. }));
    }
}
