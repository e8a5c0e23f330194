use mdtidy_lib::annotations::AnnotationTable;
use mdtidy_lib::config::Config;
use mdtidy_lib::file_processor::{DiskStore, FileStore, RunMode, Runner};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Disk access that remembers every path it was asked to read or write
#[derive(Default)]
struct TrackingStore {
    reads: RefCell<Vec<PathBuf>>,
    writes: RefCell<Vec<PathBuf>>,
}

impl FileStore for TrackingStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.reads.borrow_mut().push(path.to_path_buf());
        DiskStore.read(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.writes.borrow_mut().push(path.to_path_buf());
        DiskStore.write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        DiskStore.create_dir_all(path)
    }

    fn exists(&self, path: &Path) -> bool {
        DiskStore.exists(path)
    }
}

fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_excluded_files_are_never_read() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    write_file(root, "README.md", "# Readme\nText\n");
    write_file(root, "node_modules/pkg/README.md", "# Pkg\nText\n");
    write_file(root, ".git/notes.md", "# Notes\nText\n");
    write_file(root, "venv/lib/site-packages/x/README.md", "# X\nText\n");
    write_file(root, "dev/Lib/y.md", "# Y\nText\n");
    write_file(root, ".github/proposed/README.md", "# Old\nText\n");

    let config = Config::default();
    let runner = Runner::with_store(&config, TrackingStore::default());
    let report = runner.run(root, RunMode::InPlace, None).unwrap();

    assert_eq!(report.paths, vec!["README.md"]);
    assert_eq!(*runner.store().reads.borrow(), vec![root.join("README.md")]);
    assert_eq!(*runner.store().writes.borrow(), vec![root.join("README.md")]);
    assert_eq!(fs::read_to_string(root.join("node_modules/pkg/README.md")).unwrap(), "# Pkg\nText\n");
}

#[test]
fn test_unchanged_files_are_not_written() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    write_file(root, "clean.md", "# Clean\n\nNothing to do.\n");
    write_file(root, "docs/also_clean.md", "# Also Clean\n\n- a\n- b\n");

    let config = Config::default();
    let runner = Runner::with_store(&config, TrackingStore::default());
    let report = runner.run(root, RunMode::InPlace, None).unwrap();

    assert!(report.is_empty());
    assert_eq!(runner.store().reads.borrow().len(), 2);
    assert!(runner.store().writes.borrow().is_empty());
}

#[test]
fn test_in_place_is_idempotent_across_runs() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    write_file(
        root,
        "guide.md",
        "**Intro:**\nSee https://example.com.\n* one\n* two\n\n\n\n    cargo build\n",
    );

    let config = Config::default();
    let first = Runner::new(&config).run(root, RunMode::InPlace, None).unwrap();
    assert_eq!(first.paths, vec!["guide.md"]);
    assert_eq!(
        fs::read_to_string(root.join("guide.md")).unwrap(),
        "# Intro\n\nSee <https://example.com>.\n\n- one\n- two\n\n```text\ncargo build\n```\n"
    );

    let second = Runner::new(&config).run(root, RunMode::InPlace, None).unwrap();
    assert!(second.is_empty());
}

#[test]
fn test_title_inserted_from_relative_path() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    write_file(root, "docs/getting-started.md", "Install it first.\n");

    let config = Config::default();
    let report = Runner::new(&config).run(root, RunMode::InPlace, None).unwrap();

    assert_eq!(report.paths, vec!["docs/getting-started.md"]);
    assert_eq!(
        fs::read_to_string(root.join("docs/getting-started.md")).unwrap(),
        "# Getting Started\n\nInstall it first.\n"
    );
}

#[test]
fn test_proposed_mirrors_annotated_paths() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    let original = "# Example\n\n```\nprint(1)\n```\n\n    x = 2\n";
    write_file(root, "a/b.md", original);
    write_file(root, "a/untouched.md", "# Untouched\nText\n");

    let table = AnnotationTable::from_toml_str("\"a/b.md\" = \"python\"\n", "annotations.toml").unwrap();
    let config = Config::default();
    let report = Runner::new(&config).run(root, RunMode::Proposed, Some(&table)).unwrap();

    assert_eq!(report.paths, vec![".github/proposed/a/b.md"]);
    assert_eq!(fs::read_to_string(root.join("a/b.md")).unwrap(), original);
    assert_eq!(
        fs::read_to_string(root.join(".github/proposed/a/b.md")).unwrap(),
        "# Example\n\n```python\nprint(1)\n```\n\n```python\nx = 2\n```\n"
    );
    assert!(!root.join(".github/proposed/a/untouched.md").exists());
    assert_eq!(fs::read_to_string(root.join("a/untouched.md")).unwrap(), "# Untouched\nText\n");
}

#[test]
fn test_proposed_reports_missing_entries_and_keeps_order() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    write_file(root, "z.md", "# Z\n");
    write_file(root, "m/n.md", "# N\n");

    let table = AnnotationTable::from_toml_str(
        "\"z.md\" = \"bash\"\n\"gone.md\" = \"rust\"\n\"m/n.md\" = \"go\"\n",
        "annotations.toml",
    )
    .unwrap();
    let config = Config::default();
    let report = Runner::new(&config).run(root, RunMode::Proposed, Some(&table)).unwrap();

    // Unchanged documents are still copied in proposed mode
    assert_eq!(report.paths, vec![".github/proposed/z.md", ".github/proposed/m/n.md"]);
    assert_eq!(report.missing, vec!["gone.md"]);
    assert_eq!(fs::read_to_string(root.join(".github/proposed/z.md")).unwrap(), "# Z\n");
}

#[test]
fn test_proposed_dry_run_creates_nothing() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    write_file(root, "a.md", "# A\n");

    let table = AnnotationTable::from_toml_str("\"a.md\" = \"bash\"\n", "annotations.toml").unwrap();
    let config = Config::default();
    let report = Runner::new(&config)
        .dry_run(true)
        .run(root, RunMode::Proposed, Some(&table))
        .unwrap();

    assert_eq!(report.paths, vec![".github/proposed/a.md"]);
    assert!(!root.join(".github").exists());
}

#[test]
fn test_custom_proposed_dir_and_extensions() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    write_file(root, "notes.markdown", "# Notes\nText\n");
    write_file(root, "skip.md", "# Skip\nText\n");

    let config = Config::from_toml_str(
        "[global]\nextensions = [\"markdown\"]\nproposed-dir = \"out/review\"\n\n[annotations]\n\"notes.markdown\" = \"text\"\n",
        "test",
    )
    .unwrap();

    let in_place = Runner::new(&config).dry_run(true).run(root, RunMode::InPlace, None).unwrap();
    assert_eq!(in_place.paths, vec!["notes.markdown"]);

    let proposed = Runner::new(&config).run(root, RunMode::Proposed, None).unwrap();
    assert_eq!(proposed.paths, vec!["out/review/notes.markdown"]);
    assert_eq!(
        fs::read_to_string(root.join("out/review/notes.markdown")).unwrap(),
        "# Notes\n\nText\n"
    );
}
