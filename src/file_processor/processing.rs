//! Running the pipeline over a tree of documents and writing the results.

use serde::Serialize;
use std::fmt;
use std::io;
use std::path::{Component, Path, PathBuf};

use super::discovery::{PathFilter, discover_files, normalize_relative};
use crate::annotations::AnnotationTable;
use crate::config::Config;
use crate::fix_context::FixOptions;
use crate::pipeline::Pipeline;

/// File access used by the runner
pub trait FileStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
    fn exists(&self, path: &Path) -> bool;
}

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStore;

impl FileStore for DiskStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunMode {
    /// Rewrite documents where they are
    InPlace,
    /// Write normalized copies of annotated documents under the proposed directory
    Proposed,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::InPlace => write!(f, "in-place"),
            RunMode::Proposed => write!(f, "proposed"),
        }
    }
}

/// One document as it moves through a run
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub absolute_path: PathBuf,
    pub relative_path: String,
    pub original_text: String,
    pub final_text: String,
}

impl FileRecord {
    /// Byte-for-byte comparison of the pipeline output with what was read
    pub fn changed(&self) -> bool {
        self.final_text != self.original_text
    }
}

/// What a run touched, in processing order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub mode: RunMode,
    pub dry_run: bool,
    /// Root-relative paths written (or that would be written in a dry run)
    pub paths: Vec<String>,
    /// Annotated paths with no source document (proposed mode)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
    /// Directory proposed output goes to, relative to the root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
}

impl RunReport {
    pub fn new(mode: RunMode, dry_run: bool) -> Self {
        Self {
            mode,
            dry_run,
            paths: Vec::new(),
            missing: Vec::new(),
            output_dir: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The traversal root could not be listed
    #[error("Failed to read directory {path}: {source}")]
    Traversal { path: String, source: io::Error },

    /// `proposed-dir` is empty, absolute, or climbs out of the root
    #[error("Proposed directory {dir:?} must be a relative path inside the root")]
    ProposedDirOutsideRoot { dir: String },
}

pub struct Runner<'a, S: FileStore = DiskStore> {
    config: &'a Config,
    pipeline: Pipeline,
    filter: PathFilter,
    store: S,
    dry_run: bool,
}

impl<'a> Runner<'a, DiskStore> {
    pub fn new(config: &'a Config) -> Self {
        Self::with_store(config, DiskStore)
    }
}

impl<'a, S: FileStore> Runner<'a, S> {
    pub fn with_store(config: &'a Config, store: S) -> Self {
        Self {
            config,
            pipeline: Pipeline::from_config(config, &[]),
            filter: PathFilter::from_config(config),
            store,
            dry_run: false,
        }
    }

    pub fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Compute the report without writing anything
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Process `root` in the given mode.
    ///
    /// Proposed mode uses `annotations` when given, otherwise the config's
    /// `[annotations]` table.
    pub fn run(&self, root: &Path, mode: RunMode, annotations: Option<&AnnotationTable>) -> Result<RunReport, RunError> {
        let mut report = RunReport::new(mode, self.dry_run);

        match mode {
            RunMode::InPlace => self.run_in_place(root, &mut report)?,
            RunMode::Proposed => {
                let from_config;
                let table = match annotations {
                    Some(table) => table,
                    None => {
                        from_config = AnnotationTable::from(self.config.annotations.clone());
                        &from_config
                    }
                };
                self.run_proposed(root, table, &mut report)?;
            }
        }

        log::debug!("[mdtidy] {mode} run finished: {} files", report.len());
        Ok(report)
    }

    fn run_in_place(&self, root: &Path, report: &mut RunReport) -> Result<(), RunError> {
        let files = discover_files(root, &self.filter, self.config.global.respect_gitignore)?;

        for path in files {
            let relative_path = normalize_relative(path.strip_prefix(root).unwrap_or(&path));
            let Some(record) = self.process(path, relative_path, None) else {
                continue;
            };
            if !record.changed() {
                continue;
            }

            if !self.dry_run
                && let Err(err) = self.store.write(&record.absolute_path, &record.final_text)
            {
                log::warn!("[WARN] Failed to write {}: {err}", record.relative_path);
                continue;
            }
            log::debug!("[mdtidy] Patched {}", record.relative_path);
            report.paths.push(record.relative_path);
        }

        Ok(())
    }

    fn run_proposed(&self, root: &Path, table: &AnnotationTable, report: &mut RunReport) -> Result<(), RunError> {
        std::fs::read_dir(root).map_err(|source| RunError::Traversal {
            path: root.display().to_string(),
            source,
        })?;

        let proposed_dir = Path::new(&self.config.global.proposed_dir);
        if !is_contained(proposed_dir) || normalize_relative(proposed_dir).is_empty() {
            return Err(RunError::ProposedDirOutsideRoot {
                dir: self.config.global.proposed_dir.clone(),
            });
        }
        report.output_dir = Some(normalize_relative(proposed_dir));

        for (relative_path, language) in table.iter() {
            if !is_contained(Path::new(relative_path)) {
                log::warn!("[WARN] SKIP (outside root): {relative_path}");
                continue;
            }

            let source = root.join(relative_path);
            if !self.store.exists(&source) {
                log::warn!("[WARN] SKIP (missing): {relative_path}");
                report.missing.push(relative_path.to_string());
                continue;
            }

            let Some(record) = self.process(source, relative_path.to_string(), Some(language)) else {
                continue;
            };

            let relative_target = proposed_dir.join(relative_path);
            let target = root.join(&relative_target);
            if !self.dry_run
                && let Err(err) = self.write_with_parents(&target, &record.final_text)
            {
                log::warn!("[WARN] Failed to write {}: {err}", target.display());
                continue;
            }
            report.paths.push(normalize_relative(&relative_target));
        }

        Ok(())
    }

    /// Read and normalize one document. `None` when it cannot be read as text.
    fn process(&self, absolute_path: PathBuf, relative_path: String, language: Option<&str>) -> Option<FileRecord> {
        let original_text = self.read_document(&absolute_path, &relative_path)?;

        let mut options = FixOptions::default().with_file_name(&relative_path);
        if let Some(language) = language {
            options = options.with_language(language);
        }
        let outcome = self.pipeline.apply(&original_text, options);
        if outcome.changed {
            log::debug!("[mdtidy] {}: {}", relative_path, outcome.rules_applied.join(", "));
        }

        Some(FileRecord {
            absolute_path,
            relative_path,
            original_text,
            final_text: outcome.content,
        })
    }

    fn read_document(&self, path: &Path, relative_path: &str) -> Option<String> {
        let bytes = match self.store.read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::debug!("[mdtidy] Skipping unreadable {relative_path}: {err}");
                return None;
            }
        };

        if bytes.contains(&0) {
            log::debug!("[mdtidy] Skipping binary {relative_path}");
            return None;
        }

        match String::from_utf8(bytes) {
            Ok(text) => Some(text),
            Err(_) => {
                log::debug!("[mdtidy] Skipping non-UTF-8 {relative_path}");
                None
            }
        }
    }

    fn write_with_parents(&self, target: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = target.parent() {
            self.store.create_dir_all(parent)?;
        }
        self.store.write(target, contents)
    }
}

/// Relative paths that stay under the root (no `..`, not absolute)
fn is_contained(path: &Path) -> bool {
    path.components().all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}
