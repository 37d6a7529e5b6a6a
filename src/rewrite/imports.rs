//! Import path rewrite for Go sources
//!
//! The scan is a line heuristic, not a Go parser: it tracks `import ( ... )`
//! blocks and rewrites the quoted `"<old>/` prefix on lines that look like
//! import specs. A matching token inside an unrelated string literal on an
//! import line is rewritten too.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::ScaffoldConfig;
use crate::utils::terminal;

/// Summary of one import rewrite walk
#[derive(Debug, Default)]
pub struct ImportRewriteReport {
    /// Source files inspected
    pub scanned: usize,
    /// Files whose imports were rewritten
    pub updated: Vec<PathBuf>,
    /// Files skipped because they could not be read or written
    pub failed: Vec<(PathBuf, String)>,
    /// Updated files whose original permissions could not be restored
    pub permissions_lost: Vec<(PathBuf, String)>,
}

/// What happened to a single source file
#[derive(Debug)]
enum FileOutcome {
    Unchanged,
    Updated,
    /// Content rewritten, permission restore failed
    UpdatedPermissionsLost(anyhow::Error),
}

impl ImportRewriteReport {
    /// Record the outcome of rewriting `path`
    fn record(&mut self, path: &Path, outcome: Result<FileOutcome>) {
        match outcome {
            Ok(FileOutcome::Unchanged) => {
                debug!(path = %path.display(), "no internal imports to rewrite");
            }
            Ok(FileOutcome::Updated) => {
                println!("  Updated import paths in: {}", path.display());
                self.updated.push(path.to_path_buf());
            }
            Ok(FileOutcome::UpdatedPermissionsLost(e)) => {
                println!("  Updated import paths in: {}", path.display());
                terminal::print_warning(&format!("{:#}", e));
                self.updated.push(path.to_path_buf());
                self.permissions_lost.push((path.to_path_buf(), format!("{:#}", e)));
            }
            Err(e) => {
                terminal::print_error(&format!("{:#}", e));
                self.failed.push((path.to_path_buf(), format!("{:#}", e)));
            }
        }
    }
}

/// Rewrites internal import paths from one module identifier to another
#[derive(Debug, Clone)]
pub struct ImportRewriter {
    old_token: String,
    new_token: String,
    source_suffix: String,
    excluded_suffixes: Vec<String>,
    vcs_dir: String,
}

impl ImportRewriter {
    /// Create a rewriter using the file selection rules of `config`
    pub fn new(config: &ScaffoldConfig, old_module: &str, new_module: &str) -> Self {
        Self {
            old_token: format!("\"{}/", old_module),
            new_token: format!("\"{}/", new_module),
            source_suffix: config.source_suffix.clone(),
            excluded_suffixes: config.excluded_suffixes.clone(),
            vcs_dir: config.vcs_dir.clone(),
        }
    }

    /// Rewrite imports in a single source text.
    ///
    /// Returns `None` when no line changed.
    pub fn rewrite_source(&self, content: &str) -> Option<String> {
        if !content.contains(&self.old_token) {
            return None;
        }

        let mut changed = false;
        let mut in_import_block = false;
        let mut lines = Vec::new();

        for line in content.split('\n') {
            let trimmed = line.trim();

            if trimmed.starts_with("import (") {
                in_import_block = true;
            } else if trimmed == ")" && in_import_block {
                in_import_block = false;
            }

            let eligible = trimmed.starts_with("import ")
                || (in_import_block && looks_like_import_spec(trimmed));

            if eligible && line.contains(&self.old_token) {
                let rewritten = line.replace(&self.old_token, &self.new_token);
                changed |= rewritten != line;
                lines.push(rewritten);
            } else {
                lines.push(line.to_string());
            }
        }

        changed.then(|| lines.join("\n"))
    }

    /// Whether the walk should rewrite this entry
    fn is_source_file(&self, entry: &DirEntry) -> bool {
        if entry.file_type().is_dir() {
            return false;
        }

        let name = entry.file_name().to_string_lossy();
        if !name.ends_with(&self.source_suffix) {
            return false;
        }

        !self
            .excluded_suffixes
            .iter()
            .any(|suffix| name.ends_with(suffix.as_str()))
    }

    /// Whether the walk should descend into this entry
    fn is_walkable(&self, entry: &DirEntry) -> bool {
        !(entry.file_type().is_dir() && entry.file_name() == self.vcs_dir.as_str())
    }

    /// Rewrite every source file under `root`.
    ///
    /// Per-file read and write errors are reported and recorded; a walk error
    /// aborts the rewrite.
    pub fn rewrite_tree(&self, root: &Path) -> Result<ImportRewriteReport> {
        let mut report = ImportRewriteReport::default();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| self.is_walkable(e))
        {
            let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;

            if !self.is_source_file(&entry) {
                continue;
            }

            report.scanned += 1;
            report.record(entry.path(), self.rewrite_file(entry.path()));
        }

        Ok(report)
    }

    /// Rewrite one file in place
    fn rewrite_file(&self, path: &Path) -> Result<FileOutcome> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Error reading file {}", path.display()))?;

        let Some(updated) = self.rewrite_source(&content) else {
            return Ok(FileOutcome::Unchanged);
        };

        let permissions = match fs::metadata(path) {
            Ok(metadata) => Some(metadata.permissions()),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "permission lookup failed, using default");
                default_permissions()
            }
        };

        fs::write(path, updated)
            .with_context(|| format!("Error writing updated content to {}", path.display()))?;

        if let Some(permissions) = permissions {
            if let Err(e) = fs::set_permissions(path, permissions) {
                let err = anyhow::Error::new(e)
                    .context(format!("Error restoring permissions on {}", path.display()));
                return Ok(FileOutcome::UpdatedPermissionsLost(err));
            }
        }

        Ok(FileOutcome::Updated)
    }
}

/// Heuristic for a spec line inside an import block:
/// `"path"`, `alias "path"`, `_ "path"` or `. "path"`
fn looks_like_import_spec(trimmed: &str) -> bool {
    trimmed.starts_with('"')
        || (trimmed.matches('"').count() >= 2
            && (trimmed.contains(' ') || trimmed.starts_with('.')))
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}
