//! Module declaration rewrite for `go.mod`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::error::ScaffoldError;

/// Matches `module <identifier>` at the start of a line, identifier in group 2
const DECLARATION_PATTERN: &str = r#"(?m)^([ \t]*module[ \t]+)("[^"\r\n]*"|[^\s/]\S*)"#;

/// Result of a manifest rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRewrite {
    /// Manifest that was rewritten
    pub path: PathBuf,
    /// Module identifier the manifest declared before the rewrite
    pub previous: String,
    /// Module identifier the manifest declares now
    pub current: String,
}

/// Replace the module identifier of the first declaration line.
///
/// Returns the previous identifier (unquoted) and the new content, or `None`
/// when the content has no declaration line. Every byte outside the
/// identifier token is preserved.
pub fn replace_module_declaration(content: &str, new_module: &str) -> Result<Option<(String, String)>> {
    let pattern = Regex::new(DECLARATION_PATTERN).context("Invalid module declaration pattern")?;

    let Some(captures) = pattern.captures(content) else {
        return Ok(None);
    };
    let Some(token) = captures.get(2) else {
        return Ok(None);
    };

    let raw = token.as_str();
    let quoted = raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"');
    let previous = if quoted { &raw[1..raw.len() - 1] } else { raw };

    let replacement = if quoted {
        format!("\"{}\"", new_module)
    } else {
        new_module.to_string()
    };

    let mut updated = String::with_capacity(content.len() + replacement.len());
    updated.push_str(&content[..token.start()]);
    updated.push_str(&replacement);
    updated.push_str(&content[token.end()..]);

    Ok(Some((previous.to_string(), updated)))
}

/// Rename the module declared by the manifest at `path`
pub fn rewrite_manifest(path: &Path, new_module: &str) -> Result<ManifestRewrite> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let (previous, updated) = replace_module_declaration(&content, new_module)?
        .ok_or_else(|| ScaffoldError::manifest_declaration_not_found(path))?;

    if updated == content {
        debug!(path = %path.display(), module = %previous, "manifest already declares target module");
    } else {
        fs::write(path, updated)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!(path = %path.display(), from = %previous, to = %new_module, "manifest rewritten");
    }

    Ok(ManifestRewrite {
        path: path.to_path_buf(),
        previous,
        current: new_module.to_string(),
    })
}
