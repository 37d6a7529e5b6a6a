//! Error types and helpers for user-friendly error messages
//!
//! Fatal scaffolding failures carry an actionable hint so the operator can
//! fix the problem without reading the source.

use std::path::PathBuf;

use thiserror::Error;

/// Scaffolding errors with helpful context and suggestions
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Project name rejected before anything touched the disk
    #[error("Invalid project name '{name}': {reason}")]
    InvalidName {
        name: String,
        reason: String,
        hint: String,
    },

    /// Destination directory is already taken
    #[error("Directory {} already exists", .path.display())]
    DestinationExists { path: PathBuf, hint: String },

    /// Tool/executable not found
    #[error("Missing tool: {tool}")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// Template clone did not complete
    #[error("Failed to clone template {url}: {message}")]
    CloneFailed {
        url: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        hint: Option<String>,
    },

    /// Manifest has no `module` declaration to rename
    #[error("No module declaration found in {}", .path.display())]
    ManifestDeclarationNotFound { path: PathBuf, hint: String },
}

impl ScaffoldError {
    /// Create an invalid project name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
            hint: hints::project_name().to_string(),
        }
    }

    /// Create a destination exists error
    pub fn destination_exists(path: impl Into<PathBuf>) -> Self {
        Self::DestinationExists {
            path: path.into(),
            hint: hints::destination_exists().to_string(),
        }
    }

    /// Create a missing tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// Create a clone failure error
    pub fn clone_failed(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CloneFailed {
            url: url.into(),
            message: message.into(),
            source: None,
            hint: Some(hints::clone_failed().to_string()),
        }
    }

    /// Create a clone failure error wrapping the spawn error
    pub fn clone_failed_with_source(
        url: impl Into<String>,
        message: impl Into<String>,
        source: anyhow::Error,
    ) -> Self {
        Self::CloneFailed {
            url: url.into(),
            message: message.into(),
            source: Some(source),
            hint: Some(hints::clone_failed().to_string()),
        }
    }

    /// Create a missing module declaration error
    pub fn manifest_declaration_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ManifestDeclarationNotFound {
            path: path.into(),
            hint: hints::manifest_declaration().to_string(),
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        match self {
            ScaffoldError::CloneFailed { hint, .. } => {
                if let Some(h) = hint {
                    eprintln!("\n{} {}", style("HINT:").yellow().bold(), h);
                }
            }
            ScaffoldError::InvalidName { hint, .. }
            | ScaffoldError::DestinationExists { hint, .. }
            | ScaffoldError::ManifestDeclarationNotFound { hint, .. } => {
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);
            }
            ScaffoldError::MissingTool {
                hint, required_for, ..
            } => {
                eprintln!("\n{} {}", style("REQUIRED FOR:").cyan().bold(), required_for);
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);
            }
        }

        eprintln!();
    }
}

/// Print any error, with hints when it is a [`ScaffoldError`]
pub fn report(err: &anyhow::Error) {
    match err.downcast_ref::<ScaffoldError>() {
        Some(scaffold_err) => scaffold_err.display_with_hints(),
        None => crate::utils::terminal::print_error(&format!("{:#}", err)),
    }
}

/// Common error hints
pub mod hints {
    /// Get hint for missing Git
    pub fn git() -> &'static str {
        "Install Git from https://git-scm.com/ or use your package manager:\n\
         • macOS: brew install git\n\
         • Ubuntu: sudo apt install git\n\
         • Windows: winget install Git.Git"
    }

    /// Get hint for an unusable project name
    pub fn project_name() -> &'static str {
        "The project name becomes both the directory and the Go module path:\n\
         • Use a relative name like 'shop' or 'github.com/acme/shop'\n\
         • No spaces, quotes, '.' or '..' segments"
    }

    /// Get hint for an occupied destination
    pub fn destination_exists() -> &'static str {
        "Choose another project name, or remove the existing directory first."
    }

    /// Get hint for a failed clone
    pub fn clone_failed() -> &'static str {
        "Cloning the template failed. Try:\n\
         • Check your network connection\n\
         • Check that the template URL is reachable: git ls-remote <url>\n\
         • Override the template with --template or PRABOGO_TEMPLATE"
    }

    /// Get hint for a go.mod without a module line
    pub fn manifest_declaration() -> &'static str {
        "go.mod must declare the module, e.g. 'module prabogo'.\n\
         Edit the declaration by hand, then run: go mod tidy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_exists_message() {
        let err = ScaffoldError::destination_exists("/tmp/shop");
        assert_eq!(err.to_string(), "Directory /tmp/shop already exists");
    }

    #[test]
    fn test_clone_failed_keeps_source() {
        let err = ScaffoldError::clone_failed_with_source(
            "https://example.invalid/t.git",
            "spawn failed",
            anyhow::anyhow!("No such file or directory"),
        );
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("https://example.invalid/t.git"));
    }
}
