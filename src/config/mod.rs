//! Scaffolding configuration
//!
//! Everything the tool needs to know about the upstream template lives here,
//! so the rewrite steps never hard-code template details.

pub mod validation;

pub use validation::validate_project_name;

/// Upstream template repository
pub const DEFAULT_TEMPLATE_URL: &str = "https://github.com/prabogo/prabogo.git";

/// Module identifier declared by the upstream template
pub const TEMPLATE_MODULE: &str = "prabogo";

/// Settings for one scaffolding run
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// Repository cloned into the destination
    pub template_url: String,

    /// Module identifier the template ships with
    pub template_module: String,

    /// Manifest declaring the module, relative to the project root
    pub manifest_file: String,

    /// Suffix of files eligible for import rewriting
    pub source_suffix: String,

    /// Name suffixes never touched by the import rewriter
    pub excluded_suffixes: Vec<String>,

    /// Version control metadata directory, removed after cloning and
    /// pruned from the walk
    pub vcs_dir: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            template_url: DEFAULT_TEMPLATE_URL.to_string(),
            template_module: TEMPLATE_MODULE.to_string(),
            manifest_file: "go.mod".to_string(),
            source_suffix: ".go".to_string(),
            excluded_suffixes: vec!["go.mod".to_string(), "go.sum".to_string()],
            vcs_dir: ".git".to_string(),
        }
    }
}

impl ScaffoldConfig {
    /// Default configuration cloning from a different template URL
    pub fn with_template_url(url: impl Into<String>) -> Self {
        Self {
            template_url: url.into(),
            ..Self::default()
        }
    }
}
