//! New project command implementation
//!
//! Clones the Prabogo template into `<cwd>/<name>`, strips its git history
//! and renames the Go module. Failures before and during the clone are
//! fatal; every later step only warns so the operator still gets a usable
//! tree and the next-step instructions.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::config::{validate_project_name, ScaffoldConfig, DEFAULT_TEMPLATE_URL};
use crate::error;
use crate::exec::git;
use crate::rewrite::{rewrite_manifest, ImportRewriter};
use crate::utils::{paths, terminal};

/// Create a new Prabogo project
#[derive(Args, Debug)]
pub struct NewCommand {
    /// Project name, used as directory and Go module path
    pub name: String,

    /// Template repository to clone
    #[arg(long, env = "PRABOGO_TEMPLATE", default_value = DEFAULT_TEMPLATE_URL)]
    pub template: String,
}

impl NewCommand {
    /// Execute the new command
    pub fn execute(self, verbose: bool) -> Result<()> {
        validate_project_name(&self.name)?;

        let current_dir = std::env::current_dir().context("Error getting current directory")?;
        let project_path = paths::resolve_destination_from(&current_dir, &self.name)?;

        println!("Creating new Prabogo project: {}", self.name);

        let config = ScaffoldConfig::with_template_url(&self.template);
        git::clone_template(&config.template_url, &self.name, &current_dir)?;

        match git::remove_metadata(&project_path, &config.vcs_dir) {
            Ok(true) => debug!(path = %project_path.display(), "removed template history"),
            Ok(false) => debug!(path = %project_path.display(), "template has no git metadata"),
            Err(e) => terminal::print_warning(&format!("{:#}", e)),
        }

        let old_module = rename_module(&config, &project_path, &self.name);
        update_import_paths(&config, &project_path, &old_module, &self.name, verbose);

        print_next_steps(&self.name);
        Ok(())
    }
}

/// Rename the module in the manifest, returning the identifier it replaced.
///
/// Falls back to the template's known identifier when the manifest could
/// not be rewritten.
fn rename_module(config: &ScaffoldConfig, project_path: &Path, name: &str) -> String {
    let manifest_path = project_path.join(&config.manifest_file);

    match rewrite_manifest(&manifest_path, name) {
        Ok(outcome) => {
            debug!(path = %outcome.path.display(), from = %outcome.previous, to = %outcome.current, "module renamed");
            outcome.previous
        }
        Err(e) => {
            error::report(&e);
            config.template_module.clone()
        }
    }
}

/// Rewrite internal import paths; walk errors are reported, not propagated
fn update_import_paths(
    config: &ScaffoldConfig,
    project_path: &Path,
    old_module: &str,
    name: &str,
    verbose: bool,
) {
    terminal::print_info(&format!(
        "Updating import paths from {} to {} in project {}",
        old_module,
        name,
        project_path.display()
    ));

    let rewriter = ImportRewriter::new(config, old_module, name);
    match rewriter.rewrite_tree(project_path) {
        Ok(report) => {
            if verbose {
                terminal::print_info(&format!(
                    "Scanned {} source file(s), updated {}, skipped {}",
                    report.scanned,
                    report.updated.len(),
                    report.failed.len()
                ));
                for (path, reason) in &report.failed {
                    println!("  skipped {}: {}", path.display(), reason);
                }
            }
            if !report.permissions_lost.is_empty() {
                terminal::print_warning(&format!(
                    "{} updated file(s) lost their original permissions",
                    report.permissions_lost.len()
                ));
            }
            if !report.failed.is_empty() {
                terminal::print_warning(&format!(
                    "{} file(s) could not be updated, fix their imports by hand",
                    report.failed.len()
                ));
            }
        }
        Err(e) => terminal::print_error(&format!(
            "Error occurred while modifying project import paths: {:#}",
            e
        )),
    }
}

fn print_next_steps(name: &str) {
    println!();
    terminal::print_success("Project created successfully!");
    println!("\nNext steps:");
    println!("  cd {}", name);
    println!("  cp .env.example .env");
    println!("  go mod tidy");
    println!("  docker-compose up -d");
    println!("  make run");
}
