//! create-prabogo - scaffold a new Prabogo project
//!
//! Clones the upstream template, then renames the Go module it declares and
//! every internal import path that refers to it.
//!
//! ## Architecture
//!
//! ```text
//! cli → commands::new → exec::git (clone) → rewrite::{manifest, imports}
//! ```

mod cli;
mod commands;
mod config;
mod error;
mod exec;
mod rewrite;
mod utils;

use clap::Parser;

use cli::Cli;

fn main() {
    // Usage errors exit with 1, help and version with 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = cli.execute() {
        error::report(&e);
        std::process::exit(1);
    }
}
