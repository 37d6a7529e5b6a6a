//! Rewrites that turn a cloned template into a project of its own
//!
//! - **`manifest`**: renames the module declared in `go.mod`
//! - **`imports`**: rewrites internal import paths in Go sources

pub mod imports;
pub mod manifest;

pub use imports::ImportRewriter;
pub use manifest::rewrite_manifest;
