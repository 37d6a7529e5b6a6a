//! Path utilities for project creation

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::ScaffoldError;

/// Resolve the destination of a new project under `base`.
///
/// Fails if anything, including a dangling symlink, already occupies it.
pub fn resolve_destination_from(base: &Path, project_name: &str) -> Result<PathBuf> {
    let destination = base.join(project_name);
    if destination.symlink_metadata().is_ok() {
        return Err(ScaffoldError::destination_exists(destination).into());
    }
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_free_destination() {
        let temp_dir = TempDir::new().unwrap();
        let dest = resolve_destination_from(temp_dir.path(), "shop").unwrap();
        assert_eq!(dest, temp_dir.path().join("shop"));

        let nested = resolve_destination_from(temp_dir.path(), "github.com/acme/shop").unwrap();
        assert_eq!(nested, temp_dir.path().join("github.com").join("acme").join("shop"));
    }

    #[test]
    fn test_resolve_existing_destination() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("shop")).unwrap();
        std::fs::write(temp_dir.path().join("notes"), "").unwrap();

        for name in ["shop", "notes"] {
            let err = resolve_destination_from(temp_dir.path(), name).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<ScaffoldError>(),
                Some(ScaffoldError::DestinationExists { .. })
            ));
        }
    }
}
