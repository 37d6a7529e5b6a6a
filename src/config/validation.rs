//! Project name validation
//!
//! The name doubles as the clone destination and the new Go module path,
//! so it has to be safe as both.

use std::path::{Component, Path};

use anyhow::Result;

use crate::error::ScaffoldError;

/// Validate the project name given on the command line
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ScaffoldError::invalid_name(name, "name cannot be empty").into());
    }

    if let Some(c) = name.chars().find(|c| c.is_whitespace() || *c == '"') {
        return Err(ScaffoldError::invalid_name(
            name,
            format!("character {:?} is not allowed", c),
        )
        .into());
    }

    let path = Path::new(name);
    if path.has_root() {
        return Err(ScaffoldError::invalid_name(name, "name must be a relative path").into());
    }

    if path.components().any(|c| matches!(c, Component::Prefix(_))) {
        return Err(ScaffoldError::invalid_name(name, "name must be a relative path").into());
    }

    // `Path::components` folds away `.`, `//` and a trailing `/`, so check raw segments
    for segment in name.split('/') {
        match segment {
            "" => {
                return Err(
                    ScaffoldError::invalid_name(name, "empty path segments are not allowed").into(),
                );
            }
            "." | ".." => {
                return Err(ScaffoldError::invalid_name(
                    name,
                    "'.' and '..' segments are not allowed",
                )
                .into());
            }
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_project_name() {
        // Valid names
        assert!(validate_project_name("shop").is_ok());
        assert!(validate_project_name("my-service").is_ok());
        assert!(validate_project_name("github.com/acme/shop").is_ok());

        // Invalid names
        assert!(validate_project_name("").is_err());
        assert!(validate_project_name("my shop").is_err());
        assert!(validate_project_name("sh\"op").is_err());
        assert!(validate_project_name("/abs/shop").is_err());
        assert!(validate_project_name("../shop").is_err());
        assert!(validate_project_name(".").is_err());
        assert!(validate_project_name("shop/").is_err());
        assert!(validate_project_name("acme//shop").is_err());
        assert!(validate_project_name("acme/./shop").is_err());
        assert!(validate_project_name("acme/../shop").is_err());
    }

    #[test]
    fn test_invalid_name_is_scaffold_error() {
        let err = validate_project_name("a b").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::InvalidName { .. })
        ));
    }
}
