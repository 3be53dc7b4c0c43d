//! Output root resolution and the target directory pre-flight check

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ScaffoldError};
use crate::name::ProjectName;

/// Output directory after `~` expansion and absolutization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRoot {
    /// Absolute, canonical path of the output directory
    pub path: PathBuf,
    /// Whether this run had to create it
    pub created: bool,
}

/// Resolve the `--path` argument to an existing absolute directory
///
/// A leading `~` is expanded to the home directory and relative paths are
/// taken against the current directory; an empty path means the current
/// directory. `~user` forms are not expanded. A missing directory is created
/// along with its ancestors; an existing one is used as is.
///
/// # Errors
///
/// Returns [`ScaffoldError::Io`] if the path cannot be made absolute, created
/// or canonicalized.
pub fn resolve_output_root(raw: &str) -> Result<OutputRoot> {
    let expanded = expand_output_path(raw, || {
        dirs::home_dir().map(|home| home.to_string_lossy().into_owned())
    });
    let absolute = std::path::absolute(&expanded).map_err(|e| ScaffoldError::io(&expanded, e))?;

    let created = !absolute.exists();
    if created {
        fs::create_dir_all(&absolute).map_err(|e| ScaffoldError::io(&absolute, e))?;
        debug!(path = %absolute.display(), "created output root");
    }

    let path = absolute
        .canonicalize()
        .map_err(|e| ScaffoldError::io(&absolute, e))?;
    debug!(path = %path.display(), created, "resolved output root");

    Ok(OutputRoot { path, created })
}

/// Expand a leading `~` with `home`, treating an empty result as `.`
fn expand_output_path<F>(raw: &str, home: F) -> PathBuf
where
    F: FnOnce() -> Option<String>,
{
    let expanded = shellexpand::tilde_with_context(raw, home);
    if expanded.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(expanded.into_owned())
    }
}

/// Compute `<root>/<name>`, refusing a directory that is already there
///
/// # Errors
///
/// Returns [`ScaffoldError::TargetExists`] if the target path exists.
pub fn target_dir(root: &Path, name: &ProjectName) -> Result<PathBuf> {
    let target = root.join(name.as_str());

    if target.exists() {
        return Err(ScaffoldError::TargetExists { path: target });
    }

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_existing_root_is_reused() {
        let temp_dir = TempDir::new().unwrap();
        let raw = temp_dir.path().to_str().unwrap();

        let root = resolve_output_root(raw).unwrap();

        assert!(!root.created);
        assert_eq!(root.path, temp_dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_missing_root_is_created_with_ancestors() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("c");

        let root = resolve_output_root(nested.to_str().unwrap()).unwrap();

        assert!(root.created);
        assert!(nested.is_dir());
        assert_eq!(root.path, nested.canonicalize().unwrap());
    }

    #[test]
    fn test_relative_segments_are_normalized() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        let dotted = temp_dir.path().join("sub").join("..").join("sub");

        let root = resolve_output_root(dotted.to_str().unwrap()).unwrap();

        assert_eq!(root.path, temp_dir.path().join("sub").canonicalize().unwrap());
    }

    #[test]
    fn test_empty_path_is_current_directory() {
        assert_eq!(expand_output_path("", || None), PathBuf::from("."));

        let root = resolve_output_root("").unwrap();
        assert!(!root.created);
        assert_eq!(root.path, std::env::current_dir().unwrap().canonicalize().unwrap());
    }

    #[test]
    fn test_tilde_uses_home() {
        let home = || Some("/home/dev".to_string());

        assert_eq!(expand_output_path("~/projects", home), PathBuf::from("/home/dev/projects"));
        assert_eq!(expand_output_path("~", home), PathBuf::from("/home/dev"));
        assert_eq!(expand_output_path("plugins/~", home), PathBuf::from("plugins/~"));
    }

    #[test]
    fn test_tilde_user_is_left_literal() {
        let expanded = expand_output_path("~someone/projects", || Some("/home/dev".to_string()));
        assert_eq!(expanded, PathBuf::from("~someone/projects"));
    }

    #[test]
    fn test_target_dir_joins_name() {
        let temp_dir = TempDir::new().unwrap();
        let name = ProjectName::parse("my-plugin").unwrap();

        let target = target_dir(temp_dir.path(), &name).unwrap();

        assert_eq!(target, temp_dir.path().join("my-plugin"));
        assert!(!target.exists());
    }

    #[test]
    fn test_target_dir_rejects_existing_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("my-plugin")).unwrap();
        let name = ProjectName::parse("my-plugin").unwrap();

        let err = target_dir(temp_dir.path(), &name).unwrap_err();

        assert!(matches!(err, ScaffoldError::TargetExists { .. }));
        assert!(err.to_string().starts_with("Directory already exists:"));
    }
}
