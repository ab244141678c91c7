// src/output/paths.rs
//! Path calculations shared by the resolver and the writer.
//!
//! `absolutize` never touches the filesystem, so it also works for paths
//! that do not exist yet.

use crate::error::AppError;
use std::path::{Component, Path, PathBuf};

/// Makes a path absolute against the current directory and resolves `.`
/// and `..` components lexically.
pub fn absolutize(path: &Path) -> Result<PathBuf, AppError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(normalize_path(&absolute))
}

/// Normalizes a path by resolving `..` and `.` components.
fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                if matches!(components.last(), Some(Component::Normal(_))) {
                    components.pop();
                } else if !matches!(components.last(), Some(Component::RootDir)) {
                    components.push(component);
                }
            }
            Component::CurDir => {}
            c => components.push(c),
        }
    }

    components.into_iter().collect()
}

/// Resolves an output file name to an absolute path, refusing to clobber
/// an existing file unless `force` is set.
pub fn resolve_output_path(name: Option<&str>, force: bool) -> Result<PathBuf, AppError> {
    let name = match name {
        Some(n) if !n.is_empty() => n,
        _ => return Err(AppError::MissingOutputName("file")),
    };

    let path = absolutize(Path::new(name))?;
    if path.exists() && !force {
        return Err(AppError::OutputFileExists(path));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn absolutize_keeps_absolute_paths() {
        let path = absolutize(Path::new("/var/data/file.txt")).unwrap();
        assert_eq!(path, PathBuf::from("/var/data/file.txt"));
    }

    #[test]
    fn absolutize_anchors_relative_paths_to_cwd() {
        let path = absolutize(Path::new("file.txt")).unwrap();
        assert!(path.is_absolute());
        assert_eq!(path, std::env::current_dir().unwrap().join("file.txt"));
    }

    #[test]
    fn normalize_resolves_dot_components() {
        let path = normalize_path(Path::new("/home/user/../user/./file.txt"));
        assert_eq!(path, PathBuf::from("/home/user/file.txt"));
    }

    #[test]
    fn resolve_output_path_requires_a_name() {
        let err = resolve_output_path(None, false).unwrap_err();
        assert_eq!(err.to_string(), "Must provide `name` for file output");

        let err = resolve_output_path(Some(""), false).unwrap_err();
        assert_eq!(err.to_string(), "Must provide `name` for file output");
    }

    #[test]
    fn resolve_output_path_guards_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("taken.txt");
        fs::write(&existing, "occupied").unwrap();

        let err = resolve_output_path(existing.to_str(), false).unwrap_err();
        assert!(err.to_string().starts_with("Output file exists:"));

        let path = resolve_output_path(existing.to_str(), true).unwrap();
        assert_eq!(path, existing);
    }

    #[test]
    fn resolve_output_path_accepts_new_files() {
        let dir = tempfile::tempdir().unwrap();
        let fresh = dir.path().join("fresh.txt");
        let path = resolve_output_path(fresh.to_str(), false).unwrap();
        assert_eq!(path, fresh);
    }
}
