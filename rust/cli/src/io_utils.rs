//! Directory helpers for the exporters.

use std::path::Path;

/// Ensure a directory exists, creating it and any missing parents.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// # use carddraw_cli::io_utils::ensure_dir;
///
/// ensure_dir(Path::new("mtg_out/60")).unwrap();
/// ```
pub fn ensure_dir(path: &Path) -> Result<(), String> {
    if path.as_os_str().is_empty() || path.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Fails unless `path` is an existing directory.
pub fn require_dir(path: &Path) -> Result<(), String> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(format!("Directory {} does not exist", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dir_creates_nested_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        assert!(ensure_dir(&nested).is_ok());
        assert!(nested.is_dir());
    }

    #[test]
    fn test_ensure_dir_existing_is_ok() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(ensure_dir(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_require_dir_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("nope");
        let err = require_dir(&missing).unwrap_err();
        assert!(err.contains("does not exist"));
    }

    #[test]
    fn test_require_dir_rejects_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(require_dir(file.path()).is_err());
    }
}
