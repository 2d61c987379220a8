//! Recursive removal of cache directories and compiled artifacts

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory names removed wholesale, descent pruned.
const CACHE_DIRS: &[&str] = &["__pycache__", ".pytest_cache", ".mypy_cache"];

/// File extensions removed individually.
const ARTIFACT_EXTENSIONS: &[&str] = &["pyc", "pyo"];

#[derive(Debug, Default)]
pub struct CleanupReport {
    pub removed_dirs: Vec<PathBuf>,
    pub removed_files: Vec<PathBuf>,
}

/// Walk `path` and delete cache directories and compiled artifacts.
///
/// Each deletion failure is reported and the walk continues; the report
/// lists only what was actually removed.
pub fn clean_tree(path: &Path) -> CleanupReport {
    let mut report = CleanupReport::default();

    let mut walker = WalkDir::new(path).into_iter();
    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                println!("Error reading entry: {err}");
                continue;
            }
        };

        let entry_path = entry.path();
        if entry.file_type().is_dir() {
            if is_cache_dir(entry_path) {
                // Prune before removal so the walker never descends into a
                // directory that no longer exists.
                walker.skip_current_dir();
                match fs::remove_dir_all(entry_path) {
                    Ok(()) => report.removed_dirs.push(entry_path.to_path_buf()),
                    Err(err) => {
                        println!("Error removing directory {}: {err}", entry_path.display())
                    }
                }
            }
        } else if entry.file_type().is_file() && is_artifact(entry_path) {
            match fs::remove_file(entry_path) {
                Ok(()) => report.removed_files.push(entry_path.to_path_buf()),
                Err(err) => println!("Error removing file {}: {err}", entry_path.display()),
            }
        }
    }

    report
}

fn is_cache_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| CACHE_DIRS.contains(&name))
}

fn is_artifact(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ARTIFACT_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_removes_cache_dir_and_artifact_only() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("__pycache__")).unwrap();
        touch(&tmp.path().join("__pycache__").join("mod.cpython-311.pyc"));
        touch(&tmp.path().join("module.pyc"));
        touch(&tmp.path().join("module.py"));
        fs::create_dir(tmp.path().join("src")).unwrap();
        touch(&tmp.path().join("src").join("lib.py"));

        let report = clean_tree(tmp.path());

        assert_eq!(report.removed_dirs.len(), 1);
        assert_eq!(report.removed_files.len(), 1);
        assert!(!tmp.path().join("__pycache__").exists());
        assert!(!tmp.path().join("module.pyc").exists());
        assert!(tmp.path().join("module.py").exists());
        assert!(tmp.path().join("src").join("lib.py").exists());
    }

    #[test]
    fn test_second_run_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".pytest_cache")).unwrap();
        touch(&tmp.path().join("old.pyo"));

        let first = clean_tree(tmp.path());
        assert_eq!(first.removed_dirs.len(), 1);
        assert_eq!(first.removed_files.len(), 1);

        let second = clean_tree(tmp.path());
        assert!(second.removed_dirs.is_empty());
        assert!(second.removed_files.is_empty());
    }

    #[test]
    fn test_artifacts_inside_removed_dir_are_not_double_counted() {
        let tmp = TempDir::new().unwrap();
        let cache = tmp.path().join("pkg").join(".mypy_cache");
        fs::create_dir_all(&cache).unwrap();
        touch(&cache.join("stale.pyc"));

        let report = clean_tree(tmp.path());

        assert_eq!(report.removed_dirs.len(), 1);
        assert!(report.removed_files.is_empty());
    }

    #[test]
    fn test_nested_cache_dirs() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a").join("__pycache__")).unwrap();
        fs::create_dir_all(tmp.path().join("b").join("__pycache__")).unwrap();

        let report = clean_tree(tmp.path());
        assert_eq!(report.removed_dirs.len(), 2);
    }
}
