//! Read-only git queries for the dashboard

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Clone, Serialize)]
pub struct GitMetrics {
    pub branch: String,
    pub uncommitted: usize,
}

/// Branch name and dirty-file count for the repository at `path`.
///
/// Detection is by presence of a `.git` directory; anything short of both
/// queries succeeding reports the repository as absent.
pub fn collect(path: &Path) -> Option<GitMetrics> {
    if !path.join(".git").exists() {
        return None;
    }

    let branch = current_branch(path).ok()?;
    let uncommitted = status_count(path).ok()?;
    Some(GitMetrics {
        branch,
        uncommitted,
    })
}

/// Get the current branch name
fn current_branch(path: &Path) -> Result<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--abbrev-ref", "HEAD"])
        .current_dir(path)
        .output()
        .context("Failed to get current branch")?;

    if !output.status.success() {
        anyhow::bail!("Failed to get current branch");
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Count modified files
fn status_count(path: &Path) -> Result<usize> {
    let output = Command::new("git")
        .args(["status", "--porcelain"])
        .current_dir(path)
        .output()
        .context("Failed to get git status")?;

    if !output.status.success() {
        anyhow::bail!("Failed to get git status");
    }

    let count = String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| !line.is_empty())
        .count();

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collect_outside_a_repository() {
        let tmp = TempDir::new().unwrap();
        assert!(collect(tmp.path()).is_none());
    }

    #[test]
    fn test_collect_with_invalid_git_directory() {
        // A bare `.git` directory that is not a real repository degrades to
        // absent instead of erroring.
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join(".git")).unwrap();
        assert!(collect(tmp.path()).is_none());
    }
}
