//! Shared filesystem helpers

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Create `dir` (and any missing parents), printing a notice either way.
pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() {
        println!("Directory '{}' already exists.", dir.display());
    } else {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;
        println!("Created directory '{}'.", dir.display());
    }
    Ok(())
}
