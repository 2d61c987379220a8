//! `cleanup` - cache and artifact removal

use anyhow::Result;
use std::path::Path;

use devmate::cleanup::clean_tree;

pub fn execute() -> Result<()> {
    println!("Cleaning up temporary files in '.'...");
    let report = clean_tree(Path::new("."));

    if report.removed_dirs.is_empty() {
        println!("No temporary directories found to remove.");
    } else {
        println!("Removed directories:");
        for dir in &report.removed_dirs {
            println!("  - {}", dir.display());
        }
    }

    if report.removed_files.is_empty() {
        println!("No temporary files found to remove.");
    } else {
        println!("Removed files:");
        for file in &report.removed_files {
            println!("  - {}", file.display());
        }
    }

    println!("Cleanup complete.");
    Ok(())
}
