//! Markdown outline of a project tree (`mkdoc`)

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Fixed report filename, overwritten on every run.
pub const OUTPUT_FILE: &str = "README_generated.md";

/// Build the markdown outline for the tree rooted at `root`.
///
/// Hidden entries (dot-prefixed names) are excluded along with everything
/// beneath them. Unreadable entries are reported to the console and skipped;
/// the outline covers whatever was readable.
pub fn generate(root: &Path) -> String {
    let mut lines = vec![
        "# Project Documentation".to_string(),
        String::new(),
        "## Directory Structure".to_string(),
        String::new(),
    ];

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry));
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                println!("Error reading entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let heading = if rel.as_os_str().is_empty() {
            ".".to_string()
        } else {
            rel.display().to_string()
        };
        lines.push(format!("### {heading}"));

        match visible_children(entry.path()) {
            Ok((dirs, files)) => {
                for dir in dirs {
                    lines.push(format!("- **Directory:** {dir}"));
                }
                for file in files {
                    lines.push(format!("- File: {file}"));
                }
            }
            Err(err) => println!("Error reading {}: {err}", entry.path().display()),
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Generate the outline and write it to `root`/README_generated.md.
pub fn write_report(root: &Path) -> Result<PathBuf> {
    let content = generate(root);
    let output = root.join(OUTPUT_FILE);
    fs::write(&output, content)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;
    Ok(output)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

/// Sorted (directories, files) children of `dir`, hidden names skipped.
fn visible_children(dir: &Path) -> io::Result<(Vec<String>, Vec<String>)> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for child in fs::read_dir(dir)? {
        let child = child?;
        let name = child.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        if child.file_type()?.is_dir() {
            dirs.push(name);
        } else {
            files.push(name);
        }
    }

    dirs.sort();
    files.sort();
    Ok((dirs, files))
}
