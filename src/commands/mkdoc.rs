//! `mkdoc` - project-structure markdown report

use anyhow::Result;
use std::path::Path;

use devmate::doctree;

pub fn execute() -> Result<()> {
    let output = doctree::write_report(Path::new("."))?;
    println!(
        "Documentation generated and saved to {}.",
        output.display()
    );
    Ok(())
}
