//! `doc` - Sphinx documentation stub

use anyhow::Result;
use std::path::Path;

use devmate::paths::ensure_directory;
use devmate::templates::{self, sphinx};

pub fn execute(name: &str) -> Result<()> {
    let docs_dir = Path::new(name).join("docs");
    ensure_directory(&docs_dir)?;
    templates::write_template(&docs_dir.join("conf.py"), sphinx::CONF_PY, name)?;
    println!("Created Sphinx configuration file 'conf.py'.");
    println!("You can now build your docs using 'sphinx-build'.");
    Ok(())
}
