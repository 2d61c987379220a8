//! `tf` - Terraform project bootstrap

use anyhow::Result;
use std::path::Path;

use devmate::paths::ensure_directory;
use devmate::process::run_command;
use devmate::templates::{self, terraform};

pub fn execute(name: &str) -> Result<()> {
    let root = Path::new(name);
    ensure_directory(root)?;
    write_project(root, name)?;
    run_command("terraform", &["init"], Some(root));
    Ok(())
}

/// Write the four standard Terraform files into `root`.
pub fn write_project(root: &Path, name: &str) -> Result<()> {
    templates::write_template(&root.join("main.tf"), terraform::MAIN_TF, name)?;
    println!("Created main.tf with standard Terraform configuration.");
    templates::write_template(&root.join("variables.tf"), terraform::VARIABLES_TF, name)?;
    println!("Created variables.tf with variable definitions.");
    templates::write_template(&root.join("outputs.tf"), terraform::OUTPUTS_TF, name)?;
    println!("Created outputs.tf with output definitions.");
    templates::write_template(&root.join("locals.tf"), terraform::LOCALS_TF, name)?;
    println!("Created locals.tf with local value definitions.");
    Ok(())
}
