//! `dep` - outdated-dependency listing

use anyhow::Result;

use devmate::process::run_command;

pub fn execute(name: &str) -> Result<()> {
    println!("Checking outdated dependencies for project '{name}'...");
    run_command("pip", &["list", "--outdated"], None);
    Ok(())
}
