//! `env` - Python virtual environment creation

use anyhow::Result;

use devmate::process::run_command;

pub fn execute(name: &str) -> Result<()> {
    run_command("python", &["-m", "venv", name], None);
    Ok(())
}
