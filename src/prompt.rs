//! Interactive stdin prompts

use anyhow::{Context, Result};
use std::io::{self, Write};

/// Print `question` with its options and read one trimmed, lowercased line.
///
/// Validation belongs to the caller; this only fails when stdin is closed
/// before an answer arrives.
pub fn ask(question: &str, options: &[&str]) -> Result<String> {
    print!("{} ({}): ", question, options.join("/"));
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;
    if read == 0 {
        anyhow::bail!("Input closed before a choice was made");
    }

    Ok(input.trim().to_lowercase())
}
