//! Subprocess execution with advisory failure reporting
//!
//! Every command that shells out to an external tool goes through
//! [`run_command`]. The policy is uniform: a missing or failing tool is
//! reported to the user and the enclosing command carries on. External
//! failures never become process failures.

use std::path::Path;
use std::process::Command;

/// Run `program` with `args`, relaying its captured output.
///
/// A program missing from PATH or exiting non-zero produces a console
/// notice only.
pub fn run_command(program: &str, args: &[&str], cwd: Option<&Path>) {
    if which::which(program).is_err() {
        println!("Command '{program}' not found. Please ensure it is installed.");
        return;
    }

    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    let output = match command.output() {
        Ok(output) => output,
        Err(err) => {
            println!("Command '{program}' failed to start: {err}");
            return;
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if output.status.success() {
        if !stdout.is_empty() {
            print!("{stdout}");
        }
        if !stderr.is_empty() {
            print!("{stderr}");
        }
    } else {
        println!(
            "Command '{} {}' failed with error:\n{}",
            program,
            args.join(" "),
            stderr.trim_end()
        );
    }
}
