//! `scaffold` - interactive project bootstrap
//!
//! Prompting lives here; the file writers live in the library's scaffold
//! module so each terminal branch can be exercised without a terminal.

use anyhow::Result;
use std::path::Path;

use devmate::paths::ensure_directory;
use devmate::prompt;
use devmate::scaffold::{self, BackendFramework, FrontendFramework, ProjectKind, WebTier};

pub fn execute(name: &str) -> Result<()> {
    let root = Path::new(name);
    ensure_directory(root)?;
    println!("Scaffolding project '{name}'...");

    match prompt_kind()? {
        ProjectKind::Cli => scaffold::scaffold_cli(root, name)?,
        ProjectKind::Web => {
            match prompt_tier()? {
                WebTier::Frontend => match prompt_frontend()? {
                    FrontendFramework::React => scaffold::scaffold_react(root, name)?,
                    FrontendFramework::Angular => scaffold::scaffold_angular(root, name)?,
                },
                WebTier::Backend => match prompt_backend()? {
                    BackendFramework::Express => scaffold::scaffold_express(root, name)?,
                    BackendFramework::Nestjs => scaffold::scaffold_nestjs(root, name)?,
                    BackendFramework::Fastapi => scaffold::scaffold_fastapi(root, name)?,
                    BackendFramework::Flask => scaffold::scaffold_flask(root, name)?,
                    BackendFramework::Spring => scaffold::scaffold_spring(root, name)?,
                    BackendFramework::Tote => scaffold::scaffold_tote(root, name)?,
                },
            }
            println!("Web project scaffolded successfully.");
        }
        ProjectKind::Generic => scaffold::scaffold_generic(root, name)?,
    }

    println!("Project scaffolded successfully.");
    Ok(())
}

fn prompt_kind() -> Result<ProjectKind> {
    loop {
        let answer = prompt::ask("What type of project is this?", ProjectKind::CHOICES)?;
        match ProjectKind::from_input(&answer) {
            Some(kind) => return Ok(kind),
            None => print_invalid(&answer, ProjectKind::CHOICES),
        }
    }
}

fn prompt_tier() -> Result<WebTier> {
    loop {
        let answer = prompt::ask(
            "Is your web project a frontend or backend app?",
            WebTier::CHOICES,
        )?;
        match WebTier::from_input(&answer) {
            Some(tier) => return Ok(tier),
            None => print_invalid(&answer, WebTier::CHOICES),
        }
    }
}

fn prompt_frontend() -> Result<FrontendFramework> {
    loop {
        let answer = prompt::ask(
            "Which frontend framework do you want?",
            FrontendFramework::CHOICES,
        )?;
        match FrontendFramework::from_input(&answer) {
            Some(framework) => return Ok(framework),
            None => print_invalid(&answer, FrontendFramework::CHOICES),
        }
    }
}

fn prompt_backend() -> Result<BackendFramework> {
    loop {
        let answer = prompt::ask(
            "Which backend framework do you want?",
            BackendFramework::CHOICES,
        )?;
        match BackendFramework::from_input(&answer) {
            Some(framework) => return Ok(framework),
            None => print_invalid(&answer, BackendFramework::CHOICES),
        }
    }
}

fn print_invalid(answer: &str, choices: &[&str]) {
    println!("Invalid choice '{}'. Expected one of: {}.", answer, choices.join(", "));
}
