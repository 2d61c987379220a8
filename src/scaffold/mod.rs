//! Project scaffolding decision tree and file writers
//!
//! The interactive flow is kind -> (web only) tier -> framework. Each level
//! is an enum that parses user input on its own, so every branch of the tree
//! stays independently testable. Writers never call out to build tools; a
//! scaffolded project is plain files only.

use anyhow::Result;
use std::path::Path;

use crate::paths::ensure_directory;
use crate::templates::{self, scaffold as tpl};

// =============================================================================
// Decision tree
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Cli,
    Web,
    Generic,
}

impl ProjectKind {
    pub const CHOICES: &'static [&'static str] = &["cli", "web", "generic"];

    pub fn from_input(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "cli" => Some(Self::Cli),
            "web" => Some(Self::Web),
            "generic" => Some(Self::Generic),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebTier {
    Frontend,
    Backend,
}

impl WebTier {
    pub const CHOICES: &'static [&'static str] = &["frontend", "backend"];

    pub fn from_input(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "frontend" => Some(Self::Frontend),
            "backend" => Some(Self::Backend),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontendFramework {
    React,
    Angular,
}

impl FrontendFramework {
    pub const CHOICES: &'static [&'static str] = &["react", "angular"];

    pub fn from_input(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "react" => Some(Self::React),
            "angular" => Some(Self::Angular),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendFramework {
    Express,
    Nestjs,
    Fastapi,
    Flask,
    Spring,
    Tote,
}

impl BackendFramework {
    pub const CHOICES: &'static [&'static str] =
        &["express", "nestjs", "fastapi", "flask", "spring", "tote"];

    pub fn from_input(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "express" => Some(Self::Express),
            "nestjs" => Some(Self::Nestjs),
            "fastapi" => Some(Self::Fastapi),
            "flask" => Some(Self::Flask),
            "spring" => Some(Self::Spring),
            "tote" => Some(Self::Tote),
            _ => None,
        }
    }
}

// =============================================================================
// File writers - one per terminal branch
// =============================================================================

/// CLI project: entry file, greeting test, README, requirements, setup.py
/// whose console-script entry point is the project name.
pub fn scaffold_cli(root: &Path, name: &str) -> Result<()> {
    templates::write_template(&root.join("main.py"), tpl::CLI_MAIN_PY, name)?;
    ensure_directory(&root.join("tests"))?;
    templates::write_template(&root.join("tests").join("test_main.py"), tpl::CLI_TEST_MAIN_PY, name)?;
    templates::write_template(&root.join("README.md"), tpl::CLI_README_MD, name)?;
    templates::write_template(&root.join("requirements.txt"), tpl::CLI_REQUIREMENTS_TXT, name)?;
    templates::write_template(&root.join("setup.py"), tpl::CLI_SETUP_PY, name)?;
    println!("CLI project scaffolded successfully.");
    Ok(())
}

pub fn scaffold_react(root: &Path, name: &str) -> Result<()> {
    ensure_directory(&root.join("public"))?;
    ensure_directory(&root.join("src"))?;
    templates::write_template(&root.join("public").join("index.html"), tpl::REACT_INDEX_HTML, name)?;
    templates::write_template(&root.join("src").join("index.js"), tpl::REACT_INDEX_JS, name)?;
    templates::write_template(&root.join("package.json"), tpl::REACT_PACKAGE_JSON, name)?;
    println!("React frontend project scaffolded successfully.");
    Ok(())
}

pub fn scaffold_angular(root: &Path, name: &str) -> Result<()> {
    ensure_directory(&root.join("src"))?;
    templates::write_template(
        &root.join("src").join("app.component.ts"),
        tpl::ANGULAR_APP_COMPONENT_TS,
        name,
    )?;
    templates::write_template(&root.join("package.json"), tpl::ANGULAR_PACKAGE_JSON, name)?;
    println!("Angular frontend project scaffolded successfully.");
    Ok(())
}

pub fn scaffold_express(root: &Path, name: &str) -> Result<()> {
    templates::write_template(&root.join("index.js"), tpl::EXPRESS_INDEX_JS, name)?;
    templates::write_template(&root.join("package.json"), tpl::EXPRESS_PACKAGE_JSON, name)?;
    println!("Express backend project scaffolded successfully.");
    Ok(())
}

pub fn scaffold_nestjs(root: &Path, name: &str) -> Result<()> {
    templates::write_template(&root.join("main.ts"), tpl::NESTJS_MAIN_TS, name)?;
    templates::write_template(&root.join("app.module.ts"), tpl::NESTJS_APP_MODULE_TS, name)?;
    println!("NestJS backend project scaffolded successfully.");
    Ok(())
}

pub fn scaffold_fastapi(root: &Path, name: &str) -> Result<()> {
    templates::write_template(&root.join("main.py"), tpl::FASTAPI_MAIN_PY, name)?;
    templates::write_template(&root.join("requirements.txt"), tpl::FASTAPI_REQUIREMENTS_TXT, name)?;
    println!("FastAPI backend project scaffolded successfully.");
    Ok(())
}

pub fn scaffold_flask(root: &Path, name: &str) -> Result<()> {
    templates::write_template(&root.join("app.py"), tpl::FLASK_APP_PY, name)?;
    templates::write_template(&root.join("requirements.txt"), tpl::FLASK_REQUIREMENTS_TXT, name)?;
    println!("Flask backend project scaffolded successfully.");
    Ok(())
}

/// Spring and tote scaffolds are README stubs only; the real project comes
/// from the framework's own generator.
pub fn scaffold_spring(root: &Path, name: &str) -> Result<()> {
    templates::write_template(&root.join("README.md"), tpl::SPRING_README_MD, name)?;
    println!("Spring backend project scaffolded (README only).");
    Ok(())
}

pub fn scaffold_tote(root: &Path, name: &str) -> Result<()> {
    templates::write_template(&root.join("README.md"), tpl::TOTE_README_MD, name)?;
    println!("Tote backend project scaffolded (README only).");
    Ok(())
}

pub fn scaffold_generic(root: &Path, name: &str) -> Result<()> {
    templates::write_template(&root.join("README.md"), tpl::GENERIC_README_MD, name)?;
    templates::write_template(
        &root.join("requirements.txt"),
        tpl::GENERIC_REQUIREMENTS_TXT,
        name,
    )?;
    println!("Generic project scaffolded successfully.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_kind_parsing() {
        assert_eq!(ProjectKind::from_input("cli"), Some(ProjectKind::Cli));
        assert_eq!(ProjectKind::from_input("WEB"), Some(ProjectKind::Web));
        assert_eq!(ProjectKind::from_input("Generic"), Some(ProjectKind::Generic));
        assert_eq!(ProjectKind::from_input("desktop"), None);
    }

    #[test]
    fn test_web_tier_parsing() {
        assert_eq!(WebTier::from_input("frontend"), Some(WebTier::Frontend));
        assert_eq!(WebTier::from_input("Backend"), Some(WebTier::Backend));
        assert_eq!(WebTier::from_input("fullstack"), None);
    }

    #[test]
    fn test_framework_parsing_covers_all_choices() {
        for choice in FrontendFramework::CHOICES {
            assert!(FrontendFramework::from_input(choice).is_some());
        }
        for choice in BackendFramework::CHOICES {
            assert!(BackendFramework::from_input(choice).is_some());
        }
        assert_eq!(FrontendFramework::from_input("vue"), None);
        assert_eq!(BackendFramework::from_input("django"), None);
    }
}
