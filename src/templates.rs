//! Embedded file templates
//!
//! Templates are embedded at compile time from resources/templates/ and
//! written with create-or-overwrite semantics. The only substitution is the
//! `{{.name}}` placeholder, replaced with the project name.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const NAME_PLACEHOLDER: &str = "{{.name}}";

// =============================================================================
// Terraform project files (`tf`)
// =============================================================================

pub mod terraform {
    pub const MAIN_TF: &str = include_str!("../resources/templates/terraform/main.tf");
    pub const VARIABLES_TF: &str = include_str!("../resources/templates/terraform/variables.tf");
    pub const OUTPUTS_TF: &str = include_str!("../resources/templates/terraform/outputs.tf");
    pub const LOCALS_TF: &str = include_str!("../resources/templates/terraform/locals.tf");
}

// =============================================================================
// Docker configuration (`docker`)
// =============================================================================

pub mod docker {
    pub const DOCKERFILE: &str = include_str!("../resources/templates/docker/Dockerfile");
    pub const COMPOSE_YML: &str = include_str!("../resources/templates/docker/docker-compose.yml");
}

// =============================================================================
// Sphinx documentation stub (`doc`)
// =============================================================================

pub mod sphinx {
    pub const CONF_PY: &str = include_str!("../resources/templates/sphinx/conf.py");
}

// =============================================================================
// Project scaffolds (`scaffold`)
// =============================================================================

pub mod scaffold {
    // cli
    pub const CLI_MAIN_PY: &str = include_str!("../resources/templates/scaffold/cli/main.py");
    pub const CLI_TEST_MAIN_PY: &str =
        include_str!("../resources/templates/scaffold/cli/test_main.py");
    pub const CLI_README_MD: &str = include_str!("../resources/templates/scaffold/cli/README.md");
    pub const CLI_REQUIREMENTS_TXT: &str =
        include_str!("../resources/templates/scaffold/cli/requirements.txt");
    pub const CLI_SETUP_PY: &str = include_str!("../resources/templates/scaffold/cli/setup.py");

    // web frontends
    pub const REACT_INDEX_HTML: &str =
        include_str!("../resources/templates/scaffold/react/index.html");
    pub const REACT_INDEX_JS: &str = include_str!("../resources/templates/scaffold/react/index.js");
    pub const REACT_PACKAGE_JSON: &str =
        include_str!("../resources/templates/scaffold/react/package.json");
    pub const ANGULAR_APP_COMPONENT_TS: &str =
        include_str!("../resources/templates/scaffold/angular/app.component.ts");
    pub const ANGULAR_PACKAGE_JSON: &str =
        include_str!("../resources/templates/scaffold/angular/package.json");

    // web backends
    pub const EXPRESS_INDEX_JS: &str =
        include_str!("../resources/templates/scaffold/express/index.js");
    pub const EXPRESS_PACKAGE_JSON: &str =
        include_str!("../resources/templates/scaffold/express/package.json");
    pub const NESTJS_MAIN_TS: &str = include_str!("../resources/templates/scaffold/nestjs/main.ts");
    pub const NESTJS_APP_MODULE_TS: &str =
        include_str!("../resources/templates/scaffold/nestjs/app.module.ts");
    pub const FASTAPI_MAIN_PY: &str =
        include_str!("../resources/templates/scaffold/fastapi/main.py");
    pub const FASTAPI_REQUIREMENTS_TXT: &str =
        include_str!("../resources/templates/scaffold/fastapi/requirements.txt");
    pub const FLASK_APP_PY: &str = include_str!("../resources/templates/scaffold/flask/app.py");
    pub const FLASK_REQUIREMENTS_TXT: &str =
        include_str!("../resources/templates/scaffold/flask/requirements.txt");

    // README-only scaffolds
    pub const SPRING_README_MD: &str =
        include_str!("../resources/templates/scaffold/spring/README.md");
    pub const TOTE_README_MD: &str = include_str!("../resources/templates/scaffold/tote/README.md");

    // generic
    pub const GENERIC_README_MD: &str =
        include_str!("../resources/templates/scaffold/generic/README.md");
    pub const GENERIC_REQUIREMENTS_TXT: &str =
        include_str!("../resources/templates/scaffold/generic/requirements.txt");
}

/// Interpolate the project name into a template.
pub fn render(template: &str, project_name: &str) -> String {
    template.replace(NAME_PLACEHOLDER, project_name)
}

/// Render `template` and write it to `path`, creating parent directories.
/// Overwrites any existing file.
pub fn write_template(path: &Path, template: &str, project_name: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
        }
    }
    fs::write(path, render(template, project_name))
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_replaces_project_name() {
        let rendered = render(scaffold::CLI_SETUP_PY, "mytool");
        assert!(rendered.contains("name='mytool'"));
        assert!(rendered.contains("'mytool=main:main'"));
        assert!(!rendered.contains(NAME_PLACEHOLDER));
    }

    #[test]
    fn test_render_without_placeholder_is_identity() {
        assert_eq!(render(terraform::MAIN_TF, "anything"), terraform::MAIN_TF);
    }

    #[test]
    fn test_write_template_creates_parents_and_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("README.md");

        write_template(&path, scaffold::CLI_README_MD, "proj").unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("# proj"));

        write_template(&path, scaffold::GENERIC_README_MD, "other").unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("# other"));
    }
}
