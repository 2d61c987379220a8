//! `docker` - Dockerfile and compose scaffold

use anyhow::Result;
use std::path::Path;

use devmate::paths::ensure_directory;
use devmate::templates::{self, docker};

pub fn execute(name: &str) -> Result<()> {
    let root = Path::new(name);
    ensure_directory(root)?;
    write_config(root, name)?;
    Ok(())
}

pub fn write_config(root: &Path, name: &str) -> Result<()> {
    templates::write_template(&root.join("Dockerfile"), docker::DOCKERFILE, name)?;
    println!("Created Dockerfile.");
    templates::write_template(&root.join("docker-compose.yml"), docker::COMPOSE_YML, name)?;
    println!("Created docker-compose.yml.");
    Ok(())
}
