//! `dashboard` - best-effort project metrics

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use devmate::git::{self, GitMetrics};
use devmate::metrics::{self, DocStatus, TestMetric};

#[derive(Serialize)]
struct Dashboard {
    tests: TestMetric,
    git: Option<GitMetrics>,
    docs: DocStatus,
}

pub fn execute(path: &str, json: bool) -> Result<()> {
    let path = Path::new(path);
    let dashboard = Dashboard {
        tests: metrics::test_metric(path),
        git: git::collect(path),
        docs: metrics::doc_status(path),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    println!("Developer Dashboard:");
    println!("- Total Tests Collected: {}", dashboard.tests);
    match &dashboard.git {
        Some(repo) => {
            println!("- Git Branch: {}", repo.branch);
            println!("- Uncommitted Changes: {}", repo.uncommitted);
        }
        None => println!("- Git Repository: Not detected"),
    }
    println!("- Documentation: {}", dashboard.docs);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dashboard_on_empty_directory_never_fails() {
        let tmp = TempDir::new().unwrap();
        execute(tmp.path().to_str().unwrap(), false).unwrap();
        execute(tmp.path().to_str().unwrap(), true).unwrap();
    }

    #[test]
    fn test_json_shape() {
        let tmp = TempDir::new().unwrap();
        let dashboard = Dashboard {
            tests: metrics::test_metric(tmp.path()),
            git: git::collect(tmp.path()),
            docs: metrics::doc_status(tmp.path()),
        };

        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&dashboard).unwrap()).unwrap();
        assert!(value.get("tests").is_some());
        assert!(value.get("git").is_some());
        assert!(value.get("docs").is_some());
        assert!(value["git"].is_null());
        assert_eq!(value["docs"], "not_set_up");
    }
}
