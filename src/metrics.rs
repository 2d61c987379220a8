//! Best-effort project metrics for the dashboard
//!
//! Every metric here degrades instead of failing: a missing tool or an
//! unparseable output becomes a status value, never an error return.

use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::process::Command;

// =============================================================================
// Test collection count (pytest)
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum TestMetric {
    Collected(usize),
    Unknown,
    Error(String),
}

impl fmt::Display for TestMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestMetric::Collected(count) => write!(f, "{count}"),
            TestMetric::Unknown => write!(f, "Unknown"),
            TestMetric::Error(err) => write!(f, "Error: {err}"),
        }
    }
}

/// Run pytest in collect-only mode and scrape the collected-test count.
pub fn test_metric(path: &Path) -> TestMetric {
    let output = match Command::new("pytest")
        .arg("--collect-only")
        .arg(path)
        .output()
    {
        Ok(output) => output,
        Err(err) => return TestMetric::Error(err.to_string()),
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    match parse_collected_count(&stdout) {
        Some(count) => TestMetric::Collected(count),
        None => TestMetric::Unknown,
    }
}

/// Find the first line containing the token `collected` followed by an
/// integer.
///
/// This textual contract is tied to pytest's summary line ("collected N
/// items") and must stay exactly this loose for compatibility with it.
pub fn parse_collected_count(output: &str) -> Option<usize> {
    for line in output.lines() {
        if !line.contains("collected") {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        for (i, part) in parts.iter().enumerate() {
            if *part == "collected" {
                if let Some(count) = parts.get(i + 1).and_then(|next| next.parse().ok()) {
                    return Some(count);
                }
            }
        }
    }
    None
}

// =============================================================================
// Documentation status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocStatus {
    Configured,
    MissingConf,
    NotSetUp,
}

impl fmt::Display for DocStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            DocStatus::Configured => "Documentation is set up.",
            DocStatus::MissingConf => "Docs folder exists but 'conf.py' is missing.",
            DocStatus::NotSetUp => "Documentation not set up.",
        };
        write!(f, "{message}")
    }
}

/// Reduce the docs/ directory of `project_path` to a three-valued status.
pub fn doc_status(project_path: &Path) -> DocStatus {
    let docs_dir = project_path.join("docs");
    if !docs_dir.exists() {
        return DocStatus::NotSetUp;
    }
    if docs_dir.join("conf.py").exists() {
        DocStatus::Configured
    } else {
        DocStatus::MissingConf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_collected_count_from_pytest_summary() {
        let output = "\
============================= test session starts ==============================
platform linux -- Python 3.11.4, pytest-7.4.0, pluggy-1.2.0
rootdir: /tmp/proj
collected 12 items

<Module test_main.py>
";
        assert_eq!(parse_collected_count(output), Some(12));
    }

    #[test]
    fn test_parse_collected_count_ignores_non_integer_token() {
        assert_eq!(parse_collected_count("collected items\n"), None);
    }

    #[test]
    fn test_parse_collected_count_no_summary_line() {
        assert_eq!(parse_collected_count("no tests ran in 0.01s\n"), None);
    }

    #[test]
    fn test_parse_collected_count_takes_first_matching_line() {
        let output = "collected 3 items\ncollected 7 items\n";
        assert_eq!(parse_collected_count(output), Some(3));
    }

    #[test]
    fn test_metric_display() {
        assert_eq!(TestMetric::Collected(5).to_string(), "5");
        assert_eq!(TestMetric::Unknown.to_string(), "Unknown");
        assert_eq!(
            TestMetric::Error("boom".to_string()).to_string(),
            "Error: boom"
        );
    }

    #[test]
    fn test_doc_status_not_set_up() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(doc_status(tmp.path()), DocStatus::NotSetUp);
    }

    #[test]
    fn test_doc_status_missing_conf() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("docs")).unwrap();
        assert_eq!(doc_status(tmp.path()), DocStatus::MissingConf);
    }

    #[test]
    fn test_doc_status_configured() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("docs")).unwrap();
        fs::write(tmp.path().join("docs").join("conf.py"), "# Sphinx configuration\n").unwrap();
        assert_eq!(doc_status(tmp.path()), DocStatus::Configured);
    }
}
