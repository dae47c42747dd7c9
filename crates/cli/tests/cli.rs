//! Integration tests for the url-breadcrumbs CLI.
//!
//! These tests run the binary against a temporary term catalog and check the
//! rendered output for the common page kinds.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const BASE: &str = "https://site.test";

const TERMS: &str = r#"
categories:
  - slug: electronics
    name: Electronics
    id: 5
    url: https://site.test/electronics
  - slug: phones
    name: Phones
    id: 9
    url: https://site.test/electronics/phones
tags:
  - slug: sale
    name: Sale
    id: 31
    url: https://site.test/tag/sale
"#;

/// Temporary directory holding a term catalog
struct Fixture {
    dir: TempDir,
    terms: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let terms = dir.path().join("terms.yaml");
        fs::write(&terms, TERMS).expect("Failed to write terms");
        Self { dir, terms }
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write fixture file");
        path
    }

    fn resolve(&self, url: &str) -> Command {
        let mut cmd = Command::cargo_bin("url-breadcrumbs").expect("Failed to find binary");
        cmd.arg("resolve")
            .arg(url)
            .arg("--base")
            .arg(BASE)
            .arg("--terms")
            .arg(&self.terms);
        cmd
    }
}

#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("url-breadcrumbs").expect("Failed to find binary");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("url-breadcrumbs").expect("Failed to find binary");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_resolve_category_html() {
    let fixture = Fixture::new();
    fixture
        .resolve("https://site.test/electronics/phones")
        .args(["--active-term", "9", "--format", "html"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You are here: <a href=\"https://site.test\">Home</a> \u{bb} <a href=\"https://site.test/electronics\">Electronics</a> \u{bb} Phones</div>",
        ))
        .stdout(predicate::str::contains("\"@type\":\"BreadcrumbList\""));
}

#[test]
fn test_resolve_single_item_json() {
    let fixture = Fixture::new();
    let output = fixture
        .resolve("https://site.test/electronics/my-article")
        .args(["--page", "single", "--title", "My Article"])
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let trail = report["trail"].as_array().unwrap();

    assert_eq!(trail.len(), 3);
    assert_eq!(trail[2]["kind"], "leaf");
    assert_eq!(trail[2]["label"], "My Article");
    assert!(!report["visible_trail"].as_str().unwrap().contains("My Article"));
}

#[test]
fn test_resolve_deep_url_has_no_trail() {
    let fixture = Fixture::new();
    fixture
        .resolve("https://site.test/a/b/c/d/e/f")
        .args(["--format", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No trail:"))
        .stdout(predicate::str::contains("more than the limit of 5"));
}

#[test]
fn test_resolve_eligible_override() {
    let fixture = Fixture::new();
    fixture
        .resolve("https://site.test/electronics/phones")
        .args(["--eligible", "false", "--format", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page does not take breadcrumbs"));

    fixture
        .resolve("https://site.test/electronics/phones")
        .args(["--page", "other", "--eligible", "true", "--format", "html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"@type\":\"BreadcrumbList\""));
}

#[test]
fn test_resolve_rejects_relative_url() {
    let fixture = Fixture::new();
    fixture
        .resolve("/electronics")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid URL"));
}

#[test]
fn test_resolve_missing_catalog() {
    let mut cmd = Command::cargo_bin("url-breadcrumbs").expect("Failed to find binary");
    cmd.args([
        "resolve",
        "https://site.test/electronics",
        "--base",
        BASE,
        "--terms",
        "/nonexistent/terms.yaml",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to load term catalog"));
}

#[test]
fn test_resolve_with_config() {
    let fixture = Fixture::new();
    let config = fixture.write("config.yaml", "home_label: Start\nmax_segments: 1\n");

    fixture
        .resolve("https://site.test/electronics")
        .arg("--config")
        .arg(&config)
        .args(["--format", "html"])
        .assert()
        .success()
        .stdout(predicate::str::contains(">Start</a>"));

    fixture
        .resolve("https://site.test/electronics/phones")
        .arg("--config")
        .arg(&config)
        .args(["--format", "html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<!-- no breadcrumbs"));
}

#[test]
fn test_output_file() {
    let fixture = Fixture::new();
    let out = fixture.dir.path().join("out.html");

    fixture
        .resolve("https://site.test/electronics")
        .args(["--format", "html", "--output"])
        .arg(&out)
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("<div class=\"breadcrumbs\""));
}

#[test]
fn test_batch_summary() {
    let fixture = Fixture::new();
    let requests = fixture.write(
        "requests.yaml",
        r#"
- url: https://site.test/electronics/phones
  active_term: 9
- url: https://site.test/tag/sale
  page: tag_listing
  active_term: 31
- url: https://site.test/electronics/my-article
  page: single_item
  title: My Article
- url: https://site.test/a/b/c/d/e/f
- url: https://site.test/electronics
  page: other
"#,
    );

    let mut cmd = Command::cargo_bin("url-breadcrumbs").expect("Failed to find binary");
    cmd.arg("batch")
        .arg(&requests)
        .args(["--base", BASE, "--threads", "2", "--format", "summary", "--terms"])
        .arg(&fixture.terms)
        .assert()
        .success()
        .stdout(predicate::str::contains("Requests: 5"))
        .stdout(predicate::str::contains("With trail: 3"))
        .stdout(predicate::str::contains("Home > Sale"))
        .stdout(predicate::str::contains("Home > Electronics > My Article"))
        .stdout(predicate::str::contains("Page does not take breadcrumbs"));
}

#[test]
fn test_batch_requires_base() {
    let fixture = Fixture::new();
    let requests = fixture.write("requests.yaml", "- url: https://site.test/electronics\n");

    let mut cmd = Command::cargo_bin("url-breadcrumbs").expect("Failed to find binary");
    cmd.arg("batch")
        .arg(&requests)
        .arg("--terms")
        .arg(&fixture.terms)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no base URL"));
}
