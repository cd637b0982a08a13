//! Runs the `cms-nav` binary against the files in `fixtures/`.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

fn cms_nav(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cms-nav"))
        .args(args)
        .output()
        .unwrap()
}

fn fixture_args(command: &str) -> Vec<String> {
    let dir = fixtures();
    vec![
        command.to_string(),
        "--config-dir".to_string(),
        dir.display().to_string(),
        "--header".to_string(),
        dir.join("header.json").display().to_string(),
        "--documents".to_string(),
        dir.join("documents.json").display().to_string(),
    ]
}

fn run(args: &[String]) -> Output {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    cms_nav(&args)
}

#[test]
fn render_prints_nav_html() {
    let out = run(&fixture_args("render"));
    assert!(out.status.success());
    let html = String::from_utf8_lossy(&out.stdout);

    assert!(html.starts_with(r#"<nav class="header-nav" aria-label="Main">"#));
    assert!(html.contains(r#"<a href="/" aria-label="Home">Home</a>"#));
    assert!(html.contains(r#"href="/about#team""#));
    assert!(html.contains(r#"rel="noopener noreferrer""#));
    assert!(html.contains(r##"<a class="button" href="#contact""##));
    // Search label comes from fixtures/nav.toml
    assert!(html.contains(r#"<span class="sr-only">Search the site</span>"#));
    assert!(!html.contains("Old post"));
    assert!(!html.contains(">Blog<"));
}

#[test]
fn render_reports_problems_on_stderr() {
    let out = run(&fixture_args("render"));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("006 Old post"));
    assert!(stderr.contains("unresolvable reference: posts/404"));
    assert!(stderr.contains("007 /posts"));
}

#[test]
fn render_marks_current_page() {
    let mut args = fixture_args("render");
    args.extend(["--current".to_string(), "/posts".to_string()]);
    let html = String::from_utf8_lossy(&run(&args).stdout).into_owned();
    assert!(html.contains(r#"<a href="/posts" aria-label="Posts" aria-current="page">Posts</a>"#));
}

#[test]
fn render_json_lists_elements() {
    let mut args = fixture_args("render");
    args.push("--json".to_string());
    let out = run(&args);
    assert!(out.status.success());
    let elements: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let hrefs: Vec<&str> = elements
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["href"].as_str().unwrap())
        .collect();
    assert_eq!(
        hrefs,
        vec![
            "/",
            "/about#team",
            "/posts",
            "https://github.com/example",
            "#contact",
            "/search"
        ]
    );
}

#[test]
fn check_fails_when_links_are_skipped() {
    let out = run(&fixture_args("check"));
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("004 GitHub → https://github.com/example (new tab)"));
    assert!(stdout.contains("5 of 7 links, 1 skipped, 1 duplicate"));
}

#[test]
fn check_passes_on_clean_header() {
    let tmp = TempDir::new().unwrap();
    let header = tmp.path().join("header.json");
    std::fs::write(
        &header,
        r#"{ "navItems": [ { "link": { "url": "/about", "label": "About" } } ] }"#,
    )
    .unwrap();
    let out = cms_nav(&[
        "check",
        "--config-dir",
        tmp.path().to_str().unwrap(),
        "--header",
        header.to_str().unwrap(),
    ]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("1 of 1 links"));
}

#[test]
fn missing_header_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let out = cms_nav(&[
        "render",
        "--config-dir",
        tmp.path().to_str().unwrap(),
        "--header",
        tmp.path().join("nope.json").to_str().unwrap(),
    ]);
    assert!(!out.status.success());
}

#[test]
fn gen_config_prints_stock_toml() {
    let out = cms_nav(&["gen-config"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("[search]"));
    assert!(stdout.contains("[routes.collections]"));
}
