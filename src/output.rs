//! CLI output formatting.
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that does the I/O. Format functions are
//! pure.
//!
//! ## Build report
//!
//! ```text
//! Navigation
//! 001 Home → /
//! 002 GitHub → https://github.com/example (new tab)
//! 003 Contact → #contact [button]
//!
//! Skipped
//! 004 Old post
//!     unresolvable reference: posts/404
//!
//! Duplicates
//! 005 /posts
//!
//! 3 of 5 links, 1 skipped, 1 duplicate
//! ```
//!
//! Skipped and duplicate entries keep their authored position so editors can
//! find them in the CMS.

use crate::navigation::BuildReport;
use crate::types::{Appearance, ResolvedLink};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn link_line(index: usize, link: &ResolvedLink) -> String {
    let mut line = format!("{} {} → {}", format_index(index), link.label, link.href);
    if link.opens_in_new_tab {
        line.push_str(" (new tab)");
    }
    if link.appearance == Appearance::Button {
        line.push_str(" [button]");
    }
    line
}

/// Format the result of building a navigation list.
pub fn format_build_report(report: &BuildReport) -> Vec<String> {
    let mut lines = vec!["Navigation".to_string()];
    if report.links.is_empty() {
        lines.push("    (empty)".to_string());
    }
    for (i, link) in report.links.iter().enumerate() {
        lines.push(link_line(i + 1, link));
    }

    lines.extend(format_problems(report));

    lines.push(String::new());
    lines.push(report.to_string());
    lines
}

/// Format only what was left out. Empty when the report is clean.
pub fn format_problems(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();

    if !report.skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for entry in &report.skipped {
            let label = entry.label.trim();
            let label = if label.is_empty() { "(no label)" } else { label };
            lines.push(format!("{} {}", format_index(entry.index + 1), label));
            lines.push(format!("    {}", entry.error));
        }
    }

    if !report.duplicates.is_empty() {
        lines.push(String::new());
        lines.push("Duplicates".to_string());
        for entry in &report.duplicates {
            lines.push(format!("{} {}", format_index(entry.index + 1), entry.href));
        }
    }

    lines
}

/// Print the full build report to stdout.
pub fn print_build_report(report: &BuildReport) {
    for line in format_build_report(report) {
        println!("{}", line);
    }
}

/// Print skipped/duplicate entries to stderr, keeping stdout for markup.
pub fn print_problems(report: &BuildReport) {
    for line in format_problems(report) {
        eprintln!("{}", line);
    }
}
