//! Shared test utilities: resolvers, link builders and fixture lookups.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let links = build(&descriptors, &fixed_path("/x"));
//! assert_eq!(hrefs(&links), vec!["/x"]);
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::normalize::NEW_TAB_REL;
use crate::types::{Appearance, HeaderRecord, ResolvedLink};

// =========================================================================
// Resolvers
// =========================================================================

/// Resolver that knows no documents.
pub fn no_references() -> impl Fn(&str, &str) -> Option<String> + Sync {
    |_: &str, _: &str| None
}

/// Resolver that maps every reference to the same path.
pub fn fixed_path(path: &str) -> impl Fn(&str, &str) -> Option<String> + Sync {
    let path = path.to_string();
    move |_: &str, _: &str| Some(path.clone())
}

// =========================================================================
// Resolved link builders
// =========================================================================

pub fn resolved(href: &str, label: &str) -> ResolvedLink {
    ResolvedLink {
        href: href.to_string(),
        label: label.to_string(),
        opens_in_new_tab: false,
        rel: BTreeSet::new(),
        appearance: Appearance::Link,
    }
}

pub fn resolved_new_tab(href: &str, label: &str) -> ResolvedLink {
    ResolvedLink {
        opens_in_new_tab: true,
        rel: NEW_TAB_REL.iter().map(|r| r.to_string()).collect(),
        ..resolved(href, label)
    }
}

// =========================================================================
// Extractors
// =========================================================================

/// All hrefs in list order.
pub fn hrefs(links: &[ResolvedLink]) -> Vec<&str> {
    links.iter().map(|l| l.href.as_str()).collect()
}

/// `rel` tokens in their (sorted) set order.
pub fn rel_tokens(link: &ResolvedLink) -> Vec<&str> {
    link.rel.iter().map(String::as_str).collect()
}

pub fn header_from_json(json: &str) -> HeaderRecord {
    serde_json::from_str(json).unwrap_or_else(|e| panic!("bad header json: {e}\n{json}"))
}

// =========================================================================
// Fixtures
// =========================================================================

/// Path of a file under `fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}
