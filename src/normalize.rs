//! Link normalization.
//!
//! Turns one raw [`LinkDescriptor`] into a [`ResolvedLink`] or explains why it
//! can't. Checks run in a fixed order:
//!
//! 1. **Shape**: exactly one of reference/url/anchor must be set
//!    ([`LinkError::MalformedDescriptor`]).
//! 2. **Target**: the href is derived from the variant. Internal references go
//!    through the caller's [`ReferenceResolver`]; custom URLs are syntax-checked
//!    with the `url` crate; anchors must be a bare fragment id.
//! 3. **Label**: trimmed, must not be empty.
//!
//! Links that open in a new tab always carry `rel="noopener noreferrer"`.
//! There is no way to turn that off.

use crate::types::{LinkDescriptor, LinkKind, ResolvedLink};
use std::collections::BTreeSet;
use std::sync::OnceLock;
use thiserror::Error;

/// `rel` tokens forced onto every link that opens in a new tab.
pub const NEW_TAB_REL: &[&str] = &["noopener", "noreferrer"];

/// Schemes that run code or inline content when followed. Never rendered.
const BLOCKED_SCHEMES: &[&str] = &["javascript", "data", "vbscript"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("label is empty")]
    EmptyLabel,
    #[error("invalid URL: {0:?}")]
    InvalidUrl(String),
    #[error("invalid anchor: {0:?}")]
    InvalidAnchor(String),
    #[error("unresolvable reference: {collection}/{id}")]
    UnresolvableReference { collection: String, id: String },
    #[error("malformed link: {0}")]
    MalformedDescriptor(String),
}

/// Maps an internal document reference to a navigable path.
///
/// Implemented for plain closures, so tests and callers can pass
/// `|collection: &str, id: &str| Some(format!("/{collection}/{id}"))`.
/// `Sync` because the builder resolves references in parallel.
pub trait ReferenceResolver: Sync {
    /// Path for the document, or `None` if it doesn't exist (or isn't routable).
    fn resolve(&self, collection: &str, id: &str) -> Option<String>;
}

impl<F> ReferenceResolver for F
where
    F: Fn(&str, &str) -> Option<String> + Sync,
{
    fn resolve(&self, collection: &str, id: &str) -> Option<String> {
        self(collection, id)
    }
}

/// Normalize a single descriptor.
pub fn normalize<R>(descriptor: &LinkDescriptor, resolver: &R) -> Result<ResolvedLink, LinkError>
where
    R: ReferenceResolver + ?Sized,
{
    let kind = descriptor.kind().map_err(LinkError::MalformedDescriptor)?;

    let (href, opens_in_new_tab) = match kind {
        LinkKind::InternalReference {
            collection,
            id,
            anchor,
        } => (resolve_reference(collection, &id, anchor, resolver)?, false),
        LinkKind::CustomUrl { url, new_tab } => {
            validate_url(url)?;
            (url.to_string(), new_tab)
        }
        LinkKind::Anchor { fragment } => {
            let fragment = clean_fragment(fragment)
                .filter(|f| !f.is_empty())
                .ok_or_else(|| LinkError::InvalidAnchor(fragment.to_string()))?;
            (format!("#{fragment}"), false)
        }
    };

    let label = descriptor.label.trim();
    if label.is_empty() {
        return Err(LinkError::EmptyLabel);
    }

    let rel: BTreeSet<String> = if opens_in_new_tab {
        NEW_TAB_REL.iter().map(|r| r.to_string()).collect()
    } else {
        BTreeSet::new()
    };

    Ok(ResolvedLink {
        href,
        label: label.to_string(),
        opens_in_new_tab,
        rel,
        appearance: descriptor.appearance,
    })
}

fn resolve_reference<R>(
    collection: &str,
    id: &str,
    anchor: Option<&str>,
    resolver: &R,
) -> Result<String, LinkError>
where
    R: ReferenceResolver + ?Sized,
{
    let unresolvable = || LinkError::UnresolvableReference {
        collection: collection.to_string(),
        id: id.to_string(),
    };
    let path = resolver
        .resolve(collection, id)
        .filter(|p| !p.is_empty())
        .ok_or_else(unresolvable)?;

    // A blank anchor means "no anchor"; editors leave the field around empty.
    let fragment = match anchor.map(str::trim).filter(|a| !a.is_empty()) {
        None => return Ok(path),
        Some(raw) => clean_fragment(raw)
            .filter(|f| !f.is_empty())
            .ok_or_else(|| LinkError::InvalidAnchor(raw.to_string()))?,
    };
    Ok(format!("{path}#{fragment}"))
}

/// Strip one leading `#` and reject fragments containing whitespace.
fn clean_fragment(raw: &str) -> Option<&str> {
    let fragment = raw.strip_prefix('#').unwrap_or(raw);
    if fragment.chars().any(|c| c.is_whitespace() || c.is_control()) {
        None
    } else {
        Some(fragment)
    }
}

/// Check if a link has a URL scheme (`https:`, `mailto:`, ...).
fn has_scheme(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos].starts_with(|c: char| c.is_ascii_alphabetic())
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Basic URI syntax check: absolute URLs must parse, relative references must
/// parse against a dummy base. Script-capable schemes are rejected. The URL
/// itself is never rewritten.
fn validate_url(url: &str) -> Result<(), LinkError> {
    let invalid = || LinkError::InvalidUrl(url.to_string());
    if url.is_empty() || url.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid());
    }

    if has_scheme(url) {
        let parsed = url::Url::parse(url).map_err(|_| invalid())?;
        if BLOCKED_SCHEMES.contains(&parsed.scheme()) {
            return Err(invalid());
        }
        Ok(())
    } else {
        static BASE: OnceLock<url::Url> = OnceLock::new();
        let base = BASE.get_or_init(|| {
            url::Url::parse("http://localhost/").expect("static base URL must parse")
        });
        base.join(url).map(|_| ()).map_err(|_| invalid())
    }
}
