//! # cms-nav
//!
//! Resolves the header navigation a CMS editor authored into links a page can
//! render. The CMS is the system of record; this crate only reads its JSON.
//!
//! # Architecture: Three Pure Stages
//!
//! ```text
//! 1. Normalize  LinkDescriptor  →  ResolvedLink      (one link, may fail)
//! 2. Build      [LinkDescriptor] →  [ResolvedLink]    (skip failures, dedupe)
//! 3. Render     [ResolvedLink]   →  [RenderedElement] (+ trailing search)
//! ```
//!
//! Each stage is a plain function with no I/O and no shared state. The only
//! outside capability is the [`normalize::ReferenceResolver`] that turns an
//! internal document reference into a path; the caller passes it in
//! explicitly. [`routes::RouteTable`] is the config-driven implementation.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Raw CMS records (`HeaderRecord`, `LinkDescriptor`) and `ResolvedLink` |
//! | [`normalize`] | Stage 1 — validates one descriptor, forces `rel` on new-tab links |
//! | [`navigation`] | Stage 2 — ordered list building, skip-and-report, dedupe by href |
//! | [`render`] | Stage 3 — framework-agnostic `RenderedElement`s |
//! | [`html`] | Maud adapter: elements → `<nav>` markup |
//! | [`routes`] | `RouteTable` resolver: collection patterns + known documents |
//! | [`config`] | `nav.toml` loading, merging, and validation |
//! | [`input`] | JSON loaders for header and document exports |
//! | [`output`] | CLI report formatting |
//!
//! # Design Decisions
//!
//! ## Skip, Don't Fail
//!
//! A link the normalizer rejects is dropped from the list and recorded in the
//! [`navigation::BuildReport`]. The header is on every page; one stale
//! reference must not break all of them. Pipelines that want a hard failure
//! run `cms-nav check`, which exits non-zero when anything was skipped.
//!
//! ## Closed Link Kinds
//!
//! The CMS link field is a bag of optional fields. [`types::LinkDescriptor::kind`]
//! converts it into [`types::LinkKind`] up front, so a descriptor with zero or
//! several targets is rejected once instead of being guessed at downstream.
//!
//! ## Data Out, Markup Separately
//!
//! [`render::render`] returns data, not markup, so it is testable without a UI
//! runtime and any front-end can adapt it. [`html`] is one such adapter.

pub mod config;
pub mod html;
pub mod input;
pub mod navigation;
pub mod normalize;
pub mod output;
pub mod render;
pub mod routes;
pub mod types;

pub use navigation::{BuildReport, build, build_header, build_report};
pub use normalize::{LinkError, ReferenceResolver, normalize};
pub use render::{RenderContext, RenderedElement, render};
pub use types::{HeaderRecord, LinkDescriptor, ResolvedLink};

#[cfg(test)]
pub(crate) mod test_helpers;
