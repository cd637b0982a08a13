//! Navigation list building.
//!
//! Applies the list-level policy on top of [`normalize`]:
//!
//! - **Skip, don't fail**: a descriptor that doesn't normalize is dropped and
//!   recorded in [`BuildReport::skipped`]. One broken link must never take the
//!   whole header down.
//! - **First href wins**: later links pointing at an href already in the list
//!   are dropped and recorded in [`BuildReport::duplicates`].
//! - **Authored order**: the output is always a subsequence of the input.
//!
//! Reference resolution is the only step with latency, so descriptors are
//! normalized in parallel with rayon. `collect` on an indexed parallel
//! iterator keeps input order, so completion order never leaks into the list.

use crate::normalize::{LinkError, ReferenceResolver, normalize};
use crate::types::{HeaderRecord, LinkDescriptor, ResolvedLink};
use rayon::prelude::*;
use std::collections::HashSet;
use std::fmt;

/// A descriptor that was dropped because it failed to normalize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Position in the authored list (0-based).
    pub index: usize,
    /// Label as authored, untrimmed, for reporting.
    pub label: String,
    pub error: LinkError,
}

/// A link dropped because an earlier entry already resolved to the same href.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateEntry {
    pub index: usize,
    pub href: String,
}

/// Result of building a navigation list, with everything that was left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub links: Vec<ResolvedLink>,
    pub skipped: Vec<SkippedEntry>,
    pub duplicates: Vec<DuplicateEntry>,
}

impl BuildReport {
    /// Number of descriptors that went in.
    pub fn total(&self) -> usize {
        self.links.len() + self.skipped.len() + self.duplicates.len()
    }

    /// True when every descriptor made it into the list.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.duplicates.is_empty()
    }
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} links", self.links.len(), self.total())?;
        if !self.skipped.is_empty() {
            write!(f, ", {} skipped", self.skipped.len())?;
        }
        if !self.duplicates.is_empty() {
            write!(f, ", {} duplicate", self.duplicates.len())?;
        }
        Ok(())
    }
}

/// Build the navigation list, discarding the report.
pub fn build<'a, I, R>(descriptors: I, resolver: &R) -> Vec<ResolvedLink>
where
    I: IntoIterator<Item = &'a LinkDescriptor>,
    R: ReferenceResolver + ?Sized,
{
    build_report(descriptors, resolver).links
}

/// Build the navigation list from a header record's `navItems`.
pub fn build_header<R>(header: &HeaderRecord, resolver: &R) -> BuildReport
where
    R: ReferenceResolver + ?Sized,
{
    build_report(header.descriptors(), resolver)
}

/// Build the navigation list and report skipped and duplicate entries.
pub fn build_report<'a, I, R>(descriptors: I, resolver: &R) -> BuildReport
where
    I: IntoIterator<Item = &'a LinkDescriptor>,
    R: ReferenceResolver + ?Sized,
{
    let descriptors: Vec<&LinkDescriptor> = descriptors.into_iter().collect();

    let results: Vec<Result<ResolvedLink, LinkError>> = descriptors
        .par_iter()
        .map(|descriptor| normalize(descriptor, resolver))
        .collect();

    let mut report = BuildReport::default();
    let mut seen: HashSet<String> = HashSet::new();

    for (index, (descriptor, result)) in descriptors.iter().zip(results).enumerate() {
        match result {
            Ok(link) => {
                if seen.insert(link.href.clone()) {
                    report.links.push(link);
                } else {
                    report.duplicates.push(DuplicateEntry {
                        index,
                        href: link.href,
                    });
                }
            }
            Err(error) => report.skipped.push(SkippedEntry {
                index,
                label: descriptor.label.clone(),
                error,
            }),
        }
    }

    report
}
