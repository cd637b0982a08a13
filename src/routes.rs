//! Config-driven reference resolution.
//!
//! [`RouteTable`] is the stock [`ReferenceResolver`]: it knows which documents
//! exist (collection, id, slug) and how each collection maps to a URL path.
//!
//! ```text
//! pages/12  slug "about"   →  /about          (pattern "/{slug}")
//! pages/1   slug "home"    →  /               (home_slug)
//! posts/42  slug "launch"  →  /posts/launch   (pattern "/posts/{slug}")
//! events/7  slug "meetup"  →  /events/meetup  (no pattern: /<collection>/{slug})
//! ```

use crate::config::RoutesConfig;
use crate::normalize::ReferenceResolver;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A routable CMS document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub collection: String,
    pub id: String,
    pub slug: String,
}

/// Resolves `(collection, id)` to a path using known documents and patterns.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    home_slug: String,
    patterns: BTreeMap<String, String>,
    slugs: HashMap<(String, String), String>,
}

impl RouteTable {
    pub fn new(routes: &RoutesConfig) -> Self {
        Self {
            home_slug: routes.home_slug.clone(),
            patterns: routes.collections.clone(),
            slugs: HashMap::new(),
        }
    }

    /// Register a document. A later insert for the same collection and id wins.
    pub fn insert(&mut self, document: Document) {
        self.slugs
            .insert((document.collection, document.id), document.slug);
    }

    pub fn with_documents(mut self, documents: impl IntoIterator<Item = Document>) -> Self {
        for document in documents {
            self.insert(document);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    /// Path for a slug in a collection, without checking the document exists.
    pub fn path_for(&self, collection: &str, id: &str, slug: &str) -> String {
        if collection == "pages" && slug == self.home_slug {
            return "/".to_string();
        }
        match self.patterns.get(collection) {
            Some(pattern) => pattern.replace("{slug}", slug).replace("{id}", id),
            None => format!("/{collection}/{slug}"),
        }
    }
}

impl ReferenceResolver for RouteTable {
    fn resolve(&self, collection: &str, id: &str) -> Option<String> {
        let slug = self
            .slugs
            .get(&(collection.to_string(), id.to_string()))?;
        Some(self.path_for(collection, id, slug))
    }
}
