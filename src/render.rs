//! Framework-agnostic rendering of a navigation list.
//!
//! [`render`] maps each [`ResolvedLink`] to a [`RenderedElement`]: plain data
//! describing one anchor with its accessibility attributes. Turning elements
//! into markup is the job of an adapter ([`crate::html`] for server-side HTML);
//! nothing here knows about a UI framework.
//!
//! The list always ends with a search affordance. It is icon-only, so its text
//! is marked [`TextVisibility::ScreenReaderOnly`] and repeated in `aria-label`.

use crate::config::SearchConfig;
use crate::types::{Appearance, ResolvedLink};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementTag {
    Anchor,
}

/// What an element stands for, so adapters can pick an icon or a layout slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementRole {
    Link,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextVisibility {
    Visible,
    ScreenReaderOnly,
}

/// One interactive element, ready for any UI adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedElement {
    pub tag: ElementTag,
    pub role: ElementRole,
    pub href: String,
    pub text: String,
    pub text_visibility: TextVisibility,
    pub appearance: Appearance,
    /// Extra HTML attributes (`target`, `rel`, `aria-label`, `aria-current`).
    pub attributes: BTreeMap<String, String>,
}

impl RenderedElement {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Everything the renderer needs from the surrounding page.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Path of the page being rendered; a link with this exact href gets
    /// `aria-current="page"`.
    pub current_path: Option<String>,
    pub search: SearchConfig,
}

impl RenderContext {
    pub fn with_current_path(mut self, path: impl Into<String>) -> Self {
        self.current_path = Some(path.into());
        self
    }
}

/// Render a navigation list, appending the search element last.
pub fn render(links: &[ResolvedLink], context: &RenderContext) -> Vec<RenderedElement> {
    links
        .iter()
        .map(|link| render_link(link, context))
        .chain(std::iter::once(search_element(&context.search)))
        .collect()
}

fn render_link(link: &ResolvedLink, context: &RenderContext) -> RenderedElement {
    let mut attributes = BTreeMap::new();
    if link.opens_in_new_tab {
        attributes.insert("target".to_string(), "_blank".to_string());
    }
    if !link.rel.is_empty() {
        let rel: Vec<&str> = link.rel.iter().map(String::as_str).collect();
        attributes.insert("rel".to_string(), rel.join(" "));
    }
    attributes.insert("aria-label".to_string(), link.label.clone());
    if context.current_path.as_deref() == Some(link.href.as_str()) {
        attributes.insert("aria-current".to_string(), "page".to_string());
    }

    RenderedElement {
        tag: ElementTag::Anchor,
        role: ElementRole::Link,
        href: link.href.clone(),
        text: link.label.clone(),
        text_visibility: TextVisibility::Visible,
        appearance: link.appearance,
        attributes,
    }
}

fn search_element(search: &SearchConfig) -> RenderedElement {
    let mut attributes = BTreeMap::new();
    attributes.insert("aria-label".to_string(), search.label.clone());

    RenderedElement {
        tag: ElementTag::Anchor,
        role: ElementRole::Search,
        href: search.href.clone(),
        text: search.label.clone(),
        text_visibility: TextVisibility::ScreenReaderOnly,
        appearance: Appearance::Link,
        attributes,
    }
}
