//! Shared types for the navigation pipeline.
//!
//! The raw types ([`HeaderRecord`], [`NavItem`], [`LinkDescriptor`]) mirror the
//! JSON the CMS hands us and are deserialized as-is. Nothing in them is trusted:
//! [`LinkDescriptor::kind`] turns the loose field bag into a closed [`LinkKind`]
//! before any other validation happens. [`ResolvedLink`] is the normalized,
//! render-ready output.
//!
//! A nav item whose link doesn't fit [`LinkDescriptor`] (an unknown enum value,
//! a number where a string belongs) still deserializes: it becomes a descriptor
//! that remembers the serde error, and [`LinkDescriptor::kind`] reports it. One
//! bad row never fails the whole header.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;

/// Header global as published by the CMS.
///
/// ```json
/// { "navItems": [ { "link": { "type": "custom", "url": "/about", "label": "About" } } ] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderRecord {
    #[serde(default)]
    pub nav_items: Vec<NavItem>,
}

impl HeaderRecord {
    /// Borrow the link descriptors in authored order.
    pub fn descriptors(&self) -> Vec<&LinkDescriptor> {
        self.nav_items.iter().map(|item| &item.link).collect()
    }
}

/// One row of the header's `navItems` array.
#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub link: LinkDescriptor,
}

impl<'de> Deserialize<'de> for NavItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut row = Value::deserialize(deserializer)?;
        let link = row.get_mut("link").map(Value::take).unwrap_or(Value::Null);
        Ok(NavItem {
            link: LinkDescriptor::from_value(link),
        })
    }
}

/// Variant tag as written by the CMS link field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Reference,
    Custom,
    Anchor,
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LinkType::Reference => "reference",
            LinkType::Custom => "custom",
            LinkType::Anchor => "anchor",
        };
        f.write_str(name)
    }
}

/// Presentation hint chosen by the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    #[serde(alias = "default")]
    Link,
    #[serde(alias = "outline")]
    Button,
}

/// Document id as stored in a relationship field: Postgres-backed collections
/// emit numbers, Mongo-backed ones emit strings. Fetched with `depth >= 1`,
/// the field holds the whole related document instead; only its `id` is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentId {
    Number(u64),
    Text(String),
    Populated { id: Box<DocumentId> },
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentId::Number(n) => write!(f, "{n}"),
            DocumentId::Text(s) => f.write_str(s),
            DocumentId::Populated { id } => write!(f, "{id}"),
        }
    }
}

/// Relationship to another CMS document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReference {
    pub relation_to: String,
    pub value: DocumentId,
    /// Optional in-page fragment appended after the resolved path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

/// A navigation link exactly as authored, before validation.
///
/// Exactly one of `reference`, `url` and `anchor` should be populated. The CMS
/// does not guarantee that, so the check lives in [`LinkDescriptor::kind`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDescriptor {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<LinkType>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub appearance: Appearance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_tab: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<DocumentReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    /// Why the raw JSON didn't fit this struct, when it didn't.
    #[serde(skip)]
    pub malformed: Option<String>,
}

/// The closed set of link shapes a descriptor can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind<'a> {
    InternalReference {
        collection: &'a str,
        id: String,
        anchor: Option<&'a str>,
    },
    CustomUrl {
        url: &'a str,
        new_tab: bool,
    },
    Anchor {
        fragment: &'a str,
    },
}

impl LinkDescriptor {
    /// Custom URL descriptor, mostly for tests and programmatic construction.
    pub fn custom(label: &str, url: &str) -> Self {
        Self {
            link_type: Some(LinkType::Custom),
            label: label.to_string(),
            url: Some(url.to_string()),
            ..Self::default()
        }
    }

    /// Internal reference descriptor.
    pub fn reference(label: &str, collection: &str, id: &str) -> Self {
        Self {
            link_type: Some(LinkType::Reference),
            label: label.to_string(),
            reference: Some(DocumentReference {
                relation_to: collection.to_string(),
                value: DocumentId::Text(id.to_string()),
                anchor: None,
            }),
            ..Self::default()
        }
    }

    /// In-page anchor descriptor.
    pub fn anchor(label: &str, fragment: &str) -> Self {
        Self {
            link_type: Some(LinkType::Anchor),
            label: label.to_string(),
            anchor: Some(fragment.to_string()),
            ..Self::default()
        }
    }

    /// Deserialize a raw link object, keeping the failure instead of returning
    /// it. The label is salvaged when present so reports can name the row.
    pub fn from_value(value: Value) -> Self {
        let label = value
            .get("label")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        serde_json::from_value(value).unwrap_or_else(|e| Self {
            label,
            malformed: Some(e.to_string()),
            ..Self::default()
        })
    }

    /// Which variant fields are populated, in declaration order.
    fn populated(&self) -> Vec<LinkType> {
        let mut found = Vec::new();
        if self.reference.is_some() {
            found.push(LinkType::Reference);
        }
        if self.url.is_some() {
            found.push(LinkType::Custom);
        }
        if self.anchor.is_some() {
            found.push(LinkType::Anchor);
        }
        found
    }

    /// Classify the descriptor into exactly one [`LinkKind`].
    ///
    /// Returns a human-readable reason when the raw JSON didn't deserialize,
    /// when zero or several variants are populated, or when the `type` tag names a variant that is not the one
    /// populated.
    pub fn kind(&self) -> Result<LinkKind<'_>, String> {
        if let Some(reason) = &self.malformed {
            return Err(reason.clone());
        }
        let populated = self.populated();
        let variant = match populated.as_slice() {
            [] => return Err("no link target set (expected reference, url or anchor)".into()),
            [one] => *one,
            many => {
                let names: Vec<String> = many.iter().map(|t| t.to_string()).collect();
                return Err(format!("several link targets set: {}", names.join(", ")));
            }
        };
        match self.link_type {
            Some(tag) if tag != variant => {
                return Err(format!("type is '{tag}' but only '{variant}' is set"));
            }
            _ => {}
        }

        Ok(match variant {
            LinkType::Reference => {
                let reference = self.reference.as_ref().ok_or("missing reference")?;
                LinkKind::InternalReference {
                    collection: &reference.relation_to,
                    id: reference.value.to_string(),
                    anchor: reference.anchor.as_deref(),
                }
            }
            LinkType::Custom => LinkKind::CustomUrl {
                url: self.url.as_deref().ok_or("missing url")?,
                new_tab: self.new_tab.unwrap_or(false),
            },
            LinkType::Anchor => LinkKind::Anchor {
                fragment: self.anchor.as_deref().ok_or("missing anchor")?,
            },
        })
    }
}

/// A validated link, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLink {
    pub href: String,
    pub label: String,
    pub opens_in_new_tab: bool,
    /// Ordered so the rendered `rel` attribute is stable.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub rel: BTreeSet<String>,
    pub appearance: Appearance,
}
