//! Loaders for the JSON the CMS exports.
//!
//! - `header.json`: the header global, `{ "navItems": [ { "link": ... } ] }`
//! - `documents.json`: routable documents, `[{ "collection", "id", "slug" }]`

use crate::routes::Document;
use crate::types::HeaderRecord;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_header(path: &Path) -> Result<HeaderRecord, InputError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn load_documents(path: &Path) -> Result<Vec<Document>, InputError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
