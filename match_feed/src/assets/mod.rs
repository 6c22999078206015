//! Catalog of image assets with precomputed text descriptions.

use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::error::{read_json, Result};

/// One image in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    pub filename: String,

    /// Description as written (trimmed).
    pub description: String,

    /// Case-folded description used for matching.
    #[serde(skip)]
    description_folded: String,
}

impl Asset {
    pub fn new(filename: impl Into<String>, description: impl Into<String>) -> Self {
        let description = description.into();
        Self {
            filename: filename.into(),
            description_folded: description.to_lowercase(),
            description,
        }
    }

    /// Lower-cased description.
    pub fn folded(&self) -> &str {
        &self.description_folded
    }

    /// Whether the folded description contains `needle` (which must already be lower-case).
    pub fn mentions(&self, needle: &str) -> bool {
        self.description_folded.contains(needle)
    }
}

/// Ordered asset list. Order matters: earlier assets win ties.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    assets: Vec<Asset>,
}

impl AssetCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `asset_descriptions.json` from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let doc = read_json(path)?;
        let catalog = Self::from_document(&doc);
        tracing::debug!(path = %path.display(), assets = catalog.len(), "asset catalog loaded");
        Ok(catalog)
    }

    /// Build from either a bare list or an `{"assets": [...]}` wrapper.
    ///
    /// Entries missing a filename or description are skipped.
    pub fn from_document(doc: &Value) -> Self {
        let entries = match doc {
            Value::Object(map) => map.get("assets").and_then(Value::as_array),
            Value::Array(list) => Some(list),
            _ => None,
        };

        let mut catalog = Self::new();
        let mut skipped = 0usize;
        for item in entries.into_iter().flatten() {
            let filename = text_field(item, "filename");
            let description = text_field(item, "description");
            if filename.is_empty() || description.is_empty() {
                skipped += 1;
                continue;
            }
            catalog.push(Asset::new(filename, description));
        }
        if skipped > 0 {
            tracing::warn!(skipped, "skipped incomplete asset catalog entries");
        }
        catalog
    }

    pub fn push(&mut self, asset: Asset) {
        self.assets.push(asset);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl FromIterator<Asset> for AssetCatalog {
    fn from_iter<I: IntoIterator<Item = Asset>>(iter: I) -> Self {
        Self {
            assets: iter.into_iter().collect(),
        }
    }
}

fn text_field(item: &Value, key: &str) -> String {
    match item.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string().trim().to_string(),
    }
}
