//! Photo catalog: the immutable, pre-loaded photo records and category labels.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
    #[error("Duplicate photo id: {0}")]
    DuplicateId(String),
    #[error("Photo with empty id")]
    EmptyId,
    #[error("Invalid date {date:?} for photo {id}")]
    InvalidDate { id: String, date: String },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: String,
    pub date: String,
    pub image_url: String,
}

impl Photo {
    /// Calendar date of the photo. Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// Human readable date such as `Mar 15, 2024`; falls back to the raw string.
    pub fn display_date(&self) -> String {
        match self.parsed_date() {
            Some(d) => d.format("%b %-d, %Y").to_string(),
            None => self.date.clone(),
        }
    }

    /// First `max` tags plus the number of tags left out.
    pub fn tag_preview(&self, max: usize) -> (&[String], usize) {
        let shown = self.tags.len().min(max);
        (&self.tags[..shown], self.tags.len() - shown)
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// Category key to display label.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct CategoryMap(BTreeMap<String, String>);

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, label: &str) -> Self {
        self.0.insert(key.to_string(), label.to_string());
        self
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for CategoryMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: CategoryMap,
    photos: Vec<Photo>,
}

/// Validated photo store. Read-only once built.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: CategoryMap,
    photos: Vec<Photo>,
}

impl Catalog {
    #[cfg_attr(feature = "trace-spans", tracing::instrument(skip(photos, categories)))]
    pub fn new(photos: Vec<Photo>, categories: CategoryMap) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(photos.len());
        for photo in &photos {
            if photo.id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !seen.insert(photo.id.as_str()) {
                return Err(CatalogError::DuplicateId(photo.id.clone()));
            }
            if photo.parsed_date().is_none() {
                return Err(CatalogError::InvalidDate {
                    id: photo.id.clone(),
                    date: photo.date.clone(),
                });
            }
            if !categories.contains(&photo.category) {
                tracing::warn!(id = %photo.id, category = %photo.category, "Photo has unlabelled category");
            }
        }
        Ok(Self { categories, photos })
    }

    pub fn from_json_str(data: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(data)
            .map_err(|e| CatalogError::DeserializationError(e.to_string()))?;
        Self::new(file.photos, file.categories)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let data = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&data)?;
        tracing::info!(
            photos = catalog.photos.len(),
            categories = catalog.categories.len(),
            "Loaded catalog from {:?}",
            path
        );
        Ok(catalog)
    }

    pub fn export(&self, path: &Path) -> Result<(), CatalogError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| CatalogError::SerializationError(e.to_string()))?;
        std::fs::write(path, data)?;
        Ok(())
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn categories(&self) -> &CategoryMap {
        &self.categories
    }

    pub fn photo(&self, id: &str) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}
