//! Static lookup data shared by the extractor, the provider adapter and the
//! presentation layer.
//!
//! Tables are built once at startup, either from the built-in data or from a
//! JSON override file, and then shared read-only behind an `Arc`.

mod builtin;

use crate::domain::Category;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

pub use builtin::REGIONAL_LOCATION_ID;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("failed to read lookup file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid lookup JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid lookup tables: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NeighborhoodEntry {
    /// Lowercase canonical name.
    pub key: String,
    pub location_id: String,
    #[serde(default)]
    pub schools: Vec<String>,
}

/// One keyword rule of the category scan.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryRule {
    pub keyword: String,
    pub category: Category,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LookupTables {
    regional_location_id: String,
    neighborhoods: Vec<NeighborhoodEntry>,
    #[serde(default)]
    location_aliases: BTreeMap<String, String>,
    category_rules: Vec<CategoryRule>,
    category_ids: HashMap<Category, String>,
    #[serde(default)]
    villa_fallback: Vec<String>,
}

impl LookupTables {
    pub fn builtin() -> Self {
        Self {
            regional_location_id: builtin::REGIONAL_LOCATION_ID.to_string(),
            neighborhoods: builtin::NEIGHBORHOODS
                .iter()
                .map(|(key, id, schools)| NeighborhoodEntry {
                    key: key.to_string(),
                    location_id: id.to_string(),
                    schools: schools.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
            location_aliases: builtin::LOCATION_ALIASES
                .iter()
                .map(|(name, id)| (name.to_string(), id.to_string()))
                .collect(),
            category_rules: builtin::CATEGORY_RULES
                .iter()
                .map(|(keyword, category)| CategoryRule {
                    keyword: keyword.to_string(),
                    category: *category,
                })
                .collect(),
            category_ids: builtin::CATEGORY_IDS
                .iter()
                .map(|(category, id)| (*category, id.to_string()))
                .collect(),
            villa_fallback: builtin::VILLA_FALLBACK
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, LookupError> {
        let raw: LookupTables = serde_json::from_str(json)?;
        raw.normalized()
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LookupError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Lowercases and trims every name, then rejects tables the pipeline
    /// cannot work with.
    fn normalized(mut self) -> Result<Self, LookupError> {
        self.regional_location_id = self.regional_location_id.trim().to_string();
        if self.regional_location_id.is_empty() {
            return Err(LookupError::Invalid(
                "regional_location_id must not be empty".into(),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &mut self.neighborhoods {
            entry.key = normalize_name(&entry.key);
            if entry.key.is_empty() {
                return Err(LookupError::Invalid("empty neighborhood key".into()));
            }
            if !seen.insert(entry.key.clone()) {
                return Err(LookupError::Invalid(format!(
                    "duplicate neighborhood '{}'",
                    entry.key
                )));
            }
        }

        self.location_aliases = self
            .location_aliases
            .into_iter()
            .map(|(name, id)| (normalize_name(&name), id))
            .collect();

        for rule in &mut self.category_rules {
            rule.keyword = normalize_name(&rule.keyword);
        }
        self.category_rules.retain(|rule| !rule.keyword.is_empty());

        for name in &mut self.villa_fallback {
            *name = normalize_name(name);
        }

        Ok(self)
    }

    pub fn neighborhoods(&self) -> &[NeighborhoodEntry] {
        &self.neighborhoods
    }

    /// Neighborhood keys in declaration order.
    pub fn neighborhood_keys(&self) -> impl Iterator<Item = &str> {
        self.neighborhoods.iter().map(|n| n.key.as_str())
    }

    pub fn regional_location_id(&self) -> &str {
        &self.regional_location_id
    }

    /// Provider location id for a neighborhood or alias; unknown names fall
    /// back to the regional catch-all.
    pub fn location_id(&self, name: &str) -> &str {
        let name = normalize_name(name);
        self.neighborhoods
            .iter()
            .find(|n| n.key == name)
            .map(|n| n.location_id.as_str())
            .or_else(|| self.location_aliases.get(&name).map(String::as_str))
            .unwrap_or(self.regional_location_id.as_str())
    }

    pub fn is_regional(&self, location_id: &str) -> bool {
        location_id == self.regional_location_id
    }

    pub fn category_rules(&self) -> &[CategoryRule] {
        &self.category_rules
    }

    pub fn category_id(&self, category: Category) -> Option<&str> {
        self.category_ids.get(&category).map(String::as_str)
    }

    /// Schools for a neighborhood, empty when none are known.
    pub fn schools(&self, neighborhood: &str) -> &[String] {
        let key = normalize_name(neighborhood);
        self.neighborhoods
            .iter()
            .find(|n| n.key == key)
            .map(|n| n.schools.as_slice())
            .unwrap_or(&[])
    }

    pub fn villa_fallback(&self) -> &[String] {
        &self.villa_fallback
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
