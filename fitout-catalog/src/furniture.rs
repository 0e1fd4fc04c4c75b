use crate::upgrade::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A furniture or fittings item offered through the marketplace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FurnitureItem {
    pub id: String,
    pub name: String,
    /// Room the item belongs to (living, dining, bedroom, kitchen, bathroom)
    pub room: String,
    pub price_cents: i64,
    pub description: Option<String>,
    pub supplier: String,
    pub in_stock: bool,
    /// Supplier's delivery estimate, e.g. "2-3 weeks"
    pub delivery_time: Option<String>,
}

/// Read-only furniture item catalog for the marketplace variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    items: Vec<FurnitureItem>,
}

impl ItemCatalog {
    /// Build an item catalog, rejecting duplicate item ids
    pub fn new(items: Vec<FurnitureItem>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for item in &items {
            if !ids.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateItem(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Load and validate an item catalog from a JSON document
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let items: Vec<FurnitureItem> = serde_json::from_str(raw)?;
        let catalog = Self::new(items)?;
        tracing::info!("Loaded item catalog with {} items", catalog.items.len());
        Ok(catalog)
    }

    pub fn items(&self) -> &[FurnitureItem] {
        &self.items
    }

    /// Look up an item by id
    pub fn item(&self, item_id: &str) -> Option<&FurnitureItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Distinct supplier names, in first-seen order (for filter dropdowns)
    pub fn suppliers(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|i| i.supplier.as_str())
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Distinct room names, in first-seen order
    pub fn rooms(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|i| i.room.as_str())
            .filter(|r| seen.insert(*r))
            .collect()
    }
}
