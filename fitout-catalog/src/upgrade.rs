use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One concrete choice within an upgrade category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpgradeOption {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Signed adjustment in euro cents relative to the property base price.
    /// Zero means the option is included in the base price.
    pub price_delta_cents: i64,
    #[serde(default)]
    pub is_default: bool,
}

/// A customization dimension (flooring, kitchen, ...) with mutually
/// exclusive options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeCategory {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub options: Vec<UpgradeOption>,
}

impl UpgradeCategory {
    /// Look up an option by id within this category
    pub fn option(&self, option_id: &str) -> Option<&UpgradeOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// The option included in the base price, if one is marked
    pub fn default_option(&self) -> Option<&UpgradeOption> {
        self.options.iter().find(|o| o.is_default)
    }
}

/// Read-only catalog of upgrade categories. Validated once at
/// construction; the engine never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<UpgradeCategory>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and conflicting defaults.
    /// A category without a default option is accepted and simply starts
    /// unselected.
    pub fn new(categories: Vec<UpgradeCategory>) -> Result<Self, CatalogError> {
        let mut category_ids = HashSet::new();

        for category in &categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }

            let mut option_ids = HashSet::new();
            let mut defaults = 0;
            for option in &category.options {
                if !option_ids.insert(option.id.as_str()) {
                    return Err(CatalogError::DuplicateOption {
                        category: category.id.clone(),
                        option: option.id.clone(),
                    });
                }
                if option.is_default {
                    defaults += 1;
                }
            }
            if defaults > 1 {
                return Err(CatalogError::MultipleDefaults(category.id.clone()));
            }
        }

        Ok(Self { categories })
    }

    /// Load and validate a catalog from a JSON document
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let categories: Vec<UpgradeCategory> = serde_json::from_str(raw)?;
        let catalog = Self::new(categories)?;
        tracing::info!("Loaded upgrade catalog with {} categories", catalog.categories.len());
        Ok(catalog)
    }

    /// Ordered list of categories
    pub fn categories(&self) -> &[UpgradeCategory] {
        &self.categories
    }

    /// Look up a category by id
    pub fn category(&self, category_id: &str) -> Option<&UpgradeCategory> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// Look up an option by (category id, option id)
    pub fn option(&self, category_id: &str, option_id: &str) -> Option<&UpgradeOption> {
        self.category(category_id).and_then(|c| c.option(option_id))
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),

    #[error("Duplicate option id {option} in category {category}")]
    DuplicateOption { category: String, option: String },

    #[error("Category {0} declares more than one default option")]
    MultipleDefaults(String),

    #[error("Duplicate item id: {0}")]
    DuplicateItem(String),

    #[error("Invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}
