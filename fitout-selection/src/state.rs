use fitout_catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The buyer's current choice per category. Categories without an entry
/// are unselected and contribute nothing to the price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    selections: HashMap<String, String>,
}

impl SelectionState {
    /// An empty state: every category unselected
    pub fn new() -> Self {
        Self::default()
    }

    /// One-shot initialization: every category with a default option
    /// starts selected on it
    pub fn seeded(catalog: &Catalog) -> Self {
        let mut state = Self::new();
        state.reset_to_defaults(catalog);
        state
    }

    /// Select an option within a category. Selections in other categories
    /// are never touched. Rejected calls leave the state unchanged.
    pub fn select_option(
        &mut self,
        catalog: &Catalog,
        category_id: &str,
        option_id: &str,
    ) -> Result<(), SelectionError> {
        let category = catalog
            .category(category_id)
            .ok_or_else(|| SelectionError::UnknownCategory(category_id.to_string()))?;

        let option = category.option(option_id).ok_or_else(|| {
            tracing::warn!(
                category = category_id,
                option = option_id,
                "Rejected selection: option does not belong to category"
            );
            SelectionError::InvalidSelection {
                category: category_id.to_string(),
                option: option_id.to_string(),
            }
        })?;

        tracing::debug!(
            category = category_id,
            option = option_id,
            delta = option.price_delta_cents,
            "Option selected"
        );
        self.selections
            .insert(category.id.clone(), option.id.clone());
        Ok(())
    }

    /// Return every category to its default option, or to unselected when
    /// it has none
    pub fn reset_to_defaults(&mut self, catalog: &Catalog) {
        self.selections.clear();
        for category in catalog.categories() {
            if let Some(default) = category.default_option() {
                self.selections
                    .insert(category.id.clone(), default.id.clone());
            }
        }
        tracing::debug!(
            selected = self.selections.len(),
            "Selections reset to defaults"
        );
    }

    /// The chosen option id for a category, if any
    pub fn selection_for(&self, category_id: &str) -> Option<&str> {
        self.selections.get(category_id).map(String::as_str)
    }

    /// Current category → option mapping
    pub fn selections(&self) -> &HashMap<String, String> {
        &self.selections
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Option {option} does not belong to category {category}")]
    InvalidSelection { category: String, option: String },
}
