use fitout_catalog::ItemCatalog;
use serde::{Deserialize, Serialize};

/// One quantified line in the buyer's furniture selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: String,
    pub quantity: u32,
}

/// Insertion-ordered furniture cart. Items are additive and independently
/// quantified, unlike the one-per-category customization model. Every
/// line holds a quantity of at least one; reducing a quantity to zero
/// removes the line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Quantity currently in the cart for an item, if any
    pub fn quantity_of(&self, item_id: &str) -> Option<u32> {
        self.lines
            .iter()
            .find(|l| l.item_id == item_id)
            .map(|l| l.quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of an item. An item already in the cart has its
    /// quantity incremented. Failed calls never mutate the cart.
    pub fn add_item(&mut self, items: &ItemCatalog, item_id: &str) -> Result<(), CartError> {
        let item = items
            .item(item_id)
            .ok_or_else(|| CartError::UnknownItem(item_id.to_string()))?;

        if !item.in_stock {
            tracing::warn!(item = item_id, "Rejected add: item is out of stock");
            return Err(CartError::ItemUnavailable(item_id.to_string()));
        }

        match self.lines.iter_mut().find(|l| l.item_id == item_id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                item_id: item.id.clone(),
                quantity: 1,
            }),
        }
        tracing::debug!(item = item_id, "Item added to cart");
        Ok(())
    }

    /// Remove an item's line entirely, regardless of quantity. Removing
    /// an item that is not in the cart is a no-op.
    pub fn remove_item(&mut self, item_id: &str) {
        self.lines.retain(|l| l.item_id != item_id);
    }

    /// Set the quantity of an item already in the cart. Zero behaves as
    /// removal; an item not in the cart is left untouched. Failed calls
    /// never mutate the cart.
    pub fn set_quantity(
        &mut self,
        items: &ItemCatalog,
        item_id: &str,
        quantity: u32,
    ) -> Result<(), CartError> {
        if items.item(item_id).is_none() {
            return Err(CartError::UnknownItem(item_id.to_string()));
        }

        if quantity == 0 {
            self.remove_item(item_id);
            return Ok(());
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item_id) {
            line.quantity = quantity;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("Item is out of stock: {0}")]
    ItemUnavailable(String),
}
