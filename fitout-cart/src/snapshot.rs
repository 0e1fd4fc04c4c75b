use crate::cart::Cart;
use crate::totals::compute_cart_total;
use chrono::{DateTime, Utc};
use fitout_catalog::ItemCatalog;
use fitout_shared::CartSavedEvent;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One resolved line of a saved selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartSnapshotLine {
    pub item_id: String,
    pub item_name: String,
    pub supplier: String,
    pub unit_price_cents: i64,
    pub quantity: u32,
    pub line_total_cents: i64,
}

/// The output handed to the "Save Selection" / checkout collaborator:
/// resolved items and the derived total at capture time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub id: Uuid,
    pub customer_id: Option<String>,
    pub lines: Vec<CartSnapshotLine>,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl CartSnapshot {
    /// Capture the current cart for persistence. Lines whose item has
    /// left the catalog are dropped, mirroring the total computation.
    pub fn capture(customer_id: Option<String>, items: &ItemCatalog, cart: &Cart) -> Self {
        let lines: Vec<CartSnapshotLine> = cart
            .lines()
            .iter()
            .filter_map(|line| {
                let item = items.item(&line.item_id)?;
                Some(CartSnapshotLine {
                    item_id: item.id.clone(),
                    item_name: item.name.clone(),
                    supplier: item.supplier.clone(),
                    unit_price_cents: item.price_cents,
                    quantity: line.quantity,
                    line_total_cents: item.price_cents * i64::from(line.quantity),
                })
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            customer_id,
            total_cents: compute_cart_total(items, cart),
            lines,
            created_at: Utc::now(),
        }
    }

    /// Event emitted once the snapshot has been persisted
    pub fn saved_event(&self) -> CartSavedEvent {
        CartSavedEvent {
            snapshot_id: self.id,
            customer_id: self.customer_id.clone(),
            total_cents: self.total_cents,
            line_count: self.lines.len(),
            timestamp: self.created_at.timestamp(),
        }
    }
}
