use crate::pricing::{quote, QuoteLine};
use crate::state::SelectionState;
use chrono::{DateTime, Utc};
use fitout_catalog::Catalog;
use fitout_shared::SelectionSavedEvent;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The output handed to the "Save Customizations" collaborator: the
/// resolved selections and the derived total at capture time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub id: Uuid,
    pub property_id: String,
    pub base_price_cents: i64,
    pub lines: Vec<QuoteLine>,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl SelectionSnapshot {
    /// Capture the current selections for persistence
    pub fn capture(
        property_id: &str,
        base_price_cents: i64,
        state: &SelectionState,
        catalog: &Catalog,
    ) -> Self {
        let breakdown = quote(base_price_cents, state, catalog);
        Self {
            id: Uuid::new_v4(),
            property_id: property_id.to_string(),
            base_price_cents,
            lines: breakdown.lines,
            total_cents: breakdown.total_cents,
            created_at: Utc::now(),
        }
    }

    /// Event emitted once the snapshot has been persisted
    pub fn saved_event(&self) -> SelectionSavedEvent {
        SelectionSavedEvent {
            snapshot_id: self.id,
            property_id: self.property_id.clone(),
            total_cents: self.total_cents,
            timestamp: self.created_at.timestamp(),
            context: serde_json::json!({
                "base_price_cents": self.base_price_cents,
                "line_count": self.lines.len(),
            }),
        }
    }
}
