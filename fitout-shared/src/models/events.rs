use chrono::Utc;
use uuid::Uuid;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct OptionSelectedEvent {
    pub property_id: String,
    pub category_id: String,
    pub option_id: String,
    pub price_delta_cents: i64,
    pub timestamp: i64,
}

impl OptionSelectedEvent {
    pub fn new(
        property_id: String,
        category_id: String,
        option_id: String,
        price_delta_cents: i64,
    ) -> Self {
        Self {
            property_id,
            category_id,
            option_id,
            price_delta_cents,
            timestamp: Utc::now().timestamp(),
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct SelectionsResetEvent {
    pub property_id: String,
    pub timestamp: i64,
}

impl SelectionsResetEvent {
    pub fn new(property_id: String) -> Self {
        Self {
            property_id,
            timestamp: Utc::now().timestamp(),
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct SelectionSavedEvent {
    pub snapshot_id: Uuid,
    pub property_id: String,
    pub total_cents: i64,
    pub timestamp: i64,
    pub context: serde_json::Value,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct CartSavedEvent {
    pub snapshot_id: Uuid,
    pub customer_id: Option<String>,
    pub total_cents: i64,
    pub line_count: usize,
    pub timestamp: i64,
}
