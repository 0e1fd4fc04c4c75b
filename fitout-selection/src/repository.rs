use crate::snapshot::SelectionSnapshot;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Repository trait for persisting captured customization selections
#[async_trait]
pub trait CustomizationRepository: Send + Sync {
    async fn save_selection(
        &self,
        snapshot: &SelectionSnapshot,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn get_selection(
        &self,
        id: Uuid,
    ) -> Result<Option<SelectionSnapshot>, Box<dyn std::error::Error + Send + Sync>>;
}

/// In-memory store; the host wires a real backend behind the same trait
#[derive(Default)]
pub struct MemoryCustomizationStore {
    snapshots: Mutex<HashMap<Uuid, SelectionSnapshot>>,
}

impl MemoryCustomizationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomizationRepository for MemoryCustomizationStore {
    async fn save_selection(
        &self,
        snapshot: &SelectionSnapshot,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut snapshots = self
            .snapshots
            .lock()
            .map_err(|_| "customization store lock poisoned")?;
        snapshots.insert(snapshot.id, snapshot.clone());
        tracing::info!(snapshot_id = %snapshot.id, total = snapshot.total_cents, "Selection saved");
        Ok(())
    }

    async fn get_selection(
        &self,
        id: Uuid,
    ) -> Result<Option<SelectionSnapshot>, Box<dyn std::error::Error + Send + Sync>> {
        let snapshots = self
            .snapshots
            .lock()
            .map_err(|_| "customization store lock poisoned")?;
        Ok(snapshots.get(&id).cloned())
    }
}
