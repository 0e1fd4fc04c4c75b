use crate::snapshot::CartSnapshot;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Repository trait for persisting captured carts at checkout
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn save_cart(
        &self,
        snapshot: &CartSnapshot,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn get_cart(
        &self,
        id: Uuid,
    ) -> Result<Option<CartSnapshot>, Box<dyn std::error::Error + Send + Sync>>;
}

/// In-memory store; the host wires a real backend behind the same trait
#[derive(Default)]
pub struct MemoryCartStore {
    snapshots: Mutex<HashMap<Uuid, CartSnapshot>>,
}

impl MemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepository for MemoryCartStore {
    async fn save_cart(
        &self,
        snapshot: &CartSnapshot,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut snapshots = self
            .snapshots
            .lock()
            .map_err(|_| "cart store lock poisoned")?;
        snapshots.insert(snapshot.id, snapshot.clone());
        tracing::info!(snapshot_id = %snapshot.id, total = snapshot.total_cents, "Cart saved");
        Ok(())
    }

    async fn get_cart(
        &self,
        id: Uuid,
    ) -> Result<Option<CartSnapshot>, Box<dyn std::error::Error + Send + Sync>> {
        let snapshots = self
            .snapshots
            .lock()
            .map_err(|_| "cart store lock poisoned")?;
        Ok(snapshots.get(&id).cloned())
    }
}
