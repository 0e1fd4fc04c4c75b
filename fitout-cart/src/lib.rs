pub mod cart;
pub mod repository;
pub mod snapshot;
pub mod totals;

pub use cart::{Cart, CartError, CartLine};
pub use repository::{CartRepository, MemoryCartStore};
pub use snapshot::{CartSnapshot, CartSnapshotLine};
pub use totals::compute_cart_total;
