pub mod filter;
pub mod furniture;
pub mod upgrade;

pub use filter::ItemFilter;
pub use furniture::{FurnitureItem, ItemCatalog};
pub use upgrade::{Catalog, CatalogError, UpgradeCategory, UpgradeOption};
