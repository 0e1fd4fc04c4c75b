pub mod pricing;
pub mod repository;
pub mod snapshot;
pub mod state;

pub use pricing::{compute_total, quote, QuoteBreakdown, QuoteLine};
pub use repository::{CustomizationRepository, MemoryCustomizationStore};
pub use snapshot::SelectionSnapshot;
pub use state::{SelectionState, SelectionError};
