pub mod models;

pub use models::events::{
    CartSavedEvent, OptionSelectedEvent, SelectionSavedEvent, SelectionsResetEvent,
};
