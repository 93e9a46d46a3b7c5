//! Inventory domain module.
//!
//! This crate owns the product-quantity state machine: merging duplicate
//! entries, rejecting id/name conflicts, deriving stock alerts from quantity
//! thresholds and removing products that run out. Persistence goes through
//! the [`SnapshotStore`] port; no concrete IO lives here.

pub mod alert;
pub mod error;
pub mod input;
pub mod product;
pub mod snapshot;
pub mod store;
pub mod view;

pub use alert::{
    LOW_STOCK_THRESHOLD, StockAlert, StockAlertKind, TransientAlert, derive_stock_alerts,
    is_low_stock,
};
pub use error::{InventoryError, InventoryResult};
pub use input::{ProductInput, WithdrawalInput};
pub use product::Product;
pub use snapshot::{
    ALERTS_KEY, InMemorySnapshotStore, PRODUCTS_KEY, SnapshotError, SnapshotStore,
};
pub use store::{InventoryStore, UpsertOutcome, WithdrawOutcome};
pub use view::{InventoryView, ProductRow};
