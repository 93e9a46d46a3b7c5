//! Read model handed to a presentation layer after each operation.
//!
//! Strings are passed through as typed; escaping for display is the
//! caller's job.

use serde::{Deserialize, Serialize};

use stockroom_core::Entity;

use crate::alert::is_low_stock;
use crate::product::Product;
use crate::snapshot::SnapshotStore;
use crate::store::InventoryStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub quantity: u64,
    /// Row deserves the low-stock treatment.
    pub low_stock: bool,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            quantity: product.quantity(),
            low_stock: is_low_stock(product.quantity()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryView {
    pub rows: Vec<ProductRow>,
    pub alerts: Vec<String>,
    pub alert_count: usize,
}

impl InventoryView {
    /// Capture the current state. Stale as soon as the store mutates.
    pub fn capture<S: SnapshotStore>(store: &InventoryStore<S>) -> Self {
        Self {
            rows: store.products().iter().map(ProductRow::from).collect(),
            alerts: store.all_alerts(),
            alert_count: store.alert_count(),
        }
    }
}
