//! Stock alerts (derived) and transient alerts (raised by rejected operations).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, Entity, ProductId, ValueObject};

use crate::product::Product;

/// Quantities at or below this level are reported as low stock.
pub const LOW_STOCK_THRESHOLD: u64 = 5;

pub fn is_low_stock(quantity: u64) -> bool {
    quantity <= LOW_STOCK_THRESHOLD
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockAlertKind {
    OutOfStock,
    LowStock,
}

/// A warning computed from a product's current quantity. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAlert {
    pub kind: StockAlertKind,
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u64,
}

impl ValueObject for StockAlert {}

impl StockAlert {
    fn for_product(product: &Product) -> Option<Self> {
        let kind = match product.quantity() {
            0 => StockAlertKind::OutOfStock,
            q if is_low_stock(q) => StockAlertKind::LowStock,
            _ => return None,
        };
        Some(Self {
            kind,
            product_id: product.id().clone(),
            name: product.name().to_string(),
            quantity: product.quantity(),
        })
    }
}

impl core::fmt::Display for StockAlert {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            StockAlertKind::OutOfStock => write!(
                f,
                "Product \"{}\" is out of stock (ID: {}).",
                self.name, self.product_id
            ),
            StockAlertKind::LowStock => write!(
                f,
                "Product \"{}\" is running low ({}) (ID: {}).",
                self.name, self.quantity, self.product_id
            ),
        }
    }
}

/// Derive the stock alerts for `products`, in list order.
///
/// At most one alert per product; out-of-stock wins over low-stock.
pub fn derive_stock_alerts(products: &[Product]) -> Vec<StockAlert> {
    products.iter().filter_map(StockAlert::for_product).collect()
}

/// A user-facing message left behind by a rejected operation.
///
/// `product_id` is the typed reference used to resolve the alert once the
/// product's condition is cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransientAlert {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raised_at: Option<DateTime<Utc>>,
}

impl TransientAlert {
    pub fn from_error(error: &DomainError, raised_at: DateTime<Utc>) -> Self {
        Self {
            message: error.to_string(),
            product_id: error.product_id().cloned(),
            raised_at: Some(raised_at),
        }
    }

    /// An alert restored from the bare-string format, with no product reference.
    pub fn legacy(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            product_id: None,
            raised_at: None,
        }
    }

    pub fn concerns(&self, id: &ProductId) -> bool {
        self.product_id.as_ref() == Some(id)
    }

    /// Same message about the same product; the timestamp is ignored.
    pub fn same_as(&self, other: &TransientAlert) -> bool {
        self.message == other.message && self.product_id == other.product_id
    }
}

impl core::fmt::Display for TransientAlert {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}
