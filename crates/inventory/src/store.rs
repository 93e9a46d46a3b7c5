//! The inventory store: sole owner of the product list and transient alerts.

use chrono::Utc;

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};

use crate::alert::{StockAlert, TransientAlert, derive_stock_alerts};
use crate::error::InventoryResult;
use crate::input::{ProductInput, WithdrawalInput};
use crate::product::Product;
use crate::snapshot::{self, PRODUCTS_KEY, SnapshotError, SnapshotStore};

/// Result of a successful [`InventoryStore::upsert`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new entry was appended.
    Created { quantity: u64 },
    /// An entry with the same id and name absorbed the quantity.
    Merged { quantity: u64 },
}

/// Result of a successful [`InventoryStore::withdraw`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WithdrawOutcome {
    Remaining(u64),
    /// The withdrawal exhausted the product and its entry was removed.
    Removed,
}

/// Inventory store over a snapshot port.
///
/// Every operation runs to completion, including its snapshot write, before
/// returning. Rejected operations leave the product list untouched, record a
/// transient alert and return the domain error.
///
/// If a write fails the store is marked dirty until a later write succeeds;
/// see [`InventoryStore::flush`].
#[derive(Debug)]
pub struct InventoryStore<S> {
    port: S,
    products: Vec<Product>,
    alerts: Vec<TransientAlert>,
    dirty: bool,
}

impl<S: SnapshotStore> InventoryStore<S> {
    /// Load the full snapshot from `port`.
    ///
    /// Entries persisted with a zero quantity are dropped.
    pub fn open(port: S) -> Result<Self, SnapshotError> {
        let loaded = snapshot::read_products(&port)?;
        let alerts = snapshot::read_alerts(&port)?;

        let total = loaded.len();
        let products: Vec<Product> = loaded.into_iter().filter(|p| p.quantity() > 0).collect();
        if products.len() != total {
            tracing::warn!(
                dropped = total - products.len(),
                "dropped exhausted products from snapshot"
            );
        }

        tracing::info!(
            products = products.len(),
            alerts = alerts.len(),
            "inventory opened"
        );

        Ok(Self {
            port,
            products,
            alerts,
            dirty: false,
        })
    }

    /// Add `quantity` of a product, merging into an entry with the same id and name.
    pub fn upsert(
        &mut self,
        name: &str,
        id: &str,
        quantity: &str,
    ) -> InventoryResult<UpsertOutcome> {
        let result =
            ProductInput::parse(name, id, quantity).and_then(|input| self.apply_upsert(input));
        self.settle("upsert", result)
    }

    /// Take `amount` out of stock; an exhausted product is removed.
    pub fn withdraw(&mut self, id: &str, amount: &str) -> InventoryResult<WithdrawOutcome> {
        let result =
            WithdrawalInput::parse(id, amount).and_then(|input| self.apply_withdraw(input));
        self.settle("withdraw", result)
    }

    /// Drop every product and the persisted product list. Transient alerts stay.
    pub fn delete_all(&mut self) -> InventoryResult<()> {
        let removed = self.products.len();
        self.products.clear();

        if let Err(err) = self.port.remove(PRODUCTS_KEY) {
            self.dirty = true;
            tracing::error!(error = %err, "failed to remove persisted products");
            return Err(err.into());
        }

        tracing::info!(removed, "all products deleted");
        Ok(())
    }

    /// Stock alerts for the current product list, recomputed on every call.
    pub fn stock_alerts(&self) -> Vec<StockAlert> {
        derive_stock_alerts(&self.products)
    }

    pub fn clear_transient_alerts(&mut self) -> InventoryResult<()> {
        let cleared = self.alerts.len();
        self.alerts.clear();
        self.persist()?;
        tracing::info!(cleared, "transient alerts cleared");
        Ok(())
    }

    pub fn alert_count(&self) -> usize {
        self.stock_alerts().len() + self.alerts.len()
    }

    /// Stock alerts followed by transient alerts, as display text.
    pub fn all_alerts(&self) -> Vec<String> {
        self.stock_alerts()
            .iter()
            .map(ToString::to_string)
            .chain(self.alerts.iter().map(|a| a.message.clone()))
            .collect()
    }

    /// Write the full snapshot now. Call before leaving the current view.
    pub fn flush(&mut self) -> InventoryResult<()> {
        self.persist()?;
        Ok(())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn transient_alerts(&self) -> &[TransientAlert] {
        &self.alerts
    }

    /// True when the persisted snapshot may lag behind the in-memory state.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn port(&self) -> &S {
        &self.port
    }

    fn apply_upsert(&mut self, input: ProductInput) -> DomainResult<UpsertOutcome> {
        if let Some(existing) = self
            .products
            .iter()
            .find(|p| p.id() == &input.id && p.name() != input.name)
        {
            return Err(DomainError::conflict(input.id, existing.name()));
        }

        let outcome = match self
            .products
            .iter_mut()
            .find(|p| p.id() == &input.id && p.name() == input.name)
        {
            Some(existing) => {
                existing.restock(input.quantity)?;
                UpsertOutcome::Merged {
                    quantity: existing.quantity(),
                }
            }
            None => {
                self.products
                    .push(Product::new(input.id.clone(), input.name, input.quantity));
                UpsertOutcome::Created {
                    quantity: input.quantity,
                }
            }
        };

        self.resolve_alerts(&input.id);
        Ok(outcome)
    }

    fn apply_withdraw(&mut self, input: WithdrawalInput) -> DomainResult<WithdrawOutcome> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id() == &input.id)
            .ok_or_else(|| DomainError::not_found(input.id.clone()))?;

        let remaining = product.take(input.amount)?;
        if remaining > 0 {
            return Ok(WithdrawOutcome::Remaining(remaining));
        }

        self.products.retain(|p| p.id() != &input.id);
        self.resolve_alerts(&input.id);
        Ok(WithdrawOutcome::Removed)
    }

    /// Log the outcome, record an alert on rejection, and write the snapshot.
    fn settle<T: core::fmt::Debug>(
        &mut self,
        operation: &'static str,
        result: DomainResult<T>,
    ) -> InventoryResult<T> {
        match result {
            Ok(outcome) => {
                tracing::info!(operation, ?outcome, "inventory updated");
                self.persist()?;
                Ok(outcome)
            }
            Err(err) => {
                tracing::warn!(operation, error = %err, "inventory operation rejected");
                self.raise(&err);
                // persist() logs a write failure and leaves the store dirty.
                let _ = self.persist();
                Err(err.into())
            }
        }
    }

    fn raise(&mut self, err: &DomainError) {
        let alert = TransientAlert::from_error(err, Utc::now());
        if !self.alerts.iter().any(|a| a.same_as(&alert)) {
            self.alerts.push(alert);
        }
    }

    fn resolve_alerts(&mut self, id: &ProductId) {
        let before = self.alerts.len();
        self.alerts.retain(|a| !a.concerns(id));
        let resolved = before - self.alerts.len();
        if resolved > 0 {
            tracing::debug!(product_id = %id, resolved, "transient alerts resolved");
        }
    }

    fn persist(&mut self) -> Result<(), SnapshotError> {
        match snapshot::write_snapshot(&self.port, &self.products, &self.alerts) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(err) => {
                self.dirty = true;
                tracing::error!(error = %err, "failed to persist inventory snapshot");
                Err(err)
            }
        }
    }
}
