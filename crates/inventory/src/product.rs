use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};

/// A stocked product.
///
/// Invariant: a product held by the store always has `quantity > 0`; an entry
/// that reaches zero is removed rather than kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    quantity: u64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, quantity: u64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Merge semantics: add to the existing quantity.
    pub(crate) fn restock(&mut self, amount: u64) -> DomainResult<()> {
        self.quantity = self
            .quantity
            .checked_add(amount)
            .ok_or_else(|| DomainError::validation("quantity is too large"))?;
        Ok(())
    }

    /// Take `amount` out of stock, returning what is left.
    ///
    /// Never lets the quantity go below zero, not even transiently.
    pub(crate) fn take(&mut self, amount: u64) -> DomainResult<u64> {
        if self.quantity < amount {
            return Err(DomainError::insufficient_stock(
                self.id.clone(),
                self.name.clone(),
                amount,
                self.quantity,
            ));
        }
        self.quantity -= amount;
        Ok(self.quantity)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
