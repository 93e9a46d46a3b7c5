//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a local, recoverable, user-facing condition. The
/// `Display` output doubles as the text of the transient alert raised for it.
/// Infrastructure failures belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed input (empty name/id, non-positive or non-numeric quantity).
    #[error("{0}")]
    Validation(String),

    /// The id is already mapped to a product with another name.
    #[error("ID {id} is already used by product \"{existing_name}\". Change the name or ID.")]
    Conflict {
        id: ProductId,
        existing_name: String,
    },

    /// No product with this id exists.
    #[error("No product found with ID {0}.")]
    NotFound(ProductId),

    /// The requested withdrawal exceeds the available quantity.
    #[error(
        "Requested quantity ({requested}) exceeds available quantity ({available}) for product \"{name}\" (ID: {id})."
    )]
    InsufficientStock {
        id: ProductId,
        name: String,
        requested: u64,
        available: u64,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(id: ProductId, existing_name: impl Into<String>) -> Self {
        Self::Conflict {
            id,
            existing_name: existing_name.into(),
        }
    }

    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound(id)
    }

    pub fn insufficient_stock(
        id: ProductId,
        name: impl Into<String>,
        requested: u64,
        available: u64,
    ) -> Self {
        Self::InsufficientStock {
            id,
            name: name.into(),
            requested,
            available,
        }
    }

    /// The product this error concerns, if any.
    ///
    /// Validation failures never reference a product.
    pub fn product_id(&self) -> Option<&ProductId> {
        match self {
            DomainError::Validation(_) => None,
            DomainError::Conflict { id, .. }
            | DomainError::NotFound(id)
            | DomainError::InsufficientStock { id, .. } => Some(id),
        }
    }
}
