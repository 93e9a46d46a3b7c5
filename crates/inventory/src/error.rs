//! Store-level error: a rejected operation or a failed snapshot write.

use stockroom_core::DomainError;
use thiserror::Error;

use crate::snapshot::SnapshotError;

pub type InventoryResult<T> = Result<T, InventoryError>;

#[derive(Debug, Error)]
pub enum InventoryError {
    /// The operation was rejected; the product list is unchanged.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The in-memory state changed but the snapshot could not be written.
    #[error("failed to persist inventory snapshot: {0}")]
    Persistence(#[from] SnapshotError),
}

impl InventoryError {
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            InventoryError::Domain(e) => Some(e),
            InventoryError::Persistence(_) => None,
        }
    }
}
