//! Parsing of raw, untrusted form input.
//!
//! Callers hand over whatever the user typed; nothing is assumed to be
//! pre-validated.

use stockroom_core::{DomainError, DomainResult, ProductId};

const PRODUCT_INPUT_HINT: &str =
    "Enter a valid name, a unique ID, and a quantity greater than zero.";
const WITHDRAWAL_INPUT_HINT: &str = "Enter a valid ID and a quantity greater than zero.";

/// Validated input for adding or restocking a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInput {
    pub name: String,
    pub id: ProductId,
    pub quantity: u64,
}

impl ProductInput {
    pub fn parse(name: &str, id: &str, quantity: &str) -> DomainResult<Self> {
        let invalid = || DomainError::validation(PRODUCT_INPUT_HINT);

        let name = name.trim();
        if name.is_empty() {
            return Err(invalid());
        }
        let id = ProductId::parse(id).map_err(|_| invalid())?;
        let quantity = parse_positive(quantity).ok_or_else(invalid)?;

        Ok(Self {
            name: name.to_string(),
            id,
            quantity,
        })
    }
}

/// Validated input for a stock withdrawal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalInput {
    pub id: ProductId,
    pub amount: u64,
}

impl WithdrawalInput {
    pub fn parse(id: &str, amount: &str) -> DomainResult<Self> {
        let invalid = || DomainError::validation(WITHDRAWAL_INPUT_HINT);

        let id = ProductId::parse(id).map_err(|_| invalid())?;
        let amount = parse_positive(amount).ok_or_else(invalid)?;

        Ok(Self { id, amount })
    }
}

/// A strictly positive base-10 integer, surrounding whitespace allowed.
fn parse_positive(raw: &str) -> Option<u64> {
    match raw.trim().parse::<i128>() {
        Ok(n) if n > 0 => u64::try_from(n).ok(),
        _ => None,
    }
}
