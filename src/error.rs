//! Error types for invoicing-core.

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Validation failures surfaced to the user before a submit action.
///
/// None of these are fatal; callers decide whether to block the operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvoicingError {
    #[error("payment amount must be greater than zero")]
    NonPositiveAmount,

    #[error("amount {amount} exceeds the credit note's remaining balance of {available}")]
    CreditNoteBalanceExceeded { amount: Decimal, available: Decimal },

    #[error("amount {amount} exceeds the invoice outstanding balance of {outstanding}")]
    OutstandingBalanceExceeded {
        amount: Decimal,
        outstanding: Decimal,
    },

    #[error("line item {line_item_id} not found")]
    LineItemNotFound { line_item_id: Uuid },

    #[error("recurring invoice is {status}")]
    RecurringNotActive { status: &'static str },
}
