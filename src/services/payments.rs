//! Payment and credit-note application policy.
//!
//! These rules gate submit actions client-side; the backend remains free to
//! apply its own stricter checks. The outstanding balance used here is the
//! server-authoritative figure, not a local recomputation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

use crate::error::InvoicingError;
use crate::models::Deposit;

/// Tolerance absorbing floating-point drift when deciding whether a payment
/// settles an invoice exactly.
pub const PAYOFF_TOLERANCE: Decimal = dec!(0.01);

/// `total - amount_paid`. Positive is owed by the customer, negative is
/// credit owed back, zero is settled. Never clamped: overpayment legitimately
/// drives this negative.
pub fn outstanding_balance(total: Decimal, amount_paid: Decimal) -> Decimal {
    total - amount_paid
}

/// Validate a plain payment amount. There is no upper cap: overpayment is
/// allowed and produces a credit on the invoice.
pub fn validate_payment(amount: Decimal) -> Result<(), InvoicingError> {
    if amount <= Decimal::ZERO {
        warn!(%amount, "Rejected non-positive payment amount");
        return Err(InvoicingError::NonPositiveAmount);
    }
    Ok(())
}

/// Validate applying `amount` from a credit note against an invoice.
///
/// The amount is capped at the credit note's remaining balance first and the
/// invoice's outstanding balance second; the error names whichever limit was
/// exceeded.
pub fn validate_credit_application(
    amount: Decimal,
    credit_remaining: Decimal,
    outstanding: Decimal,
) -> Result<(), InvoicingError> {
    if amount <= Decimal::ZERO {
        warn!(%amount, "Rejected non-positive credit application");
        return Err(InvoicingError::NonPositiveAmount);
    }
    if amount > credit_remaining {
        warn!(%amount, %credit_remaining, "Credit application exceeds credit note balance");
        return Err(InvoicingError::CreditNoteBalanceExceeded {
            amount,
            available: credit_remaining,
        });
    }
    if amount > outstanding {
        warn!(%amount, %outstanding, "Credit application exceeds outstanding balance");
        return Err(InvoicingError::OutstandingBalanceExceeded {
            amount,
            outstanding,
        });
    }
    Ok(())
}

/// Whether `amount` settles an outstanding balance in full, within
/// [`PAYOFF_TOLERANCE`].
pub fn settles_in_full(amount: Decimal, outstanding: Decimal) -> bool {
    (amount - outstanding).abs() < PAYOFF_TOLERANCE
}

/// Deposit requested up front for an invoice total. Informational display
/// data; never subtracted from the total or the outstanding balance.
pub fn deposit_due(total: Decimal, deposit: Option<&Deposit>) -> Decimal {
    deposit
        .map(|d| d.due_against(total))
        .unwrap_or(Decimal::ZERO)
}
