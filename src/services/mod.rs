//! Calculation and policy services for invoicing-core.

pub mod editor;
pub mod payments;
pub mod schedule;
pub mod totals;

pub use editor::InvoiceEditor;
pub use payments::{
    deposit_due, outstanding_balance, settles_in_full, validate_credit_application,
    validate_payment, PAYOFF_TOLERANCE,
};
pub use schedule::{advance, pause, resume};
pub use totals::{compute_totals, InvoiceTotals};
