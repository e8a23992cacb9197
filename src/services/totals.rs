//! Invoice totals computation.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Discount, LineItem};

/// Totals breakdown for an invoice.
///
/// Values are unrounded; presentation rounding happens at render time. The
/// exception is line-level tax, whose per-line amounts were already rounded
/// to cents when computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub item_tax: Decimal,
    pub document_tax: Decimal,
    /// Combined tax figure for callers that want a single number.
    pub tax: Decimal,
    pub total: Decimal,
}

impl InvoiceTotals {
    pub const ZERO: InvoiceTotals = InvoiceTotals {
        subtotal: Decimal::ZERO,
        discount: Decimal::ZERO,
        item_tax: Decimal::ZERO,
        document_tax: Decimal::ZERO,
        tax: Decimal::ZERO,
        total: Decimal::ZERO,
    };
}

/// Compute the totals breakdown for a set of line items.
///
/// The order is load-bearing: the discount applies to the subtotal, and the
/// document-level tax applies to the discounted base.
///
/// Two deliberate permissivenesses:
/// - The discount is not clamped to `[0, subtotal]`; a discount larger than
///   the subtotal yields a negative total. Callers guard where that matters.
/// - Item-level and document-level tax are alternative representations in
///   normal use, but both are summed if both are populated. Exclusivity is
///   not enforced here.
///
/// Stored line `amount` values are trusted as-is; they are never re-derived
/// from quantity and price here. Pure and total: no failure mode.
pub fn compute_totals(
    line_items: &[LineItem],
    tax_rate: Decimal,
    discount: Option<&Discount>,
) -> InvoiceTotals {
    let subtotal: Decimal = line_items.iter().map(|item| item.amount).sum();

    let discount = discount
        .map(|d| d.amount_against(subtotal))
        .unwrap_or(Decimal::ZERO);

    let taxable_base = subtotal - discount;

    let item_tax: Decimal = line_items.iter().map(|item| item.tax_total()).sum();

    let document_tax = taxable_base * tax_rate / Decimal::ONE_HUNDRED;

    InvoiceTotals {
        subtotal,
        discount,
        item_tax,
        document_tax,
        tax: item_tax + document_tax,
        total: taxable_base + item_tax + document_tax,
    }
}
