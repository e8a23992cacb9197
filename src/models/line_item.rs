//! Line item model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::numeric::{self, round2};

/// Tax applied to a single line item.
///
/// The amount is rounded to cents when the tax is computed; the totals
/// calculator sums stored amounts and never re-derives them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineTax {
    #[serde(default, deserialize_with = "numeric::lenient_decimal")]
    pub rate: Decimal,
    #[serde(default, deserialize_with = "numeric::lenient_decimal")]
    pub amount: Decimal,
}

impl LineTax {
    /// Tax at `rate` percent of the line amount.
    pub fn for_amount(rate: Decimal, amount: Decimal) -> Self {
        Self {
            rate,
            amount: round2(amount * rate / Decimal::ONE_HUNDRED),
        }
    }
}

/// Line item on an invoice.
///
/// `amount` is authoritative once stored; it is the caller's job to keep it
/// in sync with `quantity * unit_price` via [`LineItem::recalculate`]
/// whenever either changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub line_item_id: Uuid,
    pub description: String,
    #[serde(default, deserialize_with = "numeric::lenient_decimal")]
    pub quantity: Decimal,
    #[serde(default, deserialize_with = "numeric::lenient_decimal")]
    pub unit_price: Decimal,
    #[serde(default, deserialize_with = "numeric::lenient_decimal")]
    pub amount: Decimal,
    #[serde(default)]
    pub line_taxes: Vec<LineTax>,
    pub sort_order: i32,
}

impl LineItem {
    /// Create a line item with its amount derived from quantity and price.
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            line_item_id: Uuid::new_v4(),
            description: description.into(),
            quantity,
            unit_price,
            amount: quantity * unit_price,
            line_taxes: Vec::new(),
            sort_order: 0,
        }
    }

    /// Resync `amount` with `quantity * unit_price` and re-derive each
    /// line tax amount against the new base.
    pub fn recalculate(&mut self) {
        self.amount = self.quantity * self.unit_price;
        for tax in &mut self.line_taxes {
            *tax = LineTax::for_amount(tax.rate, self.amount);
        }
    }

    /// Sum of this line's tax amounts.
    pub fn tax_total(&self) -> Decimal {
        self.line_taxes.iter().map(|t| t.amount).sum()
    }
}
