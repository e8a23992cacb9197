//! Document-level charge configuration: discount, tax, deposit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a discount or deposit value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountKind {
    Percentage,
    Fixed,
}

impl AmountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AmountKind::Percentage => "percentage",
            AmountKind::Fixed => "fixed",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "percentage" => AmountKind::Percentage,
            _ => AmountKind::Fixed,
        }
    }
}

/// Document-level discount, applied once to the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub kind: AmountKind,
    pub value: Decimal,
}

impl Discount {
    pub fn percentage(value: Decimal) -> Self {
        Self {
            kind: AmountKind::Percentage,
            value,
        }
    }

    pub fn fixed(value: Decimal) -> Self {
        Self {
            kind: AmountKind::Fixed,
            value,
        }
    }

    /// Absolute discount against `base`. A non-positive configured value
    /// means no discount. The result is NOT clamped to `[0, base]`; callers
    /// guard against discounts exceeding the subtotal where that matters.
    pub fn amount_against(&self, base: Decimal) -> Decimal {
        if self.value <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        match self.kind {
            AmountKind::Percentage => base * self.value / Decimal::ONE_HUNDRED,
            AmountKind::Fixed => self.value,
        }
    }
}

/// Document-level tax: a single rate applied to the discounted subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentTax {
    #[serde(default, deserialize_with = "crate::numeric::lenient_decimal")]
    pub rate: Decimal,
    pub label: String,
}

/// Deposit request, computed against the final total. Informational only;
/// it does not reduce the payable total or the outstanding balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    pub kind: AmountKind,
    pub value: Decimal,
}

impl Deposit {
    /// Amount requested up front, given the invoice total.
    pub fn due_against(&self, total: Decimal) -> Decimal {
        match self.kind {
            AmountKind::Percentage => total * self.value / Decimal::ONE_HUNDRED,
            AmountKind::Fixed => self.value,
        }
    }
}
