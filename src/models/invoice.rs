//! Invoice model.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::numeric;

/// Invoice status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Issued,
    Paid,
    Void,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Issued => "issued",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Void => "void",
            InvoiceStatus::Overdue => "overdue",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "issued" => InvoiceStatus::Issued,
            "paid" => InvoiceStatus::Paid,
            "void" => InvoiceStatus::Void,
            "overdue" => InvoiceStatus::Overdue,
            _ => InvoiceStatus::Draft,
        }
    }
}

/// Invoice as returned by the finance backend.
///
/// Stored monetary figures are authoritative; locally computed totals are
/// advisory display data. Money fields deserialize leniently: a malformed
/// figure becomes zero rather than failing the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: Uuid,
    pub invoice_number: Option<String>,
    pub status: InvoiceStatus,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub currency: String,
    pub issue_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "numeric::lenient_decimal")]
    pub subtotal: Decimal,
    #[serde(default, deserialize_with = "numeric::lenient_decimal")]
    pub tax_total: Decimal,
    #[serde(default, deserialize_with = "numeric::lenient_decimal_opt")]
    pub total: Option<Decimal>,
    #[serde(default, deserialize_with = "numeric::lenient_decimal")]
    pub amount_paid: Decimal,
    #[serde(default, deserialize_with = "numeric::lenient_decimal")]
    pub amount_due: Decimal,
    pub notes: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub created_utc: DateTime<Utc>,
}

impl Invoice {
    /// Total to display: the stored server total when present, otherwise the
    /// locally computed one.
    pub fn display_total(&self, computed: Decimal) -> Decimal {
        self.total.unwrap_or(computed)
    }

    /// Open balance recomputed from stored figures: `total - amount_paid`.
    /// Positive is owed by the customer, negative is credit owed back, zero
    /// is settled. `amount_due` remains the server-authoritative figure for
    /// gating payments.
    pub fn outstanding_balance(&self) -> Decimal {
        self.total.unwrap_or(Decimal::ZERO) - self.amount_paid
    }

    /// Effective status for display, deriving overdue from the due date and
    /// open balance rather than trusting the stored status alone.
    pub fn display_status(&self, today: NaiveDate) -> InvoiceStatus {
        if self.status == InvoiceStatus::Issued {
            if let Some(due_date) = self.due_date {
                if due_date < today && self.amount_due > Decimal::ZERO {
                    return InvoiceStatus::Overdue;
                }
            }
        }
        self.status
    }
}
