//! Credit note model.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::numeric;

/// Credit owed to a customer, applicable against invoice balances until its
/// remaining balance is exhausted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditNote {
    pub credit_note_id: Uuid,
    pub credit_note_number: Option<String>,
    pub customer_id: Uuid,
    pub currency: String,
    #[serde(default, deserialize_with = "numeric::lenient_decimal")]
    pub total: Decimal,
    #[serde(default, deserialize_with = "numeric::lenient_decimal")]
    pub remaining_balance: Decimal,
    pub issue_date: Option<NaiveDate>,
    pub created_utc: DateTime<Utc>,
}

impl CreditNote {
    /// Whether there is any balance left to apply.
    pub fn is_exhausted(&self) -> bool {
        self.remaining_balance <= Decimal::ZERO
    }
}
