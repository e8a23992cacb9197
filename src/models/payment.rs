//! Payment model.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::numeric;

/// Payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Cash,
    BankTransfer,
    Check,
    Other,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Cash => "cash",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::Check => "check",
            PaymentMethod::Other => "other",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "card" => PaymentMethod::Card,
            "cash" => PaymentMethod::Cash,
            "bank_transfer" => PaymentMethod::BankTransfer,
            "check" => PaymentMethod::Check,
            _ => PaymentMethod::Other,
        }
    }
}

/// Payment recorded against an invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: Uuid,
    pub invoice_id: Uuid,
    #[serde(default, deserialize_with = "numeric::lenient_decimal")]
    pub amount: Decimal,
    pub currency: String,
    pub payment_method: PaymentMethod,
    pub payment_reference: Option<String>,
    pub payment_date: NaiveDate,
    pub notes: Option<String>,
    pub created_utc: DateTime<Utc>,
}

/// Input for recording a payment.
#[derive(Debug, Clone)]
pub struct CreatePayment {
    pub invoice_id: Uuid,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub payment_reference: Option<String>,
    pub payment_date: NaiveDate,
    pub notes: Option<String>,
}

/// Input for applying a credit note against an invoice.
#[derive(Debug, Clone)]
pub struct ApplyCreditNote {
    pub credit_note_id: Uuid,
    pub invoice_id: Uuid,
    pub amount: Decimal,
}
