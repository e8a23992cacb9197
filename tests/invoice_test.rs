//! Invoice DTO boundary and display-derivation tests.

use chrono::NaiveDate;
use invoicing_core::models::{CreditNote, Invoice, InvoiceStatus};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A representative backend payload with overridable money fields.
fn invoice_payload() -> serde_json::Value {
    json!({
        "invoice_id": "5f6e4a6e-64ec-4aab-9f3d-3ba807cbd35f",
        "invoice_number": "INV-000042",
        "status": "issued",
        "customer_id": "3f15a3de-7d4a-4f53-bb5f-9a4c5f9aa001",
        "customer_name": "Acme Corp",
        "currency": "USD",
        "issue_date": "2026-01-23",
        "due_date": "2026-02-22",
        "subtotal": "100.00",
        "tax_total": "20.00",
        "total": "120.00",
        "amount_paid": "0",
        "amount_due": "120.00",
        "notes": null,
        "metadata": null,
        "created_utc": "2026-01-23T10:00:00Z"
    })
}

#[test]
fn backend_payload_deserializes_with_typed_money() {
    let invoice: Invoice =
        serde_json::from_value(invoice_payload()).expect("Failed to parse invoice payload");

    assert_eq!(invoice.status, InvoiceStatus::Issued);
    assert_eq!(invoice.subtotal, dec!(100));
    assert_eq!(invoice.total, Some(dec!(120)));
    assert_eq!(invoice.amount_due, dec!(120));
}

#[test]
fn malformed_money_fields_degrade_to_zero() {
    let mut payload = invoice_payload();
    payload["amount_paid"] = json!("n/a");
    payload["tax_total"] = json!("");

    let invoice: Invoice =
        serde_json::from_value(payload).expect("Failed to parse invoice payload");
    assert_eq!(invoice.amount_paid, Decimal::ZERO);
    assert_eq!(invoice.tax_total, Decimal::ZERO);
}

#[test]
fn numeric_money_fields_are_also_accepted() {
    let mut payload = invoice_payload();
    payload["amount_paid"] = json!(45.5);

    let invoice: Invoice =
        serde_json::from_value(payload).expect("Failed to parse invoice payload");
    assert_eq!(invoice.amount_paid, dec!(45.5));
}

#[test]
fn missing_stored_total_falls_back_to_computed() {
    let mut payload = invoice_payload();
    payload["total"] = json!(null);

    let invoice: Invoice =
        serde_json::from_value(payload).expect("Failed to parse invoice payload");
    assert_eq!(invoice.total, None);
    assert_eq!(invoice.display_total(dec!(117.50)), dec!(117.50));
}

#[test]
fn stored_total_wins_over_computed() {
    let invoice: Invoice =
        serde_json::from_value(invoice_payload()).expect("Failed to parse invoice payload");
    assert_eq!(invoice.display_total(dec!(117.50)), dec!(120));
}

#[test]
fn outstanding_balance_uses_stored_figures() {
    let mut payload = invoice_payload();
    payload["amount_paid"] = json!("150.00");

    let invoice: Invoice =
        serde_json::from_value(payload).expect("Failed to parse invoice payload");
    // Overpaid: negative balance is a credit, not an error.
    assert_eq!(invoice.outstanding_balance(), dec!(-30));
}

#[test]
fn issued_invoice_past_due_displays_as_overdue() {
    let invoice: Invoice =
        serde_json::from_value(invoice_payload()).expect("Failed to parse invoice payload");

    assert_eq!(
        invoice.display_status(date(2026, 3, 1)),
        InvoiceStatus::Overdue
    );
    // Not yet due.
    assert_eq!(
        invoice.display_status(date(2026, 2, 1)),
        InvoiceStatus::Issued
    );
}

#[test]
fn settled_invoice_is_not_overdue() {
    let mut payload = invoice_payload();
    payload["amount_paid"] = json!("120.00");
    payload["amount_due"] = json!("0");

    let invoice: Invoice =
        serde_json::from_value(payload).expect("Failed to parse invoice payload");
    assert_eq!(
        invoice.display_status(date(2026, 3, 1)),
        InvoiceStatus::Issued
    );
}

#[test]
fn unknown_status_strings_fall_back_to_draft() {
    assert_eq!(InvoiceStatus::from_string("archived"), InvoiceStatus::Draft);
    assert_eq!(InvoiceStatus::from_string("issued"), InvoiceStatus::Issued);
    assert_eq!(InvoiceStatus::Overdue.as_str(), "overdue");
}

#[test]
fn credit_note_exhaustion_follows_remaining_balance() {
    let payload = json!({
        "credit_note_id": "9a0a38a5-16cf-4f39-8d2f-22c5e9a40f10",
        "credit_note_number": "CN-000007",
        "customer_id": "3f15a3de-7d4a-4f53-bb5f-9a4c5f9aa001",
        "currency": "USD",
        "total": "80.00",
        "remaining_balance": "12.34",
        "issue_date": "2026-01-10",
        "created_utc": "2026-01-10T09:00:00Z"
    });

    let mut credit_note: CreditNote =
        serde_json::from_value(payload).expect("Failed to parse credit note payload");
    assert!(!credit_note.is_exhausted());

    credit_note.remaining_balance = Decimal::ZERO;
    assert!(credit_note.is_exhausted());
}
