//! Invoice editor view-model.
//!
//! Owns the not-yet-persisted form state of an invoice being edited: the
//! line items plus document-level tax, discount, and deposit configuration.
//! Every mutation resyncs the affected line's stored amount and recomputes
//! the full totals breakdown. Totals are recomputed per change, never
//! incrementally maintained.

use rust_decimal::Decimal;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::InvoicingError;
use crate::models::{Deposit, Discount, DocumentTax, LineItem, LineTax};
use crate::services::payments::deposit_due;
use crate::services::totals::{compute_totals, InvoiceTotals};

/// Editable invoice state with an always-current totals breakdown.
#[derive(Debug, Clone)]
pub struct InvoiceEditor {
    currency: String,
    line_items: Vec<LineItem>,
    document_tax: Option<DocumentTax>,
    discount: Option<Discount>,
    deposit: Option<Deposit>,
    totals: InvoiceTotals,
}

impl InvoiceEditor {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            line_items: Vec::new(),
            document_tax: None,
            discount: None,
            deposit: None,
            totals: InvoiceTotals::ZERO,
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Current totals breakdown, recomputed on the last mutation.
    pub fn totals(&self) -> InvoiceTotals {
        self.totals
    }

    pub fn discount(&self) -> Option<&Discount> {
        self.discount.as_ref()
    }

    pub fn document_tax(&self) -> Option<&DocumentTax> {
        self.document_tax.as_ref()
    }

    pub fn deposit(&self) -> Option<&Deposit> {
        self.deposit.as_ref()
    }

    /// Deposit requested against the current total.
    pub fn deposit_due(&self) -> Decimal {
        deposit_due(self.totals.total, self.deposit.as_ref())
    }

    /// Add a line item and return its id.
    #[instrument(skip(self, description))]
    pub fn add_line(
        &mut self,
        description: &str,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Uuid {
        let mut item = LineItem::new(description, quantity, unit_price);
        item.sort_order = self.line_items.len() as i32;
        let line_item_id = item.line_item_id;
        self.line_items.push(item);
        self.recompute();
        info!(%line_item_id, "Line item added");
        line_item_id
    }

    #[instrument(skip(self))]
    pub fn update_quantity(
        &mut self,
        line_item_id: Uuid,
        quantity: Decimal,
    ) -> Result<(), InvoicingError> {
        let item = self.line_mut(line_item_id)?;
        item.quantity = quantity;
        item.recalculate();
        self.recompute();
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn update_unit_price(
        &mut self,
        line_item_id: Uuid,
        unit_price: Decimal,
    ) -> Result<(), InvoicingError> {
        let item = self.line_mut(line_item_id)?;
        item.unit_price = unit_price;
        item.recalculate();
        self.recompute();
        Ok(())
    }

    /// Replace a line's taxes with one entry per rate, each amount derived
    /// from the line's current amount.
    #[instrument(skip(self, rates))]
    pub fn set_line_tax_rates(
        &mut self,
        line_item_id: Uuid,
        rates: &[Decimal],
    ) -> Result<(), InvoicingError> {
        let item = self.line_mut(line_item_id)?;
        let amount = item.amount;
        item.line_taxes = rates
            .iter()
            .map(|&rate| LineTax::for_amount(rate, amount))
            .collect();
        self.recompute();
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn remove_line(&mut self, line_item_id: Uuid) -> Result<(), InvoicingError> {
        let position = self
            .line_items
            .iter()
            .position(|item| item.line_item_id == line_item_id)
            .ok_or(InvoicingError::LineItemNotFound { line_item_id })?;
        self.line_items.remove(position);
        self.recompute();
        info!(%line_item_id, "Line item removed");
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn set_discount(&mut self, discount: Discount) {
        self.discount = Some(discount);
        self.recompute();
    }

    pub fn clear_discount(&mut self) {
        self.discount = None;
        self.recompute();
    }

    #[instrument(skip(self, tax))]
    pub fn set_document_tax(&mut self, tax: Option<DocumentTax>) {
        self.document_tax = tax;
        self.recompute();
    }

    pub fn set_deposit(&mut self, deposit: Option<Deposit>) {
        self.deposit = deposit;
        // Deposit is derived from the total at read time; nothing to recompute.
    }

    fn line_mut(&mut self, line_item_id: Uuid) -> Result<&mut LineItem, InvoicingError> {
        self.line_items
            .iter_mut()
            .find(|item| item.line_item_id == line_item_id)
            .ok_or(InvoicingError::LineItemNotFound { line_item_id })
    }

    fn recompute(&mut self) {
        let tax_rate = self
            .document_tax
            .as_ref()
            .map(|t| t.rate)
            .unwrap_or(Decimal::ZERO);
        self.totals = compute_totals(&self.line_items, tax_rate, self.discount.as_ref());
    }
}
