//! Domain models for invoicing-core.

mod charges;
mod credit_note;
mod invoice;
mod line_item;
mod payment;
mod recurring;

pub use charges::{AmountKind, Deposit, Discount, DocumentTax};
pub use credit_note::CreditNote;
pub use invoice::{Invoice, InvoiceStatus};
pub use line_item::{LineItem, LineTax};
pub use payment::{ApplyCreditNote, CreatePayment, Payment, PaymentMethod};
pub use recurring::{
    CreateRecurringInvoice, RecurrenceInterval, RecurringInvoice, RecurringStatus,
};
