//! Recurring invoice scheduling.

use chrono::NaiveDate;
use tracing::{info, instrument};

use crate::error::InvoicingError;
use crate::models::{RecurringInvoice, RecurringStatus};

/// Advance a template past its current occurrence and return the new next
/// issue date.
///
/// Called after the invoice for `next_issue_date` has been generated. The
/// occurrence limit is decremented first; the template completes when the
/// limit runs out or when the following date passes `end_date`. An
/// occurrence landing exactly on `end_date` still bills.
#[instrument(skip(template), fields(template_id = %template.template_id))]
pub fn advance(template: &mut RecurringInvoice) -> Result<NaiveDate, InvoicingError> {
    if template.status != RecurringStatus::Active {
        return Err(InvoicingError::RecurringNotActive {
            status: template.status.as_str(),
        });
    }

    if let Some(remaining) = template.occurrences_remaining.as_mut() {
        *remaining -= 1;
        if *remaining <= 0 {
            template.status = RecurringStatus::Completed;
        }
    }

    let next = template
        .interval
        .advance_date(template.next_issue_date, template.interval_count);

    if let Some(end_date) = template.end_date {
        if next > end_date {
            template.status = RecurringStatus::Completed;
        }
    }

    template.next_issue_date = next;

    info!(
        next_issue_date = %next,
        status = template.status.as_str(),
        "Recurring template advanced"
    );

    Ok(next)
}

/// Pause an active template.
pub fn pause(template: &mut RecurringInvoice) -> Result<(), InvoicingError> {
    if template.status != RecurringStatus::Active {
        return Err(InvoicingError::RecurringNotActive {
            status: template.status.as_str(),
        });
    }
    template.status = RecurringStatus::Paused;
    Ok(())
}

/// Resume a paused template. Resuming a completed template is an error.
pub fn resume(template: &mut RecurringInvoice) -> Result<(), InvoicingError> {
    if template.status != RecurringStatus::Paused {
        return Err(InvoicingError::RecurringNotActive {
            status: template.status.as_str(),
        });
    }
    template.status = RecurringStatus::Active;
    Ok(())
}
