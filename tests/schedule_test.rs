//! Recurring template lifecycle integration tests.

use chrono::NaiveDate;
use invoicing_core::error::InvoicingError;
use invoicing_core::models::{
    CreateRecurringInvoice, RecurrenceInterval, RecurringInvoice, RecurringStatus,
};
use invoicing_core::services::{advance, pause, resume};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn monthly_template(first: NaiveDate) -> RecurringInvoice {
    RecurringInvoice::new(CreateRecurringInvoice {
        name: "Monthly retainer".to_string(),
        customer_id: Uuid::new_v4(),
        interval: RecurrenceInterval::Monthly,
        interval_count: 1,
        first_issue_date: first,
        end_date: None,
        occurrences: None,
    })
}

#[test]
fn advancing_steps_the_next_issue_date() {
    let mut template = monthly_template(date(2026, 3, 15));
    assert_eq!(template.next_occurrence(), Some(date(2026, 3, 15)));

    let next = advance(&mut template).expect("Failed to advance template");
    assert_eq!(next, date(2026, 4, 15));
    assert_eq!(template.next_occurrence(), Some(date(2026, 4, 15)));
    assert_eq!(template.status, RecurringStatus::Active);
}

#[test]
fn occurrence_limit_completes_the_template() {
    let mut template = monthly_template(date(2026, 1, 1));
    template.occurrences_remaining = Some(2);

    advance(&mut template).expect("Failed to advance first occurrence");
    assert_eq!(template.status, RecurringStatus::Active);
    assert_eq!(template.occurrences_remaining, Some(1));

    advance(&mut template).expect("Failed to advance final occurrence");
    assert_eq!(template.status, RecurringStatus::Completed);
    assert_eq!(template.next_occurrence(), None);

    assert_eq!(
        advance(&mut template),
        Err(InvoicingError::RecurringNotActive {
            status: "completed"
        })
    );
}

#[test]
fn passing_the_end_date_completes_the_template() {
    let mut template = monthly_template(date(2026, 1, 15));
    template.end_date = Some(date(2026, 2, 20));

    // Feb 15 is on or before the end date: still active.
    advance(&mut template).expect("Failed to advance");
    assert_eq!(template.status, RecurringStatus::Active);

    // Mar 15 passes the end date: completed.
    advance(&mut template).expect("Failed to advance");
    assert_eq!(template.status, RecurringStatus::Completed);
}

#[test]
fn occurrence_landing_exactly_on_end_date_still_bills() {
    let mut template = monthly_template(date(2026, 1, 15));
    template.end_date = Some(date(2026, 2, 15));

    let next = advance(&mut template).expect("Failed to advance");
    assert_eq!(next, date(2026, 2, 15));
    assert_eq!(template.status, RecurringStatus::Active);
}

#[test]
fn paused_templates_cannot_be_advanced() {
    let mut template = monthly_template(date(2026, 5, 1));

    pause(&mut template).expect("Failed to pause template");
    assert_eq!(template.status, RecurringStatus::Paused);
    assert_eq!(template.next_occurrence(), None);

    assert_eq!(
        advance(&mut template),
        Err(InvoicingError::RecurringNotActive { status: "paused" })
    );

    resume(&mut template).expect("Failed to resume template");
    advance(&mut template).expect("Failed to advance after resume");
    assert_eq!(template.next_occurrence(), Some(date(2026, 6, 1)));
}

#[test]
fn unknown_interval_strings_fall_back_to_monthly() {
    assert_eq!(
        RecurrenceInterval::from_string("biweekly"),
        RecurrenceInterval::Monthly
    );
    assert_eq!(
        RecurrenceInterval::from_string("quarterly"),
        RecurrenceInterval::Quarterly
    );
    assert_eq!(RecurrenceInterval::Annually.as_str(), "annually");
}

#[test]
fn completed_templates_cannot_be_paused_or_resumed() {
    let mut template = monthly_template(date(2026, 1, 1));
    template.occurrences_remaining = Some(1);
    advance(&mut template).expect("Failed to advance final occurrence");
    assert_eq!(template.status, RecurringStatus::Completed);

    assert!(pause(&mut template).is_err());
    assert!(resume(&mut template).is_err());
}
