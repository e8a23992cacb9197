//! Recurring invoice template model.

use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Interval between generated invoices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceInterval {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Annually,
}

impl RecurrenceInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrenceInterval::Daily => "daily",
            RecurrenceInterval::Weekly => "weekly",
            RecurrenceInterval::Monthly => "monthly",
            RecurrenceInterval::Quarterly => "quarterly",
            RecurrenceInterval::Annually => "annually",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "daily" => RecurrenceInterval::Daily,
            "weekly" => RecurrenceInterval::Weekly,
            "quarterly" => RecurrenceInterval::Quarterly,
            "annually" => RecurrenceInterval::Annually,
            _ => RecurrenceInterval::Monthly,
        }
    }

    /// Date `count` intervals after `from`. Month-based intervals use
    /// calendar arithmetic, clamping the day at short month ends
    /// (Jan 31 + 1 month = Feb 28).
    pub fn advance_date(&self, from: NaiveDate, count: i32) -> NaiveDate {
        let count = count.max(1);
        match self {
            RecurrenceInterval::Daily => from + Duration::days(count as i64),
            RecurrenceInterval::Weekly => from + Duration::weeks(count as i64),
            RecurrenceInterval::Monthly => from + Months::new(count as u32),
            RecurrenceInterval::Quarterly => from + Months::new((count * 3) as u32),
            RecurrenceInterval::Annually => from + Months::new((count * 12) as u32),
        }
    }
}

/// Recurring template status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurringStatus {
    Active,
    Paused,
    Completed,
}

impl RecurringStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurringStatus::Active => "active",
            RecurringStatus::Paused => "paused",
            RecurringStatus::Completed => "completed",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "paused" => RecurringStatus::Paused,
            "completed" => RecurringStatus::Completed,
            _ => RecurringStatus::Active,
        }
    }
}

/// Template from which invoices are generated on a schedule.
///
/// `next_issue_date` is the date the next invoice falls due for generation.
/// A template completes when its occurrence limit runs out or the schedule
/// passes `end_date` (inclusive: an occurrence landing exactly on `end_date`
/// is still generated).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringInvoice {
    pub template_id: Uuid,
    pub name: String,
    pub customer_id: Uuid,
    pub interval: RecurrenceInterval,
    pub interval_count: i32,
    pub status: RecurringStatus,
    pub next_issue_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub occurrences_remaining: Option<i32>,
    pub created_utc: DateTime<Utc>,
}

/// Input for creating a recurring template.
#[derive(Debug, Clone)]
pub struct CreateRecurringInvoice {
    pub name: String,
    pub customer_id: Uuid,
    pub interval: RecurrenceInterval,
    pub interval_count: i32,
    pub first_issue_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub occurrences: Option<i32>,
}

impl RecurringInvoice {
    pub fn new(input: CreateRecurringInvoice) -> Self {
        Self {
            template_id: Uuid::new_v4(),
            name: input.name,
            customer_id: input.customer_id,
            interval: input.interval,
            interval_count: input.interval_count,
            status: RecurringStatus::Active,
            next_issue_date: input.first_issue_date,
            end_date: input.end_date,
            occurrences_remaining: input.occurrences,
            created_utc: Utc::now(),
        }
    }

    /// Date of the next invoice, if the template is still active.
    pub fn next_occurrence(&self) -> Option<NaiveDate> {
        match self.status {
            RecurringStatus::Active => Some(self.next_issue_date),
            _ => None,
        }
    }
}
