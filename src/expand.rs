use crate::schema::{ExpandedInstance, TransactionRecord};
use crate::utils::{days_in_month, months_between, next_month};
use chrono::{Datelike, NaiveDate};

/// Expands monthly-recurring records into one concrete instance per elapsed
/// month, from each record's original month through the month containing
/// `horizon`, inclusive. Non-recurring records (and recurring records with
/// any frequency other than monthly) pass through untouched.
///
/// The projected day-of-month equals the original day-of-month clamped to
/// the last valid day of the target month, so a record dated the 31st lands
/// on Feb 28 (or 29), never on a March date.
///
/// Projected ids are derived from the source id and the instance's
/// year-month, so re-expanding over an overlapping horizon yields the same
/// ids for the same months. Output preserves input record order; instances
/// of one record are emitted oldest month first.
///
/// Pure function of `(records, horizon)`: no clock reads, no mutation of the
/// inputs, safe to call concurrently.
pub fn expand_recurring(records: &[TransactionRecord], horizon: NaiveDate) -> Vec<ExpandedInstance> {
    let mut expanded = Vec::with_capacity(records.len());

    for record in records {
        if !record.expands_monthly() {
            expanded.push(ExpandedInstance::passthrough(record.clone()));
            continue;
        }

        let origin = record.date;
        let original_day = origin.day();

        // Negative span means the horizon sits before the record's own
        // month: the recurrence is not yet due, emit nothing.
        let span = months_between(origin, horizon);
        if span < 0 {
            continue;
        }

        let mut year = origin.year();
        let mut month = origin.month();
        for _ in 0..=span {
            let day = original_day.min(days_in_month(year, month));
            let projected = NaiveDate::from_ymd_opt(year, month, day).unwrap();

            if projected <= horizon {
                expanded.push(project_instance(record, projected, year, month));
            }

            (year, month) = next_month(year, month);
        }
    }

    expanded
}

fn project_instance(
    record: &TransactionRecord,
    projected: NaiveDate,
    year: i32,
    month: u32,
) -> ExpandedInstance {
    let is_projected = projected != record.date;

    let mut copy = record.clone();
    copy.date = projected;
    if is_projected {
        copy.id = format!("{}-{}-{:02}", record.id, year, month);
    }

    ExpandedInstance {
        record: copy,
        is_projected,
        original_id: record.id.clone(),
    }
}
