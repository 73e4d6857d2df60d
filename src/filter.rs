use crate::expand::expand_recurring;
use crate::period::Period;
use crate::schema::{ExpandedInstance, TransactionRecord};
use chrono::NaiveDate;

/// Anything carrying a calendar date that period filtering can act on.
pub trait Dated {
    fn calendar_date(&self) -> NaiveDate;
}

impl Dated for TransactionRecord {
    fn calendar_date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for ExpandedInstance {
    fn calendar_date(&self) -> NaiveDate {
        self.record.date
    }
}

/// Keeps only the items whose date falls inside the period's resolved range,
/// both ends inclusive. Order is preserved; nothing is mutated.
pub fn filter_by_period<T: Dated>(items: Vec<T>, period: Period, now: NaiveDate) -> Vec<T> {
    let range = period.range(now);
    items
        .into_iter()
        .filter(|item| range.contains(item.calendar_date()))
        .collect()
}

/// Expands recurring records and narrows the result to the given period.
///
/// The recurrence horizon is the period's END, not `now`. Expanding only up
/// to `now` would drop a `last-month` instance whenever `now` has already
/// rolled into a later month, and would under-expand `this-year`/`all-time`
/// queries whose range reaches past the current day.
pub fn filter_transactions_with_recurring(
    records: &[TransactionRecord],
    period: Period,
    now: NaiveDate,
) -> Vec<ExpandedInstance> {
    let range = period.range(now);
    let expanded = expand_recurring(records, range.end.date());
    expanded
        .into_iter()
        .filter(|instance| range.contains(instance.calendar_date()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{RecurringFrequency, TransactionType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(id: &str, origin: NaiveDate, monthly: bool) -> TransactionRecord {
        TransactionRecord {
            id: id.to_string(),
            date: origin,
            amount: 25.0,
            transaction_type: TransactionType::Expense,
            currency: None,
            category: "Utilities".to_string(),
            is_recurring: monthly,
            recurring_frequency: monthly.then_some(RecurringFrequency::Monthly),
        }
    }

    #[test]
    fn test_filter_by_period_inclusive_bounds() {
        let now = date(2025, 3, 15);
        let records = vec![
            record("start", date(2025, 3, 1), false),
            record("end", date(2025, 3, 15), false),
            record("before", date(2025, 2, 28), false),
            record("after", date(2025, 3, 16), false),
        ];

        let kept = filter_by_period(records, Period::ThisMonth, now);
        let ids: Vec<&str> = kept.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["start", "end"]);
    }

    #[test]
    fn test_last_month_includes_instance_generated_past_now() {
        // now is in April; last-month resolves to March. The March instance
        // only exists if expansion runs to the period end, not to now.
        let now = date(2025, 4, 10);
        let records = vec![record("rent", date(2025, 1, 20), true)];

        let kept = filter_transactions_with_recurring(&records, Period::LastMonth, now);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].calendar_date(), date(2025, 3, 20));
        assert_eq!(kept[0].record.id, "rent-2025-03");
        assert!(kept[0].is_projected);
    }

    #[test]
    fn test_this_month_expansion_stops_at_now() {
        let now = date(2025, 4, 10);
        let records = vec![record("rent", date(2025, 1, 20), true)];

        let kept = filter_transactions_with_recurring(&records, Period::ThisMonth, now);
        // April's instance would land on the 20th, past the period end.
        assert!(kept.is_empty());
    }

    #[test]
    fn test_all_time_returns_every_instance_through_now() {
        let now = date(2025, 4, 25);
        let records = vec![
            record("rent", date(2025, 1, 20), true),
            record("tune-up", date(2025, 2, 3), false),
        ];

        let kept = filter_transactions_with_recurring(&records, Period::AllTime, now);
        let dates: Vec<NaiveDate> = kept.iter().map(|i| i.calendar_date()).collect();
        assert_eq!(
            dates,
            vec![
                date(2025, 1, 20),
                date(2025, 2, 20),
                date(2025, 3, 20),
                date(2025, 4, 20),
                date(2025, 2, 3),
            ]
        );
    }

    #[test]
    fn test_filtering_preserves_order_without_resorting() {
        let now = date(2025, 3, 20);
        let records = vec![
            record("late", date(2025, 3, 10), false),
            record("early", date(2025, 3, 2), false),
        ];

        let kept = filter_by_period(records, Period::ThisMonth, now);
        let ids: Vec<&str> = kept.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["late", "early"]);
    }
}
