//! # Recurring Transactions
//!
//! A library for projecting monthly recurring transactions into concrete
//! instances and aggregating them over named calendar periods.
//!
//! ## Core Concepts
//!
//! - **Recurring transaction**: a record flagged to regenerate monthly on
//!   the same day-of-month (clamped to shorter months).
//! - **Projected instance**: a synthetic, non-persisted copy of a recurring
//!   record representing one past or future occurrence.
//! - **Horizon**: the latest date up to which instances are generated.
//! - **Period**: a named, clock-relative calendar range (`this-month`,
//!   `last-month`, `this-year`, `all-time`) used for filtering and
//!   reporting.
//!
//! Every function is a pure computation over its arguments: the reference
//! date (`now`) is always passed in explicitly, so results are deterministic
//! and the whole crate is safe to call concurrently.
//!
//! ## Example
//!
//! ```rust,ignore
//! use recurring_transactions::*;
//! use chrono::NaiveDate;
//!
//! let records = vec![TransactionRecord {
//!     id: "rent".to_string(),
//!     date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
//!     amount: 1800.0,
//!     transaction_type: TransactionType::Expense,
//!     currency: None,
//!     category: "Housing".to_string(),
//!     is_recurring: true,
//!     recurring_frequency: Some(RecurringFrequency::Monthly),
//! }];
//!
//! let now = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
//! let summary = summarize_period(&records, Period::LastMonth, now, 1.38);
//! assert_eq!(summary.cash_flow.expenses, 1800.0);
//! ```

pub mod aggregate;
pub mod error;
pub mod expand;
pub mod filter;
pub mod ingestion;
pub mod period;
pub mod schema;
pub mod utils;

pub use aggregate::{
    cash_flow_summary, expenses_by_category, ratio_to_percent, round_currency, round_percent,
    to_cad, CashFlowSummary, CategoryTotal,
};
pub use error::{RecurrenceError, Result};
pub use expand::expand_recurring;
pub use filter::{filter_by_period, filter_transactions_with_recurring, Dated};
pub use ingestion::{parse_date, records_from_rows, RawTransactionRow};
pub use period::{Period, PeriodRange};
pub use schema::*;
pub use utils::*;

use chrono::NaiveDate;
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The payload shape returned by the product's read-only summary endpoints
/// (consumed by the dashboard and the tool-calling assistant).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PeriodSummary {
    pub period: Period,

    #[schemars(description = "Human-readable period label, e.g. \"March 2025\" or \"All Time\"")]
    pub label: String,

    #[schemars(description = "First calendar day of the resolved period")]
    pub start: NaiveDate,

    #[schemars(description = "Last calendar day of the resolved period")]
    pub end: NaiveDate,

    #[schemars(description = "Number of transaction instances in the period, projected ones included")]
    pub transaction_count: usize,

    pub cash_flow: CashFlowSummary,

    pub expenses_by_category: Vec<CategoryTotal>,
}

impl PeriodSummary {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(PeriodSummary)
    }

    pub fn schema_as_json() -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::generate_json_schema())
    }
}

pub struct TransactionReporter;

impl TransactionReporter {
    /// Expands, filters and aggregates one snapshot of transaction records
    /// for the given period. `usd_to_cad` is the caller-fetched exchange
    /// rate; all totals come back in CAD with endpoint rounding applied.
    pub fn summarize(
        records: &[TransactionRecord],
        period: Period,
        now: NaiveDate,
        usd_to_cad: f64,
    ) -> PeriodSummary {
        let range = period.range(now);
        info!(
            "Summarizing {} records for {} ({} to {})",
            records.len(),
            period.label(now),
            range.start.date(),
            range.end.date()
        );

        let instances = filter_transactions_with_recurring(records, period, now);
        debug!(
            "{} instances in period after recurrence expansion",
            instances.len()
        );

        PeriodSummary {
            period,
            label: period.label(now),
            start: range.start.date(),
            end: range.end.date(),
            transaction_count: instances.len(),
            cash_flow: cash_flow_summary(&instances, usd_to_cad),
            expenses_by_category: expenses_by_category(&instances, usd_to_cad),
        }
    }
}

pub fn summarize_period(
    records: &[TransactionRecord],
    period: Period,
    now: NaiveDate,
    usd_to_cad: f64,
) -> PeriodSummary {
    TransactionReporter::summarize(records, period, now, usd_to_cad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(
        id: &str,
        origin: NaiveDate,
        amount: f64,
        transaction_type: TransactionType,
        monthly: bool,
    ) -> TransactionRecord {
        TransactionRecord {
            id: id.to_string(),
            date: origin,
            amount,
            transaction_type,
            currency: None,
            category: "General".to_string(),
            is_recurring: monthly,
            recurring_frequency: monthly.then_some(RecurringFrequency::Monthly),
        }
    }

    #[test]
    fn test_end_to_end_last_month_summary() {
        let records = vec![
            record("rent", date(2025, 1, 20), 1800.0, TransactionType::Expense, true),
            record("pay", date(2025, 3, 1), 4000.0, TransactionType::Income, false),
            record("old", date(2025, 2, 10), 99.0, TransactionType::Expense, false),
        ];

        let now = date(2025, 4, 10);
        let summary = summarize_period(&records, Period::LastMonth, now, 1.4);

        assert_eq!(summary.label, "March 2025");
        assert_eq!(summary.start, date(2025, 3, 1));
        assert_eq!(summary.end, date(2025, 3, 31));
        assert_eq!(summary.transaction_count, 2);
        assert_eq!(summary.cash_flow.income, 4000.0);
        assert_eq!(summary.cash_flow.expenses, 1800.0);
        assert_eq!(summary.cash_flow.net, 2200.0);
    }

    #[test]
    fn test_summary_serializes_for_the_tool_layer() {
        let now = date(2025, 4, 10);
        let summary = summarize_period(&[], Period::ThisYear, now, 1.4);

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"period\":\"this-year\""));
        assert!(json.contains("\"label\":\"2025\""));
        assert!(json.contains("\"transaction_count\":0"));
    }

    #[test]
    fn test_schema_generation() {
        let schema_json = PeriodSummary::schema_as_json().unwrap();
        assert!(schema_json.contains("cash_flow"));
        assert!(schema_json.contains("expenses_by_category"));
    }
}
