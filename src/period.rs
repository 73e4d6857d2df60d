use crate::utils::{end_of_day, last_day_of_month, month_year_label, prev_month, start_of_day};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Named calendar ranges resolved relative to a reference date.
///
/// These are the only periods the dashboard and tool-calling endpoints
/// accept. Unrecognized names degrade to [`Period::AllTime`] rather than
/// erroring, so a bad period string can never take down a request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    #[schemars(description = "From the first day of the current month through today")]
    ThisMonth,

    #[schemars(description = "The full previous calendar month")]
    LastMonth,

    #[schemars(description = "From January 1st of the current year through today")]
    ThisYear,

    #[schemars(description = "Everything on record, through today")]
    AllTime,
}

/// Inclusive timestamp range for one resolved period.
///
/// `end` always sits at 23:59:59.999 so that a transaction dated on the
/// boundary day is inside the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl PeriodRange {
    /// True if a calendar date falls within the range, both ends inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let at_midnight = start_of_day(date);
        self.start <= at_midnight && at_midnight <= self.end
    }
}

/// Start sentinel for `all-time` queries. Predates any record the product
/// can hold.
fn all_time_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

impl Period {
    /// Parses a period name, falling back to `all-time` for anything
    /// unrecognized. Never fails.
    pub fn from_name(name: &str) -> Self {
        match name {
            "this-month" => Period::ThisMonth,
            "last-month" => Period::LastMonth,
            "this-year" => Period::ThisYear,
            _ => Period::AllTime,
        }
    }

    /// Resolves the period to a concrete `[start, end]` range relative to
    /// `now`. Pure function of its arguments; callers inject `now` so the
    /// result is reproducible in tests.
    pub fn range(self, now: NaiveDate) -> PeriodRange {
        match self {
            Period::ThisMonth => {
                let first = NaiveDate::from_ymd_opt(now.year(), now.month(), 1).unwrap();
                PeriodRange {
                    start: start_of_day(first),
                    end: end_of_day(now),
                }
            }
            Period::LastMonth => {
                let (year, month) = prev_month(now.year(), now.month());
                let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
                PeriodRange {
                    start: start_of_day(first),
                    end: end_of_day(last_day_of_month(year, month)),
                }
            }
            Period::ThisYear => {
                let jan_first = NaiveDate::from_ymd_opt(now.year(), 1, 1).unwrap();
                PeriodRange {
                    start: start_of_day(jan_first),
                    end: end_of_day(now),
                }
            }
            Period::AllTime => PeriodRange {
                start: start_of_day(all_time_start()),
                end: end_of_day(now),
            },
        }
    }

    /// Human-readable label for the resolved period: "March 2025" for
    /// month-scoped periods, "2025" for the year, "All Time" otherwise.
    pub fn label(self, now: NaiveDate) -> String {
        match self {
            Period::ThisMonth => month_year_label(now.year(), now.month()),
            Period::LastMonth => {
                let (year, month) = prev_month(now.year(), now.month());
                month_year_label(year, month)
            }
            Period::ThisYear => now.year().to_string(),
            Period::AllTime => "All Time".to_string(),
        }
    }
}
