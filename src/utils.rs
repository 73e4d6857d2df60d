use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

pub fn days_in_month(year: i32, month: u32) -> u32 {
    last_day_of_month(year, month).day()
}

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .checked_sub_days(Days::new(1))
        .unwrap()
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let year_diff = end.year() - start.year();
    let month_diff = end.month() as i32 - start.month() as i32;
    year_diff * 12 + month_diff
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).unwrap()
}

/// End-of-day timestamp (23:59:59.999) for inclusive period upper bounds.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999).unwrap()
}

/// English month-name label, e.g. "March 2025".
///
/// Built from the naive calendar fields directly so the label never shifts
/// across a UTC boundary.
pub fn month_year_label(year: i32, month: u32) -> String {
    let name = match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    };
    format!("{} {}", name, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(
            last_day_of_month(2023, 2),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
        assert_eq!(
            last_day_of_month(2024, 2),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            last_day_of_month(2023, 4),
            NaiveDate::from_ymd_opt(2023, 4, 30).unwrap()
        );
        assert_eq!(
            last_day_of_month(2023, 12),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 11), 30);
    }

    #[test]
    fn test_month_stepping() {
        assert_eq!(next_month(2023, 12), (2024, 1));
        assert_eq!(next_month(2023, 6), (2023, 7));
        assert_eq!(prev_month(2023, 1), (2022, 12));
        assert_eq!(prev_month(2023, 7), (2023, 6));
    }

    #[test]
    fn test_months_between() {
        let jan = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let apr = NaiveDate::from_ymd_opt(2025, 4, 5).unwrap();
        assert_eq!(months_between(jan, apr), 3);
        assert_eq!(months_between(apr, jan), -3);

        let dec = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(months_between(dec, jan), 1);
    }

    #[test]
    fn test_end_of_day() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let eod = end_of_day(date);
        assert_eq!(eod.date(), date);
        assert_eq!(eod.format("%H:%M:%S%.3f").to_string(), "23:59:59.999");
    }

    #[test]
    fn test_month_year_label() {
        assert_eq!(month_year_label(2025, 3), "March 2025");
        assert_eq!(month_year_label(2024, 12), "December 2024");
    }
}
