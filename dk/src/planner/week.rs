//! Week bucketing and done-list naming
//!
//! All date handling is anchored on Mondays: a week is identified by the
//! Monday that starts it. "This Monday" is the most recent Monday on or
//! before today (today itself when today is a Monday).

use chrono::{Datelike, Days, NaiveDate};

/// Name of the list collecting the current week's finished cards
pub const CURRENT_DONE_LIST_NAME: &str = "Done - this week";

/// The week a date falls into, keyed by its Monday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekBucket {
    pub month: u32,
    pub year: i32,
    pub monday: NaiveDate,
}

impl WeekBucket {
    /// Bucket for the week containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        let monday = this_monday(date);
        Self {
            month: monday.month(),
            year: monday.year(),
            monday,
        }
    }
}

/// Most recent Monday on or before `today`
pub fn this_monday(today: NaiveDate) -> NaiveDate {
    let offset = today.weekday().num_days_from_monday();
    today - Days::new(u64::from(offset))
}

/// The Monday before the most recent one
pub fn last_monday(today: NaiveDate) -> NaiveDate {
    this_monday(today) - Days::new(7)
}

/// Name for the just-finished week's done list
///
/// `"Done - week of M/D/YY"` while last Monday and this Monday share a
/// calendar month. A week spanning a month boundary degrades to the coarser
/// `"Done - M/YYYY"` form, identical to a monthly-archive name; consolidation
/// will later treat such a list as a monthly bucket.
pub fn last_week_list_name(today: NaiveDate) -> String {
    let this_week = WeekBucket::containing(today);
    let last_week = WeekBucket::containing(last_monday(today));

    if last_week.month == this_week.month {
        format!("Done - week of {}", last_week.monday.format("%-m/%-d/%y"))
    } else {
        format!("Done - {}", last_week.monday.format("%-m/%Y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_this_monday_for_every_weekday() {
        let monday = date(2024, 1, 22);
        for offset in 0..7 {
            let today = monday + Days::new(offset);
            assert_eq!(this_monday(today), monday, "offset {}", offset);
        }
        // The following Monday starts a new week
        assert_eq!(this_monday(monday + Days::new(7)), date(2024, 1, 29));
    }

    #[test]
    fn test_last_monday_is_seven_days_back() {
        assert_eq!(last_monday(date(2024, 1, 24)), date(2024, 1, 15));
        assert_eq!(last_monday(date(2024, 1, 22)), date(2024, 1, 15));
    }

    #[test]
    fn test_week_bucket_fields() {
        let bucket = WeekBucket::containing(date(2024, 3, 6));
        assert_eq!(bucket.monday, date(2024, 3, 4));
        assert_eq!(bucket.month, 3);
        assert_eq!(bucket.year, 2024);
    }

    #[test]
    fn test_last_week_name_same_month() {
        // This Monday Jan 22, last Monday Jan 15: no zero padding, 2-digit year
        assert_eq!(last_week_list_name(date(2024, 1, 24)), "Done - week of 1/15/24");
    }

    #[test]
    fn test_last_week_name_spans_month_boundary() {
        // This Monday Jan 1 2024, last Monday Dec 25 2023
        assert_eq!(last_week_list_name(date(2024, 1, 3)), "Done - 12/2023");
    }

    #[test]
    fn test_last_week_name_double_digit_components() {
        // This Monday Oct 23, last Monday Oct 16
        assert_eq!(last_week_list_name(date(2023, 10, 25)), "Done - week of 10/16/23");
    }

    #[test]
    fn test_bucket_month_comes_from_monday_not_today() {
        // Wednesday Feb 1 2023 belongs to the week of Monday Jan 30
        let bucket = WeekBucket::containing(date(2023, 2, 1));
        assert_eq!(bucket.month, 1);
        assert_eq!(bucket.monday, date(2023, 1, 30));
    }
}
