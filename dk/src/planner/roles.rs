//! Name-based list role classification
//!
//! Lists carry no structured metadata about which period they cover; the role
//! a list plays is recovered from its name every time a snapshot is taken,
//! and never persisted.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::week;

/// `Done - M/YYYY`, the consolidated-month form
static MONTHLY_ARCHIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Done - ([0-9][0-9]?)/([0-9]{4})$").expect("valid regex"));

/// `Done - week of M/D/YY`, the weekly-archive form (prefix match)
static WEEKLY_ARCHIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Done - week of ([0-9][0-9]?)/([0-9][0-9]?)/([0-9]{2})").expect("valid regex")
});

/// `Done - <digit>...`, the loose heuristic for any dated done list
static OLD_DONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Done - [0-9]").expect("valid regex"));

/// The role a list plays on the board, derived from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRole {
    /// The fixed-name list collecting this week's finished cards
    CurrentWeekDone,
    /// A list already carrying the expected last-week name for today
    LastWeekDone,
    /// A week-dated archive, `year2` being the two-digit year
    WeeklyArchive { month: u32, day: u32, year2: u32 },
    /// A consolidated month, `Done - M/YYYY`
    MonthlyArchive { month: u32, year: i32 },
    /// Anything else on the board
    Other,
}

/// Classify a list name relative to `today`
///
/// The expected last-week name wins over the archive patterns it also
/// matches. Note the month-boundary collision: a week that spanned a month
/// boundary was archived under `Done - M/YYYY`, and once it is no longer
/// "last week" it classifies as a monthly archive.
pub fn classify(name: &str, today: NaiveDate) -> ListRole {
    if name == week::CURRENT_DONE_LIST_NAME {
        return ListRole::CurrentWeekDone;
    }
    if name == week::last_week_list_name(today) {
        return ListRole::LastWeekDone;
    }
    if let Some((month, year)) = parse_monthly_archive(name) {
        return ListRole::MonthlyArchive { month, year };
    }
    if let Some((month, day, year2)) = parse_weekly_archive(name) {
        return ListRole::WeeklyArchive { month, day, year2 };
    }
    ListRole::Other
}

/// Parse a consolidated-month name into (month, 4-digit year)
pub fn parse_monthly_archive(name: &str) -> Option<(u32, i32)> {
    let captures = MONTHLY_ARCHIVE_RE.captures(name)?;
    let month = captures.get(1)?.as_str().parse().ok()?;
    let year = captures.get(2)?.as_str().parse().ok()?;
    Some((month, year))
}

/// Parse a weekly-archive name into (month, day, 2-digit year)
pub fn parse_weekly_archive(name: &str) -> Option<(u32, u32, u32)> {
    let captures = WEEKLY_ARCHIVE_RE.captures(name)?;
    let month = captures.get(1)?.as_str().parse().ok()?;
    let day = captures.get(2)?.as_str().parse().ok()?;
    let year2 = captures.get(3)?.as_str().parse().ok()?;
    Some((month, day, year2))
}

/// Loose "old done list" test used to pick the rotation target
///
/// Matches both name generations: the `week of` form and anything starting
/// `Done - <digit>`, which covers monthly archives and hand-made variants.
pub fn is_old_done_list(name: &str) -> bool {
    name.starts_with("Done - week of") || OLD_DONE_RE.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        // Wednesday; this Monday 1/22/24, last Monday 1/15/24
        NaiveDate::from_ymd_opt(2024, 1, 24).unwrap()
    }

    #[test]
    fn test_classify_current_week() {
        assert_eq!(classify("Done - this week", today()), ListRole::CurrentWeekDone);
    }

    #[test]
    fn test_classify_last_week_beats_weekly_archive() {
        assert_eq!(classify("Done - week of 1/15/24", today()), ListRole::LastWeekDone);
    }

    #[test]
    fn test_classify_weekly_archive() {
        assert_eq!(
            classify("Done - week of 1/8/24", today()),
            ListRole::WeeklyArchive {
                month: 1,
                day: 8,
                year2: 24
            }
        );
    }

    #[test]
    fn test_classify_monthly_archive() {
        assert_eq!(
            classify("Done - 12/2023", today()),
            ListRole::MonthlyArchive { month: 12, year: 2023 }
        );
    }

    #[test]
    fn test_month_boundary_name_is_monthly_once_stale() {
        // A month-spanning rotation on 1/3/24 produced "Done - 12/2023";
        // three weeks later that name reads as a monthly archive.
        assert_eq!(
            classify("Done - 12/2023", today()),
            ListRole::MonthlyArchive { month: 12, year: 2023 }
        );
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(classify("To Do", today()), ListRole::Other);
        assert_eq!(classify("Done - someday", today()), ListRole::Other);
        assert_eq!(classify("done - this week", today()), ListRole::Other);
    }

    #[test]
    fn test_monthly_archive_requires_exact_shape() {
        assert_eq!(parse_monthly_archive("Done - 3/2024"), Some((3, 2024)));
        assert_eq!(parse_monthly_archive("Done - 11/2023"), Some((11, 2023)));
        // Day component, 2-digit year or trailing text disqualify
        assert_eq!(parse_monthly_archive("Done - 3/4/2024"), None);
        assert_eq!(parse_monthly_archive("Done - 3/24"), None);
        assert_eq!(parse_monthly_archive("Done - 3/2024 old"), None);
    }

    #[test]
    fn test_weekly_archive_parsing() {
        assert_eq!(parse_weekly_archive("Done - week of 3/4/24"), Some((3, 4, 24)));
        assert_eq!(parse_weekly_archive("Done - week of 12/25/23"), Some((12, 25, 23)));
        // Prefix match: trailing annotations are tolerated
        assert_eq!(parse_weekly_archive("Done - week of 3/4/24 (short week)"), Some((3, 4, 24)));
        assert_eq!(parse_weekly_archive("Done - week of soon"), None);
    }

    #[test]
    fn test_old_done_list_heuristic() {
        assert!(is_old_done_list("Done - week of 1/8/24"));
        assert!(is_old_done_list("Done - 12/2023"));
        assert!(is_old_done_list("Done - 2023 leftovers"));
        assert!(!is_old_done_list("Done - this week"));
        assert!(!is_old_done_list("Doing"));
    }
}
