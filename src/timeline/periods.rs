//! Per-granularity period rules: where a period starts, where the next one
//! starts, how it is keyed and how it is labelled.
//!
//! Every granularity-dependent decision of the bucketing engine goes through
//! one exhaustive `match` in this file.

use chrono::{Datelike, Days, Months, NaiveDate};

use super::types::{Granularity, WeekStart};

/// Start of the period at `granularity` that contains `date`.
///
/// `Document` is treated as a single day. A week that would begin before the
/// first representable date is clamped to `NaiveDate::MIN`.
pub fn period_start(granularity: Granularity, date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let days_back = match granularity {
        Granularity::Year => date.ordinal0(),
        Granularity::Month => date.day0(),
        Granularity::Week => {
            (7 + date.weekday().num_days_from_monday()
                - week_start.weekday().num_days_from_monday())
                % 7
        }
        Granularity::Day | Granularity::Document => 0,
    };
    date.checked_sub_days(Days::new(u64::from(days_back))).unwrap_or(NaiveDate::MIN)
}

/// Start of the period following the one anchored at `anchor`.
/// `None` when the calendar runs out.
pub fn next_period_start(granularity: Granularity, anchor: NaiveDate) -> Option<NaiveDate> {
    match granularity {
        Granularity::Year => anchor.checked_add_months(Months::new(12)),
        Granularity::Month => anchor.checked_add_months(Months::new(1)),
        Granularity::Week => anchor.checked_add_days(Days::new(7)),
        Granularity::Day | Granularity::Document => anchor.succ_opt(),
    }
}

/// Last day (inclusive) of the period anchored at `anchor`.
pub fn period_end(granularity: Granularity, anchor: NaiveDate) -> NaiveDate {
    next_period_start(granularity, anchor)
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Whether `date` falls in the same `granularity` period as `anchor`.
pub fn same_period(
    granularity: Granularity,
    anchor: NaiveDate,
    date: NaiveDate,
    week_start: WeekStart,
) -> bool {
    period_start(granularity, anchor, week_start) == period_start(granularity, date, week_start)
}

/// Period key, unique among the groups of one bucketing call.
pub fn period_key(granularity: Granularity, anchor: NaiveDate) -> String {
    match granularity {
        Granularity::Year => anchor.format("%Y").to_string(),
        Granularity::Month => anchor.format("%Y-%m").to_string(),
        Granularity::Week | Granularity::Day | Granularity::Document => {
            anchor.format("%Y-%m-%d").to_string()
        }
    }
}

/// Long label used by the drill-down list ("December 2024",
/// "Week of Dec 8, 2024", "Sunday, Dec 15, 2024").
pub fn drill_label(granularity: Granularity, anchor: NaiveDate) -> String {
    match granularity {
        Granularity::Year => anchor.format("%Y").to_string(),
        Granularity::Month => anchor.format("%B %Y").to_string(),
        Granularity::Week => format!("Week of {}", anchor.format("%b %-d, %Y")),
        Granularity::Day => anchor.format("%A, %b %-d, %Y").to_string(),
        Granularity::Document => anchor.format("%b %-d, %Y").to_string(),
    }
}

/// Compact label used under the dots of the horizontal axis.
pub fn axis_label(granularity: Granularity, anchor: NaiveDate) -> String {
    match granularity {
        Granularity::Year => anchor.format("%Y").to_string(),
        Granularity::Month => anchor.format("%b %Y").to_string(),
        Granularity::Week | Granularity::Day | Granularity::Document => {
            anchor.format("%b %d").to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::timeline::Granularity::{Day, Month, Week, Year};
    use crate::timeline::WeekStart::{Monday, Sunday};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn year_and_month_starts() {
        assert_eq!(period_start(Year, d(2024, 12, 15), Monday), d(2024, 1, 1));
        assert_eq!(period_start(Month, d(2024, 12, 15), Monday), d(2024, 12, 1));
        assert_eq!(period_start(Month, d(2024, 2, 29), Monday), d(2024, 2, 1));
    }

    #[test]
    fn week_start_depends_on_configured_day() {
        // 2024-12-15 is a Sunday
        assert_eq!(period_start(Week, d(2024, 12, 15), Sunday), d(2024, 12, 15));
        assert_eq!(period_start(Week, d(2024, 12, 15), Monday), d(2024, 12, 9));
        // 2024-12-12 is a Thursday
        assert_eq!(period_start(Week, d(2024, 12, 12), Sunday), d(2024, 12, 8));
        assert_eq!(period_start(Week, d(2024, 12, 12), Monday), d(2024, 12, 9));
    }

    #[test]
    fn week_can_start_in_previous_year() {
        // 2025-01-01 is a Wednesday
        assert_eq!(period_start(Week, d(2025, 1, 1), Monday), d(2024, 12, 30));
    }

    #[test]
    fn week_start_clamps_at_first_date() {
        let first = NaiveDate::MIN;
        for week_start in [Sunday, Monday] {
            let anchor = period_start(Week, first, week_start);
            assert_eq!(anchor, first);
            assert!(same_period(Week, anchor, first, week_start));
        }
        assert_eq!(period_start(Year, first, Sunday), first);
        assert_eq!(period_start(Month, first, Sunday), first);
        assert_eq!(period_start(Day, first, Sunday), first);
    }

    #[test]
    fn next_period_steps() {
        assert_eq!(next_period_start(Year, d(2024, 1, 1)), Some(d(2025, 1, 1)));
        assert_eq!(next_period_start(Month, d(2024, 12, 1)), Some(d(2025, 1, 1)));
        assert_eq!(next_period_start(Week, d(2024, 12, 30)), Some(d(2025, 1, 6)));
        assert_eq!(next_period_start(Day, d(2024, 2, 28)), Some(d(2024, 2, 29)));
        assert_eq!(next_period_start(Day, NaiveDate::MAX), None);
    }

    #[test]
    fn period_end_is_inclusive() {
        assert_eq!(period_end(Month, d(2024, 2, 1)), d(2024, 2, 29));
        assert_eq!(period_end(Week, d(2024, 12, 9)), d(2024, 12, 15));
        assert_eq!(period_end(Day, d(2024, 12, 9)), d(2024, 12, 9));
    }

    #[test]
    fn same_period_checks() {
        assert!(same_period(Year, d(2024, 1, 1), d(2024, 12, 31), Monday));
        assert!(!same_period(Month, d(2024, 12, 1), d(2024, 11, 30), Monday));
        assert!(same_period(Week, d(2024, 12, 8), d(2024, 12, 14), Sunday));
        assert!(!same_period(Week, d(2024, 12, 8), d(2024, 12, 15), Sunday));
    }

    #[test]
    fn keys() {
        assert_eq!(period_key(Year, d(2024, 1, 1)), "2024");
        assert_eq!(period_key(Month, d(2024, 12, 1)), "2024-12");
        assert_eq!(period_key(Week, d(2024, 12, 8)), "2024-12-08");
        assert_eq!(period_key(Day, d(2024, 12, 15)), "2024-12-15");
    }

    #[test]
    fn drill_labels() {
        assert_eq!(drill_label(Year, d(2024, 1, 1)), "2024");
        assert_eq!(drill_label(Month, d(2024, 12, 1)), "December 2024");
        assert_eq!(drill_label(Week, d(2024, 12, 8)), "Week of Dec 8, 2024");
        assert_eq!(drill_label(Day, d(2024, 12, 15)), "Sunday, Dec 15, 2024");
    }

    #[test]
    fn axis_labels() {
        assert_eq!(axis_label(Month, d(2024, 12, 1)), "Dec 2024");
        assert_eq!(axis_label(Week, d(2024, 12, 9)), "Dec 09");
        assert_eq!(axis_label(Day, d(2024, 11, 8)), "Nov 08");
    }
}
