use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::domain::{
    dates::{add_days, format_month_day},
    schedule::WeekGroup,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekLabel {
    ThisWeek,
    NextWeek,
    Range { first: NaiveDate, last: NaiveDate },
}

impl fmt::Display for WeekLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThisWeek => f.write_str("This Week"),
            Self::NextWeek => f.write_str("Next Week"),
            Self::Range { first, last } if first == last => {
                f.write_str(&format_month_day(*first))
            }
            Self::Range { first, last } => write!(
                f,
                "{} \u{2013} {}",
                format_month_day(*first),
                format_month_day(*last)
            ),
        }
    }
}

/// Monday after the next Sunday strictly following `today`.
///
/// Counted from a Sunday-first week, so on a Sunday this lands eight days
/// out rather than tomorrow.
#[must_use]
pub fn next_week_start(today: NaiveDate) -> NaiveDate {
    add_days(today, 7 - today.weekday().num_days_from_sunday() + 1)
}

/// Heading for one week of the upcoming grid. First match wins:
///
/// 1. any show tonight gives "This Week",
/// 2. a first show inside the seven days from [`next_week_start`] gives
///    "Next Week",
/// 3. otherwise the span of show dates in the group.
///
/// Rule 2 is measured from today's week, not from the previous group, so a
/// gap in the schedule never shifts it.
#[must_use]
pub fn label_week(group: &WeekGroup<'_>, today: NaiveDate) -> WeekLabel {
    if group.shows().iter().any(|dated| dated.date == today) {
        return WeekLabel::ThisWeek;
    }

    let next_start = next_week_start(today);
    let next_end = add_days(next_start, 6);
    let first = group.first().date;
    if (next_start..=next_end).contains(&first) {
        return WeekLabel::NextWeek;
    }

    WeekLabel::Range {
        first,
        last: group.last().date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::schedule::group_by_week,
        test_support::{date, show},
    };

    fn label_of(dates: &[&str], today: &str) -> String {
        let shows: Vec<_> = dates
            .iter()
            .enumerate()
            .map(|(idx, day)| show(&format!("s{idx}"), day))
            .collect();
        let groups = group_by_week(&shows).expect("valid dates");
        assert_eq!(groups.len(), 1, "fixture must fit in one week");
        label_week(&groups[0], date(today)).to_string()
    }

    #[test]
    fn tonight_wins_even_when_not_first() {
        assert_eq!(label_of(&["2026-02-05", "2026-02-06"], "2026-02-06"), "This Week");
    }

    #[test]
    fn this_week_without_tonight_is_a_date_range() {
        assert_eq!(
            label_of(&["2026-02-07", "2026-02-08"], "2026-02-06"),
            "Feb 7 \u{2013} Feb 8"
        );
    }

    #[test]
    fn following_calendar_week_is_next_week() {
        assert_eq!(label_of(&["2026-02-09", "2026-02-13"], "2026-02-06"), "Next Week");
        assert_eq!(label_of(&["2026-02-15"], "2026-02-06"), "Next Week");
    }

    #[test]
    fn on_sunday_next_week_skips_tomorrow() {
        assert_eq!(next_week_start(date("2026-02-08")), date("2026-02-16"));
        assert_eq!(label_of(&["2026-02-10"], "2026-02-08"), "Feb 10");
        assert_eq!(label_of(&["2026-02-16", "2026-02-20"], "2026-02-08"), "Next Week");
    }

    #[test]
    fn later_weeks_use_ranges() {
        assert_eq!(label_of(&["2026-02-20"], "2026-02-06"), "Feb 20");
        assert_eq!(
            label_of(&["2026-02-27", "2026-03-01"], "2026-02-06"),
            "Feb 27 \u{2013} Mar 1"
        );
    }

    #[test]
    fn same_date_first_and_last_has_no_dash() {
        let label = label_of(&["2026-02-20", "2026-02-20"], "2026-02-06");
        assert_eq!(label, "Feb 20");
        assert!(!label.contains('\u{2013}'));
    }

    #[test]
    fn next_week_start_is_the_following_monday_from_monday_to_saturday() {
        let today = date("2026-02-02");
        for offset in 0..6 {
            let day = add_days(today, offset);
            assert_eq!(next_week_start(day), date("2026-02-09"));
        }
    }
}
