use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{
    dates::{canonical, week_start},
    error::MalformedDateError,
    schedule::DatedShow,
    show::Show,
};

/// Shows sharing one Monday-anchored week. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGroup<'a> {
    week_key: NaiveDate,
    shows: Vec<DatedShow<'a>>,
}

impl<'a> WeekGroup<'a> {
    pub fn week_key(&self) -> NaiveDate {
        self.week_key
    }

    /// Canonical `YYYY-MM-DD` form of the week key.
    pub fn key(&self) -> String {
        canonical(self.week_key)
    }

    pub fn shows(&self) -> &[DatedShow<'a>] {
        &self.shows
    }

    pub fn first(&self) -> &DatedShow<'a> {
        &self.shows[0]
    }

    pub fn last(&self) -> &DatedShow<'a> {
        &self.shows[self.shows.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }
}

/// Buckets shows by the Monday of their week, ordered by week.
///
/// Membership depends only on each show's own date; within a week the input
/// order is kept.
pub fn group_by_week(shows: &[Show]) -> Result<Vec<WeekGroup<'_>>, MalformedDateError> {
    let mut buckets: BTreeMap<NaiveDate, Vec<DatedShow<'_>>> = BTreeMap::new();
    for show in shows {
        let dated = DatedShow::parse(show)?;
        buckets
            .entry(week_start(dated.date))
            .or_default()
            .push(dated);
    }

    Ok(buckets
        .into_iter()
        .map(|(week_key, shows)| WeekGroup { week_key, shows })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, show};

    #[test]
    fn splits_at_monday() {
        let shows = vec![
            show("fri", "2026-02-06"),
            show("sun", "2026-02-08"),
            show("mon", "2026-02-09"),
            show("fri2", "2026-02-13"),
        ];

        let groups = group_by_week(&shows).expect("valid dates");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key(), "2026-02-02");
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[1].week_key(), date("2026-02-09"));
        assert_eq!(groups[1].first().show.id, "mon");
        assert_eq!(groups[1].last().show.id, "fri2");
    }

    #[test]
    fn skipped_weeks_produce_no_empty_groups() {
        let shows = vec![show("a", "2026-02-06"), show("b", "2026-03-04")];
        let groups = group_by_week(&shows).expect("valid dates");
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| !g.is_empty()));
        assert_eq!(groups[1].key(), "2026-03-02");
    }

    #[test]
    fn same_day_shows_keep_input_order() {
        let shows = vec![
            show("early", "2026-02-07"),
            show("late", "2026-02-07"),
            show("next", "2026-02-08"),
        ];
        let groups = group_by_week(&shows).expect("valid dates");
        let ids: Vec<_> = groups[0].shows().iter().map(|s| s.show.id.as_str()).collect();
        assert_eq!(ids, ["early", "late", "next"]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_week(&[]).expect("empty").is_empty());
    }

    #[test]
    fn malformed_date_rejects_the_batch() {
        let shows = vec![show("a", "2026-02-06"), show("b", "2026-02-30")];
        let err = group_by_week(&shows).expect_err("malformed");
        assert_eq!(err.value, "2026-02-30");
    }
}
