use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::domain::{
    dates::{month_abbrev, month_name, parse_date},
    error::MalformedDateError,
    schedule::{HeroView, UpcomingView, build_hero_within, build_upcoming},
    show::Show,
};

/// Everything one refresh pass hands to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePage {
    pub today: NaiveDate,
    pub section_label: String,
    pub tonight: Option<String>,
    pub hero: HeroView,
    pub lineup_label: Option<String>,
    pub upcoming: UpcomingView,
}

pub fn build_page(
    shows: &[Show],
    today: NaiveDate,
    hero_days: u32,
) -> Result<SchedulePage, MalformedDateError> {
    let hero = build_hero_within(shows, today, hero_days)?;
    let upcoming = build_upcoming(shows, today)?;
    let tonight = tonight_banner(shows, today)?;
    let lineup = (!hero.is_empty()).then(|| lineup_label(today));

    Ok(SchedulePage {
        today,
        section_label: section_label(today),
        tonight,
        hero,
        lineup_label: lineup,
        upcoming,
    })
}

/// `"Tonight: <band> • <time> • <cover>"` for the first show dated today.
pub fn tonight_banner(
    shows: &[Show],
    today: NaiveDate,
) -> Result<Option<String>, MalformedDateError> {
    for show in shows {
        let date = parse_date(&show.date)?;
        if date == today {
            return Ok(Some(format!(
                "Tonight: {} \u{2022} {} \u{2022} {}",
                show.band_name, show.time, show.cover
            )));
        }
        if date > today {
            break;
        }
    }
    Ok(None)
}

#[must_use]
pub fn lineup_label(today: NaiveDate) -> String {
    format!("See full {} lineup \u{2192}", month_abbrev(today))
}

#[must_use]
pub fn section_label(today: NaiveDate) -> String {
    format!("{} {}", month_name(today), today.year())
}
