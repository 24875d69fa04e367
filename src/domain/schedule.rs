//! Date bucketing for the schedule page.
//!
//! Every stage takes the reference `today` explicitly so one pass derives
//! all of its views from a single captured date.

pub mod label;
pub mod page;
pub mod view;
pub mod weeks;
pub mod window;

use chrono::NaiveDate;

use crate::domain::{dates::parse_date, error::MalformedDateError, show::Show};

pub use label::{WeekLabel, label_week, next_week_start};
pub use page::{SchedulePage, build_page, lineup_label, section_label, tonight_banner};
pub use view::{
    Badge, BadgeClass, CardStyle, HERO_HORIZON_DAYS, HeroView, ShowItem, UpcomingView,
    UpcomingWeek, build_hero, build_hero_within, build_upcoming,
};
pub use weeks::{WeekGroup, group_by_week};
pub use window::select_window;

/// A show paired with its parsed calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatedShow<'a> {
    pub date: NaiveDate,
    pub show: &'a Show,
}

impl<'a> DatedShow<'a> {
    pub fn parse(show: &'a Show) -> Result<Self, MalformedDateError> {
        Ok(Self {
            date: parse_date(&show.date)?,
            show,
        })
    }
}
