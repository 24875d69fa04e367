use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{
    dates::{day_of_month, format_month_day, month_abbrev, weekday_name},
    error::MalformedDateError,
    schedule::{DatedShow, group_by_week, label_week, select_window},
    show::{BadgeType, Show},
};

pub const HERO_HORIZON_DAYS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStyle {
    Standard,
    Tonight,
    Special,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeClass {
    Tonight,
    Gold,
    Special,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub class: BadgeClass,
}

impl Badge {
    fn tonight() -> Self {
        Self {
            label: "Tonight".to_string(),
            class: BadgeClass::Tonight,
        }
    }
}

type Styling = fn(&Show) -> (CardStyle, Option<Badge>);

/// A show with every field the page displays already derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowItem {
    #[serde(flatten)]
    pub show: Show,
    pub weekday: &'static str,
    pub month_day: String,
    pub day_of_month: String,
    pub month: &'static str,
    pub is_tonight: bool,
    pub card: CardStyle,
    pub badge: Option<Badge>,
}

impl ShowItem {
    fn derive(dated: DatedShow<'_>, today: NaiveDate, styling: Styling) -> Self {
        let is_tonight = dated.date == today;
        let (card, badge) = if is_tonight {
            (CardStyle::Tonight, Some(Badge::tonight()))
        } else {
            styling(dated.show)
        };

        Self {
            show: dated.show.clone(),
            weekday: weekday_name(dated.date),
            month_day: format_month_day(dated.date),
            day_of_month: day_of_month(dated.date),
            month: month_abbrev(dated.date),
            is_tonight,
            card,
            badge,
        }
    }
}

fn hero_styling(show: &Show) -> (CardStyle, Option<Badge>) {
    let card = match show.badge_type {
        Some(BadgeType::Gold | BadgeType::Special) => CardStyle::Special,
        None => CardStyle::Standard,
    };
    let class = match show.badge_type {
        Some(BadgeType::Gold) => BadgeClass::Gold,
        Some(BadgeType::Special) => BadgeClass::Special,
        None => BadgeClass::Neutral,
    };
    let badge = show.badge_text().map(|label| Badge {
        label: label.to_string(),
        class,
    });
    (card, badge)
}

fn upcoming_styling(show: &Show) -> (CardStyle, Option<Badge>) {
    let card = if show.badge_type == Some(BadgeType::Special) {
        CardStyle::Special
    } else {
        CardStyle::Standard
    };
    let badge = show.badge_text().map(|label| Badge {
        label: label.to_string(),
        class: BadgeClass::Special,
    });
    (card, badge)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "shows", rename_all = "lowercase")]
pub enum HeroView {
    Empty,
    Shows(Vec<ShowItem>),
}

impl HeroView {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn items(&self) -> &[ShowItem] {
        match self {
            Self::Empty => &[],
            Self::Shows(items) => items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingWeek {
    pub week_key: NaiveDate,
    pub label: String,
    pub items: Vec<ShowItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "weeks", rename_all = "lowercase")]
pub enum UpcomingView {
    Empty,
    Weeks(Vec<UpcomingWeek>),
}

impl UpcomingView {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn weeks(&self) -> &[UpcomingWeek] {
        match self {
            Self::Empty => &[],
            Self::Weeks(weeks) => weeks,
        }
    }
}

/// Hero highlight for the next [`HERO_HORIZON_DAYS`] days.
pub fn build_hero(shows: &[Show], today: NaiveDate) -> Result<HeroView, MalformedDateError> {
    build_hero_within(shows, today, HERO_HORIZON_DAYS)
}

pub fn build_hero_within(
    shows: &[Show],
    today: NaiveDate,
    horizon_days: u32,
) -> Result<HeroView, MalformedDateError> {
    let window = select_window(shows, horizon_days, today)?;
    if window.is_empty() {
        return Ok(HeroView::Empty);
    }

    let items = window
        .iter()
        .map(|show| {
            DatedShow::parse(show).map(|dated| ShowItem::derive(dated, today, hero_styling))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HeroView::Shows(items))
}

/// Every show, bucketed into labeled weeks.
pub fn build_upcoming(
    shows: &[Show],
    today: NaiveDate,
) -> Result<UpcomingView, MalformedDateError> {
    if shows.is_empty() {
        return Ok(UpcomingView::Empty);
    }

    let weeks = group_by_week(shows)?
        .iter()
        .map(|group| UpcomingWeek {
            week_key: group.week_key(),
            label: label_week(group, today).to_string(),
            items: group
                .shows()
                .iter()
                .map(|dated| ShowItem::derive(*dated, today, upcoming_styling))
                .collect(),
        })
        .collect();
    Ok(UpcomingView::Weeks(weeks))
}
