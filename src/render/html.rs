use html_escape::encode_text;

use crate::{
    domain::schedule::{
        Badge, BadgeClass, CardStyle, HeroView, SchedulePage, ShowItem, UpcomingView,
        UpcomingWeek,
    },
    resilience::freshness::{FreshnessState, RefreshStatus},
};

const HERO_PLACEHOLDER: &str = "Check back soon for upcoming shows";
const UPCOMING_PLACEHOLDER: &str = "No upcoming shows scheduled yet. Check back soon!";

pub fn render_notice(status: &RefreshStatus) -> String {
    let Some(notice) = status.notice() else {
        return String::new();
    };
    let modifier = match status.freshness {
        FreshnessState::Offline => "offline",
        FreshnessState::Fresh | FreshnessState::Stale => "stale",
    };
    format!(
        "<div class=\"schedule-status schedule-status--{modifier}\">{}</div>\n",
        encode_text(&notice)
    )
}

pub fn render_page(page: &SchedulePage) -> String {
    let mut out = String::new();
    if let Some(banner) = page.tonight.as_deref() {
        out.push_str(&format!(
            "<div class=\"mobile-tonight-banner\">{}</div>\n",
            encode_text(banner)
        ));
    }
    out.push_str("<section class=\"hero-shows\">\n");
    out.push_str(&render_hero(&page.hero));
    if let Some(label) = page.lineup_label.as_deref() {
        out.push_str(&format!(
            "<div class=\"hero-shows-more\"><a href=\"#schedule\">{}</a></div>\n",
            encode_text(label)
        ));
    }
    out.push_str("</section>\n<section class=\"upcoming\" id=\"schedule\">\n");
    out.push_str(&format!(
        "<div class=\"section-label\">{}</div>\n",
        encode_text(&page.section_label)
    ));
    out.push_str(&render_upcoming(&page.upcoming));
    out.push_str("</section>\n");
    out
}

pub fn render_hero(view: &HeroView) -> String {
    let cards = match view {
        HeroView::Empty => format!(
            "<div class=\"hero-show\"><div class=\"hero-show-details\"><h3 class=\"hero-show-name\">{HERO_PLACEHOLDER}</h3></div></div>\n"
        ),
        HeroView::Shows(items) => items.iter().map(hero_card).collect(),
    };
    format!("<div class=\"hero-shows-grid\">\n{cards}</div>\n")
}

fn hero_card(item: &ShowItem) -> String {
    let card_class = match item.card {
        CardStyle::Tonight => "hero-show hero-show--tonight",
        CardStyle::Special => "hero-show hero-show--special",
        CardStyle::Standard => "hero-show",
    };
    let badge = item.badge.as_ref().map_or_else(String::new, |badge| {
        format!(
            "<div class=\"{}\">{}</div>",
            hero_badge_class(badge),
            encode_text(&badge.label)
        )
    });

    format!(
        "<a href=\"#schedule\" class=\"{card_class}\">{badge}\
         <div class=\"hero-show-date\"><span class=\"hero-show-weekday\">{}</span>\
         <span class=\"hero-show-daynum\">{}</span></div>\
         <div class=\"hero-show-details\"><h3 class=\"hero-show-name\">{}</h3>\
         <p class=\"hero-show-meta\">{} &bull; {}</p></div></a>\n",
        item.weekday,
        item.month_day,
        encode_text(&item.show.band_name),
        encode_text(&item.show.time),
        encode_text(&item.show.cover),
    )
}

fn hero_badge_class(badge: &Badge) -> &'static str {
    match badge.class {
        BadgeClass::Gold => "hero-show-badge hero-show-badge--gold",
        BadgeClass::Special | BadgeClass::Tonight | BadgeClass::Neutral => "hero-show-badge",
    }
}

pub fn render_upcoming(view: &UpcomingView) -> String {
    let body = match view {
        UpcomingView::Empty => format!("<p class=\"upcoming-empty\">{UPCOMING_PLACEHOLDER}</p>\n"),
        UpcomingView::Weeks(weeks) => weeks.iter().map(upcoming_week).collect(),
    };
    format!("<div class=\"upcoming-grid\">\n{body}</div>\n")
}

fn upcoming_week(week: &UpcomingWeek) -> String {
    let cards: String = week.items.iter().map(show_card).collect();
    format!(
        "<div class=\"upcoming-week\"><div class=\"upcoming-week-label\">{}</div>\n\
         <div class=\"upcoming-shows\">\n{cards}</div></div>\n",
        encode_text(&week.label)
    )
}

fn show_card(item: &ShowItem) -> String {
    let card_class = match item.card {
        CardStyle::Tonight => "show-card show-card--tonight",
        CardStyle::Special => "show-card show-card--valentine",
        CardStyle::Standard => "show-card",
    };
    let badge = item.badge.as_ref().map_or_else(String::new, |badge| {
        let modifier = if badge.class == BadgeClass::Tonight {
            "show-badge--tonight"
        } else {
            "show-badge--special"
        };
        format!(
            "<span class=\"show-badge {modifier}\">{}</span>",
            encode_text(&badge.label)
        )
    });

    format!(
        "<div class=\"{card_class}\"><div class=\"show-date\">\
         <span class=\"show-date-day\">{}</span>\
         <span class=\"show-date-month\">{}</span>\
         <span class=\"show-date-weekday\">{}</span></div>\
         <div class=\"show-info\">{badge}<h3 class=\"show-name\">{}</h3>\
         <p class=\"show-time\">{}</p></div>\
         <div class=\"show-cover\">{}</div></div>\n",
        item.day_of_month,
        item.month,
        item.weekday,
        encode_text(&item.show.band_name),
        encode_text(&item.show.time),
        encode_text(&item.show.cover),
    )
}
