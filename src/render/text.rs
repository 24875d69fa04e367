use crate::{
    domain::schedule::{HeroView, SchedulePage, ShowItem, UpcomingView},
    resilience::freshness::RefreshStatus,
};

/// `! <notice>` line for a degraded page, empty otherwise.
pub fn render_notice(status: &RefreshStatus) -> String {
    status
        .notice()
        .map(|notice| format!("! {notice}\n"))
        .unwrap_or_default()
}

pub fn render_page(page: &SchedulePage) -> String {
    let mut lines = vec![page.section_label.clone()];
    if let Some(banner) = page.tonight.as_deref() {
        lines.push(banner.to_string());
    }

    lines.push(String::new());
    lines.push("Next up".to_string());
    match &page.hero {
        HeroView::Empty => lines.push("  Check back soon for upcoming shows".to_string()),
        HeroView::Shows(items) => {
            lines.extend(items.iter().map(|item| {
                format!(
                    "  {:<9} {:<6} {}",
                    item.weekday,
                    item.month_day,
                    show_summary(item)
                )
            }));
        }
    }
    if let Some(label) = page.lineup_label.as_deref() {
        lines.push(format!("  {label}"));
    }

    lines.push(String::new());
    lines.push("Upcoming".to_string());
    match &page.upcoming {
        UpcomingView::Empty => {
            lines.push("  No upcoming shows scheduled yet. Check back soon!".to_string());
        }
        UpcomingView::Weeks(weeks) => {
            for week in weeks {
                lines.push(week.label.clone());
                lines.extend(week.items.iter().map(|item| {
                    format!(
                        "  {} {} {:<9} {}",
                        item.day_of_month,
                        item.month,
                        item.weekday,
                        show_summary(item)
                    )
                }));
            }
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn show_summary(item: &ShowItem) -> String {
    let badge = item
        .badge
        .as_ref()
        .map(|badge| format!(" [{}]", badge.label))
        .unwrap_or_default();
    format!(
        "{} ({} \u{2022} {}){badge}",
        item.show.band_name, item.show.time, item.show.cover
    )
}
