mod common;

use common::{date, fortnight, friday, show};
use venue_shows::domain::{
    dates::{is_today, week_key},
    schedule::{
        BadgeClass, CardStyle, HeroView, UpcomingView, WeekLabel, build_hero, build_page,
        build_upcoming, group_by_week, label_week, select_window,
    },
};

#[test]
fn friday_scenario_window_groups_and_labels() {
    let shows = vec![
        show("a", "2026-02-06"),
        show("b", "2026-02-08"),
        show("c", "2026-02-13"),
    ];

    let window = select_window(&shows, 3, friday()).expect("valid dates");
    let ids: Vec<_> = window.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);

    let groups = group_by_week(&shows).expect("valid dates");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].key(), "2026-02-02");
    assert_eq!(groups[0].len(), 2);
    assert_eq!(groups[1].key(), "2026-02-09");
    assert_eq!(groups[1].len(), 1);

    assert_eq!(label_week(&groups[0], friday()).to_string(), "This Week");
    assert_eq!(label_week(&groups[1], friday()).to_string(), "Next Week");
}

#[test]
fn empty_input_gives_empty_markers() {
    assert_eq!(build_hero(&[], friday()), Ok(HeroView::Empty));
    assert_eq!(build_upcoming(&[], friday()), Ok(UpcomingView::Empty));
}

#[test]
fn lone_show_tonight_is_marked_tonight() {
    let shows = vec![show("a", "2026-02-06")];
    let hero = build_hero(&shows, friday()).expect("valid");
    let item = &hero.items()[0];

    assert!(item.is_tonight);
    assert_eq!(item.card, CardStyle::Tonight);
    assert_eq!(item.badge.as_ref().map(|b| b.class), Some(BadgeClass::Tonight));
}

#[test]
fn fortnight_page_end_to_end() {
    let page = build_page(&fortnight(), friday(), 3).expect("valid");

    let hero_ids: Vec<_> = page.hero.items().iter().map(|i| i.show.id.as_str()).collect();
    assert_eq!(hero_ids, ["s1", "s2", "s3"]);

    let labels: Vec<_> = page
        .upcoming
        .weeks()
        .iter()
        .map(|w| w.label.as_str())
        .collect();
    assert_eq!(labels, ["This Week", "Next Week", "Feb 20"]);

    assert_eq!(
        page.tonight.as_deref(),
        Some("Tonight: The Rusty Nails \u{2022} 9:00 PM \u{2022} $10")
    );
    assert_eq!(page.section_label, "February 2026");
}

#[test]
fn two_weeks_out_is_a_range_even_after_a_gap() {
    let shows = vec![show("a", "2026-02-17"), show("b", "2026-02-21")];
    let groups = group_by_week(&shows).expect("valid");

    assert_eq!(
        label_week(&groups[0], friday()),
        WeekLabel::Range {
            first: date("2026-02-17"),
            last: date("2026-02-21"),
        }
    );
    assert_eq!(label_week(&groups[0], friday()).to_string(), "Feb 17 \u{2013} Feb 21");
}

#[test]
fn sunday_next_week_starts_after_the_coming_monday() {
    let sunday = date("2026-02-08");
    let shows = vec![
        show("a", "2026-02-08"),
        show("b", "2026-02-09"),
        show("c", "2026-02-16"),
    ];
    let page = build_page(&shows, sunday, 3).expect("valid");

    let labels: Vec<_> = page
        .upcoming
        .weeks()
        .iter()
        .map(|w| w.label.as_str())
        .collect();
    // Next Week on a Sunday starts eight days out, not tomorrow.
    assert_eq!(labels, ["This Week", "Feb 9", "Next Week"]);
    assert_eq!(page.hero.items().len(), 2);
}

#[test]
fn week_keys_for_a_year_end_schedule() {
    assert_eq!(week_key("2026-12-31").expect("valid"), "2026-12-28");
    assert_eq!(week_key("2027-01-03").expect("valid"), "2026-12-28");
    assert_eq!(week_key("2027-01-04").expect("valid"), "2027-01-04");
    assert_eq!(is_today("2026-02-06", friday()), Ok(true));
}
