#![allow(dead_code)]

use chrono::NaiveDate;
use serde_json::{Value, json};
use venue_shows::{
    app::settings::RuntimeSettings,
    cli::FormatArg,
    domain::{
        dates::parse_date,
        show::{BadgeType, Show},
    },
};

pub fn date(value: &str) -> NaiveDate {
    parse_date(value).expect("valid fixed date")
}

/// Friday 2026-02-06.
pub fn friday() -> NaiveDate {
    date("2026-02-06")
}

pub fn show(id: &str, day: &str) -> Show {
    Show::new(id, day, format!("Band {id}")).with_details("9:00 PM", "$10")
}

/// A fortnight at the venue starting on the fixed Friday.
pub fn fortnight() -> Vec<Show> {
    vec![
        Show::new("s1", "2026-02-06", "The Rusty Nails").with_details("9:00 PM", "$10"),
        Show::new("s2", "2026-02-07", "Hen House Five")
            .with_details("8:30 PM", "$12")
            .with_badge("Album Release", Some(BadgeType::Gold)),
        Show::new("s3", "2026-02-08", "Sunday Blues Jam").with_details("4:00 PM", "Free"),
        Show::new("s4", "2026-02-13", "Cupid's Arrow")
            .with_details("9:00 PM", "$15")
            .with_badge("Sold Out", None),
        Show::new("s5", "2026-02-14", "The Valentines")
            .with_details("8:00 PM", "$20")
            .with_badge("Valentine's", Some(BadgeType::Special)),
        Show::new("s6", "2026-02-20", "Late Bloomers").with_details("9:30 PM", "$8"),
    ]
}

pub fn settings(format: FormatArg) -> RuntimeSettings {
    RuntimeSettings {
        project_id: Some("little-red-hen".to_string()),
        format,
        ..RuntimeSettings::default()
    }
}

/// A `runQuery` response row wrapping one show document.
pub fn document_row(show: &Show) -> Value {
    let mut fields = serde_json::Map::new();
    fields.insert("date".into(), json!({ "stringValue": show.date }));
    fields.insert("bandName".into(), json!({ "stringValue": show.band_name }));
    fields.insert("time".into(), json!({ "stringValue": show.time }));
    fields.insert("cover".into(), json!({ "stringValue": show.cover }));
    if let Some(badge) = show.badge.as_ref() {
        fields.insert("badge".into(), json!({ "stringValue": badge }));
    }
    match show.badge_type {
        Some(BadgeType::Gold) => {
            fields.insert("badgeType".into(), json!({ "stringValue": "gold" }));
        }
        Some(BadgeType::Special) => {
            fields.insert("badgeType".into(), json!({ "stringValue": "special" }));
        }
        None => {}
    }

    json!({
        "document": {
            "name": format!("projects/little-red-hen/databases/(default)/documents/shows/{}", show.id),
            "fields": fields,
            "createTime": "2026-01-20T10:00:00Z",
            "updateTime": "2026-01-20T10:00:00Z"
        },
        "readTime": "2026-02-06T12:00:00Z"
    })
}

pub fn query_response(shows: &[Show]) -> Value {
    if shows.is_empty() {
        return json!([{ "readTime": "2026-02-06T12:00:00Z" }]);
    }
    Value::Array(shows.iter().map(document_row).collect())
}
