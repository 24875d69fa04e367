use chrono::{Datelike, Days, Duration, Local, NaiveDate, Weekday};

use crate::domain::error::MalformedDateError;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Parses a strict, zero-padded `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, MalformedDateError> {
    if !has_canonical_shape(value) {
        return Err(MalformedDateError::new(value));
    }
    NaiveDate::parse_from_str(value, CANONICAL_FORMAT).map_err(|_| MalformedDateError::new(value))
}

fn has_canonical_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(idx, byte)| match idx {
                4 | 7 => *byte == b'-',
                _ => byte.is_ascii_digit(),
            })
}

#[must_use]
pub fn canonical(date: NaiveDate) -> String {
    date.format(CANONICAL_FORMAT).to_string()
}

/// Current local calendar date. The refresh pipeline reads this once per pass.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn is_today(value: &str, today: NaiveDate) -> Result<bool, MalformedDateError> {
    Ok(parse_date(value)? == today)
}

#[must_use]
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Monday of the week containing `date`. Sunday belongs to the week that
/// started six days earlier.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Canonical key (the Monday) of the week containing `value`.
pub fn week_key(value: &str) -> Result<String, MalformedDateError> {
    parse_date(value).map(|date| canonical(week_start(date)))
}

/// `date` plus `days`, saturating at the last representable date.
#[must_use]
pub fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days))).unwrap_or(NaiveDate::MAX)
}

/// Signed number of days from `from` to `to`.
#[must_use]
pub fn day_offset(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

#[must_use]
pub fn month_abbrev(date: NaiveDate) -> &'static str {
    MONTH_ABBREVIATIONS[date.month0() as usize]
}

#[must_use]
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// `"Feb 6"`: abbreviated month, unpadded day.
#[must_use]
pub fn format_month_day(date: NaiveDate) -> String {
    format!("{} {}", month_abbrev(date), date.day())
}

/// Zero-padded day of month, `"06"`.
#[must_use]
pub fn day_of_month(date: NaiveDate) -> String {
    format!("{:02}", date.day())
}
