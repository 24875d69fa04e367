use chrono::NaiveDate;

use crate::domain::{
    dates::{add_days, parse_date},
    error::MalformedDateError,
    show::Show,
};

/// Shows dated within `[today, today + horizon_days)`.
///
/// The input is trusted to be ascending by date, so the result is a
/// contiguous run and the scan stops at the first show on or past the cutoff.
/// Shows after the cutoff are never parsed.
pub fn select_window(
    shows: &[Show],
    horizon_days: u32,
    today: NaiveDate,
) -> Result<&[Show], MalformedDateError> {
    let cutoff = add_days(today, horizon_days);
    let mut start = None;
    let mut end = 0;

    for (idx, show) in shows.iter().enumerate() {
        let date = parse_date(&show.date)?;
        if date >= cutoff {
            break;
        }
        if date >= today && start.is_none() {
            start = Some(idx);
        }
        end = idx + 1;
    }

    Ok(start.map_or(&shows[..0], |start| &shows[start..end]))
}
