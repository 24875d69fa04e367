use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FreshnessState {
    Fresh,
    Stale,
    Offline,
}

/// What the reader is told about the page they are looking at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshStatus {
    pub freshness: FreshnessState,
    pub last_error: Option<String>,
}

impl Default for RefreshStatus {
    fn default() -> Self {
        Self {
            freshness: FreshnessState::Fresh,
            last_error: None,
        }
    }
}

impl RefreshStatus {
    /// One-line notice for a degraded page, `None` while fresh.
    pub fn notice(&self) -> Option<String> {
        let headline = match self.freshness {
            FreshnessState::Fresh => return None,
            FreshnessState::Stale => "Schedule may be out of date",
            FreshnessState::Offline => "Offline: showing the last schedule loaded",
        };
        Some(match self.last_error.as_deref() {
            Some(error) => format!("{headline} ({error})"),
            None => headline.to_string(),
        })
    }
}

/// How current the displayed schedule is, given the refresh cadence.
///
/// Stale once two refresh intervals pass without a success or after any
/// failure; offline after six intervals or three failures in a row.
#[must_use]
pub fn evaluate_freshness(
    last_success: Option<DateTime<Utc>>,
    consecutive_failures: u32,
    refresh_interval: Duration,
    now: DateTime<Utc>,
) -> FreshnessState {
    let Some(last_success) = last_success else {
        return if consecutive_failures >= 3 {
            FreshnessState::Offline
        } else {
            FreshnessState::Stale
        };
    };

    let age = now - last_success;

    if age > refresh_interval * 6 || consecutive_failures >= 3 {
        FreshnessState::Offline
    } else if age > refresh_interval * 2 || consecutive_failures >= 1 {
        FreshnessState::Stale
    } else {
        FreshnessState::Fresh
    }
}
