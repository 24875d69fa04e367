use anyhow::{Context, Result};
use chrono::NaiveDate;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::{
    app::events::AppEvent,
    data::repository::ShowRepository,
    domain::{
        dates,
        schedule::{SchedulePage, build_page},
    },
};

/// The reference date for one pass: the override if given, else the local
/// calendar date read once.
#[must_use]
pub fn reference_date(today_override: Option<NaiveDate>) -> NaiveDate {
    today_override.unwrap_or_else(dates::today)
}

/// Fetch once, then derive the whole page from a single `today`.
pub async fn build_schedule<R: ShowRepository>(
    repo: &R,
    today: NaiveDate,
    hero_days: u32,
) -> Result<SchedulePage> {
    let shows = repo
        .list_upcoming(today)
        .await
        .context("loading shows failed")?;
    debug!(count = shows.len(), %today, "deriving schedule");

    let page = build_page(&shows, today, hero_days).context("deriving schedule failed")?;
    info!(
        hero = page.hero.items().len(),
        weeks = page.upcoming.weeks().len(),
        "schedule derived"
    );
    Ok(page)
}

/// Runs one pass in the background and reports the outcome as an event.
pub fn spawn_refresh<R>(
    tx: mpsc::Sender<AppEvent>,
    repo: R,
    seq: u64,
    today_override: Option<NaiveDate>,
    hero_days: u32,
) where
    R: ShowRepository + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let today = reference_date(today_override);
        let event = match build_schedule(&repo, today, hero_days).await {
            Ok(page) => AppEvent::PageBuilt {
                seq,
                page: Box::new(page),
            },
            Err(err) => AppEvent::RefreshFailed {
                seq,
                error: format!("{err:#}"),
            },
        };
        let _ = tx.send(event).await;
    });
}
