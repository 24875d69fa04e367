use std::future::Future;

use anyhow::Result;
use chrono::NaiveDate;

use crate::domain::{dates::canonical, show::Show};

/// Read-only source of shows.
pub trait ShowRepository {
    /// All shows dated on or after `today`, ascending by date.
    fn list_upcoming(&self, today: NaiveDate) -> impl Future<Output = Result<Vec<Show>>> + Send;
}

/// Fixed in-memory list, for previews and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticShows {
    shows: Vec<Show>,
}

impl StaticShows {
    pub fn new(mut shows: Vec<Show>) -> Self {
        shows.sort_by(|a, b| a.date.cmp(&b.date));
        Self { shows }
    }
}

impl ShowRepository for StaticShows {
    fn list_upcoming(&self, today: NaiveDate) -> impl Future<Output = Result<Vec<Show>>> + Send {
        let cutoff = canonical(today);
        let shows = self
            .shows
            .iter()
            .filter(|show| show.date >= cutoff)
            .cloned()
            .collect();
        std::future::ready(Ok(shows))
    }
}
