use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::{
    app::{events::AppEvent, settings::RuntimeSettings},
    domain::schedule::SchedulePage,
    resilience::{
        backoff::Backoff,
        freshness::{FreshnessState, RefreshStatus, evaluate_freshness},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Loading,
    Ready,
    Quit,
}

/// What the event loop should do after an event is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    StartRefresh { seq: u64 },
    Render,
    /// A pass failed. `retry` is set unless a retry is already outstanding;
    /// `rerender` is set when a shown page just changed freshness.
    Failed {
        retry: Option<Duration>,
        rerender: bool,
    },
    Stop,
    Nothing,
}

#[derive(Debug, Clone)]
pub struct RefreshMetadata {
    pub last_success: Option<DateTime<Utc>>,
    pub last_attempt: Option<DateTime<Utc>>,
    pub state: FreshnessState,
    pub consecutive_failures: u32,
}

impl Default for RefreshMetadata {
    fn default() -> Self {
        Self {
            last_success: None,
            last_attempt: None,
            state: FreshnessState::Stale,
            consecutive_failures: 0,
        }
    }
}

impl RefreshMetadata {
    pub fn mark_attempt(&mut self, now: DateTime<Utc>) {
        self.last_attempt = Some(now);
    }

    pub fn mark_success(&mut self, now: DateTime<Utc>) {
        self.last_success = Some(now);
        self.consecutive_failures = 0;
        self.state = FreshnessState::Fresh;
    }

    pub fn mark_failure(&mut self) {
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
    }
}

/// Refresh state for watch mode. Holds the last good page; a failed pass
/// never clears it. At most one backoff retry is outstanding at a time.
#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub page: Option<SchedulePage>,
    pub last_error: Option<String>,
    pub refresh_meta: RefreshMetadata,
    pub backoff: Backoff,
    refresh_interval: chrono::Duration,
    issued_seq: u64,
    applied_seq: u64,
    retry_pending: bool,
}

impl AppState {
    pub fn new(settings: &RuntimeSettings) -> Self {
        let refresh_interval = chrono::Duration::from_std(settings.refresh_interval())
            .unwrap_or_else(|_| chrono::Duration::minutes(10));
        Self {
            mode: AppMode::Loading,
            page: None,
            last_error: None,
            refresh_meta: RefreshMetadata::default(),
            backoff: Backoff::default(),
            refresh_interval,
            issued_seq: 0,
            applied_seq: 0,
            retry_pending: false,
        }
    }

    pub fn running(&self) -> bool {
        self.mode != AppMode::Quit
    }

    pub fn handle_event(&mut self, event: AppEvent, now: DateTime<Utc>) -> Reaction {
        match event {
            AppEvent::Refresh => Reaction::StartRefresh {
                seq: self.begin_refresh(now),
            },
            AppEvent::RetryDue => {
                self.retry_pending = false;
                Reaction::StartRefresh {
                    seq: self.begin_refresh(now),
                }
            }
            AppEvent::PageBuilt { seq, page } => self.apply_page(seq, *page, now),
            AppEvent::RefreshFailed { seq, error } => self.apply_failure(seq, error, now),
            AppEvent::Shutdown => {
                self.mode = AppMode::Quit;
                Reaction::Stop
            }
        }
    }

    pub fn begin_refresh(&mut self, now: DateTime<Utc>) -> u64 {
        self.issued_seq += 1;
        self.refresh_meta.mark_attempt(now);
        debug!(seq = self.issued_seq, "refresh started");
        self.issued_seq
    }

    fn is_outdated(&self, seq: u64) -> bool {
        seq <= self.applied_seq
    }

    pub fn apply_page(&mut self, seq: u64, page: SchedulePage, now: DateTime<Utc>) -> Reaction {
        if self.is_outdated(seq) {
            debug!(seq, applied = self.applied_seq, "discarding outdated page");
            return Reaction::Nothing;
        }
        self.applied_seq = seq;
        self.page = Some(page);
        self.mode = AppMode::Ready;
        self.last_error = None;
        self.refresh_meta.mark_success(now);
        self.backoff.reset();
        info!(seq, "schedule refreshed");
        Reaction::Render
    }

    pub fn apply_failure(&mut self, seq: u64, error: String, now: DateTime<Utc>) -> Reaction {
        if self.is_outdated(seq) {
            debug!(seq, applied = self.applied_seq, "discarding outdated failure");
            return Reaction::Nothing;
        }
        self.applied_seq = seq;
        self.refresh_meta.mark_failure();
        let previous = self.refresh_meta.state;
        self.refresh_meta.state = self.freshness(now);

        let retry = if self.retry_pending {
            None
        } else {
            self.retry_pending = true;
            Some(self.backoff.next_delay())
        };
        warn!(
            seq,
            error = %error,
            failures = self.refresh_meta.consecutive_failures,
            retry_secs = retry.map(|delay| delay.as_secs()),
            "refresh failed, keeping previous schedule"
        );
        self.last_error = Some(error);
        Reaction::Failed {
            retry,
            rerender: self.page.is_some() && previous != self.refresh_meta.state,
        }
    }

    /// Freshness and last error of the page currently held.
    pub fn status(&self) -> RefreshStatus {
        RefreshStatus {
            freshness: self.refresh_meta.state,
            last_error: self.last_error.clone(),
        }
    }

    pub fn freshness(&self, now: DateTime<Utc>) -> FreshnessState {
        evaluate_freshness(
            self.refresh_meta.last_success,
            self.refresh_meta.consecutive_failures,
            self.refresh_interval,
            now,
        )
    }
}
