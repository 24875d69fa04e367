pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod render;
pub mod resilience;

#[cfg(test)]
pub(crate) mod test_support;

use std::{fs, io::Write};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use tokio::sync::mpsc;
use tracing::{info, warn};

use app::{
    events::{AppEvent, schedule_retry, spawn_shutdown_task, start_refresh_task},
    pipeline::{build_schedule, reference_date, spawn_refresh},
    settings::{RuntimeSettings, load_runtime_settings, save_runtime_settings},
    state::{AppState, Reaction},
};
use cli::Cli;
use data::{firestore::FirestoreClient, repository::ShowRepository};
use domain::schedule::SchedulePage;
use resilience::freshness::RefreshStatus;

pub async fn run(cli: Cli) -> Result<()> {
    cli::init_tracing(cli.verbose, cli.quiet)?;

    let (settings, path) = load_runtime_settings(&cli, true);
    if cli.save_settings {
        match path.as_deref() {
            Some(path) => {
                save_runtime_settings(path, &settings)?;
                info!(path = %path.display(), "settings saved");
            }
            None => warn!("no settings location available, nothing saved"),
        }
    }

    let repo = firestore_client(&settings)?;
    if cli.watch {
        watch(repo, &settings, cli.today).await
    } else {
        one_shot(&repo, &settings, cli.today).await
    }
}

pub fn firestore_client(settings: &RuntimeSettings) -> Result<FirestoreClient> {
    let project = settings.project_id()?;
    let client = match settings.base_url.as_deref() {
        Some(base_url) => FirestoreClient::with_base_url(base_url, project)?,
        None => FirestoreClient::new(project)?,
    };
    Ok(client
        .collection(settings.collection.clone())
        .api_key(settings.api_key.clone()))
}

pub async fn one_shot<R: ShowRepository>(
    repo: &R,
    settings: &RuntimeSettings,
    today_override: Option<NaiveDate>,
) -> Result<()> {
    let today = reference_date(today_override);
    let page = build_schedule(repo, today, settings.hero_days).await?;
    emit(&page, settings, &RefreshStatus::default())
}

pub async fn watch<R>(
    repo: R,
    settings: &RuntimeSettings,
    today_override: Option<NaiveDate>,
) -> Result<()>
where
    R: ShowRepository + Clone + Send + Sync + 'static,
{
    let (tx, mut rx) = mpsc::channel::<AppEvent>(32);
    let mut app = AppState::new(settings);

    spawn_shutdown_task(tx.clone());
    start_refresh_task(tx.clone(), settings.refresh_interval());
    tx.send(AppEvent::Refresh).await?;

    while app.running() {
        let Some(event) = rx.recv().await else {
            break;
        };
        match app.handle_event(event, Utc::now()) {
            Reaction::StartRefresh { seq } => {
                spawn_refresh(tx.clone(), repo.clone(), seq, today_override, settings.hero_days);
            }
            Reaction::Render => emit_current(&app, settings)?,
            Reaction::Failed { retry, rerender } => {
                if let Some(delay) = retry {
                    schedule_retry(tx.clone(), delay);
                }
                if rerender {
                    emit_current(&app, settings)?;
                }
            }
            Reaction::Stop | Reaction::Nothing => {}
        }
    }

    Ok(())
}

fn emit_current(app: &AppState, settings: &RuntimeSettings) -> Result<()> {
    match app.page.as_ref() {
        Some(page) => emit(page, settings, &app.status()),
        None => Ok(()),
    }
}

/// Writes the rendered page to the configured output file, or stdout.
pub fn emit(
    page: &SchedulePage,
    settings: &RuntimeSettings,
    status: &RefreshStatus,
) -> Result<()> {
    let rendered = render::render_page(page, settings.format, status)?;
    match settings.output.as_deref() {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("writing schedule to {} failed", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .context("writing schedule to stdout failed")
        }
    }
}
