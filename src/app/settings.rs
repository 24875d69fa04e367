use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    cli::{Cli, FormatArg},
    data::firestore::DEFAULT_COLLECTION,
    domain::schedule::HERO_HORIZON_DAYS,
};

const DEFAULT_REFRESH_SECS: u64 = 600;
const MIN_REFRESH_SECS: u64 = 10;
pub const MAX_HERO_DAYS: u32 = 31;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSettings {
    pub project_id: Option<String>,
    pub collection: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub hero_days: u32,
    pub refresh_interval_secs: u64,
    pub format: FormatArg,
    pub output: Option<PathBuf>,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            project_id: None,
            collection: DEFAULT_COLLECTION.to_string(),
            api_key: None,
            base_url: None,
            hero_days: HERO_HORIZON_DAYS,
            refresh_interval_secs: DEFAULT_REFRESH_SECS,
            format: FormatArg::Text,
            output: None,
        }
    }
}

impl RuntimeSettings {
    /// Flags given on the command line win over saved values.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(project) = cli.project.as_ref() {
            self.project_id = Some(project.clone());
        }
        if let Some(collection) = cli.collection.as_ref() {
            self.collection = collection.clone();
        }
        if cli.api_key.is_some() {
            self.api_key = cli.api_key.clone();
        }
        if cli.base_url.is_some() {
            self.base_url = cli.base_url.clone();
        }
        if let Some(days) = cli.hero_days {
            self.hero_days = days;
        }
        if let Some(secs) = cli.refresh_interval {
            self.refresh_interval_secs = secs;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if cli.output.is_some() {
            self.output = cli.output.clone();
        }
    }

    /// Clamps values a hand-edited file may have pushed out of range.
    pub fn sanitize(&mut self) {
        self.hero_days = self.hero_days.clamp(1, MAX_HERO_DAYS);
        self.refresh_interval_secs = self.refresh_interval_secs.max(MIN_REFRESH_SECS);
        if self.collection.trim().is_empty() {
            self.collection = DEFAULT_COLLECTION.to_string();
        }
    }

    pub fn project_id(&self) -> anyhow::Result<&str> {
        match self.project_id.as_deref().map(str::trim) {
            Some(project) if !project.is_empty() => Ok(project),
            _ => bail!(
                "no Firestore project configured; pass --project or save one with --save-settings"
            ),
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

pub fn load_runtime_settings(cli: &Cli, enable_disk: bool) -> (RuntimeSettings, Option<PathBuf>) {
    let path = if enable_disk { settings_path() } else { None };
    let mut settings = path
        .as_deref()
        .and_then(read_settings_file)
        .unwrap_or_default();
    settings.apply_cli(cli);
    settings.sanitize();
    (settings, path)
}

pub(crate) fn read_settings_file(path: &Path) -> Option<RuntimeSettings> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "no saved settings");
            return None;
        }
    };
    match serde_json::from_str::<RuntimeSettings>(&content) {
        Ok(saved) => Some(saved),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring unreadable settings file");
            None
        }
    }
}

pub fn save_runtime_settings(path: &Path, settings: &RuntimeSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")
}

fn settings_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("VENUE_SHOWS_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("settings.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("venue-shows")
            .join("settings.json"),
    )
}
