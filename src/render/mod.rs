pub mod html;
pub mod text;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::{cli::FormatArg, domain::schedule::SchedulePage, resilience::freshness::RefreshStatus};

#[derive(Serialize)]
struct JsonPage<'a> {
    #[serde(flatten)]
    page: &'a SchedulePage,
    status: &'a RefreshStatus,
}

/// Renders `page` in `format`. A degraded `status` is announced ahead of the
/// page in text and HTML and carried as a `status` object in JSON.
pub fn render_page(
    page: &SchedulePage,
    format: FormatArg,
    status: &RefreshStatus,
) -> Result<String> {
    match format {
        FormatArg::Text => Ok(format!(
            "{}{}",
            text::render_notice(status),
            text::render_page(page)
        )),
        FormatArg::Html => Ok(format!(
            "{}{}",
            html::render_notice(status),
            html::render_page(page)
        )),
        FormatArg::Json => serde_json::to_string_pretty(&JsonPage { page, status })
            .context("serializing schedule page failed"),
    }
}
