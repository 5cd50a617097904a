use std::path::Path;

use anyhow::{Context, Result};
use animecal_core::store::{read_calendar_file, write_atomic};
use animecal_core::{ArtworkProvider, ReconcileReport, reconcile};
use owo_colors::OwoColorize;

use super::{CredentialArgs, load_config, tmdb_client, with_spinner};
use crate::render::ReportRender;

pub fn run(path: &Path, credentials: &CredentialArgs, verbose: bool) -> Result<()> {
    // Credentials are checked before the file is touched
    let config = load_config(credentials)?;
    let client = tmdb_client(&config)?;

    println!("Updating images in {}", path.display().bold());
    let report = with_spinner("Fetching artwork from TMDB", || update_file(path, &client))?;
    println!("{}", report.render(verbose));

    Ok(())
}

/// Reconcile the file against `provider` and write it back. Nothing is
/// written when the calendar cannot be parsed.
pub fn update_file(path: &Path, provider: &dyn ArtworkProvider) -> Result<ReconcileReport> {
    let content = read_calendar_file(path)?;
    let (updated, report) = reconcile(&content, provider)
        .with_context(|| format!("Failed to update {}", path.display()))?;

    if updated != content {
        write_atomic(path, &updated)?;
    }

    Ok(report)
}
