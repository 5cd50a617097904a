use std::path::Path;

use anyhow::Result;
use animecal_core::{AppConfig, Sanitizer};
use chrono::Utc;
use owo_colors::OwoColorize;

use super::cleanup::sanitize_file;
use super::{CredentialArgs, images, load_config, tmdb_client, with_spinner};
use crate::render::{Render, ReportRender};

/// Stamp, update images and validate. Returns whether validation passed.
pub fn run(path: &Path, credentials: &CredentialArgs, verbose: bool) -> Result<bool> {
    let config = load_config(credentials)?;

    println!("{}", "1. Updating timestamps".bold());
    let stamped = sanitize_file(path, &Sanitizer::touch(Utc::now()))?;
    println!("   Updated {} LAST-MODIFIED properties", stamped.stamped);

    println!("{}", "2. Updating images".bold());
    update_images(path, &config, verbose);

    println!("{}", "3. Validating".bold());
    let report = super::validate::validate_file(path)?;
    println!("{}", report.render());

    Ok(report.passed)
}

/// Failures are reported and the pipeline goes on.
fn update_images(path: &Path, config: &AppConfig, verbose: bool) {
    if !config.has_credentials() {
        println!(
            "   {}",
            "No TMDB credentials found, skipping image update (set TMDB_ACCESS_TOKEN or TMDB_API_KEY)"
                .yellow()
        );
        return;
    }

    let result = tmdb_client(config).and_then(|client| {
        with_spinner("   Fetching artwork from TMDB", || images::update_file(path, &client))
    });

    match result {
        Ok(report) => println!("{}", report.render(verbose)),
        Err(e) => println!("   {} {:#}", "Image update failed:".red(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{CALENDAR, calendar_file};

    #[test]
    fn test_refresh_without_credentials_stamps_and_validates() {
        let (_dir, path) = calendar_file(CALENDAR);
        let config = AppConfig::default();

        sanitize_file(&path, &Sanitizer::touch(Utc::now())).unwrap();
        update_images(&path, &config, false);
        let report = crate::commands::validate::validate_file(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("20240101T000000Z"), "Timestamps are refreshed");
        assert!(written.contains("https://img/old.jpg"), "Images untouched without credentials");
        assert!(report.passed);
    }
}
