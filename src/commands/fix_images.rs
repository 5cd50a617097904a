use std::path::Path;

use anyhow::Result;
use animecal_core::Sanitizer;
use owo_colors::OwoColorize;

use super::cleanup::sanitize_file;

pub fn run(path: &Path) -> Result<()> {
    let result = sanitize_file(path, &Sanitizer::images_only())?;

    if result.events_touched == 0 {
        println!("{}", "No duplicate images found".dimmed());
    } else {
        println!(
            "Fixed duplicate images in {} of {} events",
            result.events_touched.to_string().bold(),
            result.total_events
        );
    }

    Ok(())
}
