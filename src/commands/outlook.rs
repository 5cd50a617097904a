use std::path::Path;

use anyhow::{Context, Result};
use animecal_core::ics::{generate_ics, parse_calendar};
use animecal_core::outlook::{OutlookStats, optimize_for_outlook};
use animecal_core::store::{read_calendar_file, write_atomic};
use owo_colors::OwoColorize;

pub fn run(input: &Path, output: &Path) -> Result<()> {
    println!(
        "Optimizing calendar for Outlook: {} -> {}",
        input.display(),
        output.display().bold()
    );

    let stats = optimize_file(input, output)?;
    println!(
        "Calendar optimized: {}/{} events have optimized images",
        stats.images, stats.events
    );

    Ok(())
}

/// Write an Outlook-tuned copy of `input` to `output`. `input` is not
/// modified.
pub fn optimize_file(input: &Path, output: &Path) -> Result<OutlookStats> {
    let content = read_calendar_file(input)?;
    let mut calendar = parse_calendar(&content)
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    let stats = optimize_for_outlook(&mut calendar);
    write_atomic(output, &generate_ics(&calendar))?;

    Ok(stats)
}
