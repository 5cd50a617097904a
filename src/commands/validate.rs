use std::path::Path;

use anyhow::Result;
use animecal_core::store::read_calendar_file;
use animecal_core::{ValidationReport, validate};
use owo_colors::OwoColorize;

use crate::render::Render;

/// Print the report and return whether validation passed.
pub fn run(path: &Path) -> Result<bool> {
    println!("Validating calendar file: {}", path.display().bold());

    let report = validate_file(path)?;
    println!("{}", report.render());

    Ok(report.passed)
}

pub fn validate_file(path: &Path) -> Result<ValidationReport> {
    let content = read_calendar_file(path)?;
    Ok(validate(&content))
}
