use std::path::Path;

use anyhow::Result;
use animecal_core::store::{read_calendar_file, write_atomic};
use animecal_core::{Sanitized, Sanitizer};
use chrono::Utc;
use owo_colors::OwoColorize;

use super::validate::validate_file;
use crate::render::Render;

/// Repair the file, then validate it. Returns whether validation passed.
pub fn run(path: &Path) -> Result<bool> {
    let result = sanitize_file(path, &Sanitizer::cleanup(Utc::now()))?;

    println!("Cleaned up {}", path.display().bold());
    println!("  Removed lines:       {}", result.lines_removed);
    println!(
        "  Duplicate images:    {} of {} events",
        result.events_touched, result.total_events
    );
    println!("  Timestamps updated:  {}", result.stamped);

    println!();
    let report = validate_file(path)?;
    println!("{}", report.render());

    Ok(report.passed)
}

/// Run `sanitizer` over the file, writing it back only when it changed.
pub fn sanitize_file(path: &Path, sanitizer: &Sanitizer) -> Result<Sanitized> {
    let content = read_calendar_file(path)?;
    let result = sanitizer.sanitize(&content);

    if result.changed(&content) {
        write_atomic(path, &result.text)?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::commands::testing::{CALENDAR, calendar_file};

    #[test]
    fn test_cleanup_repairs_and_stamps() {
        let dirty = CALENDAR.replace("SEQUENCE:1\r\n", "SEQUENCE:1\r\nP250519T164757Z\r\n");
        let (_dir, path) = calendar_file(&dirty);
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

        let result = sanitize_file(&path, &Sanitizer::cleanup(now)).unwrap();

        assert_eq!(result.lines_removed, 2);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("P250519T164757Z"));
        assert_eq!(written.matches("LAST-MODIFIED:20250601T120000Z").count(), 2);
    }

    #[test]
    fn test_cleanup_passes_for_repairable_calendar() {
        let dirty = CALENDAR.replace("SEQUENCE:1\r\n", "SEQUENCE:1\r\nP250519T164757Z\r\n");
        let (_dir, path) = calendar_file(&dirty);

        assert!(run(&path).unwrap());
    }

    #[test]
    fn test_cleanup_fails_when_validation_fails() {
        let missing_uid = CALENDAR.replace("UID:broken-e1\r\n", "");
        let (_dir, path) = calendar_file(&missing_uid);

        assert!(!run(&path).unwrap());
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("LAST-MODIFIED"), "Repairs are still written");
    }

    #[test]
    fn test_clean_file_is_left_alone() {
        let (_dir, path) = calendar_file("BEGIN:VCALENDAR\nEND:VCALENDAR\n");
        let before = std::fs::metadata(&path).unwrap().modified().unwrap();

        let result = sanitize_file(&path, &Sanitizer::images_only()).unwrap();

        assert_eq!(result.lines_removed, 0);
        assert_eq!(std::fs::metadata(&path).unwrap().modified().unwrap(), before);
    }
}
