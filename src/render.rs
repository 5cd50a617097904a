//! TUI rendering traits for animecal types.
//!
//! Extension traits that add colored terminal rendering to animecal-core
//! reports using owo_colors.

use animecal_core::{EventOutcome, Outcome, ReconcileReport, ValidationReport};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventOutcome {
    fn render(&self) -> String {
        let line = match &self.outcome {
            Outcome::Attached { tier, .. } => {
                format!("{} {} {}", "✓".green(), self.summary, tier.label().dimmed())
            }
            Outcome::NoArtwork => {
                format!("{} {} {}", "-".dimmed(), self.summary, "no artwork found".dimmed())
            }
            Outcome::Unrecognized => format!(
                "{} {} {}",
                "?".yellow(),
                self.summary,
                "could not extract series info".dimmed()
            ),
            Outcome::Failed(message) => {
                format!("{} {} {}", "✗".red(), self.summary, message.red())
            }
        };

        match self.start {
            Some(start) => format!("{} {}", line, start.format("(%Y-%m-%d)").dimmed()),
            None => line,
        }
    }
}

/// Threshold for compact view (show counts instead of individual events)
const COMPACT_THRESHOLD: usize = 10;

/// Extended rendering for ReconcileReport with a compact mode for large
/// calendars
pub trait ReportRender {
    fn render(&self, verbose: bool) -> String;
}

impl ReportRender for ReconcileReport {
    fn render(&self, verbose: bool) -> String {
        let mut lines = Vec::new();

        if let Some(name) = &self.calendar_name {
            lines.push(format!("📅 {}", name.bold()));
        }

        if verbose || self.events.len() <= COMPACT_THRESHOLD {
            for event in &self.events {
                lines.push(format!("   {}", event.render()));
            }
        } else {
            // Failures are always listed
            for event in self.events.iter().filter(|e| matches!(e.outcome, Outcome::Failed(_))) {
                lines.push(format!("   {}", event.render()));
            }
            let skipped = self
                .events
                .iter()
                .filter(|e| e.outcome == Outcome::Unrecognized)
                .count();
            if skipped > 0 {
                let label = format!("({} {} skipped)", skipped, pluralize("event", skipped));
                lines.push(format!("   {} {}", "?".yellow(), label.yellow()));
            }
        }

        lines.push(format!(
            "Updated {} of {} {} with images",
            self.annotated().to_string().bold(),
            self.processed(),
            pluralize("event", self.processed())
        ));

        lines.join("\n")
    }
}

impl Render for ValidationReport {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        for error in &self.errors {
            lines.push(format!("{} {}", "Error:".red(), error));
        }
        for warning in &self.warnings {
            lines.push(format!("{} {}", "Warning:".yellow(), warning));
        }

        let summary = if !self.passed {
            format!(
                "Validation failed with {} {} and {} {}",
                self.errors.len(),
                pluralize("error", self.errors.len()),
                self.warnings.len(),
                pluralize("warning", self.warnings.len())
            )
            .red()
            .to_string()
        } else if !self.warnings.is_empty() {
            format!(
                "Validation passed with {} {}",
                self.warnings.len(),
                pluralize("warning", self.warnings.len())
            )
            .yellow()
            .to_string()
        } else {
            "Validation passed successfully!".green().to_string()
        };

        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(summary);
        lines.join("\n")
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
