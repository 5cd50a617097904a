//! Text-level repairs for calendar files.
//!
//! The sanitizer never parses the calendar into the model: it has to work on
//! files the parser would reject. It only deletes or rewrites whole logical
//! lines, so everything it does not touch survives byte for byte.

use std::collections::HashSet;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use tracing::debug;

use crate::ics::lines::{ContentLine, logical_lines};
use crate::timestamp::format_utc;

/// Which repairs to run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sanitizer {
    /// Drop lines holding nothing but a stray `P<digits>T<digits>Z` token.
    pub strip_malformed: bool,
    /// Keep only the first `IMAGE` line per URL within each event.
    pub dedupe_images: bool,
    /// Rewrite every `LAST-MODIFIED` to this time.
    pub stamp: Option<DateTime<Utc>>,
}

impl Sanitizer {
    /// All repairs, stamping with `now`.
    pub fn cleanup(now: DateTime<Utc>) -> Self {
        Sanitizer {
            strip_malformed: true,
            dedupe_images: true,
            stamp: Some(now),
        }
    }

    pub fn images_only() -> Self {
        Sanitizer {
            dedupe_images: true,
            ..Default::default()
        }
    }

    pub fn touch(now: DateTime<Utc>) -> Self {
        Sanitizer {
            stamp: Some(now),
            ..Default::default()
        }
    }

    pub fn sanitize(&self, text: &str) -> Sanitized {
        let stamp = self.stamp.as_ref().map(format_utc);
        let mut out = String::with_capacity(text.len());
        let mut result = Sanitized::default();

        let mut in_event = false;
        let mut event_touched = false;
        let mut seen_urls: HashSet<String> = HashSet::new();

        for line in logical_lines(text) {
            let unfolded = line.unfolded();

            if self.strip_malformed && is_stray_duration(unfolded.trim()) {
                debug!(line = %unfolded.trim(), "removing malformed line");
                result.lines_removed += 1;
                continue;
            }

            let Some(content) = ContentLine::parse(&unfolded) else {
                line.push_to(&mut out);
                continue;
            };

            if content.is("BEGIN") && content.value.trim().eq_ignore_ascii_case("VEVENT") {
                in_event = true;
                event_touched = false;
                seen_urls.clear();
                result.total_events += 1;
            } else if content.is("END") && content.value.trim().eq_ignore_ascii_case("VEVENT") {
                if event_touched {
                    result.events_touched += 1;
                }
                in_event = false;
            } else if in_event && self.dedupe_images && content.is("IMAGE") {
                let url = content.value.trim().to_string();
                if !seen_urls.insert(url) {
                    debug!(url = %content.value.trim(), "removing duplicate image");
                    result.lines_removed += 1;
                    event_touched = true;
                    continue;
                }
            } else if content.is("LAST-MODIFIED") {
                if let Some(stamp) = &stamp {
                    out.push_str("LAST-MODIFIED:");
                    out.push_str(stamp);
                    out.push_str(line.line_ending());
                    result.stamped += 1;
                    continue;
                }
            }

            line.push_to(&mut out);
        }

        result.text = out;
        result
    }
}

/// Outcome of a sanitizer pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sanitized {
    pub text: String,
    /// Events that lost at least one duplicate image line.
    pub events_touched: usize,
    pub total_events: usize,
    pub lines_removed: usize,
    /// `LAST-MODIFIED` properties rewritten.
    pub stamped: usize,
}

impl Sanitized {
    pub fn changed(&self, original: &str) -> bool {
        self.text != original
    }
}

fn is_stray_duration(line: &str) -> bool {
    static STRAY_DURATION: OnceLock<Regex> = OnceLock::new();
    STRAY_DURATION
        .get_or_init(|| Regex::new(r"^P\d+T\d+Z$").expect("valid regex"))
        .is_match(line)
}
