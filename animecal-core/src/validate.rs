//! Presence checks for calendar files.
//!
//! This is not an RFC 5545 validator. It checks the handful of properties
//! calendar clients rely on, in one pass over the raw text, so it can also
//! report on files the parser would reject.

use std::collections::HashSet;

use crate::ics::lines::{ContentLine, logical_lines};
use crate::timestamp::parse_utc;

const RECOMMENDED_CALENDAR: [&str; 4] = ["VERSION", "PRODID", "CALSCALE", "METHOD"];
const RFC7986_CALENDAR: [&str; 7] = [
    "NAME",
    "DESCRIPTION",
    "LAST-MODIFIED",
    "URL",
    "REFRESH-INTERVAL",
    "SOURCE",
    "COLOR",
];
const REQUIRED_EVENT: [&str; 3] = ["UID", "DTSTAMP", "DTSTART"];
const RECOMMENDED_EVENT: [&str; 2] = ["SUMMARY", "DESCRIPTION"];
const ENHANCED_EVENT: [&str; 5] = ["CATEGORIES", "CREATED", "LAST-MODIFIED", "SEQUENCE", "TRANSP"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub event_count: usize,
    pub passed: bool,
}

/// Properties seen on one event's own lines.
#[derive(Default)]
struct EventLines {
    names: HashSet<String>,
    bad_dates: Vec<String>,
}

impl EventLines {
    fn record(&mut self, line: &ContentLine) {
        let name = line.name.to_ascii_uppercase();
        // Parameterized dates (TZID, VALUE=DATE) are not checked
        if name.starts_with("DT")
            && line.params.is_empty()
            && parse_utc(line.value.trim()).is_none()
        {
            self.bad_dates.push(line.value.trim().to_string());
        }
        self.names.insert(name);
    }

    fn has(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// Validate calendar text.
///
/// Missing begin/end markers is reported as a single error without any
/// further checks. Errors fail the validation; warnings alone do not, except
/// that a calendar without events fails.
pub fn validate(text: &str) -> ValidationReport {
    let mut report = ValidationReport::default();

    let body = text.trim_end_matches(['\r', '\n']);
    if !text.starts_with("BEGIN:VCALENDAR") || !body.ends_with("END:VCALENDAR") {
        report
            .errors
            .push("File does not have proper VCALENDAR begin/end structure".to_string());
        return report;
    }

    let mut stack: Vec<String> = Vec::new();
    let mut calendar_names: HashSet<String> = HashSet::new();
    let mut current: Option<EventLines> = None;
    let mut events: Vec<EventLines> = Vec::new();

    for line in logical_lines(text) {
        let Some(content) = ContentLine::parse(&line.unfolded()) else {
            continue;
        };
        let value = content.value.trim().to_ascii_uppercase();

        if content.is("BEGIN") {
            if value == "VEVENT" && stack.len() == 1 {
                current = Some(EventLines::default());
            }
            stack.push(value);
        } else if content.is("END") {
            let closed = stack.pop();
            if closed.as_deref() == Some("VEVENT") && stack.len() == 1 {
                events.extend(current.take());
            }
        } else if stack.len() == 1 {
            calendar_names.insert(content.name.to_ascii_uppercase());
        } else if stack.len() == 2 && stack[1] == "VEVENT" {
            if let Some(event) = current.as_mut() {
                event.record(&content);
            }
        }
    }

    for prop in RECOMMENDED_CALENDAR {
        if !calendar_names.contains(prop) {
            report
                .warnings
                .push(format!("Missing recommended property '{}'", prop));
        }
    }

    let missing_modern: Vec<&str> = RFC7986_CALENDAR
        .into_iter()
        .filter(|p| !calendar_names.contains(*p))
        .collect();
    if !missing_modern.is_empty() {
        report.warnings.push(format!(
            "Missing RFC 7986 properties: {}",
            missing_modern.join(", ")
        ));
    }

    report.event_count = events.len();
    if events.is_empty() {
        report.warnings.push("Calendar contains no events".to_string());
        return report;
    }

    for (i, event) in events.iter().enumerate() {
        let n = i + 1;

        for prop in REQUIRED_EVENT {
            if !event.has(prop) {
                report
                    .errors
                    .push(format!("Event {} is missing required property '{}'", n, prop));
            }
        }

        for prop in RECOMMENDED_EVENT {
            if !event.has(prop) {
                report
                    .warnings
                    .push(format!("Event {} is missing recommended property '{}'", n, prop));
            }
        }

        let missing_enhanced: Vec<&str> = ENHANCED_EVENT
            .into_iter()
            .filter(|p| !event.has(p))
            .collect();
        if !missing_enhanced.is_empty() {
            report.warnings.push(format!(
                "Event {} missing enhanced properties: {}",
                n,
                missing_enhanced.join(", ")
            ));
        }

        for date in &event.bad_dates {
            report
                .errors
                .push(format!("Event {} has invalid date format '{}'", n, date));
        }
    }

    report.passed = report.errors.is_empty();
    report
}
