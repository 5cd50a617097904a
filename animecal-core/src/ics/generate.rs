//! ICS file generation.
//!
//! Output is deterministic: properties and components come out in model
//! order, lines end in CRLF and are folded at 75 octets.

use crate::calendar::{Calendar, CalendarComponent, Component, Property};
use crate::event::Event;

const MAX_LINE_OCTETS: usize = 75;

/// Generate .ics content for a whole calendar
pub fn generate_ics(calendar: &Calendar) -> String {
    let mut out = String::new();

    write_line(&mut out, "BEGIN:VCALENDAR");
    for prop in &calendar.properties {
        write_property(&mut out, prop);
    }
    for component in &calendar.components {
        match component {
            CalendarComponent::Event(event) => write_event(&mut out, event),
            CalendarComponent::Other(other) => write_component(&mut out, other),
        }
    }
    write_line(&mut out, "END:VCALENDAR");

    out
}

/// The image goes after the event's own properties and before its
/// sub-components.
fn write_event(out: &mut String, event: &Event) {
    write_line(out, "BEGIN:VEVENT");
    for prop in &event.properties {
        write_property(out, prop);
    }
    if let Some(ref image) = event.image {
        write_property(out, &image.to_property());
    }
    for component in &event.components {
        write_component(out, component);
    }
    write_line(out, "END:VEVENT");
}

fn write_component(out: &mut String, component: &Component) {
    write_line(out, &format!("BEGIN:{}", component.name));
    for prop in &component.properties {
        write_property(out, prop);
    }
    for child in &component.components {
        write_component(out, child);
    }
    write_line(out, &format!("END:{}", component.name));
}

fn write_property(out: &mut String, prop: &Property) {
    let mut line = prop.name.clone();
    for param in &prop.params {
        line.push(';');
        line.push_str(&param.key);
        if let Some(ref value) = param.value {
            line.push('=');
            line.push_str(&quote_param_value(value));
        }
    }
    line.push(':');
    line.push_str(&prop.value);

    write_line(out, &line);
}

/// Parameter values containing `:`, `;` or `,` must be quoted.
fn quote_param_value(value: &str) -> String {
    if value.contains([':', ';', ',']) && !value.starts_with('"') {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

/// Write one content line, folding it so no physical line exceeds 75
/// octets. Continuation lines start with a single space, which counts
/// towards their length. Folds never split a UTF-8 sequence.
fn write_line(out: &mut String, line: &str) {
    let mut budget = MAX_LINE_OCTETS;
    let mut used = 0;

    for ch in line.chars() {
        let len = ch.len_utf8();
        if used + len > budget {
            out.push_str("\r\n ");
            budget = MAX_LINE_OCTETS - 1;
            used = 0;
        }
        out.push(ch);
        used += len;
    }
    out.push_str("\r\n");
}
