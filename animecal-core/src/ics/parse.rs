//! ICS parsing using the icalendar crate's parser.

use icalendar::parser::{
    Component as ParsedComponent, Property as ParsedProperty, read_calendar, unfold,
};

use crate::calendar::{Calendar, CalendarComponent, Component, Parameter, Property};
use crate::error::{AnimecalError, AnimecalResult};
use crate::event::Event;

/// Parse a whole calendar file into the structured model.
pub fn parse_calendar(content: &str) -> AnimecalResult<Calendar> {
    if !content.trim_start().starts_with("BEGIN:VCALENDAR") {
        return Err(AnimecalError::IcsParse(
            "content does not start with BEGIN:VCALENDAR".into(),
        ));
    }

    let unfolded = unfold(content);
    let parsed = read_calendar(&unfolded).map_err(|e| AnimecalError::IcsParse(e.to_string()))?;

    let properties = parsed.properties.iter().map(to_property).collect();
    let components = parsed
        .components
        .iter()
        .map(to_component)
        .map(|c| {
            if c.name.eq_ignore_ascii_case("VEVENT") {
                CalendarComponent::Event(Event::from_component(c))
            } else {
                CalendarComponent::Other(c)
            }
        })
        .collect();

    Ok(Calendar {
        properties,
        components,
    })
}

fn to_component(component: &ParsedComponent) -> Component {
    Component {
        name: component.name.to_string(),
        properties: component.properties.iter().map(to_property).collect(),
        components: component.components.iter().map(to_component).collect(),
    }
}

fn to_property(prop: &ParsedProperty) -> Property {
    Property {
        name: prop.name.to_string(),
        params: prop
            .params
            .iter()
            .map(|p| Parameter {
                key: p.key.to_string(),
                value: p.val.as_ref().map(|v| v.to_string()),
            })
            .collect(),
        value: prop.val.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ImageDisplay;

    const CALENDAR: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Anime Schedule//EN\r\n\
NAME:Anime Schedule\r\n\
COLOR:#31a59f\r\n\
BEGIN:VEVENT\r\n\
UID:apothecary-s2e31\r\n\
DTSTAMP:20250101T000000Z\r\n\
DTSTART:20250110T150000Z\r\n\
SUMMARY:The Apothecary Diaries S2 - Episode 31\r\n\
IMAGE;DISPLAY=THUMBNAIL;FMTTYPE=image/jpeg;VALUE=URI:https://image.tmdb.org\r\n /t/p/original/still.jpg\r\n\
BEGIN:VALARM\r\n\
ACTION:DISPLAY\r\n\
TRIGGER:-PT15M\r\n\
END:VALARM\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

    #[test]
    fn test_parse_calendar_properties_and_events() {
        let calendar = parse_calendar(CALENDAR).expect("Should parse");

        assert_eq!(calendar.name(), Some("Anime Schedule"));
        assert_eq!(calendar.find_prop("COLOR").map(|p| p.value.as_str()), Some("#31a59f"));

        let events: Vec<&Event> = calendar.events().collect();
        assert_eq!(events.len(), 1);

        let event = events[0];
        assert_eq!(event.uid(), Some("apothecary-s2e31"));
        assert_eq!(event.summary(), Some("The Apothecary Diaries S2 - Episode 31"));
        assert_eq!(event.components.len(), 1);
        assert_eq!(event.components[0].name, "VALARM");
    }

    #[test]
    fn test_parse_unfolds_image_url() {
        let calendar = parse_calendar(CALENDAR).expect("Should parse");
        let event = calendar.events().next().expect("Should have event");

        let image = event.image.as_ref().expect("Should have image");
        assert_eq!(image.url, "https://image.tmdb.org/t/p/original/still.jpg");
        assert_eq!(image.display, Some(ImageDisplay::Thumbnail));
        assert_eq!(image.fmttype.as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn test_parse_rejects_missing_calendar_marker() {
        let result = parse_calendar("BEGIN:VEVENT\r\nUID:x\r\nEND:VEVENT\r\n");
        assert!(matches!(result, Err(AnimecalError::IcsParse(_))));
    }
}
