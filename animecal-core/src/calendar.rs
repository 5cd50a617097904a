//! In-memory calendar model.
//!
//! A [`Calendar`] keeps every property and component in document order so
//! that parsing and generating a file only changes what the caller changed.
//! Events get a typed wrapper ([`Event`]) with a single optional image; every
//! other component is carried through untouched.

use crate::event::Event;

/// A property parameter such as `DISPLAY=THUMBNAIL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub key: String,
    pub value: Option<String>,
}

impl Parameter {
    pub fn new(key: &str, value: &str) -> Self {
        Parameter {
            key: key.to_string(),
            value: Some(value.to_string()),
        }
    }
}

/// One content line: `NAME;PARAM=VALUE:value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub params: Vec<Parameter>,
    pub value: String,
}

impl Property {
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Property {
            name: name.to_string(),
            params: Vec::new(),
            value: value.into(),
        }
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.params.push(Parameter::new(key, value));
        self
    }

    /// Property names are case-insensitive.
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.key.eq_ignore_ascii_case(key))
            .and_then(|p| p.value.as_deref())
    }
}

/// A generic component (`VTIMEZONE`, `VALARM`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    pub properties: Vec<Property>,
    pub components: Vec<Component>,
}

impl Component {
    pub fn find_prop(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.is(name))
    }
}

/// A direct child of `VCALENDAR`.
#[derive(Debug, Clone)]
pub enum CalendarComponent {
    Event(Event),
    Other(Component),
}

#[derive(Debug, Clone, Default)]
pub struct Calendar {
    pub properties: Vec<Property>,
    pub components: Vec<CalendarComponent>,
}

impl Calendar {
    /// Calendar display name (`NAME`, falling back to `X-WR-CALNAME`).
    pub fn name(&self) -> Option<&str> {
        self.find_prop("NAME")
            .or_else(|| self.find_prop("X-WR-CALNAME"))
            .map(|p| p.value.as_str())
    }

    pub fn find_prop(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.is(name))
    }

    /// Events in document order.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.components.iter().filter_map(|c| match c {
            CalendarComponent::Event(event) => Some(event),
            CalendarComponent::Other(_) => None,
        })
    }

    pub fn events_mut(&mut self) -> impl Iterator<Item = &mut Event> {
        self.components.iter_mut().filter_map(|c| match c {
            CalendarComponent::Event(event) => Some(event),
            CalendarComponent::Other(_) => None,
        })
    }
}
