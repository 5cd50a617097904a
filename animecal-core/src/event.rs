//! Calendar events.
//!
//! An [`Event`] keeps its properties in document order and carries at most
//! one RFC 7986 `IMAGE` attachment. The image lives in its own field rather
//! than in the property list, so an event can never hold two of them.

use chrono::{DateTime, Utc};

use crate::calendar::{Component, Parameter, Property};
use crate::timestamp::parse_utc;

/// How a client should present an image (RFC 7986 `DISPLAY`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageDisplay {
    Badge,
    Graphic,
    Fullsize,
    Thumbnail,
    Other(String),
}

impl ImageDisplay {
    pub fn from_ics_str(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "BADGE" => ImageDisplay::Badge,
            "GRAPHIC" => ImageDisplay::Graphic,
            "FULLSIZE" => ImageDisplay::Fullsize,
            "THUMBNAIL" => ImageDisplay::Thumbnail,
            _ => ImageDisplay::Other(s.to_string()),
        }
    }

    pub fn as_ics_str(&self) -> &str {
        match self {
            ImageDisplay::Badge => "BADGE",
            ImageDisplay::Graphic => "GRAPHIC",
            ImageDisplay::Fullsize => "FULLSIZE",
            ImageDisplay::Thumbnail => "THUMBNAIL",
            ImageDisplay::Other(s) => s,
        }
    }
}

/// An `IMAGE` attachment.
///
/// `DISPLAY` and `FMTTYPE` are typed. Every other parameter (`ENCODING`,
/// `ALTREP`, ...) is kept in `params` and written back as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// The property value: a URI, or inline data for `VALUE=BINARY`.
    pub url: String,
    pub display: Option<ImageDisplay>,
    pub fmttype: Option<String>,
    /// The `VALUE` type. Missing means `URI`.
    pub value_type: Option<String>,
    pub params: Vec<Parameter>,
}

impl Image {
    /// A JPEG thumbnail, the form artwork is attached in.
    pub fn thumbnail(url: &str) -> Self {
        Image {
            url: url.to_string(),
            display: Some(ImageDisplay::Thumbnail),
            fmttype: Some("image/jpeg".to_string()),
            value_type: Some("URI".to_string()),
            params: Vec::new(),
        }
    }

    pub fn from_property(prop: &Property) -> Self {
        let params = prop
            .params
            .iter()
            .filter(|p| {
                !["DISPLAY", "FMTTYPE", "VALUE"]
                    .iter()
                    .any(|typed| p.key.eq_ignore_ascii_case(typed))
            })
            .cloned()
            .collect();

        Image {
            url: prop.value.clone(),
            display: prop.param("DISPLAY").map(ImageDisplay::from_ics_str),
            fmttype: prop.param("FMTTYPE").map(str::to_string),
            value_type: prop.param("VALUE").map(str::to_string),
            params,
        }
    }

    /// `DISPLAY` and `FMTTYPE` come first, then the other parameters in
    /// their original order, then `VALUE`. For artwork this is the order the
    /// calendar generator upstream emits.
    pub fn to_property(&self) -> Property {
        let mut prop = Property::new("IMAGE", self.url.as_str());
        if let Some(ref display) = self.display {
            prop = prop.with_param("DISPLAY", display.as_ics_str());
        }
        if let Some(ref fmttype) = self.fmttype {
            prop = prop.with_param("FMTTYPE", fmttype);
        }
        prop.params.extend(self.params.iter().cloned());
        prop.with_param("VALUE", self.value_type.as_deref().unwrap_or("URI"))
    }
}

/// A `VEVENT`.
#[derive(Debug, Clone, Default)]
pub struct Event {
    /// Every property except `IMAGE`, in document order.
    pub properties: Vec<Property>,
    pub image: Option<Image>,
    /// Sub-components, usually `VALARM` reminders.
    pub components: Vec<Component>,
}

impl Event {
    /// Build an event from a parsed component. Only the first `IMAGE` is
    /// kept; later ones are dropped.
    pub fn from_component(component: Component) -> Self {
        let mut image = None;
        let mut properties = Vec::with_capacity(component.properties.len());

        for prop in component.properties {
            if prop.is("IMAGE") {
                if image.is_none() {
                    image = Some(Image::from_property(&prop));
                }
            } else {
                properties.push(prop);
            }
        }

        Event {
            properties,
            image,
            components: component.components,
        }
    }

    pub fn find_prop(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.is(name))
    }

    fn value(&self, name: &str) -> Option<&str> {
        self.find_prop(name).map(|p| p.value.as_str())
    }

    pub fn uid(&self) -> Option<&str> {
        self.value("UID")
    }

    pub fn summary(&self) -> Option<&str> {
        self.value("SUMMARY")
    }

    /// `DTSTART`, when it is a UTC timestamp.
    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.value("DTSTART").and_then(parse_utc)
    }

    pub fn sequence(&self) -> Option<i64> {
        self.value("SEQUENCE").and_then(|v| v.trim().parse().ok())
    }

    /// Overwrite an existing `SEQUENCE`. Events without one are left alone.
    pub fn set_sequence(&mut self, sequence: i64) -> bool {
        match self.properties.iter_mut().find(|p| p.is("SEQUENCE")) {
            Some(prop) => {
                prop.value = sequence.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_image(&mut self, image: Image) {
        self.image = Some(image);
    }

    /// Remove the image, returning it.
    pub fn clear_image(&mut self) -> Option<Image> {
        self.image.take()
    }
}
