//! Core of animecal.
//!
//! This crate holds everything that does not talk to the network or the
//! terminal:
//! - the calendar model (`Calendar`, `Event`) and its ICS parser/generator
//! - episode extraction, artwork ranking and the reconciler driving them
//! - the text-level `Sanitizer` and the `validate` checks
//! - configuration and the `ArtworkProvider` trait implemented by providers

pub mod annotate;
pub mod artwork;
pub mod calendar;
pub mod config;
pub mod error;
pub mod event;
pub mod extract;
pub mod ics;
pub mod outlook;
pub mod reconcile;
pub mod sanitize;
pub mod store;
pub mod timestamp;
pub mod validate;

pub use artwork::{
    ArtworkCandidate, ArtworkProvider, ArtworkResult, ArtworkTier, EpisodeArtwork, SeasonArtwork,
    SeriesArtwork, lookup_artwork,
};
pub use calendar::{Calendar, CalendarComponent, Component, Parameter, Property};
pub use crate::config::AppConfig;
pub use error::{AnimecalError, AnimecalResult};
pub use event::{Event, Image, ImageDisplay};
pub use extract::{EpisodeInfo, extract_episode_info};
pub use reconcile::{EventOutcome, Outcome, ReconcileReport, reconcile};
pub use sanitize::{Sanitized, Sanitizer};
pub use validate::{ValidationReport, validate};
