//! Annotate every event of a calendar with artwork.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::annotate::annotate_event;
use crate::artwork::{ArtworkProvider, ArtworkTier};
use crate::error::AnimecalResult;
use crate::extract::{EpisodeInfo, extract_episode_info};
use crate::ics::{generate_ics, parse_calendar};

/// What happened to one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Attached { tier: ArtworkTier, url: String },
    NoArtwork,
    /// The summary does not name an episode.
    Unrecognized,
    /// The provider failed; the event was left without an image.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome {
    pub summary: String,
    /// UTC `DTSTART`, when the event has one.
    pub start: Option<DateTime<Utc>>,
    pub info: Option<EpisodeInfo>,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default)]
pub struct ReconcileReport {
    pub calendar_name: Option<String>,
    pub events: Vec<EventOutcome>,
}

impl ReconcileReport {
    pub fn processed(&self) -> usize {
        self.events.len()
    }

    pub fn annotated(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Attached { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.events.iter().filter(|e| pred(&e.outcome)).count()
    }
}

/// Annotate every event in document order and regenerate the calendar.
///
/// An event whose summary cannot be parsed is skipped; an event whose lookup
/// fails is logged and left without an image. Neither stops the pass. Only
/// a calendar that cannot be parsed at all is an error.
pub fn reconcile(
    content: &str,
    provider: &dyn ArtworkProvider,
) -> AnimecalResult<(String, ReconcileReport)> {
    let mut calendar = parse_calendar(content)?;
    let mut report = ReconcileReport {
        calendar_name: calendar.name().map(str::to_string),
        events: Vec::new(),
    };

    for event in calendar.events_mut() {
        let summary = event.summary().unwrap_or_default().to_string();
        let uid = event.uid().unwrap_or_default().to_string();
        let start = event.start();

        let Some(parsed) = extract_episode_info(&summary) else {
            debug!(uid = %uid, summary = %summary, "could not extract series info");
            report.events.push(EventOutcome {
                summary,
                start,
                info: None,
                outcome: Outcome::Unrecognized,
            });
            continue;
        };

        let outcome = match annotate_event(event, &parsed, provider) {
            Ok(Some(candidate)) => {
                info!(
                    series = %parsed.series,
                    season = parsed.season,
                    episode = parsed.episode,
                    url = %candidate.url,
                    "attached {}",
                    candidate.tier.label()
                );
                Outcome::Attached {
                    tier: candidate.tier,
                    url: candidate.url,
                }
            }
            Ok(None) => Outcome::NoArtwork,
            Err(e) => {
                warn!(uid = %uid, series = %parsed.series, error = %e, "artwork lookup failed");
                Outcome::Failed(e.to_string())
            }
        };

        report.events.push(EventOutcome {
            summary,
            start,
            info: Some(parsed),
            outcome,
        });
    }

    Ok((generate_ics(&calendar), report))
}
