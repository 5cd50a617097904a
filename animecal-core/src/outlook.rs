//! Outlook-flavored copy of a calendar.
//!
//! Outlook shows `DISPLAY=BADGE` images but ignores thumbnails, and only
//! refetches an event from a subscribed calendar when its `SEQUENCE` grows.

use crate::calendar::Calendar;
use crate::event::ImageDisplay;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutlookStats {
    pub events: usize,
    /// Events carrying an image.
    pub images: usize,
    /// Events whose `SEQUENCE` was bumped.
    pub resequenced: usize,
}

/// Switch thumbnails to badges and bump every existing `SEQUENCE`.
pub fn optimize_for_outlook(calendar: &mut Calendar) -> OutlookStats {
    let mut stats = OutlookStats::default();

    for event in calendar.events_mut() {
        stats.events += 1;

        if let Some(image) = event.image.as_mut() {
            if image.display == Some(ImageDisplay::Thumbnail) {
                image.display = Some(ImageDisplay::Badge);
            }
            stats.images += 1;
        }

        if let Some(sequence) = event.sequence() {
            if event.set_sequence(sequence + 1) {
                stats.resequenced += 1;
            }
        }
    }

    stats
}
