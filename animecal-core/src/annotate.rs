//! Attach artwork to a single event.

use crate::artwork::{ArtworkCandidate, ArtworkProvider, lookup_artwork};
use crate::error::AnimecalResult;
use crate::event::{Event, Image};
use crate::extract::EpisodeInfo;

/// Replace the event's image with the best artwork the provider has.
///
/// The existing image is removed before the lookup, so re-running never
/// stacks images and a failed lookup leaves the event without one. Only the
/// image field is touched.
///
/// Returns the candidate that was attached, if any.
pub fn annotate_event(
    event: &mut Event,
    info: &EpisodeInfo,
    provider: &dyn ArtworkProvider,
) -> AnimecalResult<Option<ArtworkCandidate>> {
    event.clear_image();

    let artwork = lookup_artwork(provider, info)?;
    let Some(best) = artwork.best() else {
        return Ok(None);
    };

    event.set_image(Image::thumbnail(&best.url));
    Ok(Some(best.clone()))
}
