//! Artwork lookup.
//!
//! [`ArtworkProvider`] is the seam to a remote metadata service; the TMDB
//! client lives in its own crate. [`lookup_artwork`] turns the three
//! provider calls into a ranked [`ArtworkResult`].

use serde::Serialize;
use tracing::warn;

use crate::error::AnimecalResult;
use crate::extract::EpisodeInfo;

/// A show as found by a title search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesArtwork {
    pub id: u64,
    pub name: Option<String>,
    pub poster: Option<String>,
    pub backdrop: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeasonArtwork {
    pub name: Option<String>,
    pub poster: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EpisodeArtwork {
    pub name: Option<String>,
    pub still: Option<String>,
}

/// Remote source of show artwork.
///
/// Errors are transport or HTTP failures and are not retried. "Nothing
/// there" is not an error: a search without hits is `Ok(None)`, an unknown
/// season or episode comes back empty.
pub trait ArtworkProvider {
    /// Search by title. The first hit wins; there is no disambiguation.
    fn find_series(&self, title: &str) -> AnimecalResult<Option<SeriesArtwork>>;

    fn season(&self, series_id: u64, season: u32) -> AnimecalResult<SeasonArtwork>;

    fn episode(&self, series_id: u64, season: u32, episode: u32) -> AnimecalResult<EpisodeArtwork>;
}

/// Specificity of a candidate image, most specific first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtworkTier {
    EpisodeStill,
    SeasonPoster,
    SeriesPoster,
}

impl ArtworkTier {
    pub fn label(&self) -> &'static str {
        match self {
            ArtworkTier::EpisodeStill => "episode image",
            ArtworkTier::SeasonPoster => "season poster",
            ArtworkTier::SeriesPoster => "series poster",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtworkCandidate {
    pub tier: ArtworkTier,
    pub url: String,
}

/// Candidate images for one episode, ordered by tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArtworkResult {
    pub series_name: Option<String>,
    pub candidates: Vec<ArtworkCandidate>,
}

impl ArtworkResult {
    pub fn push(&mut self, tier: ArtworkTier, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.is_empty()) {
            self.candidates.push(ArtworkCandidate { tier, url });
            self.candidates.sort_by_key(|c| c.tier);
        }
    }

    /// The most specific candidate.
    pub fn best(&self) -> Option<&ArtworkCandidate> {
        self.candidates.first()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Look up artwork for an episode.
///
/// The season is only fetched when the episode has no still, so a lookup
/// costs two or three provider calls. Only a failed series search fails the
/// lookup; a failed episode or season call drops that tier and falls through
/// to the next one.
pub fn lookup_artwork(
    provider: &dyn ArtworkProvider,
    info: &EpisodeInfo,
) -> AnimecalResult<ArtworkResult> {
    let mut result = ArtworkResult::default();

    let Some(series) = provider.find_series(&info.series)? else {
        return Ok(result);
    };
    result.series_name = series.name.clone();

    match provider.episode(series.id, info.season, info.episode) {
        Ok(episode) => result.push(ArtworkTier::EpisodeStill, episode.still),
        Err(e) => warn!(
            series = %info.series,
            season = info.season,
            episode = info.episode,
            "episode lookup failed: {e}"
        ),
    }

    if result.is_empty() {
        match provider.season(series.id, info.season) {
            Ok(season) => result.push(ArtworkTier::SeasonPoster, season.poster),
            Err(e) => warn!(
                series = %info.series,
                season = info.season,
                "season lookup failed: {e}"
            ),
        }
    }

    result.push(ArtworkTier::SeriesPoster, series.poster);

    Ok(result)
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory provider for tests.

    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::error::AnimecalError;

    #[derive(Default)]
    pub struct FakeProvider {
        pub series: HashMap<String, SeriesArtwork>,
        pub seasons: HashMap<(u64, u32), SeasonArtwork>,
        pub episodes: HashMap<(u64, u32, u32), EpisodeArtwork>,
        pub failing_titles: Vec<String>,
        pub failing_episodes: bool,
        pub failing_seasons: bool,
        pub calls: RefCell<Vec<String>>,
    }

    impl FakeProvider {
        /// One show with all three tiers available.
        pub fn with_all_tiers(title: &str) -> Self {
            let mut provider = FakeProvider::default();
            provider.series.insert(
                title.to_string(),
                SeriesArtwork {
                    id: 7,
                    name: Some(title.to_string()),
                    poster: Some("https://img/series.jpg".into()),
                    backdrop: Some("https://img/backdrop.jpg".into()),
                },
            );
            provider.seasons.insert(
                (7, 2),
                SeasonArtwork {
                    name: Some("Season 2".into()),
                    poster: Some("https://img/season2.jpg".into()),
                },
            );
            provider.episodes.insert(
                (7, 2, 5),
                EpisodeArtwork {
                    name: Some("Episode 5".into()),
                    still: Some("https://img/s2e5.jpg".into()),
                },
            );
            provider
        }
    }

    impl ArtworkProvider for FakeProvider {
        fn find_series(&self, title: &str) -> AnimecalResult<Option<SeriesArtwork>> {
            self.calls.borrow_mut().push(format!("series:{title}"));
            if self.failing_titles.iter().any(|t| t == title) {
                return Err(AnimecalError::Provider("connection reset".into()));
            }
            Ok(self.series.get(title).cloned())
        }

        fn season(&self, series_id: u64, season: u32) -> AnimecalResult<SeasonArtwork> {
            self.calls.borrow_mut().push(format!("season:{series_id}/{season}"));
            if self.failing_seasons {
                return Err(AnimecalError::Provider(format!(
                    "GET /tv/{series_id}/season/{season} returned 500"
                )));
            }
            Ok(self.seasons.get(&(series_id, season)).cloned().unwrap_or_default())
        }

        fn episode(
            &self,
            series_id: u64,
            season: u32,
            episode: u32,
        ) -> AnimecalResult<EpisodeArtwork> {
            self.calls
                .borrow_mut()
                .push(format!("episode:{series_id}/{season}/{episode}"));
            if self.failing_episodes {
                return Err(AnimecalError::Provider(format!(
                    "GET /tv/{series_id}/season/{season}/episode/{episode} returned 500"
                )));
            }
            Ok(self
                .episodes
                .get(&(series_id, season, episode))
                .cloned()
                .unwrap_or_default())
        }
    }
}
