//! Recover series, season and episode from an event summary.

use std::sync::OnceLock;

use regex::Regex;

/// What an event summary says about the episode it announces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeInfo {
    pub series: String,
    pub season: u32,
    pub episode: u32,
}

/// Parse summaries like `"The Apothecary Diaries S2 - Episode 31"` or
/// `"Dandadan Season 2 - Episode 4"`. Without a season marker
/// (`"Frieren - Episode 12"`) the season defaults to 1.
///
/// Returns `None` when the summary does not name an episode.
pub fn extract_episode_info(summary: &str) -> Option<EpisodeInfo> {
    const WITH_SEASON: &str = r"(?i)^(.*?)\s*(?:\bS(\d+)|\bSeason\s*(\d+))\s*-\s*Episode\s*(\d+)";
    const WITHOUT_SEASON: &str = r"(?i)^(.*?)\s*-\s*Episode\s*(\d+)";
    static WITH_SEASON_RE: OnceLock<Regex> = OnceLock::new();
    static WITHOUT_SEASON_RE: OnceLock<Regex> = OnceLock::new();

    let with_season = WITH_SEASON_RE.get_or_init(|| Regex::new(WITH_SEASON).expect("valid regex"));
    if let Some(caps) = with_season.captures(summary) {
        let season = caps.get(2).or_else(|| caps.get(3))?.as_str();
        return build(&caps[1], season, &caps[4]);
    }

    let without_season =
        WITHOUT_SEASON_RE.get_or_init(|| Regex::new(WITHOUT_SEASON).expect("valid regex"));
    let caps = without_season.captures(summary)?;
    build(&caps[1], "1", &caps[2])
}

fn build(series: &str, season: &str, episode: &str) -> Option<EpisodeInfo> {
    let series = series.trim();
    if series.is_empty() {
        return None;
    }

    Some(EpisodeInfo {
        series: series.to_string(),
        season: season.parse().ok()?,
        episode: episode.parse().ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(series: &str, season: u32, episode: u32) -> Option<EpisodeInfo> {
        Some(EpisodeInfo {
            series: series.to_string(),
            season,
            episode,
        })
    }

    #[test]
    fn test_short_season_marker() {
        assert_eq!(extract_episode_info("Show Name S2 - Episode 5"), info("Show Name", 2, 5));
        assert_eq!(
            extract_episode_info("The Apothecary Diaries S2 - Episode 31"),
            info("The Apothecary Diaries", 2, 31)
        );
    }

    #[test]
    fn test_long_season_marker() {
        assert_eq!(
            extract_episode_info("Dandadan Season 2 - Episode 4"),
            info("Dandadan", 2, 4)
        );
    }

    #[test]
    fn test_missing_season_defaults_to_one() {
        assert_eq!(extract_episode_info("Show Name - Episode 5"), info("Show Name", 1, 5));
    }

    #[test]
    fn test_case_insensitive_and_trailing_text() {
        assert_eq!(
            extract_episode_info("Kaiju No. 8 s2 - episode 3 (Dub)"),
            info("Kaiju No. 8", 2, 3)
        );
    }

    #[test]
    fn test_season_letter_inside_word_is_not_a_marker() {
        assert_eq!(
            extract_episode_info("Mushoku Tensei - Episode 7"),
            info("Mushoku Tensei", 1, 7)
        );
    }

    #[test]
    fn test_unknown_summaries() {
        assert_eq!(extract_episode_info("no episode marker here"), None);
        assert_eq!(extract_episode_info("Show Name - Episode"), None);
        assert_eq!(extract_episode_info(" - Episode 3"), None);
        assert_eq!(extract_episode_info(""), None);
    }
}
