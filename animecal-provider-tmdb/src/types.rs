//! TMDB response bodies, reduced to the fields artwork lookup reads.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub id: u64,
    pub name: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TvDetails {
    pub name: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SeasonDetails {
    pub name: Option<String>,
    pub poster_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EpisodeDetails {
    pub name: Option<String>,
    pub still_path: Option<String>,
}
