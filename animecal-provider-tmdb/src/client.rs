//! Blocking TMDB client.

use animecal_core::{
    AnimecalError, AnimecalResult, ArtworkProvider, EpisodeArtwork, SeasonArtwork, SeriesArtwork,
};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::{Credential, TmdbConfig};
use crate::types::{EpisodeDetails, SearchResponse, SeasonDetails, TvDetails};

pub struct TmdbClient {
    http: Client,
    config: TmdbConfig,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> AnimecalResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("animecal/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AnimecalError::Provider(format!("Failed to create HTTP client: {e}")))?;

        Ok(TmdbClient { http, config })
    }

    /// GET `path` and decode the JSON body. A 404 is `None`.
    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> AnimecalResult<Option<T>> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        debug!(path, "TMDB request");

        let mut request = self
            .http
            .get(&url)
            .query(&[("language", self.config.language.as_str())])
            .query(query);

        request = match &self.config.credential {
            Credential::BearerToken(token) => request.bearer_auth(token),
            Credential::ApiKey(key) => request.query(&[("api_key", key.as_str())]),
        };

        // Errors carry the URL, which may contain the api_key
        let response = request
            .send()
            .map_err(|e| AnimecalError::Provider(format!("GET {path}: {}", e.without_url())))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(path, "TMDB returned 404");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(AnimecalError::Provider(format!("GET {path} returned {status}")));
        }

        let body = response.json::<T>().map_err(|e| {
            AnimecalError::Serialization(format!("GET {path}: {}", e.without_url()))
        })?;

        Ok(Some(body))
    }

    pub fn search_tv(&self, title: &str) -> AnimecalResult<SearchResponse> {
        let found = self.get_json::<SearchResponse>("/search/tv", &[("query", title)])?;
        Ok(found.unwrap_or(SearchResponse { results: vec![] }))
    }

    pub fn tv_details(&self, id: u64) -> AnimecalResult<Option<TvDetails>> {
        self.get_json(&format!("/tv/{id}"), &[("append_to_response", "images")])
    }

    pub fn season_details(&self, id: u64, season: u32) -> AnimecalResult<Option<SeasonDetails>> {
        self.get_json(
            &format!("/tv/{id}/season/{season}"),
            &[("append_to_response", "images")],
        )
    }

    pub fn episode_details(
        &self,
        id: u64,
        season: u32,
        episode: u32,
    ) -> AnimecalResult<Option<EpisodeDetails>> {
        self.get_json(
            &format!("/tv/{id}/season/{season}/episode/{episode}"),
            &[("append_to_response", "images")],
        )
    }
}

impl ArtworkProvider for TmdbClient {
    fn find_series(&self, title: &str) -> AnimecalResult<Option<SeriesArtwork>> {
        let search = self.search_tv(title)?;
        // First hit wins
        let Some(hit) = search.results.into_iter().next() else {
            debug!(title, "no TMDB results");
            return Ok(None);
        };

        let details = self.tv_details(hit.id)?.unwrap_or_default();

        Ok(Some(SeriesArtwork {
            id: hit.id,
            name: details.name.or(hit.name),
            poster: self
                .config
                .image_url(details.poster_path.or(hit.poster_path).as_deref()),
            backdrop: self
                .config
                .image_url(details.backdrop_path.or(hit.backdrop_path).as_deref()),
        }))
    }

    fn season(&self, series_id: u64, season: u32) -> AnimecalResult<SeasonArtwork> {
        let details = self.season_details(series_id, season)?.unwrap_or_default();
        Ok(SeasonArtwork {
            name: details.name,
            poster: self.config.image_url(details.poster_path.as_deref()),
        })
    }

    fn episode(
        &self,
        series_id: u64,
        season: u32,
        episode: u32,
    ) -> AnimecalResult<EpisodeArtwork> {
        let details = self
            .episode_details(series_id, season, episode)?
            .unwrap_or_default();
        Ok(EpisodeArtwork {
            name: details.name,
            still: self.config.image_url(details.still_path.as_deref()),
        })
    }
}
