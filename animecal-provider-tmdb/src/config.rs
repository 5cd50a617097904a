//! Client settings.

use animecal_core::{AnimecalError, AnimecalResult};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";
pub const DEFAULT_IMAGE_SIZE: &str = "original";
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// How requests are authenticated.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// v4 read access token, sent as `Authorization: Bearer`.
    BearerToken(String),
    /// v3 key, sent as the `api_key` query parameter.
    ApiKey(String),
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::BearerToken(_) => f.write_str("BearerToken(***)"),
            Credential::ApiKey(_) => f.write_str("ApiKey(***)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmdbConfig {
    pub credential: Credential,
    pub base_url: String,
    pub image_base_url: String,
    pub image_size: String,
    pub language: String,
}

impl TmdbConfig {
    /// The access token wins when both are given. Neither is a
    /// configuration error.
    pub fn new(access_token: Option<String>, api_key: Option<String>) -> AnimecalResult<Self> {
        let credential = match (access_token, api_key) {
            (Some(token), _) => Credential::BearerToken(token),
            (None, Some(key)) => Credential::ApiKey(key),
            (None, None) => {
                return Err(AnimecalError::Config(
                    "TMDB credentials missing: set TMDB_ACCESS_TOKEN or TMDB_API_KEY".into(),
                ));
            }
        };

        Ok(TmdbConfig {
            credential,
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            image_size: DEFAULT_IMAGE_SIZE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        if let Some(language) = language {
            self.language = language;
        }
        self
    }

    pub fn with_image_size(mut self, size: Option<String>) -> Self {
        if let Some(size) = size {
            self.image_size = size;
        }
        self
    }

    /// Full URL for an image path such as `/abc.jpg`. Missing or empty paths
    /// have no URL.
    pub fn image_url(&self, path: Option<&str>) -> Option<String> {
        let path = path?.trim_start_matches('/');
        if path.is_empty() {
            return None;
        }
        Some(format!("{}{}/{}", self.image_base_url, self.image_size, path))
    }
}
