pub mod artwork;
pub mod cleanup;
pub mod config;
pub mod fix_images;
pub mod images;
pub mod outlook;
pub mod refresh;
pub mod validate;

use anyhow::{Context, Result};
use animecal_core::AppConfig;
use animecal_provider_tmdb::{TmdbClient, TmdbConfig};
use clap::Args;

pub use crate::utils::tui::with_spinner;

/// TMDB credentials given on the command line. These override the config
/// file and `TMDB_*` environment variables.
#[derive(Args, Default)]
pub struct CredentialArgs {
    /// TMDB read access token
    #[arg(long)]
    pub access_token: Option<String>,

    /// TMDB v3 API key
    #[arg(long)]
    pub api_key: Option<String>,
}

impl CredentialArgs {
    /// Layer the flags over the loaded configuration.
    pub fn resolve(&self, mut config: AppConfig) -> AppConfig {
        if let Some(token) = &self.access_token {
            config.access_token = Some(token.clone());
        }
        if let Some(key) = &self.api_key {
            config.api_key = Some(key.clone());
        }
        config
    }
}

pub fn load_config(credentials: &CredentialArgs) -> Result<AppConfig> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    Ok(credentials.resolve(config))
}

pub fn tmdb_client(config: &AppConfig) -> Result<TmdbClient> {
    let tmdb = TmdbConfig::new(config.access_token.clone(), config.api_key.clone())?
        .with_language(config.language.clone())
        .with_image_size(config.image_size.clone());

    Ok(TmdbClient::new(tmdb)?)
}

#[cfg(test)]
pub(crate) mod testing {
    //! Helpers shared by the command tests.

    use std::path::PathBuf;

    use animecal_core::{
        AnimecalError, AnimecalResult, ArtworkProvider, EpisodeArtwork, SeasonArtwork,
        SeriesArtwork,
    };
    use tempfile::TempDir;

    /// Knows one show, "Show Name", with a still for S2E5 only.
    pub struct StubProvider;

    impl ArtworkProvider for StubProvider {
        fn find_series(&self, title: &str) -> AnimecalResult<Option<SeriesArtwork>> {
            match title {
                "Show Name" => Ok(Some(SeriesArtwork {
                    id: 1,
                    name: Some(title.to_string()),
                    poster: Some("https://img/poster.jpg".into()),
                    backdrop: None,
                })),
                "Broken Show" => Err(AnimecalError::Provider("timeout".into())),
                _ => Ok(None),
            }
        }

        fn season(&self, _series_id: u64, _season: u32) -> AnimecalResult<SeasonArtwork> {
            Ok(SeasonArtwork::default())
        }

        fn episode(
            &self,
            _series_id: u64,
            season: u32,
            episode: u32,
        ) -> AnimecalResult<EpisodeArtwork> {
            let still = (season == 2 && episode == 5).then(|| "https://img/still.jpg".to_string());
            Ok(EpisodeArtwork { name: None, still })
        }
    }

    pub const CALENDAR: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Anime Schedule//EN\r\n\
CALSCALE:GREGORIAN\r\n\
METHOD:PUBLISH\r\n\
LAST-MODIFIED:20240101T000000Z\r\n\
BEGIN:VEVENT\r\n\
UID:show-s2e5\r\n\
DTSTAMP:20250519T164757Z\r\n\
DTSTART:20250601T150000Z\r\n\
SUMMARY:Show Name S2 - Episode 5\r\n\
SEQUENCE:1\r\n\
LAST-MODIFIED:20240101T000000Z\r\n\
IMAGE;DISPLAY=THUMBNAIL;FMTTYPE=image/jpeg;VALUE=URI:https://img/old.jpg\r\n\
IMAGE;DISPLAY=THUMBNAIL;FMTTYPE=image/jpeg;VALUE=URI:https://img/old.jpg\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:broken-e1\r\n\
DTSTAMP:20250519T164757Z\r\n\
DTSTART:20250602T150000Z\r\n\
SUMMARY:Broken Show - Episode 1\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

    /// A temp dir holding `main.ics` with `content`.
    pub fn calendar_file(content: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.ics");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let config = AppConfig {
            access_token: None,
            api_key: Some("from-env".into()),
            ..Default::default()
        };
        let flags = CredentialArgs {
            access_token: Some("flag-token".into()),
            api_key: Some("flag-key".into()),
        };

        let resolved = flags.resolve(config);

        assert_eq!(resolved.access_token.as_deref(), Some("flag-token"));
        assert_eq!(resolved.api_key.as_deref(), Some("flag-key"));
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let config = AppConfig {
            api_key: Some("from-env".into()),
            ..Default::default()
        };

        let resolved = CredentialArgs::default().resolve(config.clone());

        assert_eq!(resolved, config);
    }

    #[test]
    fn test_client_requires_credentials() {
        assert!(tmdb_client(&AppConfig::default()).is_err());
        assert!(
            tmdb_client(&AppConfig {
                api_key: Some("key".into()),
                ..Default::default()
            })
            .is_ok()
        );
    }
}
