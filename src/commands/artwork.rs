use anyhow::Result;
use animecal_core::ArtworkProvider;
use serde_json::{Map, Value, json};

use super::{CredentialArgs, load_config, tmdb_client};

pub fn run(
    title: &str,
    season: Option<u32>,
    episode: Option<u32>,
    credentials: &CredentialArgs,
) -> Result<()> {
    let config = load_config(credentials)?;
    let client = tmdb_client(&config)?;

    let artwork = lookup(&client, title, season, episode)?;
    println!("{}", serde_json::to_string_pretty(&artwork)?);

    Ok(())
}

/// Everything known about a show as a JSON object. Season and episode
/// entries only appear when asked for. An unknown show is `{}`.
pub fn lookup(
    provider: &dyn ArtworkProvider,
    title: &str,
    season: Option<u32>,
    episode: Option<u32>,
) -> Result<Value> {
    let mut out = Map::new();

    let Some(series) = provider.find_series(title)? else {
        tracing::warn!(title, "no results found");
        return Ok(Value::Object(out));
    };

    out.insert("title".into(), json!(series.name));
    out.insert("poster".into(), json!(series.poster));
    out.insert("backdrop".into(), json!(series.backdrop));

    if let Some(season) = season {
        let details = provider.season(series.id, season)?;
        out.insert("season_name".into(), json!(details.name));
        out.insert("season_poster".into(), json!(details.poster));

        if let Some(episode) = episode {
            let details = provider.episode(series.id, season, episode)?;
            out.insert("episode_name".into(), json!(details.name));
            out.insert("episode_still".into(), json!(details.still));
        }
    }

    Ok(Value::Object(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::StubProvider;

    #[test]
    fn test_lookup_series_only() {
        let value = lookup(&StubProvider, "Show Name", None, None).unwrap();

        assert_eq!(value["title"], "Show Name");
        assert_eq!(value["poster"], "https://img/poster.jpg");
        assert_eq!(value["backdrop"], Value::Null);
        assert!(value.get("season_poster").is_none());
    }

    #[test]
    fn test_lookup_with_episode() {
        let value = lookup(&StubProvider, "Show Name", Some(2), Some(5)).unwrap();

        assert_eq!(value["episode_still"], "https://img/still.jpg");
        assert_eq!(value["season_poster"], Value::Null);
    }

    #[test]
    fn test_lookup_unknown_and_failing() {
        assert_eq!(lookup(&StubProvider, "Nobody", None, None).unwrap(), json!({}));
        assert!(lookup(&StubProvider, "Broken Show", None, None).is_err());
    }
}
