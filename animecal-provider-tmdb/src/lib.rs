//! TMDB (The Movie Database) artwork provider for animecal.

mod client;
mod config;
pub mod types;

pub use client::TmdbClient;
pub use config::{
    Credential, DEFAULT_BASE_URL, DEFAULT_IMAGE_BASE_URL, DEFAULT_IMAGE_SIZE, DEFAULT_LANGUAGE,
    TmdbConfig,
};
