//! Command-line and environment configuration.
//!
//! `Cli` is parsed once in `main` and validated into the [`OrreryConfig`]
//! resource that the fetcher and presenter read.

use std::path::PathBuf;

use bevy::prelude::*;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, error::ErrorKind};

/// NASA NeoWs feed endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.nasa.gov/neo/rest/v1/feed";

/// Rate-limited public key accepted by api.nasa.gov.
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";

/// Feed date shown when none is given.
pub const DEFAULT_FEED_DATE: &str = "2024-10-06";

/// Kilometres of miss distance per render unit when placing markers.
pub const DEFAULT_MARKER_SCALE_KM: f64 = 1.0e6;

/// Interactive solar system with today's near-Earth objects.
#[derive(Parser, Debug, Clone)]
#[command(name = "neo-orrery", version)]
pub struct Cli {
    /// NASA API key
    #[arg(long, env = "NASA_API_KEY", default_value = DEFAULT_API_KEY, hide_env_values = true)]
    pub api_key: String,

    /// Close-approach date to display (YYYY-MM-DD)
    #[arg(long, default_value = DEFAULT_FEED_DATE)]
    pub date: NaiveDate,

    /// Feed endpoint URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Read the feed JSON from a file instead of the network
    #[arg(long, value_name = "PATH")]
    pub feed_file: Option<PathBuf>,

    /// Kilometres of miss distance per render unit
    #[arg(long, default_value_t = DEFAULT_MARKER_SCALE_KM)]
    pub marker_scale: f64,

    /// Advance animation by a fixed step per rendered frame
    #[arg(long)]
    pub frame_locked: bool,
}

/// Errors rejecting a command line before the app starts.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("marker scale must be a positive number of kilometres, got {0}")]
    InvalidMarkerScale(f64),

    #[error("API key must not be empty")]
    EmptyApiKey,
}

/// Where the NEO feed is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedSource {
    /// HTTP GET against the configured endpoint
    Remote { endpoint: String },
    /// A saved feed document on disk
    File(PathBuf),
}

/// Validated runtime configuration.
#[derive(Resource, Clone, Debug)]
pub struct OrreryConfig {
    pub api_key: String,
    pub feed_date: NaiveDate,
    pub feed_source: FeedSource,
    /// Kilometres per render unit for marker placement.
    pub marker_scale_km: f64,
    /// Advance one reference step per frame instead of by elapsed time.
    pub frame_locked: bool,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            feed_date: NaiveDate::from_ymd_opt(2024, 10, 6).unwrap_or(NaiveDate::MIN),
            feed_source: FeedSource::Remote {
                endpoint: DEFAULT_ENDPOINT.to_string(),
            },
            marker_scale_km: DEFAULT_MARKER_SCALE_KM,
            frame_locked: false,
        }
    }
}

impl OrreryConfig {
    /// The date as it appears in the feed's `near_earth_objects` keys.
    pub fn feed_date_key(&self) -> String {
        self.feed_date.format("%Y-%m-%d").to_string()
    }
}

impl Cli {
    /// Validate into a config, reporting failures the way clap reports its
    /// own argument errors.
    pub fn into_config(self) -> Result<OrreryConfig, clap::Error> {
        OrreryConfig::try_from(self)
            .map_err(|err| Cli::command().error(ErrorKind::ValueValidation, err))
    }
}

impl TryFrom<Cli> for OrreryConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if !(cli.marker_scale.is_finite() && cli.marker_scale > 0.0) {
            return Err(ConfigError::InvalidMarkerScale(cli.marker_scale));
        }

        let feed_source = match cli.feed_file {
            Some(path) => FeedSource::File(path),
            None => {
                if cli.api_key.trim().is_empty() {
                    return Err(ConfigError::EmptyApiKey);
                }
                FeedSource::Remote {
                    endpoint: cli.endpoint,
                }
            }
        };

        Ok(Self {
            api_key: cli.api_key.trim().to_string(),
            feed_date: cli.date,
            feed_source,
            marker_scale_km: cli.marker_scale,
            frame_locked: cli.frame_locked,
        })
    }
}
