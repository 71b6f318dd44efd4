//! NEO feed retrieval.
//!
//! One GET against the NeoWs feed (or one read of a saved feed file) runs on
//! the IO task pool; a polling system hands the result to the catalog. The
//! scene keeps animating while the request is in flight.

use std::path::Path;
use std::time::Duration;

use bevy::prelude::*;
use bevy::tasks::{IoTaskPool, Task, block_on, futures_lite::future};

use crate::config::{FeedSource, OrreryConfig};

use super::catalog::NeoCatalog;
use super::model::{FeedResponse, NeoRecord};

/// Request timeout for the feed GET.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Ways fetching the feed can fail. None of them are fatal.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("feed request failed with HTTP status {status}")]
    HttpStatus { status: u16 },

    #[error("malformed feed response: {0}")]
    Malformed(String),

    #[error("feed has no entry for {0}")]
    MissingDate(String),

    #[error("could not read feed file: {0}")]
    Io(String),
}

/// Resource reporting where the feed is in its lifecycle.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub enum FeedStatus {
    /// No fetch started yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Catalog populated with `count` records
    Loaded { count: usize },
    /// The fetch failed; the catalog stays empty
    Failed(FetchError),
}

impl FeedStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, FeedStatus::Idle | FeedStatus::Loading)
    }
}

/// In-flight feed fetch.
#[derive(Resource)]
pub struct FeedTask(pub Task<Result<Vec<NeoRecord>, FetchError>>);

/// Everything needed to fetch one day of the feed.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedRequest {
    pub source: FeedSource,
    pub api_key: String,
    /// Feed date key, `YYYY-MM-DD`.
    pub date: String,
}

impl FeedRequest {
    pub fn from_config(config: &OrreryConfig) -> Self {
        Self {
            source: config.feed_source.clone(),
            api_key: config.api_key.clone(),
            date: config.feed_date_key(),
        }
    }

    /// Feed URL for a remote source, `None` for file sources.
    pub fn url(&self) -> Option<String> {
        match &self.source {
            FeedSource::Remote { endpoint } => Some(feed_url(endpoint, &self.date, &self.api_key)),
            FeedSource::File(_) => None,
        }
    }

    /// Where the request goes, without the API key.
    pub fn describe(&self) -> String {
        match &self.source {
            FeedSource::Remote { endpoint } => endpoint.clone(),
            FeedSource::File(path) => path.display().to_string(),
        }
    }

    /// Fetch and extract the records for the requested date. Blocking.
    pub fn execute(&self) -> Result<Vec<NeoRecord>, FetchError> {
        match &self.source {
            FeedSource::Remote { endpoint } => {
                fetch_remote(&feed_url(endpoint, &self.date, &self.api_key), &self.date)
            }
            FeedSource::File(path) => read_feed_file(path, &self.date),
        }
    }
}

/// Build the feed URL for a single-day window.
pub fn feed_url(endpoint: &str, date: &str, api_key: &str) -> String {
    format!("{endpoint}?start_date={date}&end_date={date}&api_key={api_key}")
}

/// Extract the ordered record list for `date` from a feed document.
pub fn parse_feed(body: &str, date: &str) -> Result<Vec<NeoRecord>, FetchError> {
    let mut feed: FeedResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    feed.near_earth_objects
        .remove(date)
        .ok_or_else(|| FetchError::MissingDate(date.to_string()))
}

/// GET the feed and extract `date`.
pub fn fetch_remote(url: &str, date: &str) -> Result<Vec<NeoRecord>, FetchError> {
    let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();

    let response = agent.get(url).call().map_err(|err| match err {
        ureq::Error::Status(status, _) => FetchError::HttpStatus { status },
        ureq::Error::Transport(transport) => FetchError::Network(transport.to_string()),
    })?;

    let body = response
        .into_string()
        .map_err(|e| FetchError::Network(e.to_string()))?;

    parse_feed(&body, date)
}

/// Read a saved feed document and extract `date`.
pub fn read_feed_file(path: &Path, date: &str) -> Result<Vec<NeoRecord>, FetchError> {
    let body = std::fs::read_to_string(path)
        .map_err(|e| FetchError::Io(format!("{}: {e}", path.display())))?;
    parse_feed(&body, date)
}

/// Kick off the feed fetch on the IO task pool.
pub fn start_feed_fetch(
    mut commands: Commands,
    config: Res<OrreryConfig>,
    mut status: ResMut<FeedStatus>,
) {
    let request = FeedRequest::from_config(&config);
    info!("Fetching NEO feed for {} from {}", request.date, request.describe());

    // ureq blocks this pool thread for up to REQUEST_TIMEOUT. This is the
    // only task the app ever puts on the IO pool, so nothing queues behind it.
    let task = IoTaskPool::get().spawn(async move { request.execute() });
    commands.insert_resource(FeedTask(task));
    *status = FeedStatus::Loading;
}

/// Move a finished fetch into the catalog.
pub fn poll_feed_fetch(
    mut commands: Commands,
    task: Option<ResMut<FeedTask>>,
    mut status: ResMut<FeedStatus>,
    mut catalog: ResMut<NeoCatalog>,
) {
    let Some(mut task) = task else {
        return;
    };
    let Some(result) = block_on(future::poll_once(&mut task.0)) else {
        return;
    };

    commands.remove_resource::<FeedTask>();
    apply_feed_result(result, &mut status, &mut catalog);
}

/// Record the outcome of a fetch. Failures leave the catalog untouched.
pub fn apply_feed_result(
    result: Result<Vec<NeoRecord>, FetchError>,
    status: &mut FeedStatus,
    catalog: &mut NeoCatalog,
) {
    match result {
        Ok(records) => {
            info!("Loaded {} near-Earth objects", records.len());
            catalog.replace(records);
            *status = FeedStatus::Loaded {
                count: catalog.len(),
            };
        }
        Err(err) => {
            error!("NEO feed unavailable: {err}");
            *status = FeedStatus::Failed(err);
        }
    }
}
