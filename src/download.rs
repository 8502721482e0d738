use std::thread;
use std::time::Duration;

use reqwest::blocking::get;
use tracing::info;

use crate::data::Feature;
use crate::error::CatalogError;
use crate::import::parse_import;
use crate::store::FeatureStore;

/// The example envelope, also served by the simulated fetch.
pub const SAMPLE_ENVELOPE: &str = include_str!("../data/sample_features.json");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Built-in sample returned after an artificial delay.
    Sample { delay: Duration },
    Remote(String),
}

impl Source {
    pub fn name(&self) -> &str {
        match self {
            Source::Sample { .. } => "sample",
            Source::Remote(url) => url,
        }
    }
}

fn fetch_failed(source: &Source, reason: impl ToString) -> CatalogError {
    CatalogError::Fetch {
        source_name: source.name().to_string(),
        reason: reason.to_string(),
    }
}

fn download_text(url: &str) -> reqwest::Result<String> {
    let body = get(url)?.error_for_status()?.text()?;
    info!(bytes = body.len(), url, "downloaded feature envelope");
    Ok(body)
}

/// Fetches an envelope and validates it. Blocks until the source answers;
/// there is no timeout or cancellation.
pub fn fetch_features(source: &Source) -> Result<Vec<Feature>, CatalogError> {
    let text = match source {
        Source::Sample { delay } => {
            thread::sleep(*delay);
            SAMPLE_ENVELOPE.to_string()
        }
        Source::Remote(url) => download_text(url).map_err(|e| fetch_failed(source, e))?,
    };

    parse_import(&text).map_err(|e| fetch_failed(source, e))
}

/// Seeds or refreshes the store. On failure the store is left as it was.
pub fn load_into(store: &mut FeatureStore, source: &Source) -> Result<usize, CatalogError> {
    let features = fetch_features(source)?;
    let count = features.len();
    store.import_merge(features);
    info!(count, source = source.name(), "features loaded");
    Ok(count)
}
