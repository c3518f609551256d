//! # Schema Cache Warm-Up
//!
//! Ensures the local schema directory holds a file for each category,
//! fetching missing ones from the upstream repository before validation
//! starts. Strictly best-effort: every failure is a warning and leaves a
//! gap in the cache, which the registry later reports as a lookup error
//! only if a document of that category actually shows up.
//!
//! Cached files are never invalidated or refreshed by this tool;
//! staleness is the operator's problem.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use cvet_core::SchemaCategory;

/// Timeout for one schema fetch. On expiry the fetch counts as failed.
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Best-effort warm-up of the local schema directory.
#[derive(Debug, Clone)]
pub struct SchemaCache {
    schema_dir: PathBuf,
    sources: BTreeMap<SchemaCategory, String>,
}

impl SchemaCache {
    /// Create a cache over `schema_dir`, sourcing each category from its
    /// default upstream URL.
    pub fn new(schema_dir: impl AsRef<Path>) -> Self {
        let sources = SchemaCategory::all()
            .iter()
            .map(|c| (*c, c.remote_url()))
            .collect();
        Self {
            schema_dir: schema_dir.as_ref().to_path_buf(),
            sources,
        }
    }

    /// Override the source URL for one category. Used by tests to point
    /// at an unroutable address.
    pub fn with_source(mut self, category: SchemaCategory, url: impl Into<String>) -> Self {
        self.sources.insert(category, url.into());
        self
    }

    /// Path of the local cache file for `category`.
    pub fn local_path(&self, category: SchemaCategory) -> PathBuf {
        self.schema_dir.join(category.schema_file_name())
    }

    /// Ensure a local schema file exists for every category in
    /// `categories`, fetching absent ones.
    ///
    /// Never fails the run: directory creation, fetch, and write failures
    /// are logged as warnings and the gap is left in place.
    pub fn ensure(&self, categories: &[SchemaCategory]) {
        if let Err(e) = std::fs::create_dir_all(&self.schema_dir) {
            tracing::warn!(
                dir = %self.schema_dir.display(),
                error = %e,
                "cannot create schema directory; skipping warm-up"
            );
            return;
        }

        let client = match reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!(error = %e, "cannot build HTTP client; skipping warm-up");
                return;
            }
        };

        for category in categories {
            let path = self.local_path(*category);
            if path.is_file() {
                continue;
            }
            self.fetch_one(&client, *category, &path);
        }
    }

    /// One fetch attempt for one category. All failures are warnings.
    fn fetch_one(&self, client: &reqwest::blocking::Client, category: SchemaCategory, path: &Path) {
        let Some(url) = self.sources.get(&category) else {
            return;
        };

        let response = match client.get(url).send() {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(
                    category = %category,
                    url = %url,
                    error = %e,
                    "network issue, cannot fetch schema"
                );
                return;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                category = %category,
                url = %url,
                status = %response.status(),
                "could not download schema"
            );
            return;
        }

        let body = match response.text() {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(category = %category, error = %e, "could not read schema body");
                return;
            }
        };

        match std::fs::write(path, body) {
            Ok(()) => {
                tracing::info!(category = %category, file = %path.display(), "downloaded schema");
            }
            Err(e) => {
                tracing::warn!(
                    category = %category,
                    file = %path.display(),
                    error = %e,
                    "could not write schema file"
                );
            }
        }
    }
}
