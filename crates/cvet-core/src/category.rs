//! # Schema Category — Single Source of Truth
//!
//! Defines the `SchemaCategory` enum with all five recognized document
//! kinds. This is the ONE definition used across the workspace. Every
//! `match` on `SchemaCategory` must be exhaustive — adding a category
//! forces every consumer (classifier, cache, registry) to handle it at
//! compile time.
//!
//! Each category maps 1:1 to a local schema filename and a remote URL.
//! The local filename is canonical (`<category>-schema.json`); the remote
//! URLs keep the upstream repository's own filenames, which differ for
//! three of the five categories.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Base URL of the upstream schema repository.
const SCHEMA_BASE_URL: &str = "https://raw.githubusercontent.com/pzaino/thecrowler/main/schemas";

/// All recognized document categories.
///
/// A category is inferred from a document's top-level keys (see
/// [`crate::classify`]), never from an explicit type tag. Each category
/// selects exactly one JSON Schema document.
///
/// | Category | Discriminating shape | Local schema file |
/// |----------|----------------------|-------------------|
/// | Ruleset  | `ruleset_name`                | `ruleset-schema.json` |
/// | Config   | `database` or `crawler`       | `config-schema.json` |
/// | Event    | `event_type` and `details`    | `event-schema.json` |
/// | Agent    | `jobs`                        | `agent-schema.json` |
/// | Source   | `source_name`                 | `source-schema.json` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaCategory {
    /// Crawler ruleset definition (scraping/action/detection rules).
    Ruleset,
    /// Runtime configuration (database, crawler, API settings).
    Config,
    /// Event document (event type plus payload details).
    Event,
    /// Agent job definitions.
    Agent,
    /// Data source configuration.
    Source,
}

/// Total number of schema categories. Used for registry completeness checks.
pub const SCHEMA_CATEGORY_COUNT: usize = 5;

impl SchemaCategory {
    /// Returns all categories in canonical order.
    pub fn all() -> &'static [SchemaCategory] {
        &[
            Self::Ruleset,
            Self::Config,
            Self::Event,
            Self::Agent,
            Self::Source,
        ]
    }

    /// Returns the snake_case string identifier for this category.
    ///
    /// Must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ruleset => "ruleset",
            Self::Config => "config",
            Self::Event => "event",
            Self::Agent => "agent",
            Self::Source => "source",
        }
    }

    /// Canonical filename of this category's schema in the local cache
    /// directory.
    pub fn schema_file_name(&self) -> String {
        format!("{}-schema.json", self.as_str())
    }

    /// Remote URL the schema document is fetched from when the local
    /// cache file is absent.
    ///
    /// The upstream repository names three of the five files differently
    /// from our canonical local names; the mapping lives here and nowhere
    /// else.
    pub fn remote_url(&self) -> String {
        let upstream = match self {
            Self::Ruleset => "ruleset-schema.json",
            Self::Config => "crowler-config-schema.json",
            Self::Event => "crowler-event-schema.json",
            Self::Agent => "crowler-agent-schema.json",
            Self::Source => "source-config-schema.json",
        };
        format!("{SCHEMA_BASE_URL}/{upstream}")
    }
}

impl std::fmt::Display for SchemaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaCategory {
    type Err = crate::error::RunError;

    /// Parse a category from its snake_case identifier.
    ///
    /// Accepts the same identifiers produced by [`SchemaCategory::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ruleset" => Ok(Self::Ruleset),
            "config" => Ok(Self::Config),
            "event" => Ok(Self::Event),
            "agent" => Ok(Self::Agent),
            "source" => Ok(Self::Source),
            other => Err(crate::error::RunError::UnknownCategory {
                name: other.to_string(),
            }),
        }
    }
}
