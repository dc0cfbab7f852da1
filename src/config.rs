//! Layout configuration
//!
//! A configuration maps layout names to either a bare list of rows or a full
//! definition with track sizing:
//!
//! ```yaml
//! layouts:
//!   page:
//!     - header header
//!     - sidebar main
//!   dashboard:
//!     rows: ["nav content", "nav footer"]
//!     row-tracks: auto 1fr
//!     col-tracks: 16rem 1fr
//! ```
//!
//! Unrecognized keys are ignored. Layouts are kept sorted by name so that
//! generation order never depends on the key order of the source file.

use crate::error::{ConfigError, GridAreasError};
use crate::parsing::rows::{parse_layout, ParsedLayout};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// A named layout with optional track sizing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutDefinition {
    pub name: String,
    /// Row strings, top to bottom
    pub rows: Vec<String>,
    /// Value for `grid-template-rows`, if any
    pub row_tracks: Option<String>,
    /// Value for `grid-template-columns`, if any
    pub col_tracks: Option<String>,
}

impl LayoutDefinition {
    /// Shorthand layout: rows only, no track sizing
    pub fn from_rows<I, S>(name: impl Into<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LayoutDefinition {
            name: name.into(),
            rows: rows.into_iter().map(Into::into).collect(),
            row_tracks: None,
            col_tracks: None,
        }
    }

    pub fn with_row_tracks(mut self, tracks: impl Into<String>) -> Self {
        self.row_tracks = Some(tracks.into());
        self
    }

    pub fn with_col_tracks(mut self, tracks: impl Into<String>) -> Self {
        self.col_tracks = Some(tracks.into());
        self
    }
}

/// One entry of the `layouts` map, in either accepted shape
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LayoutEntry {
    /// `name: ["a b", "c d"]`
    Rows(Vec<String>),
    /// `name: { rows: [...], row-tracks: ..., col-tracks: ... }`
    Definition {
        rows: Vec<String>,
        #[serde(default, rename = "row-tracks")]
        row_tracks: Option<String>,
        #[serde(default, rename = "col-tracks")]
        col_tracks: Option<String>,
    },
}

impl LayoutEntry {
    /// Normalize either shape into a [`LayoutDefinition`]
    pub fn into_definition(self, name: impl Into<String>) -> LayoutDefinition {
        match self {
            LayoutEntry::Rows(rows) => LayoutDefinition::from_rows(name, rows),
            LayoutEntry::Definition {
                rows,
                row_tracks,
                col_tracks,
            } => LayoutDefinition {
                name: name.into(),
                rows,
                row_tracks,
                col_tracks,
            },
        }
    }
}

impl From<LayoutDefinition> for LayoutEntry {
    fn from(definition: LayoutDefinition) -> Self {
        LayoutEntry::Definition {
            rows: definition.rows,
            row_tracks: definition.row_tracks,
            col_tracks: definition.col_tracks,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GridAreasConfig {
    #[serde(default)]
    layouts: BTreeMap<String, LayoutEntry>,
}

impl GridAreasConfig {
    /// An empty configuration: only keyword and arbitrary-value utilities
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a layout
    pub fn with_layout(mut self, definition: LayoutDefinition) -> Self {
        let name = definition.name.clone();
        self.layouts.insert(name, definition.into());
        self
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(source).map_err(|e| ConfigError::Parse {
            format: "json".to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        // An empty YAML document deserializes to unit, not a map
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source).map_err(|e| ConfigError::Parse {
            format: "yaml".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a configuration file, choosing the format from its extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        log::debug!(target: "grid_areas", "loading {} config from {}", extension, path.display());

        match extension.as_str() {
            "json" => Self::from_json_str(&source),
            "yaml" | "yml" => Self::from_yaml_str(&source),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Number of configured layouts
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Every layout in normalized form, ordered by name
    pub fn layouts(&self) -> Vec<LayoutDefinition> {
        self.layouts
            .iter()
            .map(|(name, entry)| entry.clone().into_definition(name.as_str()))
            .collect()
    }

    /// Parse every layout, failing on the first malformed one
    pub fn parse_layouts(&self) -> Result<Vec<ParsedLayout>, GridAreasError> {
        self.layouts().iter().map(parse_layout).collect()
    }
}
