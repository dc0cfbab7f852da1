//! Error types for layout parsing and configuration loading

use std::fmt;

/// Errors raised while normalizing statically configured layouts
#[derive(Debug, Clone, PartialEq)]
pub enum GridAreasError {
    /// A layout cannot be rendered as a `grid-template-areas` value
    MalformedLayout {
        layout: String,
        /// Zero-based index of the offending row, if a single row is at fault
        row: Option<usize>,
        reason: String,
    },
}

impl GridAreasError {
    pub(crate) fn empty_row(layout: &str, row: usize) -> Self {
        GridAreasError::MalformedLayout {
            layout: layout.to_string(),
            row: Some(row),
            reason: "row contains no cell tokens".to_string(),
        }
    }

    pub(crate) fn no_rows(layout: &str) -> Self {
        GridAreasError::MalformedLayout {
            layout: layout.to_string(),
            row: None,
            reason: "layout declares no rows".to_string(),
        }
    }
}

impl fmt::Display for GridAreasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridAreasError::MalformedLayout {
                layout,
                row: Some(row),
                reason,
            } => write!(f, "Malformed layout '{layout}' (row {row}): {reason}"),
            GridAreasError::MalformedLayout {
                layout,
                row: None,
                reason,
            } => write!(f, "Malformed layout '{layout}': {reason}"),
        }
    }
}

impl std::error::Error for GridAreasError {}

/// Errors raised while loading a configuration file
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The file could not be read
    Io { path: String, message: String },
    /// The file was read but could not be deserialized
    Parse { format: String, message: String },
    /// The file extension does not name a supported format
    UnsupportedFormat(String),
    /// A configured layout failed normalization
    Layout(GridAreasError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "Could not read config '{path}': {message}")
            }
            ConfigError::Parse { format, message } => {
                write!(f, "Invalid {format} config: {message}")
            }
            ConfigError::UnsupportedFormat(ext) => {
                write!(f, "Unsupported config format '{ext}' (expected json, yaml or yml)")
            }
            ConfigError::Layout(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Layout(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridAreasError> for ConfigError {
    fn from(err: GridAreasError) -> Self {
        ConfigError::Layout(err)
    }
}
