//! Output formats for generated rules
//!
//! Each format implements the `Formatter` trait and can be registered with
//! `FormatRegistry`. The built-ins are `css` and `json`.

use crate::emitting::declaration::UtilityRule;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Escape a class name for use in a CSS class selector.
///
/// ASCII characters outside `[A-Za-z0-9_-]` get a backslash; a leading digit
/// (or a digit after a leading `-`) is written as a hex escape.
pub fn escape_class_name(class_name: &str) -> String {
    let mut escaped = String::with_capacity(class_name.len() + 8);
    for (index, ch) in class_name.chars().enumerate() {
        let leading_digit = ch.is_ascii_digit()
            && (index == 0 || (index == 1 && class_name.starts_with('-')));
        if leading_digit {
            escaped.push_str(&format!("\\{:x} ", ch as u32));
        } else if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || !ch.is_ascii() {
            escaped.push(ch);
        } else {
            escaped.push('\\');
            escaped.push(ch);
        }
    }
    escaped
}

/// `.` followed by the escaped class name
pub fn class_selector(class_name: &str) -> String {
    format!(".{}", escape_class_name(class_name))
}

/// Trait for rule formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "css", "json")
    fn name(&self) -> &str;

    /// Render rules in this format
    fn format(&self, rules: &[UtilityRule]) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Plain CSS, one rule block per utility
pub struct CssFormatter;

impl Formatter for CssFormatter {
    fn name(&self) -> &str {
        "css"
    }

    fn format(&self, rules: &[UtilityRule]) -> Result<String, FormatError> {
        let blocks: Vec<String> = rules
            .iter()
            .map(|rule| {
                let body: String = rule
                    .block
                    .iter()
                    .map(|d| format!("  {}: {};\n", d.property, d.value))
                    .collect();
                format!("{} {{\n{}}}\n", class_selector(&rule.class_name), body)
            })
            .collect();
        Ok(blocks.join("\n"))
    }

    fn description(&self) -> &str {
        "CSS rules with escaped class selectors"
    }
}

/// A JSON object mapping selectors to declaration objects
pub struct JsonFormatter;

struct SelectorMap<'a>(&'a [UtilityRule]);

impl Serialize for SelectorMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for rule in self.0 {
            map.serialize_entry(&class_selector(&rule.class_name), &rule.block)?;
        }
        map.end()
    }
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn format(&self, rules: &[UtilityRule]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&SelectorMap(rules))
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "JSON object of selector to declarations, in generation order"
    }
}

/// Registry of rule formatters
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Render rules using the named format
    pub fn format(&self, rules: &[UtilityRule], format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.format(rules)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(CssFormatter);
        registry.register(JsonFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
