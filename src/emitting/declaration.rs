//! Typed declaration records
//!
//! A [`UtilityRule`] pairs a generated class name with a [`DeclarationBlock`].
//! Blocks keep their declarations in insertion order, which is also the order
//! they are rendered in.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single `property: value` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Declaration {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Ordered list of declarations with unique property names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationBlock {
    declarations: Vec<Declaration>,
}

impl DeclarationBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`DeclarationBlock::set`]
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Set a property. An existing property keeps its position and takes the new value.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|d| d.property == property) {
            Some(existing) => existing.value = value,
            None => self.declarations.push(Declaration { property, value }),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl Serialize for DeclarationBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.declarations.len()))?;
        for declaration in &self.declarations {
            map.serialize_entry(&declaration.property, &declaration.value)?;
        }
        map.end()
    }
}

/// A generated utility class and its declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityRule {
    /// Class name without the leading `.` and without escaping
    pub class_name: String,
    pub block: DeclarationBlock,
}

impl UtilityRule {
    pub fn new(class_name: impl Into<String>, block: DeclarationBlock) -> Self {
        UtilityRule {
            class_name: class_name.into(),
            block,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_keeps_position_on_overwrite() {
        let mut block = DeclarationBlock::new()
            .with("display", "grid")
            .with("grid-area", "a");
        block.set("display", "inline-grid");

        let properties: Vec<_> = block.iter().map(|d| d.property.as_str()).collect();
        assert_eq!(properties, vec!["display", "grid-area"]);
        assert_eq!(block.get("display"), Some("inline-grid"));
        assert_eq!(block.len(), 2);
    }

    #[test]
    fn test_serializes_in_declaration_order() {
        let block = DeclarationBlock::new()
            .with("grid-template-areas", "\"a\"")
            .with("display", "grid");
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, r#"{"grid-template-areas":"\"a\"","display":"grid"}"#);
    }
}
