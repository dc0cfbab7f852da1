//! Declaration sinks
//!
//! Generated rules are handed to a [`DeclarationSink`], which stands in for
//! whatever build tool owns the final stylesheet. The generator makes no
//! assumption about how a sink renders, orders or deduplicates rules.
//!
//! [`Stylesheet`] is the in-memory sink used by the command-line tool and the
//! tests. It can also resolve individual class names the way a host would.

use crate::emitting::arbitrary::{ArbitraryFamily, ArbitraryMatcher, ArbitraryUtility};
use crate::emitting::declaration::UtilityRule;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

/// Families of statically generated utilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UtilityFamily {
    /// `grid-areas-*`
    Layouts,
    /// `grid-area-*`
    AreaPlacement,
    /// `row-*` and `col-*`
    Lines,
}

impl fmt::Display for UtilityFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UtilityFamily::Layouts => write!(f, "layouts"),
            UtilityFamily::AreaPlacement => write!(f, "area-placement"),
            UtilityFamily::Lines => write!(f, "lines"),
        }
    }
}

/// Receiver for generated utilities
pub trait DeclarationSink {
    /// Called once per static utility family
    fn add_utilities(&mut self, family: UtilityFamily, rules: Vec<UtilityRule>);

    /// Called once per arbitrary-value family with its resolvers
    fn match_utilities(&mut self, family: ArbitraryFamily, matchers: Vec<ArbitraryMatcher>);
}

static ARBITRARY_CLASS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<prefix>[a-z][a-z-]*?)-\[(?P<value>.*)\]$")
        .expect("arbitrary class pattern is valid")
});

/// Split `prefix-[value]` into its parts
pub fn split_arbitrary_class(class_name: &str) -> Option<(&str, &str)> {
    let captures = ARBITRARY_CLASS_REGEX.captures(class_name)?;
    let prefix = captures.name("prefix")?.as_str();
    let value = captures.name("value")?.as_str();
    Some((prefix, value))
}

/// In-memory sink keeping rules in registration order
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    rules: Vec<UtilityRule>,
    index: HashMap<String, usize>,
    matchers: Vec<ArbitraryMatcher>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule. Re-adding a class name replaces the earlier body in place.
    pub fn insert(&mut self, rule: UtilityRule) {
        match self.index.get(&rule.class_name) {
            Some(&position) => {
                log::debug!(target: "grid_areas", "replacing rule .{}", rule.class_name);
                self.rules[position] = rule;
            }
            None => {
                self.index.insert(rule.class_name.clone(), self.rules.len());
                self.rules.push(rule);
            }
        }
    }

    pub fn get(&self, class_name: &str) -> Option<&UtilityRule> {
        self.index.get(class_name).map(|&position| &self.rules[position])
    }

    /// Static rules in registration order
    pub fn rules(&self) -> &[UtilityRule] {
        &self.rules
    }

    pub fn matchers(&self) -> &[ArbitraryMatcher] {
        &self.matchers
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolve a class name as a host would.
    ///
    /// Static rules take precedence. Otherwise `prefix-[value]` is handed to
    /// the matcher registered for `prefix`.
    pub fn resolve(&self, class_name: &str) -> Option<UtilityRule> {
        if let Some(rule) = self.get(class_name) {
            return Some(rule.clone());
        }

        let (prefix, value) = split_arbitrary_class(class_name)?;
        let utility = ArbitraryUtility::from_prefix(prefix)?;
        let matcher = self.matchers.iter().find(|m| m.utility() == utility)?;
        Some(UtilityRule::new(class_name, matcher.resolve(value)))
    }
}

impl DeclarationSink for Stylesheet {
    fn add_utilities(&mut self, family: UtilityFamily, rules: Vec<UtilityRule>) {
        log::debug!(target: "grid_areas", "adding {} {} utilities", rules.len(), family);
        for rule in rules {
            self.insert(rule);
        }
    }

    fn match_utilities(&mut self, family: ArbitraryFamily, matchers: Vec<ArbitraryMatcher>) {
        log::debug!(
            target: "grid_areas",
            "registering {} arbitrary matchers for {}",
            matchers.len(),
            family.name()
        );
        for matcher in matchers {
            self.matchers.retain(|existing| existing.utility() != matcher.utility());
            self.matchers.push(matcher);
        }
    }
}
