//! Arbitrary-value matchers
//!
//! Bracketed classes such as `grid-areas-[a_b,c_d]` or `row-start-[main-start]`
//! can't be generated ahead of time. Instead each prefix gets a resolver that
//! the host calls with the raw bracket content (escaping already removed).

use super::declaration::DeclarationBlock;
use crate::parsing::arbitrary::{parse_arbitrary_area, parse_arbitrary_areas};
use std::fmt;

/// A bracketed utility prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArbitraryUtility {
    TemplateAreas,
    Area,
    RowStart,
    RowEnd,
    ColStart,
    ColEnd,
}

impl ArbitraryUtility {
    pub const ALL: [ArbitraryUtility; 6] = [
        ArbitraryUtility::TemplateAreas,
        ArbitraryUtility::Area,
        ArbitraryUtility::RowStart,
        ArbitraryUtility::RowEnd,
        ArbitraryUtility::ColStart,
        ArbitraryUtility::ColEnd,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            ArbitraryUtility::TemplateAreas => "grid-areas",
            ArbitraryUtility::Area => "grid-area",
            ArbitraryUtility::RowStart => "row-start",
            ArbitraryUtility::RowEnd => "row-end",
            ArbitraryUtility::ColStart => "col-start",
            ArbitraryUtility::ColEnd => "col-end",
        }
    }

    /// The CSS property the resolved declaration sets
    pub fn property(self) -> &'static str {
        match self {
            ArbitraryUtility::TemplateAreas => "grid-template-areas",
            ArbitraryUtility::Area => "grid-area",
            ArbitraryUtility::RowStart => "grid-row-start",
            ArbitraryUtility::RowEnd => "grid-row-end",
            ArbitraryUtility::ColStart => "grid-column-start",
            ArbitraryUtility::ColEnd => "grid-column-end",
        }
    }

    pub fn family(self) -> ArbitraryFamily {
        match self {
            ArbitraryUtility::TemplateAreas => ArbitraryFamily::TemplateAreas,
            ArbitraryUtility::Area => ArbitraryFamily::Area,
            ArbitraryUtility::RowStart | ArbitraryUtility::RowEnd => ArbitraryFamily::RowLines,
            ArbitraryUtility::ColStart | ArbitraryUtility::ColEnd => ArbitraryFamily::ColumnLines,
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|utility| utility.prefix() == prefix)
    }

    /// `<prefix>-[<raw>]`
    pub fn class_name(self, raw: &str) -> String {
        format!("{}-[{}]", self.prefix(), raw)
    }

    /// Turn a raw bracket value into the CSS value for [`Self::property`].
    ///
    /// Line names are single tokens, so line utilities take the value as is.
    pub fn value(self, raw: &str) -> String {
        match self {
            ArbitraryUtility::TemplateAreas => parse_arbitrary_areas(raw),
            ArbitraryUtility::Area => parse_arbitrary_area(raw),
            _ => raw.to_string(),
        }
    }

    pub fn resolve(self, raw: &str) -> DeclarationBlock {
        DeclarationBlock::new().with(self.property(), self.value(raw))
    }

    /// The resolver registered with a declaration sink
    pub fn matcher(self) -> ArbitraryMatcher {
        ArbitraryMatcher { utility: self }
    }
}

impl fmt::Display for ArbitraryUtility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Groups of bracketed utilities registered together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArbitraryFamily {
    TemplateAreas,
    Area,
    RowLines,
    ColumnLines,
}

impl ArbitraryFamily {
    pub const ALL: [ArbitraryFamily; 4] = [
        ArbitraryFamily::TemplateAreas,
        ArbitraryFamily::Area,
        ArbitraryFamily::RowLines,
        ArbitraryFamily::ColumnLines,
    ];

    pub fn utilities(self) -> &'static [ArbitraryUtility] {
        match self {
            ArbitraryFamily::TemplateAreas => &[ArbitraryUtility::TemplateAreas],
            ArbitraryFamily::Area => &[ArbitraryUtility::Area],
            ArbitraryFamily::RowLines => &[ArbitraryUtility::RowStart, ArbitraryUtility::RowEnd],
            ArbitraryFamily::ColumnLines => {
                &[ArbitraryUtility::ColStart, ArbitraryUtility::ColEnd]
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ArbitraryFamily::TemplateAreas => "template-areas",
            ArbitraryFamily::Area => "area",
            ArbitraryFamily::RowLines => "row-lines",
            ArbitraryFamily::ColumnLines => "column-lines",
        }
    }
}

/// A value resolver for one bracketed prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArbitraryMatcher {
    utility: ArbitraryUtility,
}

impl ArbitraryMatcher {
    pub fn utility(&self) -> ArbitraryUtility {
        self.utility
    }

    pub fn prefix(&self) -> &'static str {
        self.utility.prefix()
    }

    pub fn resolve(&self, raw: &str) -> DeclarationBlock {
        self.utility.resolve(raw)
    }
}

/// Matchers for every family, in registration order
pub fn emit_arbitrary_matchers() -> Vec<(ArbitraryFamily, Vec<ArbitraryMatcher>)> {
    ArbitraryFamily::ALL
        .into_iter()
        .map(|family| {
            let matchers: Vec<ArbitraryMatcher> =
                family.utilities().iter().map(|u| u.matcher()).collect();
            (family, matchers)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        ArbitraryUtility::TemplateAreas,
        "header_header,sidebar_main",
        "grid-template-areas",
        r#""header header" "sidebar main""#
    )]
    #[case(
        ArbitraryUtility::TemplateAreas,
        "var(--layout)",
        "grid-template-areas",
        "var(--layout)"
    )]
    #[case(ArbitraryUtility::Area, "2_/_1_/_3_/_4", "grid-area", "2 / 1 / 3 / 4")]
    #[case(ArbitraryUtility::Area, "a,b", "grid-area", "a,b")]
    #[case(ArbitraryUtility::RowStart, "main-start", "grid-row-start", "main-start")]
    #[case(ArbitraryUtility::RowEnd, "span_2", "grid-row-end", "span_2")]
    #[case(ArbitraryUtility::ColStart, "2", "grid-column-start", "2")]
    #[case(ArbitraryUtility::ColEnd, "side-end", "grid-column-end", "side-end")]
    fn test_resolve(
        #[case] utility: ArbitraryUtility,
        #[case] raw: &str,
        #[case] property: &str,
        #[case] value: &str,
    ) {
        let block = utility.resolve(raw);
        assert_eq!(block.len(), 1);
        assert_eq!(block.get(property), Some(value));
    }

    #[test]
    fn test_prefix_round_trip() {
        for utility in ArbitraryUtility::ALL {
            assert_eq!(ArbitraryUtility::from_prefix(utility.prefix()), Some(utility));
        }
        assert_eq!(ArbitraryUtility::from_prefix("row-span"), None);
    }

    #[test]
    fn test_class_name() {
        assert_eq!(
            ArbitraryUtility::TemplateAreas.class_name("a_b,c_d"),
            "grid-areas-[a_b,c_d]"
        );
    }

    #[test]
    fn test_every_utility_belongs_to_its_family() {
        let matchers = emit_arbitrary_matchers();
        assert_eq!(matchers.len(), 4);

        let prefixes: Vec<Vec<&str>> = matchers
            .iter()
            .map(|(_, group)| group.iter().map(|m| m.prefix()).collect())
            .collect();
        assert_eq!(
            prefixes,
            vec![
                vec!["grid-areas"],
                vec!["grid-area"],
                vec!["row-start", "row-end"],
                vec!["col-start", "col-end"],
            ]
        );

        for (family, group) in &matchers {
            assert!(group.iter().all(|m| m.utility().family() == *family));
        }
    }
}
