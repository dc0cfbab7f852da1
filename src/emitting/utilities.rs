//! Static utility emitters
//!
//! Pure functions from normalized layout data or area names to
//! [`UtilityRule`]s. Class names produced here are part of the public
//! surface that markup depends on, so they must stay bit-exact:
//!
//! - `grid-areas-<layout>` and `grid-areas-<keyword>`
//! - `grid-area-<area>` and `grid-area-<keyword>`
//! - `row-start-<area>`, `row-end-<area>`, `row-span-<area>`
//! - `col-start-<area>`, `col-end-<area>`, `col-span-<area>`

use super::declaration::{DeclarationBlock, UtilityRule};
use super::keywords::{grid_area_keywords, TEMPLATE_AREAS_KEYWORDS};
use crate::parsing::rows::ParsedLayout;

pub const TEMPLATE_AREAS_PREFIX: &str = "grid-areas";
pub const GRID_AREA_PREFIX: &str = "grid-area";

/// Class name for a `<prefix>-<suffix>` utility
pub fn class_name(prefix: &str, suffix: &str) -> String {
    format!("{prefix}-{suffix}")
}

/// `grid-areas-<name>`: grid display, template areas and any declared tracks.
/// A missing track string omits its property entirely.
pub fn emit_layout_utility(layout: &ParsedLayout) -> UtilityRule {
    let mut block = DeclarationBlock::new()
        .with("display", "grid")
        .with("grid-template-areas", layout.template_areas.as_str());
    if let Some(rows) = &layout.row_tracks {
        block.set("grid-template-rows", rows.as_str());
    }
    if let Some(columns) = &layout.col_tracks {
        block.set("grid-template-columns", columns.as_str());
    }
    UtilityRule::new(class_name(TEMPLATE_AREAS_PREFIX, &layout.name), block)
}

/// `grid-areas-<keyword>` for every template-areas keyword
pub fn emit_keyword_layout_utilities() -> Vec<UtilityRule> {
    TEMPLATE_AREAS_KEYWORDS
        .iter()
        .map(|keyword| {
            UtilityRule::new(
                class_name(TEMPLATE_AREAS_PREFIX, keyword),
                DeclarationBlock::new()
                    .with("display", "grid")
                    .with("grid-template-areas", *keyword),
            )
        })
        .collect()
}

/// `grid-area-<area>`
pub fn emit_area_placement_utility(area: &str) -> UtilityRule {
    UtilityRule::new(
        class_name(GRID_AREA_PREFIX, area),
        DeclarationBlock::new().with("grid-area", area),
    )
}

/// `grid-area-<keyword>` for `auto` and every template-areas keyword
pub fn emit_area_keyword_utilities() -> Vec<UtilityRule> {
    grid_area_keywords()
        .map(|keyword| {
            UtilityRule::new(
                class_name(GRID_AREA_PREFIX, keyword),
                DeclarationBlock::new().with("grid-area", keyword),
            )
        })
        .collect()
}

/// The six line utilities for an area.
///
/// An area `X` implicitly names the grid lines `X-start` and `X-end` on both
/// axes, so its lines can be targeted without knowing their numbers.
pub fn emit_line_utilities(area: &str) -> Vec<UtilityRule> {
    let start = format!("{area}-start");
    let end = format!("{area}-end");
    let span = format!("{start} / {end}");

    [("row", "grid-row"), ("col", "grid-column")]
        .into_iter()
        .flat_map(|(axis, property)| {
            [
                UtilityRule::new(
                    format!("{axis}-start-{area}"),
                    DeclarationBlock::new().with(format!("{property}-start"), start.as_str()),
                ),
                UtilityRule::new(
                    format!("{axis}-end-{area}"),
                    DeclarationBlock::new().with(format!("{property}-end"), end.as_str()),
                ),
                UtilityRule::new(
                    format!("{axis}-span-{area}"),
                    DeclarationBlock::new().with(property, span.as_str()),
                ),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutDefinition;
    use crate::parsing::rows::parse_layout;

    fn parsed(definition: LayoutDefinition) -> ParsedLayout {
        parse_layout(&definition).unwrap()
    }

    #[test]
    fn test_layout_utility_without_tracks() {
        let rule = emit_layout_utility(&parsed(LayoutDefinition::from_rows(
            "page",
            ["header header", "sidebar main"],
        )));

        assert_eq!(rule.class_name, "grid-areas-page");
        assert_eq!(
            rule.block,
            DeclarationBlock::new()
                .with("display", "grid")
                .with("grid-template-areas", r#""header header" "sidebar main""#)
        );
        assert_eq!(rule.block.get("grid-template-rows"), None);
        assert_eq!(rule.block.get("grid-template-columns"), None);
    }

    #[test]
    fn test_layout_utility_with_tracks() {
        let rule = emit_layout_utility(&parsed(
            LayoutDefinition::from_rows("dash", ["nav main"])
                .with_row_tracks("auto")
                .with_col_tracks("16rem 1fr"),
        ));

        let properties: Vec<_> = rule.block.iter().map(|d| d.property.as_str()).collect();
        assert_eq!(
            properties,
            vec![
                "display",
                "grid-template-areas",
                "grid-template-rows",
                "grid-template-columns"
            ]
        );
        assert_eq!(rule.block.get("grid-template-columns"), Some("16rem 1fr"));
    }

    #[test]
    fn test_layout_utility_with_only_column_tracks() {
        let rule = emit_layout_utility(&parsed(
            LayoutDefinition::from_rows("cols", ["a b"]).with_col_tracks("1fr 1fr"),
        ));
        assert_eq!(rule.block.get("grid-template-rows"), None);
        assert_eq!(rule.block.get("grid-template-columns"), Some("1fr 1fr"));
    }

    #[test]
    fn test_keyword_layout_utilities() {
        let rules = emit_keyword_layout_utilities();
        let names: Vec<_> = rules.iter().map(|r| r.class_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "grid-areas-none",
                "grid-areas-inherit",
                "grid-areas-initial",
                "grid-areas-revert",
                "grid-areas-revert-layer",
                "grid-areas-unset",
            ]
        );
        assert!(rules.iter().all(|r| r.block.get("display") == Some("grid")));
        assert_eq!(rules[4].block.get("grid-template-areas"), Some("revert-layer"));
    }

    #[test]
    fn test_area_placement_utility() {
        let rule = emit_area_placement_utility("main");
        assert_eq!(rule.class_name, "grid-area-main");
        assert_eq!(rule.block, DeclarationBlock::new().with("grid-area", "main"));
    }

    #[test]
    fn test_area_keyword_utilities() {
        let rules = emit_area_keyword_utilities();
        assert_eq!(rules.len(), 7);
        assert_eq!(rules[0].class_name, "grid-area-auto");
        assert_eq!(rules[0].block.get("grid-area"), Some("auto"));
        assert_eq!(rules[6].class_name, "grid-area-unset");
    }

    #[test]
    fn test_line_utilities() {
        let rules = emit_line_utilities("main");
        let flattened: Vec<_> = rules
            .iter()
            .map(|r| {
                let declaration = r.block.iter().next().unwrap();
                (
                    r.class_name.as_str(),
                    declaration.property.as_str(),
                    declaration.value.as_str(),
                )
            })
            .collect();

        assert_eq!(
            flattened,
            vec![
                ("row-start-main", "grid-row-start", "main-start"),
                ("row-end-main", "grid-row-end", "main-end"),
                ("row-span-main", "grid-row", "main-start / main-end"),
                ("col-start-main", "grid-column-start", "main-start"),
                ("col-end-main", "grid-column-end", "main-end"),
                ("col-span-main", "grid-column", "main-start / main-end"),
            ]
        );
        assert!(rules.iter().all(|r| r.block.len() == 1));
    }
}
