//! Utility generation
//!
//! Drives a full pass from configuration to sink:
//!
//! 1. parse every configured layout (fails fast on a malformed one)
//! 2. collect area names across all layouts
//! 3. emit layout utilities, placement utilities and line utilities
//! 4. register the four arbitrary-value families
//!
//! Reserved keywords always win over configured names. A layout called
//! `none` does not produce a second `grid-areas-none`; an area called `auto`
//! does not produce a second `grid-area-auto`, though it keeps its line
//! utilities. Shadowed names are logged and reported in the summary.

use crate::config::GridAreasConfig;
use crate::emitting::arbitrary::emit_arbitrary_matchers;
use crate::emitting::keywords::{is_grid_area_keyword, is_template_areas_keyword};
use crate::emitting::utilities::{
    emit_area_keyword_utilities, emit_area_placement_utility, emit_keyword_layout_utilities,
    emit_layout_utility, emit_line_utilities,
};
use crate::error::GridAreasError;
use crate::registry::AreaRegistry;
use crate::sink::{DeclarationSink, Stylesheet, UtilityFamily};

/// What a generation pass produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Configured layouts that produced a utility
    pub layouts: usize,
    /// Distinct area names discovered
    pub areas: Vec<String>,
    /// Static rules handed to the sink
    pub rules: usize,
    /// Layout names that collide with a template-areas keyword
    pub shadowed_layouts: Vec<String>,
    /// Area names that collide with a grid-area keyword
    pub shadowed_areas: Vec<String>,
}

/// Generate every utility for `config` into `sink`
pub fn generate<S: DeclarationSink + ?Sized>(
    config: &GridAreasConfig,
    sink: &mut S,
) -> Result<GenerationSummary, GridAreasError> {
    let layouts = config.parse_layouts()?;

    let mut registry = AreaRegistry::new();
    registry.extend(&layouts);

    let mut summary = GenerationSummary::default();

    let mut layout_rules = emit_keyword_layout_utilities();
    for layout in &layouts {
        if is_template_areas_keyword(&layout.name) {
            log::warn!(
                target: "grid_areas",
                "layout '{}' is a reserved keyword; keeping the keyword utility",
                layout.name
            );
            summary.shadowed_layouts.push(layout.name.clone());
            continue;
        }
        layout_rules.push(emit_layout_utility(layout));
        summary.layouts += 1;
    }

    let mut placement_rules = emit_area_keyword_utilities();
    let mut line_rules = Vec::with_capacity(registry.len() * 6);
    for area in registry.iter() {
        if is_grid_area_keyword(area) {
            log::warn!(
                target: "grid_areas",
                "area '{}' is a reserved keyword; keeping the keyword utility",
                area
            );
            summary.shadowed_areas.push(area.to_string());
        } else {
            placement_rules.push(emit_area_placement_utility(area));
        }
        line_rules.extend(emit_line_utilities(area));
    }

    summary.rules = layout_rules.len() + placement_rules.len() + line_rules.len();
    summary.areas = registry.into_names();

    sink.add_utilities(UtilityFamily::Layouts, layout_rules);
    sink.add_utilities(UtilityFamily::AreaPlacement, placement_rules);
    sink.add_utilities(UtilityFamily::Lines, line_rules);

    for (family, matchers) in emit_arbitrary_matchers() {
        sink.match_utilities(family, matchers);
    }

    log::debug!(
        target: "grid_areas",
        "generated {} rules for {} layouts and {} areas",
        summary.rules,
        summary.layouts,
        summary.areas.len()
    );
    Ok(summary)
}

/// Generate into a fresh [`Stylesheet`]
pub fn generate_stylesheet(
    config: &GridAreasConfig,
) -> Result<(Stylesheet, GenerationSummary), GridAreasError> {
    let mut stylesheet = Stylesheet::new();
    let summary = generate(config, &mut stylesheet)?;
    Ok((stylesheet, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutDefinition;
    use crate::emitting::arbitrary::{ArbitraryFamily, ArbitraryMatcher};
    use crate::emitting::declaration::UtilityRule;

    /// Records every call for inspection
    #[derive(Default)]
    struct RecordingSink {
        static_calls: Vec<(UtilityFamily, Vec<String>)>,
        arbitrary_calls: Vec<(ArbitraryFamily, Vec<&'static str>)>,
    }

    impl DeclarationSink for RecordingSink {
        fn add_utilities(&mut self, family: UtilityFamily, rules: Vec<UtilityRule>) {
            self.static_calls
                .push((family, rules.into_iter().map(|r| r.class_name).collect()));
        }

        fn match_utilities(&mut self, family: ArbitraryFamily, matchers: Vec<ArbitraryMatcher>) {
            self.arbitrary_calls
                .push((family, matchers.iter().map(|m| m.prefix()).collect()));
        }
    }

    fn page_config() -> GridAreasConfig {
        GridAreasConfig::new().with_layout(LayoutDefinition::from_rows(
            "page",
            ["header header", "sidebar main", "footer footer"],
        ))
    }

    #[test]
    fn test_sink_is_called_once_per_family() {
        let mut sink = RecordingSink::default();
        generate(&page_config(), &mut sink).unwrap();

        let families: Vec<_> = sink.static_calls.iter().map(|(f, _)| *f).collect();
        assert_eq!(
            families,
            vec![
                UtilityFamily::Layouts,
                UtilityFamily::AreaPlacement,
                UtilityFamily::Lines
            ]
        );
        let arbitrary: Vec<_> = sink.arbitrary_calls.iter().map(|(f, _)| *f).collect();
        assert_eq!(arbitrary, ArbitraryFamily::ALL.to_vec());
    }

    #[test]
    fn test_generated_class_names() {
        let mut sink = RecordingSink::default();
        let summary = generate(&page_config(), &mut sink).unwrap();

        assert_eq!(summary.layouts, 1);
        assert_eq!(summary.areas, vec!["header", "sidebar", "main", "footer"]);
        // 6 layout keywords + 1 layout, 7 area keywords + 4 areas, 6 lines per area
        assert_eq!(summary.rules, 7 + 11 + 24);

        let layouts = &sink.static_calls[0].1;
        assert_eq!(layouts.last().map(String::as_str), Some("grid-areas-page"));

        let placement = &sink.static_calls[1].1;
        assert_eq!(
            &placement[7..],
            &[
                "grid-area-header",
                "grid-area-sidebar",
                "grid-area-main",
                "grid-area-footer"
            ]
        );

        let lines = &sink.static_calls[2].1;
        assert_eq!(&lines[..3], &["row-start-header", "row-end-header", "row-span-header"]);
    }

    #[test]
    fn test_empty_config_yields_keywords_only() {
        let (sheet, summary) = generate_stylesheet(&GridAreasConfig::new()).unwrap();
        assert_eq!(summary.layouts, 0);
        assert!(summary.areas.is_empty());
        assert_eq!(sheet.len(), 13);
        assert_eq!(sheet.matchers().len(), 6);
    }

    #[test]
    fn test_layout_named_after_keyword_is_shadowed() {
        let config = GridAreasConfig::new()
            .with_layout(LayoutDefinition::from_rows("none", ["a b"]))
            .with_layout(LayoutDefinition::from_rows("page", ["a c"]));
        let (sheet, summary) = generate_stylesheet(&config).unwrap();

        assert_eq!(summary.shadowed_layouts, vec!["none"]);
        assert_eq!(summary.layouts, 1);
        assert_eq!(
            sheet.get("grid-areas-none").unwrap().block.get("grid-template-areas"),
            Some("none")
        );
        let count = sheet
            .rules()
            .iter()
            .filter(|r| r.class_name == "grid-areas-none")
            .count();
        assert_eq!(count, 1);
        // The shadowed layout still contributes its areas
        assert!(sheet.get("grid-area-b").is_some());
    }

    #[test]
    fn test_area_named_after_keyword_keeps_lines() {
        let config =
            GridAreasConfig::new().with_layout(LayoutDefinition::from_rows("odd", ["auto main"]));
        let (sheet, summary) = generate_stylesheet(&config).unwrap();

        assert_eq!(summary.shadowed_areas, vec!["auto"]);
        assert_eq!(
            sheet.get("grid-area-auto").unwrap().block.get("grid-area"),
            Some("auto")
        );
        assert!(sheet.get("row-span-auto").is_some());
        assert!(sheet.get("grid-area-main").is_some());
    }

    #[test]
    fn test_malformed_layout_stops_generation() {
        let config =
            GridAreasConfig::new().with_layout(LayoutDefinition::from_rows("broken", ["a", " "]));
        let mut sink = RecordingSink::default();
        let err = generate(&config, &mut sink).unwrap_err();

        assert!(matches!(err, GridAreasError::MalformedLayout { .. }));
        assert!(sink.static_calls.is_empty());
        assert!(sink.arbitrary_calls.is_empty());
    }

    #[test]
    fn test_areas_shared_between_layouts_are_emitted_once() {
        let config = GridAreasConfig::new()
            .with_layout(LayoutDefinition::from_rows("a", ["nav main"]))
            .with_layout(LayoutDefinition::from_rows("b", ["main aside"]));
        let (sheet, summary) = generate_stylesheet(&config).unwrap();

        assert_eq!(summary.areas, vec!["nav", "main", "aside"]);
        let count = sheet
            .rules()
            .iter()
            .filter(|r| r.class_name == "row-start-main")
            .count();
        assert_eq!(count, 1);
    }
}
