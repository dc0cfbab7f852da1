//! Reserved keyword sets
//!
//! `grid-template-areas` and `grid-area` accept the same keywords, except
//! that `grid-area` also accepts `auto`. The second set is derived from the
//! first so the two cannot drift apart.

/// Keywords accepted by `grid-template-areas`
pub const TEMPLATE_AREAS_KEYWORDS: [&str; 6] =
    ["none", "inherit", "initial", "revert", "revert-layer", "unset"];

/// The keyword `grid-area` accepts on top of [`TEMPLATE_AREAS_KEYWORDS`]
pub const GRID_AREA_EXTRA_KEYWORD: &str = "auto";

/// Keywords accepted by `grid-area`: `auto` followed by [`TEMPLATE_AREAS_KEYWORDS`]
pub fn grid_area_keywords() -> impl Iterator<Item = &'static str> {
    std::iter::once(GRID_AREA_EXTRA_KEYWORD).chain(TEMPLATE_AREAS_KEYWORDS)
}

pub fn is_template_areas_keyword(name: &str) -> bool {
    TEMPLATE_AREAS_KEYWORDS.contains(&name)
}

pub fn is_grid_area_keyword(name: &str) -> bool {
    grid_area_keywords().any(|keyword| keyword == name)
}
