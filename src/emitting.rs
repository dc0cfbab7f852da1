//! CSS emitter
//!
//! Turns parsed layouts and area names into [`UtilityRule`]s, and provides
//! the resolvers for bracketed arbitrary values. Nothing here performs I/O or
//! mutates its inputs.

pub mod arbitrary;
pub mod declaration;
pub mod keywords;
pub mod utilities;

pub use arbitrary::{emit_arbitrary_matchers, ArbitraryFamily, ArbitraryMatcher, ArbitraryUtility};
pub use declaration::{Declaration, DeclarationBlock, UtilityRule};
pub use keywords::{grid_area_keywords, GRID_AREA_EXTRA_KEYWORD, TEMPLATE_AREAS_KEYWORDS};
pub use utilities::{
    emit_area_keyword_utilities, emit_area_placement_utility, emit_keyword_layout_utilities,
    emit_layout_utility, emit_line_utilities,
};
