//! Grammar parser for the layout mini-language
//!
//! Two input shapes are understood:
//!
//! - [`rows`]: statically configured layouts, given as a list of row strings
//!   whose cells are separated by whitespace. `.` and `..` mark empty cells.
//! - [`arbitrary`]: the single-string form captured from a bracketed class
//!   name, e.g. `grid-areas-[header_header,sidebar_main]`, where `_` stands
//!   for a space and `,` separates rows.
//!
//! Both produce a `grid-template-areas` value. Neither checks that the named
//! areas form rectangles; that is left to the consuming CSS engine.

pub mod arbitrary;
pub mod rows;

pub use arbitrary::{
    contains_variable_reference, is_variable_reference, parse_arbitrary_area,
    parse_arbitrary_areas,
};
pub use rows::{
    format_row, format_rows, is_empty_marker, parse_layout, tokenize_row, ParsedLayout,
    EMPTY_MARKERS,
};
