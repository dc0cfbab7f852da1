//! Arbitrary values captured from bracketed class names
//!
//! Grammar of a `grid-areas-[...]` value:
//!
//! ```text
//! value := var-ref | row ("," row)*
//! row   := cell ("_" cell)*        (after "_" -> " ", trimmed)
//! ```
//!
//! A CSS custom property reference may stand in for the whole value or for a
//! single row. Either way it is emitted verbatim: `var()` is not a string
//! literal in CSS, so it is never quoted.

use once_cell::sync::Lazy;
use regex::Regex;

/// Separates rows in an arbitrary value
pub const ROW_SEPARATOR: char = ',';

/// Stands for a literal space inside an arbitrary value
pub const CELL_SEPARATOR: char = '_';

static VARIABLE_REFERENCE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"var\([^)]*\)").expect("variable reference pattern is valid"));

/// True if the whole (trimmed) value is a single `var(...)` call.
///
/// Parentheses are balanced, so `var(--a, calc(1px))` qualifies while
/// `var(--a),var(--b)` does not.
pub fn is_variable_reference(value: &str) -> bool {
    let Some(body) = value.trim().strip_prefix("var(") else {
        return false;
    };

    let mut depth = 1usize;
    for (index, ch) in body.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return index + ch.len_utf8() == body.len();
                }
            }
            _ => {}
        }
    }
    false
}

/// True if a `var(...)` call appears anywhere in `value`
pub fn contains_variable_reference(value: &str) -> bool {
    VARIABLE_REFERENCE_REGEX.is_match(value)
}

/// Parse a `grid-areas-[...]` value into a `grid-template-areas` value.
///
/// Never fails: content CSS can't use (non-rectangular areas, stray
/// characters) passes through for the CSS engine to discard. An empty row
/// between two commas becomes `""` and is kept.
pub fn parse_arbitrary_areas(raw: &str) -> String {
    if is_variable_reference(raw) {
        return raw.trim().to_string();
    }

    raw.split(ROW_SEPARATOR)
        .map(|row| {
            let spaced = row.replace(CELL_SEPARATOR, " ");
            let row = spaced.trim();
            if contains_variable_reference(row) {
                row.to_string()
            } else {
                format!("\"{row}\"")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a `grid-area-[...]` value. Only `_` is rewritten; commas mean nothing here.
pub fn parse_arbitrary_area(raw: &str) -> String {
    raw.replace(CELL_SEPARATOR, " ")
}
