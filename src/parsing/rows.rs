//! Static layout rows
//!
//! A row is a whitespace-separated sequence of cell tokens. Leading and
//! trailing whitespace is ignored and runs of whitespace collapse to a single
//! separator, so `"  header   header "` and `"header header"` are the same row.

use crate::config::LayoutDefinition;
use crate::error::GridAreasError;

/// Tokens that mark a cell no area occupies. The two forms are interchangeable.
pub const EMPTY_MARKERS: [&str; 2] = [".", ".."];

/// True if `token` is an empty-cell marker rather than an area name
pub fn is_empty_marker(token: &str) -> bool {
    EMPTY_MARKERS.contains(&token)
}

/// Split a row into its cell tokens
pub fn tokenize_row(row: &str) -> Vec<&str> {
    row.split_whitespace().collect()
}

/// Render one row of cell tokens as a quoted `grid-template-areas` segment
pub fn format_row<S: AsRef<str>>(tokens: &[S]) -> String {
    let joined = tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    format!("\"{joined}\"")
}

/// Render a full set of rows as a `grid-template-areas` value.
///
/// Rows keep their order. A row without any cell token fails with
/// [`GridAreasError::MalformedLayout`], since `""` would describe a grid row
/// with no columns.
pub fn format_rows<S: AsRef<str>>(layout: &str, rows: &[S]) -> Result<String, GridAreasError> {
    Ok(tokenize_rows(layout, rows)?
        .iter()
        .map(|tokens| format_row(tokens))
        .collect::<Vec<_>>()
        .join(" "))
}

fn tokenize_rows<S: AsRef<str>>(
    layout: &str,
    rows: &[S],
) -> Result<Vec<Vec<String>>, GridAreasError> {
    if rows.is_empty() {
        return Err(GridAreasError::no_rows(layout));
    }

    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let tokens = tokenize_row(row.as_ref());
            if tokens.is_empty() {
                Err(GridAreasError::empty_row(layout, index))
            } else {
                Ok(tokens.into_iter().map(String::from).collect())
            }
        })
        .collect()
}

/// A layout after normalization: tokenized rows plus the rendered template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLayout {
    pub name: String,
    /// Cell tokens per row, top to bottom
    pub cells: Vec<Vec<String>>,
    /// The rendered `grid-template-areas` value
    pub template_areas: String,
    pub row_tracks: Option<String>,
    pub col_tracks: Option<String>,
}

impl ParsedLayout {
    /// Every area name in row-major order, empty markers excluded, duplicates kept
    pub fn area_tokens(&self) -> impl Iterator<Item = &str> {
        self.cells
            .iter()
            .flatten()
            .map(String::as_str)
            .filter(|token| !is_empty_marker(token))
    }
}

/// Normalize a configured layout
pub fn parse_layout(definition: &LayoutDefinition) -> Result<ParsedLayout, GridAreasError> {
    let cells = tokenize_rows(&definition.name, &definition.rows)?;
    let template_areas = cells
        .iter()
        .map(|tokens| format_row(tokens))
        .collect::<Vec<_>>()
        .join(" ");

    Ok(ParsedLayout {
        name: definition.name.clone(),
        cells,
        template_areas,
        row_tracks: definition.row_tracks.clone(),
        col_tracks: definition.col_tracks.clone(),
    })
}
