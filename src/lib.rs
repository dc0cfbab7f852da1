//! # grid-areas
//!
//! Generates CSS Grid named-area utility classes from a compact layout
//! mini-language.
//!
//! A layout such as
//!
//! ```text
//! page:
//!   - header header
//!   - sidebar main
//! ```
//!
//! becomes `.grid-areas-page { display: grid; grid-template-areas: "header header" "sidebar main"; }`,
//! plus `grid-area-*` placement utilities and `row-*` / `col-*` line utilities
//! for every area it names. Bracketed classes like `grid-areas-[a_b,c_d]` are
//! resolved on demand through [`emitting::ArbitraryMatcher`]s.
//!
//! The pipeline is:
//!
//! - [`config`]: layout configuration and its normalization
//! - [`parsing`]: the row and arbitrary-value grammar
//! - [`registry`]: distinct area names across layouts
//! - [`emitting`]: declaration records for every utility family
//! - [`generation`]: runs the whole pass into a [`sink::DeclarationSink`]
//! - [`formats`]: renders collected rules as CSS or JSON

pub mod config;
pub mod emitting;
pub mod error;
pub mod formats;
pub mod generation;
pub mod parsing;
pub mod registry;
pub mod sink;

pub use config::{GridAreasConfig, LayoutDefinition, LayoutEntry};
pub use emitting::{DeclarationBlock, UtilityRule};
pub use error::{ConfigError, GridAreasError};
pub use generation::{generate, generate_stylesheet, GenerationSummary};
pub use sink::{DeclarationSink, Stylesheet, UtilityFamily};
