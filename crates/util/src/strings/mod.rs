//! String utilities.
//!
//! Provides line wrapping, type coercion of text values, link markup and
//! HTML stripping.

use thiserror::Error;

mod coerce;
mod divider;
mod html;
mod urlify;
mod util;

pub use coerce::{coerce, coerce_value};
pub use divider::{string_divider, wrap, WrapOptions};
pub use html::{decode_entities, strip_html_tags};
pub use urlify::urlify;
pub use util::{is_break, is_hyphen, is_whitespace};

/// Errors produced by the string utilities.
#[derive(Debug, Error)]
pub enum StringError {
    #[error("line width must be greater than zero")]
    InvalidWidth,
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
