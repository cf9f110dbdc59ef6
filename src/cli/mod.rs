//! CLI command implementations.
//!
//! Each command writes to a caller-supplied writer so it can be driven from
//! `main` with stdout or from tests with a buffer.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `search` | Filter the catalog by text, type, category and tags |
//! | `types` | List content types with icon and color |
//! | `categories` | List categories, `all` first |
//! | `show` | Show a single record |
//! | `estimate` | Price an area of stone |
//!
//! # Example Usage
//!
//! ```bash
//! # Free-text search
//! stonecat search marble
//!
//! # Filter syntax in the search text
//! stonecat search "type:company tag:uk"
//!
//! # Featured records first, as JSON
//! stonecat search --featured-split --format json
//! ```

mod browse;
mod output;
mod search;

pub use browse::{cmd_categories, cmd_show, cmd_types};
pub use output::{
    EMPTY_RESULT_MESSAGE, OutputFormat, TypeInfo, get_all_types, write_estimate_table, write_json,
    write_yaml,
};
pub use search::{SearchArgs, cmd_search};

use crate::services::estimate;
use std::io::Write;

/// Prices `length` × `width` feet of `material` and writes the quote.
///
/// # Errors
///
/// Returns an error if the inputs are invalid or output fails.
pub fn cmd_estimate<W: Write>(
    writer: &mut W,
    length: f64,
    width: f64,
    material: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let quote = estimate(length, width, material)?;
    match format {
        OutputFormat::Table => Ok(write_estimate_table(writer, &quote)?),
        OutputFormat::Json => write_json(writer, &quote),
        OutputFormat::Yaml => write_yaml(writer, &quote),
    }
}
