//! CLI commands for browsing the catalog: types, categories and single records.

use super::output::{
    OutputFormat, get_all_types, write_categories_table, write_json, write_record_detail,
    write_types_table, write_yaml,
};
use crate::catalog::Dataset;
use crate::Error;
use std::io::Write;

/// Lists the content types with their display metadata.
///
/// # Errors
///
/// Returns an error if serialization or output fails.
pub fn cmd_types<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let types = get_all_types();
    match format {
        OutputFormat::Table => Ok(write_types_table(writer, &types, verbose)?),
        OutputFormat::Json => write_json(writer, &types),
        OutputFormat::Yaml => write_yaml(writer, &types),
    }
}

/// Lists the catalog's categories, `all` first.
///
/// # Errors
///
/// Returns an error if serialization or output fails.
pub fn cmd_categories<W: Write>(
    writer: &mut W,
    dataset: &Dataset,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let categories = dataset.categories();
    match format {
        OutputFormat::Table => Ok(write_categories_table(writer, &categories)?),
        OutputFormat::Json => write_json(writer, &categories),
        OutputFormat::Yaml => write_yaml(writer, &categories),
    }
}

/// Shows one record by id.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if no record has the id, or an error if
/// output fails.
pub fn cmd_show<W: Write>(
    writer: &mut W,
    dataset: &Dataset,
    id: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = dataset
        .get(id)
        .ok_or_else(|| Error::InvalidInput(format!("no record with id: {id}")))?;
    match format {
        OutputFormat::Table => Ok(write_record_detail(writer, record)?),
        OutputFormat::Json => write_json(writer, record),
        OutputFormat::Yaml => write_yaml(writer, record),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::seed_dataset;

    #[test]
    fn test_categories_json() {
        let dataset = seed_dataset().unwrap();
        let mut buf = Vec::new();
        cmd_categories(&mut buf, &dataset, OutputFormat::Json).unwrap();
        let categories: Vec<String> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(categories.first().map(String::as_str), Some("all"));
        assert_eq!(categories.len(), 7);
    }

    #[test]
    fn test_types_yaml_lists_all() {
        let mut buf = Vec::new();
        cmd_types(&mut buf, OutputFormat::Yaml, false).unwrap();
        let out = String::from_utf8(buf).unwrap();
        for id in ["monument", "quarry", "marble", "company"] {
            assert!(out.contains(&format!("id: {id}")));
        }
    }

    #[test]
    fn test_show_json() {
        let dataset = seed_dataset().unwrap();
        let mut buf = Vec::new();
        cmd_show(&mut buf, &dataset, "7", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["title"], "Parthenon");
        assert_eq!(value["type"], "monument");
    }

    #[test]
    fn test_show_unknown_id() {
        let dataset = seed_dataset().unwrap();
        let mut buf = Vec::new();
        let err = cmd_show(&mut buf, &dataset, "99", OutputFormat::Table).unwrap_err();
        assert!(err.to_string().contains("99"));
        assert!(buf.is_empty());
    }
}
