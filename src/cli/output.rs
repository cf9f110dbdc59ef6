//! Output writers shared by the CLI commands.

use crate::models::{ContentRecord, ContentType, Partition};
use crate::services::Estimate;
use serde::Serialize;
use std::io::{self, Write};
use std::str::FromStr;

/// Message printed when a search matches nothing.
pub const EMPTY_RESULT_MESSAGE: &str = "No content found";

/// Output format for list commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format (default).
    #[default]
    Table,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "yaml" | "yml" => Self::Yaml,
            _ => Self::Table,
        })
    }
}

/// Display information about a content type.
#[derive(Debug, Clone, Serialize)]
pub struct TypeInfo {
    /// Type identifier.
    pub id: &'static str,
    /// Plural label.
    pub label: &'static str,
    /// Icon name.
    pub icon: &'static str,
    /// Color token.
    pub color: &'static str,
}

impl From<ContentType> for TypeInfo {
    fn from(content_type: ContentType) -> Self {
        let meta = content_type.display_meta();
        Self {
            id: content_type.as_str(),
            label: content_type.label(),
            icon: meta.icon,
            color: meta.color,
        }
    }
}

/// Returns display information for every content type, in enumeration order.
#[must_use]
pub fn get_all_types() -> Vec<TypeInfo> {
    ContentType::all().iter().copied().map(TypeInfo::from).collect()
}

/// Writes records as a table.
///
/// Featured records are marked with `*`. An empty slice prints
/// [`EMPTY_RESULT_MESSAGE`].
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_records_table<W: Write>(
    writer: &mut W,
    records: &[&ContentRecord],
    verbose: bool,
) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(writer, "{EMPTY_RESULT_MESSAGE}");
    }

    writeln!(writer, "  {:<6}{:<10}{:<14}TITLE", "ID", "TYPE", "CATEGORY")?;
    for record in records {
        let marker = if record.featured { '*' } else { ' ' };
        writeln!(
            writer,
            "{marker} {:<6}{:<10}{:<14}{}",
            record.id.as_str(),
            record.content_type.as_str(),
            record.category,
            record.title
        )?;
        if verbose {
            if !record.description.is_empty() {
                writeln!(writer, "{:8}{}", "", record.description)?;
            }
            if !record.tags.is_empty() {
                writeln!(writer, "{:8}tags: {}", "", record.tags.join(", "))?;
            }
        }
    }
    Ok(())
}

/// Writes a featured/regular split as two tables.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_partition_table<W: Write>(
    writer: &mut W,
    partition: &Partition<&ContentRecord>,
    verbose: bool,
) -> io::Result<()> {
    if partition.is_empty() {
        return writeln!(writer, "{EMPTY_RESULT_MESSAGE}");
    }

    if !partition.featured.is_empty() {
        writeln!(writer, "Featured")?;
        write_records_table(writer, &partition.featured, verbose)?;
    }
    if !partition.regular.is_empty() {
        if !partition.featured.is_empty() {
            writeln!(writer)?;
        }
        writeln!(writer, "All content")?;
        write_records_table(writer, &partition.regular, verbose)?;
    }
    Ok(())
}

/// Writes a single record with all its fields.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_record_detail<W: Write>(writer: &mut W, record: &ContentRecord) -> io::Result<()> {
    writeln!(writer, "{}", record.title)?;
    writeln!(writer, "{}", "=".repeat(record.title.chars().count()))?;
    writeln!(writer, "ID:          {}", record.id)?;
    writeln!(writer, "Type:        {}", record.content_type)?;
    writeln!(writer, "Category:    {}", record.category)?;
    writeln!(writer, "Featured:    {}", if record.featured { "yes" } else { "no" })?;
    if !record.tags.is_empty() {
        writeln!(writer, "Tags:        {}", record.tags.join(", "))?;
    }

    let attributes = &record.attributes;
    if let Some(material) = &attributes.material {
        writeln!(writer, "Material:    {material}")?;
    }
    if let Some(era) = &attributes.era {
        writeln!(writer, "Era:         {era}")?;
    }
    if let Some(location) = &attributes.location {
        writeln!(writer, "Location:    {location}")?;
    }
    if let Some((lat, lng)) = attributes.coordinates {
        writeln!(writer, "Coordinates: {lat:.4}, {lng:.4}")?;
    }

    if !record.description.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "{}", record.description)?;
    }
    Ok(())
}

/// Writes content types as a table.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_types_table<W: Write>(
    writer: &mut W,
    types: &[TypeInfo],
    verbose: bool,
) -> io::Result<()> {
    if verbose {
        writeln!(writer, "{:<10}{:<18}{:<12}COLOR", "TYPE", "LABEL", "ICON")?;
        for info in types {
            writeln!(
                writer,
                "{:<10}{:<18}{:<12}{}",
                info.id, info.label, info.icon, info.color
            )?;
        }
    } else {
        writeln!(writer, "{:<10}LABEL", "TYPE")?;
        for info in types {
            writeln!(writer, "{:<10}{}", info.id, info.label)?;
        }
    }
    Ok(())
}

/// Writes category labels, one per line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_categories_table<W: Write>(writer: &mut W, categories: &[String]) -> io::Result<()> {
    for category in categories {
        writeln!(writer, "{category}")?;
    }
    Ok(())
}

/// Writes a cost estimate.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_estimate_table<W: Write>(writer: &mut W, estimate: &Estimate) -> io::Result<()> {
    writeln!(writer, "Material:  {}", estimate.material)?;
    writeln!(
        writer,
        "Price:     ${}/sq ft",
        estimate.material.price_per_sq_ft()
    )?;
    writeln!(writer, "Area:      {:.2} sq ft", estimate.area)?;
    writeln!(writer, "Estimate:  ${:.2}", estimate.cost)
}

/// Writes any serializable value as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(value)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Writes any serializable value as YAML.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_yaml<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> Result<(), Box<dyn std::error::Error>> {
    let yaml = serde_yaml_ng::to_string(value)?;
    write!(writer, "{yaml}")?;
    Ok(())
}
