//! Catalog file formats.
//!
//! Supported inputs:
//! - **JSON**: an array of records, or one record per line (NDJSON/JSONL)
//! - **YAML**: a sequence of records, or a `---`-separated document stream
//! - **CSV**: headered columns, tags separated by `;` or `,` inside the cell

use super::ingest::{IngestReport, RawId, RawRecord, RecordValidator};
use crate::{Error, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use tracing::{info, instrument};

/// Supported catalog file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// JSON array or newline-delimited JSON.
    Json,
    /// YAML sequence or document stream.
    Yaml,
    /// CSV with a header row.
    Csv,
}

impl Format {
    /// Returns the canonical file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }

    /// Detects the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" | "jsonl" | "ndjson" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            _ => Err(Error::InvalidInput(format!("unsupported catalog format: {s}"))),
        }
    }
}

/// Loads and validates a catalog file.
///
/// # Errors
///
/// Returns an error if the format cannot be detected, the file cannot be
/// read or parsed, or (in strict mode) any record is invalid.
#[instrument(skip(validator), fields(path = %path.display()))]
pub fn load_dataset(path: &Path, validator: RecordValidator) -> Result<IngestReport> {
    let format = Format::from_path(path).ok_or_else(|| {
        Error::InvalidInput(format!(
            "cannot detect catalog format from '{}' (expected .json, .jsonl, .yaml, .yml, or .csv)",
            path.display()
        ))
    })?;

    let file = File::open(path).map_err(|e| Error::OperationFailed {
        operation: "open_catalog".to_string(),
        cause: format!("{}: {e}", path.display()),
    })?;

    let raws = read_raw_records(BufReader::new(file), format)?;
    let report = validator.ingest(raws)?;
    info!(
        records = report.dataset.len(),
        skipped = report.issues.len(),
        format = format.extension(),
        "Loaded catalog"
    );
    Ok(report)
}

/// Parses raw records from a reader.
///
/// # Errors
///
/// Returns an error if reading fails or the content does not match the
/// expected record shape.
pub fn read_raw_records<R: BufRead>(mut reader: R, format: Format) -> Result<Vec<RawRecord>> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| Error::OperationFailed {
            operation: "read_catalog".to_string(),
            cause: e.to_string(),
        })?;

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    match format {
        Format::Json => parse_json(&content),
        Format::Yaml => parse_yaml(&content),
        Format::Csv => parse_csv(&content),
    }
}

fn parse_json(content: &str) -> Result<Vec<RawRecord>> {
    if content.trim_start().starts_with('[') {
        return serde_json::from_str(content)
            .map_err(|e| Error::InvalidInput(format!("Failed to parse JSON array: {e}")));
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line.trim()).map_err(|e| {
                Error::InvalidInput(format!("Line {}: Failed to parse JSON object: {e}", index + 1))
            })
        })
        .collect()
}

fn parse_yaml(content: &str) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    for (doc_index, document) in serde_yaml_ng::Deserializer::from_str(content).enumerate() {
        let doc_number = doc_index + 1;
        let value = serde_yaml_ng::Value::deserialize(document).map_err(|e| {
            Error::InvalidInput(format!("Document {doc_number}: Failed to parse YAML: {e}"))
        })?;

        match value {
            serde_yaml_ng::Value::Null => {},
            serde_yaml_ng::Value::Sequence(items) => {
                for (item_index, item) in items.into_iter().enumerate() {
                    records.push(serde_yaml_ng::from_value(item).map_err(|e| {
                        Error::InvalidInput(format!(
                            "Document {doc_number}, item {}: Failed to parse YAML record: {e}",
                            item_index + 1
                        ))
                    })?);
                }
            },
            other => records.push(serde_yaml_ng::from_value(other).map_err(|e| {
                Error::InvalidInput(format!(
                    "Document {doc_number}: Failed to parse YAML record: {e}"
                ))
            })?),
        }
    }
    Ok(records)
}

/// Maps CSV column indices to record fields.
#[derive(Debug, Default)]
struct ColumnMap {
    id: Option<usize>,
    content_type: Option<usize>,
    title: Option<usize>,
    description: Option<usize>,
    category: Option<usize>,
    tags: Option<usize>,
    featured: Option<usize>,
    material: Option<usize>,
    era: Option<usize>,
    location: Option<usize>,
    lat: Option<usize>,
    lng: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let mut map = Self::default();

        for (i, header) in headers.iter().enumerate() {
            match header.to_lowercase().as_str() {
                "id" => map.id = Some(i),
                "type" | "kind" => map.content_type = Some(i),
                "title" | "name" => map.title = Some(i),
                "description" | "summary" => map.description = Some(i),
                "category" => map.category = Some(i),
                "tags" | "labels" | "keywords" => map.tags = Some(i),
                "featured" | "pinned" => map.featured = Some(i),
                "material" => map.material = Some(i),
                "era" => map.era = Some(i),
                "location" => map.location = Some(i),
                "lat" | "latitude" => map.lat = Some(i),
                "lng" | "lon" | "longitude" => map.lng = Some(i),
                _ => {},
            }
        }

        if map.id.is_none() || map.content_type.is_none() || map.title.is_none() {
            return Err(Error::InvalidInput(
                "CSV must have 'id', 'type', and 'title' (or 'name') columns".to_string(),
            ));
        }

        Ok(map)
    }
}

fn parse_csv(content: &str) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| Error::OperationFailed {
            operation: "read_csv_headers".to_string(),
            cause: e.to_string(),
        })?
        .clone();
    let map = ColumnMap::from_headers(&headers)?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(|e| Error::InvalidInput(format!("Row {}: {e}", index + 1)))?;
        records.push(csv_row_to_raw(&row, &map, index + 1)?);
    }
    Ok(records)
}

fn csv_row_to_raw(row: &csv::StringRecord, map: &ColumnMap, row_number: usize) -> Result<RawRecord> {
    let field = |column: Option<usize>| -> Option<String> {
        column
            .and_then(|i| row.get(i))
            .map(str::to_string)
            .filter(|s| !s.is_empty())
    };
    let number = |column: Option<usize>, name: &str| -> Result<Option<f64>> {
        field(column)
            .map(|s| {
                s.parse::<f64>().map_err(|e| {
                    Error::InvalidInput(format!("Row {row_number}: invalid {name} '{s}': {e}"))
                })
            })
            .transpose()
    };

    let tags = field(map.tags)
        .map(|cell| {
            cell.split([';', ','])
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let featured = field(map.featured).map(|v| {
        matches!(v.to_lowercase().as_str(), "true" | "yes" | "1" | "y")
    });

    Ok(RawRecord {
        id: RawId::Text(field(map.id).unwrap_or_default()),
        content_type: field(map.content_type).unwrap_or_default(),
        title: field(map.title).unwrap_or_default(),
        description: field(map.description).unwrap_or_default(),
        category: field(map.category).unwrap_or_default(),
        tags,
        featured,
        material: field(map.material),
        era: field(map.era),
        location: field(map.location),
        lat: number(map.lat, "lat")?,
        lng: number(map.lng, "lng")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_path(Path::new("c.json")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("c.JSONL")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("c.yml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("c.csv")), Some(Format::Csv));
        assert_eq!(Format::from_path(Path::new("c.txt")), None);
        assert_eq!(Format::from_path(Path::new("catalog")), None);
    }

    #[test]
    fn test_json_array() {
        let input = r#"[
            {"id": "1", "type": "marble", "title": "Carrara Marble", "tags": ["marble", "italy"], "featured": true},
            {"id": "2", "type": "quarry", "title": "Yorkshire Quarry"}
        ]"#;
        let records = read_raw_records(Cursor::new(input), Format::Json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].featured, Some(true));
        assert_eq!(records[1].tags, Vec::<String>::new());
    }

    #[test]
    fn test_ndjson_skips_blank_lines() {
        let input = "{\"id\": 1, \"type\": \"monument\", \"title\": \"Pantheon\"}\n\n{\"id\": 2, \"type\": \"company\", \"title\": \"Stone Heritage Ltd\"}\n";
        let records = read_raw_records(Cursor::new(input), Format::Json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, RawId::Number(1));
    }

    #[test]
    fn test_ndjson_reports_line_number() {
        let input = "{\"id\": 1, \"type\": \"monument\", \"title\": \"Pantheon\"}\n{broken\n";
        let err = read_raw_records(Cursor::new(input), Format::Json).unwrap_err();
        assert!(err.to_string().contains("Line 2"));
    }

    #[test]
    fn test_yaml_sequence_and_stream() {
        let sequence = "- id: a\n  type: quarry\n  title: Carrara\n- id: b\n  type: marble\n  name: Pentelic\n";
        let records = read_raw_records(Cursor::new(sequence), Format::Yaml).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].title, "Pentelic");

        let stream = "id: a\ntype: quarry\ntitle: Carrara\n---\nid: b\ntype: marble\ntitle: Pentelic\n";
        let records = read_raw_records(Cursor::new(stream), Format::Yaml).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_yaml_sequence_reports_record_error() {
        let sequence = "- id: a\n  type: quarry\n  title: Carrara\n- id: b\n  type: marble\n";
        let err = read_raw_records(Cursor::new(sequence), Format::Yaml).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("item 2"), "{message}");
        assert!(message.contains("title"), "{message}");
    }

    #[test]
    fn test_yaml_stream_reports_document_error() {
        let stream = "id: a\ntype: quarry\ntitle: Carrara\n---\nid: b\ntype: marble\n";
        let err = read_raw_records(Cursor::new(stream), Format::Yaml).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Document 2"), "{message}");
        assert!(message.contains("title"), "{message}");
    }

    #[test]
    fn test_csv_columns_and_tags() {
        let input = "id,type,name,category,tags,featured,lat,lng\n\
                     1,quarry,Carrara Marble Quarry,Materials,marble;italy,yes,44.08,10.09\n\
                     2,monument,Pantheon,Monuments,\"rome, architecture\",,,\n";
        let records = read_raw_records(Cursor::new(input), Format::Csv).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].tags, vec!["marble", "italy"]);
        assert_eq!(records[0].featured, Some(true));
        assert_eq!(records[0].lat, Some(44.08));
        assert_eq!(records[1].tags, vec!["rome", "architecture"]);
        assert_eq!(records[1].featured, None);
        assert_eq!(records[1].lat, None);
    }

    #[test]
    fn test_csv_requires_core_columns() {
        let input = "id,title\n1,Pantheon\n";
        assert!(read_raw_records(Cursor::new(input), Format::Csv).is_err());
    }

    #[test]
    fn test_empty_input() {
        let records = read_raw_records(Cursor::new("   \n"), Format::Json).unwrap();
        assert!(records.is_empty());
    }
}
