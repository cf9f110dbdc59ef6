//! CLI command for searching the catalog.

use super::output::{
    OutputFormat, write_json, write_partition_table, write_records_table, write_yaml,
};
use crate::catalog::Dataset;
use crate::config::StonecatConfig;
use crate::models::{ContentRecord, Query, TagMatch};
use crate::services::{FilterEngine, apply_filter_query, partition_featured};
use std::io::Write;

/// Search options collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct SearchArgs {
    /// Free text, may contain `key:value` filters.
    pub terms: Vec<String>,
    /// Content type selector (`all` clears it).
    pub content_type: Option<String>,
    /// Category selector (`all` clears it).
    pub category: Option<String>,
    /// Required tags.
    pub tags: Vec<String>,
    /// Tag combination mode.
    pub tag_match: Option<String>,
    /// Show featured records separately.
    pub featured_split: bool,
    /// Maximum number of results; `0` means no limit.
    pub limit: Option<usize>,
    /// Output format.
    pub format: OutputFormat,
}

impl SearchArgs {
    /// Builds the query these arguments describe.
    ///
    /// The configured tag mode is the starting point. Filters written in the
    /// search text come next, and explicit flags win over both.
    #[must_use]
    pub fn to_query(&self, config: &StonecatConfig) -> Query {
        let base = Query::new().with_tag_match(config.tag_match);
        let mut query = apply_filter_query(base, &self.terms.join(" "));

        if let Some(selector) = &self.content_type {
            query = query.with_type_selector(selector);
        }
        if let Some(category) = &self.category {
            query = query.with_category(category.as_str());
        }
        for tag in &self.tags {
            query = query.with_tag(tag.as_str());
        }
        if let Some(mode) = &self.tag_match {
            query = query.with_tag_match(TagMatch::parse(mode));
        }
        query
    }

    fn effective_limit(&self, config: &StonecatConfig) -> usize {
        self.limit.unwrap_or(config.max_results)
    }
}

/// Executes the search command against `dataset`.
///
/// # Errors
///
/// Returns an error if serialization or output fails.
pub fn cmd_search<W: Write>(
    writer: &mut W,
    dataset: &Dataset,
    config: &StonecatConfig,
    args: &SearchArgs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = args.to_query(config);
    let mut results: Vec<&ContentRecord> = FilterEngine::new(dataset).search(&query);

    let limit = args.effective_limit(config);
    if limit > 0 {
        results.truncate(limit);
    }

    if args.featured_split {
        let partition = partition_featured(&results);
        return match args.format {
            OutputFormat::Table => Ok(write_partition_table(writer, &partition, verbose)?),
            OutputFormat::Json => write_json(writer, &partition),
            OutputFormat::Yaml => write_yaml(writer, &partition),
        };
    }

    match args.format {
        OutputFormat::Table => Ok(write_records_table(writer, &results, verbose)?),
        OutputFormat::Json => write_json(writer, &results),
        OutputFormat::Yaml => write_yaml(writer, &results),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::seed_dataset;
    use crate::models::ContentType;

    fn run(args: &SearchArgs, config: &StonecatConfig) -> String {
        let dataset = seed_dataset().unwrap();
        let mut buf = Vec::new();
        cmd_search(&mut buf, &dataset, config, args, false).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn ids(json: &str) -> Vec<String> {
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_query_from_flags_and_text() {
        let args = SearchArgs {
            terms: vec!["white".to_string(), "type:quarry".to_string()],
            content_type: Some("marble".to_string()),
            category: Some("all".to_string()),
            tags: vec!["greece".to_string()],
            ..SearchArgs::default()
        };
        let query = args.to_query(&StonecatConfig::default());

        assert_eq!(query.term, "white");
        assert_eq!(query.content_type, Some(ContentType::Marble));
        assert!(query.category.is_none());
        assert_eq!(query.tags, vec!["greece"]);
    }

    #[test]
    fn test_config_tag_match_is_default() {
        let config = StonecatConfig {
            tag_match: TagMatch::All,
            ..StonecatConfig::default()
        };
        let args = SearchArgs::default();
        assert_eq!(args.to_query(&config).tag_match, TagMatch::All);

        let args = SearchArgs {
            tag_match: Some("any".to_string()),
            ..SearchArgs::default()
        };
        assert_eq!(args.to_query(&config).tag_match, TagMatch::Any);
    }

    #[test]
    fn test_search_json_term() {
        let args = SearchArgs {
            terms: vec!["marble".to_string()],
            format: OutputFormat::Json,
            ..SearchArgs::default()
        };
        assert_eq!(ids(&run(&args, &StonecatConfig::default())), ["1", "3", "7", "8", "10"]);
    }

    #[test]
    fn test_search_limit() {
        let args = SearchArgs {
            terms: vec!["marble".to_string()],
            limit: Some(2),
            format: OutputFormat::Json,
            ..SearchArgs::default()
        };
        assert_eq!(ids(&run(&args, &StonecatConfig::default())), ["1", "3"]);

        let args = SearchArgs {
            limit: Some(0),
            format: OutputFormat::Json,
            ..SearchArgs::default()
        };
        let config = StonecatConfig {
            max_results: 3,
            ..StonecatConfig::default()
        };
        assert_eq!(ids(&run(&args, &config)).len(), 10);
    }

    #[test]
    fn test_search_no_match_prints_message() {
        let args = SearchArgs {
            terms: vec!["xyzzy".to_string()],
            ..SearchArgs::default()
        };
        assert_eq!(run(&args, &StonecatConfig::default()).trim(), "No content found");
    }

    #[test]
    fn test_search_featured_split_json() {
        let args = SearchArgs {
            featured_split: true,
            format: OutputFormat::Json,
            ..SearchArgs::default()
        };
        let out = run(&args, &StonecatConfig::default());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let featured: Vec<&str> = value["featured"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap())
            .collect();
        assert_eq!(featured, ["1", "2", "10"]);
        assert_eq!(value["regular"].as_array().unwrap().len(), 7);
    }
}
