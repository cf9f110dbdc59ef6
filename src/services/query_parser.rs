//! Filter query parser.
//!
//! Parses search-box syntax like:
//! - `carrara marble` - Free-text term
//! - `type:quarry` - Filter by content type (`type:all` clears it)
//! - `cat:Materials` - Filter by category (exact, value keeps its case)
//! - `tag:italy` - Require a tag
//! - `tag:italy,greece` - Require several tags
//! - `match:all` - Require every tag instead of any

use crate::models::{ContentType, Query, TagMatch};

/// Parses a search string into a [`Query`].
///
/// Tokens that are not `key:value` filters, or whose key is unknown, are
/// kept as free text, joined by single spaces.
///
/// # Examples
///
/// ```
/// use stonecat::{ContentType, parse_filter_query};
///
/// let query = parse_filter_query("white marble type:marble tag:greece");
/// assert_eq!(query.term, "white marble");
/// assert_eq!(query.content_type, Some(ContentType::Marble));
/// assert_eq!(query.tags, vec!["greece"]);
/// ```
#[must_use]
pub fn parse_filter_query(input: &str) -> Query {
    apply_filter_query(Query::new(), input)
}

/// Parses a search string on top of an existing [`Query`].
///
/// `type:`, `cat:` and `match:` replace the corresponding setting on
/// `query`. `tag:` values are added to its existing tags. The free-text term
/// is replaced.
#[must_use]
pub fn apply_filter_query(mut query: Query, input: &str) -> Query {
    let mut words = Vec::new();

    for token in input.split_whitespace() {
        if !parse_token(token, &mut query) {
            words.push(token);
        }
    }

    query.term = words.join(" ");
    query
}

/// Applies a single filter token. Returns false if the token is free text.
fn parse_token(token: &str, query: &mut Query) -> bool {
    let Some((key, value)) = token.split_once(':') else {
        return false;
    };

    match key.to_lowercase().as_str() {
        "type" | "kind" => {
            query.content_type = ContentType::from_selector(value);
        },
        "cat" | "category" => {
            *query = std::mem::take(query).with_category(value);
        },
        "tag" | "tags" => {
            for tag in value.split(',') {
                *query = std::mem::take(query).with_tag(tag);
            }
        },
        "match" => {
            query.tag_match = TagMatch::parse(value);
        },
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_parse_empty_query() {
        assert!(parse_filter_query("").is_empty());
        assert!(parse_filter_query("   ").is_empty());
    }

    #[test]
    fn test_parse_free_text() {
        let query = parse_filter_query("  carrara   marble ");
        assert_eq!(query.term, "carrara marble");
        assert!(query.content_type.is_none());
    }

    #[test_case("type:quarry", Some(ContentType::Quarry) ; "quarry")]
    #[test_case("TYPE:Monument", Some(ContentType::Monument) ; "case insensitive")]
    #[test_case("kind:companies", Some(ContentType::Company) ; "plural alias")]
    #[test_case("type:all", None ; "all sentinel")]
    #[test_case("type:spaceship", None ; "unknown type")]
    fn test_parse_type(input: &str, expected: Option<ContentType>) {
        let query = parse_filter_query(input);
        assert_eq!(query.content_type, expected);
        assert!(query.term.is_empty());
    }

    #[test]
    fn test_parse_category_preserves_case() {
        let query = parse_filter_query("CAT:Materials");
        assert_eq!(query.category.as_deref(), Some("Materials"));

        let query = parse_filter_query("category:all");
        assert!(query.category.is_none());
    }

    #[test]
    fn test_parse_tags() {
        let query = parse_filter_query("tag:italy tag:marble,greece,");
        assert_eq!(query.tags, vec!["italy", "marble", "greece"]);
        assert_eq!(query.tag_match, TagMatch::Any);
    }

    #[test]
    fn test_parse_match_mode() {
        let query = parse_filter_query("tag:italy tag:marble match:all");
        assert_eq!(query.tag_match, TagMatch::All);
    }

    #[test]
    fn test_unknown_key_is_free_text() {
        let query = parse_filter_query("era:roman pantheon");
        assert_eq!(query.term, "era:roman pantheon");
    }

    #[test]
    fn test_apply_keeps_base_defaults() {
        let base = Query::new().with_tag_match(TagMatch::All).with_tag("italy");
        let query = apply_filter_query(base.clone(), "quarry tag:uk");
        assert_eq!(query.tag_match, TagMatch::All);
        assert_eq!(query.tags, vec!["italy", "uk"]);
        assert_eq!(query.term, "quarry");

        let query = apply_filter_query(base, "match:any");
        assert_eq!(query.tag_match, TagMatch::Any);
    }

    #[test]
    fn test_parse_complex_query() {
        let query = parse_filter_query("white type:marble cat:Materials stone tag:greece");
        assert_eq!(query.term, "white stone");
        assert_eq!(query.content_type, Some(ContentType::Marble));
        assert_eq!(query.category.as_deref(), Some("Materials"));
        assert_eq!(query.tags, vec!["greece"]);
    }
}
