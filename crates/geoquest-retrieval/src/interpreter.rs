use std::sync::LazyLock;

use geoquest_core::models::{ParsedQuery, QueryVocabulary};
use regex::Regex;

static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19\d{2}|20\d{2})\b").expect("year pattern is valid"));

/// Reads an event keyword, a year and a named region out of free text
#[derive(Debug, Clone, Copy)]
pub struct TextQueryInterpreter<'v> {
    vocabulary: &'v QueryVocabulary,
}

impl<'v> TextQueryInterpreter<'v> {
    pub fn new(vocabulary: &'v QueryVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Interpret a raw query. Never fails.
    ///
    /// Matching is case-insensitive substring matching. The keyword is the
    /// first event term in vocabulary order that occurs anywhere in the text,
    /// regardless of where it occurs; when none does, the raw text is kept with
    /// its original casing.
    pub fn interpret(&self, raw: &str) -> ParsedQuery {
        let lowered = raw.to_lowercase();

        let keyword = self
            .vocabulary
            .event_terms()
            .iter()
            .find(|term| lowered.contains(term.as_str()))
            .cloned()
            .unwrap_or_else(|| raw.to_string());

        let year = YEAR_PATTERN.captures(&lowered).map(|caps| caps[1].to_string());

        let region = self
            .vocabulary
            .regions()
            .iter()
            .find(|region| lowered.contains(region.name()))
            .map(|region| region.name().to_string());

        tracing::debug!(raw, %keyword, ?year, ?region, "Interpreted query");

        ParsedQuery {
            keyword,
            year,
            region,
        }
    }
}

impl Default for TextQueryInterpreter<'static> {
    fn default() -> Self {
        Self::new(QueryVocabulary::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpret(raw: &str) -> ParsedQuery {
        TextQueryInterpreter::default().interpret(raw)
    }

    #[test]
    fn test_keyword_follows_vocabulary_order() {
        // "drought" appears first in the text but "flood" ranks first
        assert_eq!(interpret("drought then flood").keyword, "flood");
        assert_eq!(interpret("Volcano ASH plume").keyword, "volcano");
    }

    #[test]
    fn test_wildfire_beats_fire() {
        assert_eq!(interpret("wildfire smoke").keyword, "wildfire");
        assert_eq!(interpret("forest fire").keyword, "fire");
    }

    #[test]
    fn test_no_term_keeps_raw_text() {
        let parsed = interpret("Sea Surface Temperature");
        assert_eq!(parsed.keyword, "Sea Surface Temperature");
        assert_eq!(parsed.year, None);
        assert_eq!(parsed.region, None);
    }

    #[test]
    fn test_year_extraction() {
        assert_eq!(interpret("flood india 1999 report").year.as_deref(), Some("1999"));
        assert_eq!(interpret("cyclone 2023 and 2024").year.as_deref(), Some("2023"));
        assert_eq!(interpret("storm 1850").year, None);
        assert_eq!(interpret("storm 21000").year, None);
        assert_eq!(interpret("storm").year, None);
    }

    #[test]
    fn test_region_extraction() {
        assert_eq!(interpret("flood near india").region.as_deref(), Some("india"));
        assert_eq!(interpret("global drought").region.as_deref(), Some("global"));
        assert_eq!(interpret("Wildfire CALIFORNIA").region.as_deref(), Some("california"));
        assert_eq!(interpret("aerosol over indonesia").region.as_deref(), Some("indonesia"));
        assert_eq!(interpret("aerosol over chile").region, None);
    }

    #[test]
    fn test_empty_query_passes_through() {
        let parsed = interpret("");
        assert_eq!(parsed.keyword, "");
        assert_eq!(parsed.year, None);
        assert_eq!(parsed.region, None);
    }

    #[test]
    fn test_full_query() {
        assert_eq!(
            interpret("Flood India 2020"),
            ParsedQuery {
                keyword: "flood".to_string(),
                year: Some("2020".to_string()),
                region: Some("india".to_string()),
            }
        );
    }
}
