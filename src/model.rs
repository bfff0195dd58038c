//! # Data Model Module
//!
//! ## Purpose
//! Wire types for the search API: result lists, the optional-field-laden
//! judgment summary structure, and filter facets. Every field defaults on
//! absence so a response with missing or partial data still decodes into
//! something the view can render.
//!
//! ## Input/Output Specification
//! - **Input**: JSON response bodies from the search API
//! - **Output**: Typed structures with explicit present/absent fields
//! - **Invariant**: Decoding never fails on absent fields; shape failures
//!   decay to empty lists and zero counts

use crate::DocId;
use serde::{Deserialize, Serialize};

/// Response body of the search endpoint.
///
/// Missing fields default to an empty list, zero total, and empty facets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<JudgmentSummaryRef>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub facets: Facets,
}

impl SearchResponse {
    /// Convert the decoded response into the published outcome
    pub fn into_outcome(self) -> SearchOutcome {
        SearchOutcome {
            results: self.results,
            total: self.total,
            facets: self.facets,
        }
    }
}

/// Published search state: replaced wholesale on each successful fetch,
/// cleared to empty on failure or when the query text becomes empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    pub results: Vec<JudgmentSummaryRef>,
    pub total: u64,
    pub facets: Facets,
}

impl SearchOutcome {
    /// The empty outcome used to reset state
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Reference to a judgment document with its display summary.
///
/// The backend spreads summary fields next to the id, so the summary tree is
/// flattened at the top level of each result object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JudgmentSummaryRef {
    /// Index id of the judgment; the `SC`/`HC` prefix encodes the court
    pub id: DocId,
    #[serde(flatten)]
    pub summary: JudgmentSummary,
}

/// Display summary of a judgment. Every field may be absent; rendering code
/// matches on presence instead of chaining null checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgmentSummary {
    pub name: Option<String>,
    pub brief: Option<String>,
    pub background: Option<String>,
    pub issues: Vec<String>,
    pub propositions: Vec<String>,
    pub arguments: Option<Arguments>,
    pub ruling: Option<String>,
    pub conclusion: Option<String>,
    pub tags: Vec<String>,
}

/// Arguments advanced by each side, when the summarizer extracted them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Arguments {
    pub petitioner: Option<String>,
    pub respondent: Option<String>,
}

/// Server-computed aggregations used to populate the filter dropdowns
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Facets {
    pub years: FacetGroup,
    pub courts: FacetGroup,
}

/// One aggregation with its buckets
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FacetGroup {
    pub buckets: Vec<FacetBucket>,
}

/// A single aggregation bucket: a facet value and its document count
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FacetBucket {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub doc_count: u64,
}

/// Response body of the PDF URL endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PdfUrlResponse {
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_decodes_to_empty_response() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.total, 0);
        assert!(response.facets.years.buckets.is_empty());
        assert!(response.facets.courts.buckets.is_empty());
    }

    #[test]
    fn test_result_with_only_id_decodes() {
        let doc: JudgmentSummaryRef = serde_json::from_str(r#"{"id": "SC1984_120"}"#).unwrap();
        assert_eq!(doc.id, "SC1984_120");
        assert!(doc.summary.name.is_none());
        assert!(doc.summary.issues.is_empty());
        assert!(doc.summary.arguments.is_none());
    }

    #[test]
    fn test_nested_summary_decodes() {
        let doc: JudgmentSummaryRef = serde_json::from_str(
            r#"{
                "id": "HC2015_77",
                "name": "A v. B",
                "issues": ["limitation", "jurisdiction"],
                "arguments": {"petitioner": "time-barred"},
                "tags": ["contract"]
            }"#,
        )
        .unwrap();
        assert_eq!(doc.summary.name.as_deref(), Some("A v. B"));
        assert_eq!(doc.summary.issues.len(), 2);
        let arguments = doc.summary.arguments.unwrap();
        assert_eq!(arguments.petitioner.as_deref(), Some("time-barred"));
        assert!(arguments.respondent.is_none());
        assert!(doc.summary.ruling.is_none());
    }

    #[test]
    fn test_facets_decode() {
        let response: SearchResponse = serde_json::from_str(
            r#"{
                "total": 2,
                "results": [],
                "facets": {
                    "years": {"buckets": [{"key": "2015", "doc_count": 1}]},
                    "courts": {"buckets": [{"key": "SC", "doc_count": 2}, {"key": "HC", "doc_count": 0}]}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(response.facets.years.buckets[0].key, "2015");
        assert_eq!(response.facets.courts.buckets[0].doc_count, 2);
    }
}
