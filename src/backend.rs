//! # Search Backend Module
//!
//! ## Purpose
//! Defines the interface to the remote search service and provides the HTTP
//! implementation. All data originates here; the crate issues requests and
//! stores decoded responses in view state.
//!
//! ## Input/Output Specification
//! - **Input**: Canonical search parameters, document ids, suggestion prefixes
//! - **Output**: Decoded response structures with default-on-absence fields
//! - **Endpoints**: `/api/search`, `/api/get-pdf-url`, `/api/autocomplete`
//!
//! ## Architecture
//! - `SearchBackend` trait: seam the fetcher and resolver depend on
//! - `HttpSearchBackend`: `reqwest` implementation against a configured base
//!   URL; tests substitute a scripted fake

use crate::config::ApiConfig;
use crate::errors::{Result, SearchError};
use crate::model::{PdfUrlResponse, SearchResponse};
use crate::query::SearchParameters;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Interface to the remote search service
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Execute one search request with the given canonical parameters
    async fn search(&self, params: &SearchParameters) -> Result<SearchResponse>;

    /// Resolve the viewer URL for a judgment's PDF
    async fn resolve_pdf_url(&self, doc_id: &str) -> Result<String>;

    /// Fetch autocomplete suggestions for a query prefix
    async fn autocomplete(&self, prefix: &str) -> Result<Vec<String>>;
}

/// HTTP implementation of [`SearchBackend`]
pub struct HttpSearchBackend {
    client: Client,
    base_url: String,
}

impl HttpSearchBackend {
    /// Build the backend from API configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| SearchError::Network {
                details: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn search(&self, params: &SearchParameters) -> Result<SearchResponse> {
        let url = self.endpoint("/api/search");
        tracing::debug!(query = %params.query_text, page = params.page, "issuing search request");

        let response = self
            .client
            .get(&url)
            .query(&params.to_query_pairs())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SearchError::Http {
                status: response.status().as_u16(),
                details: response.text().await.unwrap_or_default(),
            });
        }

        response.json().await.map_err(|e| SearchError::Decode {
            endpoint: "/api/search".to_string(),
            details: e.to_string(),
        })
    }

    async fn resolve_pdf_url(&self, doc_id: &str) -> Result<String> {
        let url = self.endpoint("/api/get-pdf-url");
        tracing::debug!(doc_id, "resolving pdf url");

        let response = self
            .client
            .get(&url)
            .query(&[("doc_id", doc_id)])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(SearchError::PdfNotFound {
                doc_id: doc_id.to_string(),
            });
        }
        if !response.status().is_success() {
            return Err(SearchError::Http {
                status: response.status().as_u16(),
                details: response.text().await.unwrap_or_default(),
            });
        }

        let body: PdfUrlResponse = response.json().await.map_err(|e| SearchError::Decode {
            endpoint: "/api/get-pdf-url".to_string(),
            details: e.to_string(),
        })?;

        body.url
            .filter(|u| !u.is_empty())
            .ok_or_else(|| SearchError::PdfNotFound {
                doc_id: doc_id.to_string(),
            })
    }

    async fn autocomplete(&self, prefix: &str) -> Result<Vec<String>> {
        let url = self.endpoint("/api/autocomplete");

        let response = self.client.get(&url).query(&[("q", prefix)]).send().await?;

        if !response.status().is_success() {
            return Err(SearchError::Http {
                status: response.status().as_u16(),
                details: response.text().await.unwrap_or_default(),
            });
        }

        response.json().await.map_err(|e| SearchError::Decode {
            endpoint: "/api/autocomplete".to_string(),
            details: e.to_string(),
        })
    }
}
