//! # Search Session Module
//!
//! ## Purpose
//! Glue between the query controller, the result fetcher, and the published
//! view state. The embedding UI calls the mutators here and re-renders from
//! [`ViewSnapshot`] after each call returns.
//!
//! ## Control Flow
//! User input → controller mutator → [`QueryEvent`] → fetcher supersedes any
//! prior pending fetch → outcome published → snapshot reflects new results,
//! facets, and pagination markers.

use crate::backend::{HttpSearchBackend, SearchBackend};
use crate::config::Config;
use crate::errors::Result;
use crate::fetcher::ResultFetcher;
use crate::model::{Facets, JudgmentSummaryRef};
use crate::pagination::{compact_page_markers, total_pages, PageMarker};
use crate::pdf::PdfLinkResolver;
use crate::query::{QueryController, QueryEvent};
use crate::{Court, SortOrder, PAGE_SIZE};
use parking_lot::Mutex;
use std::sync::Arc;

/// Everything the view needs to render one frame
#[derive(Debug, Clone, Default)]
pub struct ViewSnapshot {
    pub results: Vec<JudgmentSummaryRef>,
    pub total: u64,
    pub facets: Facets,
    pub loading: bool,
    pub has_searched: bool,
}

/// One user-facing search session: input state, fetch lifecycle, view state
pub struct SearchSession {
    controller: Mutex<QueryController>,
    fetcher: ResultFetcher,
    pdf: PdfLinkResolver,
    backend: Arc<dyn SearchBackend>,
}

impl SearchSession {
    /// Build a session against the configured HTTP search API
    pub fn from_config(config: &Config) -> Result<Self> {
        let backend: Arc<dyn SearchBackend> = Arc::new(HttpSearchBackend::new(&config.api)?);
        Ok(Self::new(backend))
    }

    /// Build a session over any backend implementation
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            controller: Mutex::new(QueryController::new()),
            fetcher: ResultFetcher::new(backend.clone()),
            pdf: PdfLinkResolver::new(backend.clone()),
            backend,
        }
    }

    /// Update the query text; an empty text clears results without fetching
    pub async fn set_query_text(&self, text: impl Into<String>) {
        let event = self.controller.lock().set_query_text(text);
        self.dispatch(event).await;
    }

    /// Commit to a search with the current inputs
    pub async fn submit(&self) {
        let event = self.controller.lock().submit();
        self.dispatch(event).await;
    }

    pub async fn set_year_from(&self, year: Option<i32>) {
        let event = self.controller.lock().set_year_from(year);
        self.dispatch(event).await;
    }

    pub async fn set_year_to(&self, year: Option<i32>) {
        let event = self.controller.lock().set_year_to(year);
        self.dispatch(event).await;
    }

    pub async fn set_court(&self, court: Option<Court>) {
        let event = self.controller.lock().set_court(court);
        self.dispatch(event).await;
    }

    pub async fn set_sort_order(&self, sort_order: SortOrder) {
        let event = self.controller.lock().set_sort_order(sort_order);
        self.dispatch(event).await;
    }

    pub async fn set_page(&self, page: u32) {
        let event = self.controller.lock().set_page(page);
        self.dispatch(event).await;
    }

    /// Current renderable state
    pub fn view(&self) -> ViewSnapshot {
        let outcome = self.fetcher.outcome();
        ViewSnapshot {
            results: outcome.results,
            total: outcome.total,
            facets: outcome.facets,
            loading: self.fetcher.is_loading(),
            has_searched: self.controller.lock().has_searched(),
        }
    }

    /// Compact page-number markers for the pagination control
    pub fn page_markers(&self) -> Vec<PageMarker> {
        let pages = total_pages(self.fetcher.outcome().total, PAGE_SIZE);
        let current = self.controller.lock().page().clamp(1, pages.max(1));
        compact_page_markers(current, pages)
    }

    /// Resolve the PDF viewer URL for a result the user clicked
    pub async fn resolve_pdf_url(&self, doc_id: &str) -> Result<String> {
        self.pdf.resolve(doc_id).await
    }

    /// Autocomplete suggestions for the current input prefix.
    ///
    /// Suggestions are decorative: any failure degrades to an empty list and
    /// never blocks the search flow.
    pub async fn suggest(&self, prefix: &str) -> Vec<String> {
        if prefix.is_empty() {
            return Vec::new();
        }
        match self.backend.autocomplete(prefix).await {
            Ok(suggestions) => suggestions,
            Err(error) => {
                tracing::debug!("autocomplete failed, suppressing: {}", error);
                Vec::new()
            }
        }
    }

    /// Tear the session down: cancels any pending fetch so nothing publishes
    /// into a destroyed view
    pub fn shutdown(&self) {
        self.fetcher.shutdown();
    }

    async fn dispatch(&self, event: QueryEvent) {
        match event {
            QueryEvent::None => {}
            QueryEvent::Cleared => self.fetcher.clear(),
            QueryEvent::Fetch(params) => {
                self.fetcher.fetch(params).await;
            }
        }
    }
}
