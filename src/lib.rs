//! # Judgment Search Client Core
//!
//! ## Overview
//! This library implements the client-side core of a legal-judgment search
//! application: the canonical search-parameter state machine, a cancellable
//! fetch lifecycle against a remote search API, defensive decoding of the
//! optional-field-laden judgment summary structure, and compact page-number
//! generation for pagination controls.
//!
//! ## Architecture
//! The system is composed of several key modules:
//! - `query`: Search-parameter state machine and the has-searched flag
//! - `fetcher`: Cancellable fetch lifecycle with a single pending-request slot
//! - `backend`: Trait seam over the remote HTTP search API
//! - `model`: Wire types for results, summaries, and facets
//! - `pagination`: Compact page-number list with gap markers
//! - `pdf`: Single-attempt PDF URL resolution
//! - `session`: Glue between controller, fetcher, and the published view state
//! - `config`: Configuration management and settings
//! - `errors`: Centralized error handling and types
//!
//! ## Input/Output Specification
//! - **Input**: User search input (query text, filters, page selection)
//! - **Output**: A renderable view snapshot (results, total, facets, loading)
//! - **Guarantee**: Of all fetches issued, only the most recently issued one
//!   may ever publish a result, regardless of completion order
//!
//! ## Usage
//! ```rust,no_run
//! use judgment_search_client::{Config, SearchSession};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config.toml")?;
//!     let session = SearchSession::from_config(&config)?;
//!     session.set_query_text("contract").await;
//!     session.submit().await;
//!     let view = session.view();
//!     println!("{} of {} results", view.results.len(), view.total);
//!     Ok(())
//! }
//! ```

// Core modules
pub mod backend;
pub mod config;
pub mod errors;
pub mod fetcher;
pub mod model;
pub mod pagination;
pub mod pdf;
pub mod query;
pub mod session;

// Re-exports for convenience
pub use config::Config;
pub use errors::{Result, SearchError};
pub use fetcher::{FetchOutcome, ResultFetcher};
pub use model::{JudgmentSummaryRef, SearchOutcome};
pub use pagination::{compact_page_markers, PageMarker};
pub use query::{QueryController, QueryEvent, SearchParameters};
pub use session::{SearchSession, ViewSnapshot};

use serde::{Deserialize, Serialize};

/// Unique identifier for judgment documents, assigned by the backend index
pub type DocId = String;

/// Number of results per page; fixed by the search API contract
pub const PAGE_SIZE: u32 = 10;

/// Court filter values recognized by the search API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Court {
    /// Supreme Court
    SC,
    /// High Court
    HC,
}

impl Court {
    /// Wire value sent as the `court` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Court::SC => "SC",
            Court::HC => "HC",
        }
    }
}

/// Result ordering requested from the search API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Wire value sent as the `sortOrder` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Desc
    }
}
