//! # PDF Link Resolver Module
//!
//! Resolves the viewer URL for a judgment's PDF through the backend. One
//! attempt per user click: no retry, no caching. Any failure surfaces to the
//! user as a "not found" notice rather than resetting search state.

use crate::backend::SearchBackend;
use crate::errors::{Result, SearchError};
use std::sync::Arc;

/// Single-attempt PDF URL resolution for judgment documents
pub struct PdfLinkResolver {
    backend: Arc<dyn SearchBackend>,
}

impl PdfLinkResolver {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    /// Resolve the PDF URL for a document id.
    ///
    /// Transport and decode failures are folded into the not-found notice;
    /// the caller only distinguishes "here is a URL" from "tell the user".
    pub async fn resolve(&self, doc_id: &str) -> Result<String> {
        match self.backend.resolve_pdf_url(doc_id).await {
            Ok(url) => Ok(url),
            Err(SearchError::PdfNotFound { doc_id }) => Err(SearchError::PdfNotFound { doc_id }),
            Err(error) => {
                tracing::warn!(doc_id, "pdf url resolution failed: {}", error);
                Err(SearchError::PdfNotFound {
                    doc_id: doc_id.to_string(),
                })
            }
        }
    }
}
