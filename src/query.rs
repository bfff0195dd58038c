//! # Query Controller Module
//!
//! ## Purpose
//! State machine for the current search inputs: free-text query, year range,
//! court, sort order, and page number, together with the "has the user
//! committed to a search" flag.
//!
//! ## Input/Output Specification
//! - **Input**: Mutations from UI controls (text edits, filter changes, page
//!   selection, submit)
//! - **Output**: A [`QueryEvent`] per mutation telling the pipeline whether to
//!   do nothing, clear published results, or fetch with a canonical
//!   [`SearchParameters`] snapshot
//!
//! ## Key Rules
//! - Mutating any filter other than the page number resets the page to 1
//! - Emptying the query text clears results and drops the has-searched flag
//!   without issuing a fetch
//! - Snapshots are only emitted while has-searched is true; `submit` turns the
//!   flag on for a non-empty query

use crate::{Court, SortOrder, PAGE_SIZE};

/// Canonical, order-independent snapshot of all search inputs at one instant.
///
/// Immutable per fetch; equality between two snapshots determines whether a
/// new fetch would be redundant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParameters {
    pub query_text: String,
    pub page: u32,
    pub page_size: u32,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub court: Option<Court>,
    pub sort_order: SortOrder,
}

impl SearchParameters {
    /// Serialize as query parameters for the search endpoint, omitting unset
    /// optional fields
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("q", self.query_text.clone()),
            ("page", self.page.to_string()),
            ("size", self.page_size.to_string()),
            ("sortOrder", self.sort_order.as_str().to_string()),
        ];
        if let Some(year_from) = self.year_from {
            pairs.push(("yearFrom", year_from.to_string()));
        }
        if let Some(year_to) = self.year_to {
            pairs.push(("yearTo", year_to.to_string()));
        }
        if let Some(court) = self.court {
            pairs.push(("court", court.as_str().to_string()));
        }
        pairs
    }
}

/// What the fetch pipeline must do after a controller mutation
#[derive(Debug, Clone, PartialEq)]
pub enum QueryEvent {
    /// State changed but no fetch is due
    None,
    /// Published results must be cleared without fetching
    Cleared,
    /// Issue a fetch with this canonical snapshot
    Fetch(SearchParameters),
}

/// Owns the current search inputs and produces canonical snapshots
#[derive(Debug, Clone)]
pub struct QueryController {
    query_text: String,
    page: u32,
    year_from: Option<i32>,
    year_to: Option<i32>,
    court: Option<Court>,
    sort_order: SortOrder,
    has_searched: bool,
}

impl Default for QueryController {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryController {
    pub fn new() -> Self {
        Self {
            query_text: String::new(),
            page: 1,
            year_from: None,
            year_to: None,
            court: None,
            sort_order: SortOrder::default(),
            has_searched: false,
        }
    }

    /// Whether the user has committed to a search
    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    /// Current page number
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Current canonical snapshot
    pub fn params(&self) -> SearchParameters {
        SearchParameters {
            query_text: self.query_text.clone(),
            page: self.page,
            page_size: PAGE_SIZE,
            year_from: self.year_from,
            year_to: self.year_to,
            court: self.court,
            sort_order: self.sort_order,
        }
    }

    /// Update the query text.
    ///
    /// An empty text clears results and marks the controller not-yet-searched
    /// without fetching; a non-empty text counts as a filter change.
    pub fn set_query_text(&mut self, text: impl Into<String>) -> QueryEvent {
        let text = text.into();
        if text == self.query_text {
            return QueryEvent::None;
        }
        if text.is_empty() {
            self.query_text.clear();
            self.has_searched = false;
            self.page = 1;
            return QueryEvent::Cleared;
        }
        self.query_text = text;
        self.filter_changed()
    }

    /// Commit to a search with the current inputs.
    ///
    /// A no-op on an empty query beyond clearing, mirroring `set_query_text`.
    pub fn submit(&mut self) -> QueryEvent {
        if self.query_text.is_empty() {
            self.has_searched = false;
            return QueryEvent::Cleared;
        }
        self.has_searched = true;
        self.page = 1;
        QueryEvent::Fetch(self.params())
    }

    pub fn set_year_from(&mut self, year: Option<i32>) -> QueryEvent {
        if self.year_from == year {
            return QueryEvent::None;
        }
        self.year_from = year;
        self.filter_changed()
    }

    pub fn set_year_to(&mut self, year: Option<i32>) -> QueryEvent {
        if self.year_to == year {
            return QueryEvent::None;
        }
        self.year_to = year;
        self.filter_changed()
    }

    pub fn set_court(&mut self, court: Option<Court>) -> QueryEvent {
        if self.court == court {
            return QueryEvent::None;
        }
        self.court = court;
        self.filter_changed()
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) -> QueryEvent {
        if self.sort_order == sort_order {
            return QueryEvent::None;
        }
        self.sort_order = sort_order;
        self.filter_changed()
    }

    /// Select a page. Does not reset to page 1; only emits while a search is
    /// active.
    pub fn set_page(&mut self, page: u32) -> QueryEvent {
        let page = page.max(1);
        if page == self.page {
            return QueryEvent::None;
        }
        self.page = page;
        if self.has_searched {
            QueryEvent::Fetch(self.params())
        } else {
            QueryEvent::None
        }
    }

    fn filter_changed(&mut self) -> QueryEvent {
        self.page = 1;
        if self.has_searched {
            QueryEvent::Fetch(self.params())
        } else {
            QueryEvent::None
        }
    }
}
