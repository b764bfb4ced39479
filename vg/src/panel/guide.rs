//! Guide panel driver
//!
//! Live-web Q&A: one query at a time against the grounded search
//! operation, with blank input filtered before a request ever starts.

use tracing::debug;

use super::{Panel, RequestState};
use crate::genai::{GenAiClient, SearchResult};

/// Fixed user-facing message when the search call fails
pub const GUIDE_FAILURE_MESSAGE: &str =
    "The concierge is currently unavailable. Please check your API connection.";

/// Canned quick queries offered beside the search box
pub const QUICK_QUERIES: [&str; 4] = [
    "Best Gelato in Modena",
    "ZTL Parking Map Modena",
    "Maranello Ferrari Shuttle",
    "Today's Events in Piazza Grande",
];

/// Search state machine plus the query it last ran
#[derive(Debug, Default)]
pub struct GuidePanel {
    panel: Panel<SearchResult>,
    last_query: Option<String>,
}

impl GuidePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState<SearchResult> {
        self.panel.state()
    }

    /// The most recently submitted query, if any
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// Whether the submission surface should accept a new request
    pub fn can_submit(&self) -> bool {
        !self.panel.state().is_loading()
    }

    /// Run a search query against the client
    ///
    /// Blank or whitespace-only queries are ignored, as is a submission
    /// while a request is in flight. Returns false in both cases.
    pub async fn submit(&mut self, client: &dyn GenAiClient, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            debug!("submit: blank query ignored");
            return false;
        }

        let Some(token) = self.panel.begin() else {
            return false;
        };

        self.last_query = Some(query.to_string());
        let outcome = client.search_info(query).await;
        self.panel.settle(token, outcome, GUIDE_FAILURE_MESSAGE);
        true
    }

    /// Dismiss a settled result
    pub fn dismiss(&mut self) {
        self.panel.dismiss();
    }
}
