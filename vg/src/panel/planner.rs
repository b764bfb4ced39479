//! Planner panel driver
//!
//! Owns the trip draft and the request state machine for itinerary
//! generation. Adapter failures stop here: the panel shows a fixed
//! message and siblings are unaffected.

use tracing::debug;

use super::{Panel, RequestState};
use crate::genai::GenAiClient;
use crate::trip::{ItineraryPlan, TripDraft};

/// Fixed user-facing message when itinerary generation fails
pub const PLANNER_FAILURE_MESSAGE: &str = "Failed to generate itinerary. Check your API key.";

/// Trip configuration plus the itinerary request state machine
#[derive(Debug, Default)]
pub struct PlannerPanel {
    draft: TripDraft,
    panel: Panel<ItineraryPlan>,
}

impl PlannerPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &TripDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TripDraft {
        &mut self.draft
    }

    pub fn state(&self) -> &RequestState<ItineraryPlan> {
        self.panel.state()
    }

    /// Whether the submission surface should accept a new request
    pub fn can_submit(&self) -> bool {
        !self.panel.state().is_loading()
    }

    /// Build the request from the draft and run it against the client
    ///
    /// Returns false when a request was already in flight; the
    /// submission is ignored, matching a disabled submit control.
    pub async fn submit(&mut self, client: &dyn GenAiClient) -> bool {
        let Some(token) = self.panel.begin() else {
            return false;
        };

        let request = self.draft.build_request();
        debug!(
            duration_days = request.duration_days,
            interests = request.interests.len(),
            "submit: generating itinerary"
        );

        let outcome = client.generate_itinerary(&request).await;
        self.panel.settle(token, outcome, PLANNER_FAILURE_MESSAGE);
        true
    }

    /// Dismiss a settled result
    pub fn dismiss(&mut self) {
        self.panel.dismiss();
    }
}
