//! Trip domain types
//!
//! The request side (what the user configures) and the plan side (what
//! the generation service returns).

mod plan;
mod request;

pub use plan::{Activity, DayPlan, ItineraryPlan};
pub use request::{
    INTEREST_OPTIONS, MAX_DURATION_DAYS, MIN_DURATION_DAYS, TripDraft, TripRequest,
};
