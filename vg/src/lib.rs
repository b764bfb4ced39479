//! viaggio - personal travel planner core for Modena
//!
//! The library holds the design core of the application: the Gemini
//! client adapter, the itinerary request model, the per-panel request
//! state machines, and the session-scoped gallery and image stores.
//! The `vg` binary is a thin shell wiring configuration into these
//! pieces; presentation concerns stay outside the crate.
//!
//! # Core Concepts
//!
//! - **No invalid request is representable**: the trip draft clamps and
//!   normalizes instead of rejecting, so there is no validation error path
//! - **Fixed failure messages**: adapter failures are logged in detail but
//!   surface to the user as one fixed string per panel
//! - **Supersession by token**: each submission carries a generation
//!   token; stale settlements are discarded instead of last-writer-wins
//! - **Session-scoped resources**: uploaded images live in an in-memory
//!   blob store and are released on replacement and at session close
//!
//! # Modules
//!
//! - [`genai`] - GenAI client trait and Gemini implementation
//! - [`trip`] - trip request model and itinerary plan types
//! - [`panel`] - request state machines for the planner and guide panels
//! - [`gallery`] - experience records, notes, and the session image store
//! - [`session`] - explicit application session state
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod gallery;
pub mod genai;
pub mod panel;
pub mod session;
pub mod trip;

// Re-export commonly used types
pub use config::{Config, GenAiConfig, OutputConfig};
pub use gallery::{Blob, BlobId, BlobStore, Category, Experience, ExperienceStore};
pub use genai::{
    GenAiClient, GenAiError, GeminiClient, GeneratedImage, SOURCE_FALLBACK_TITLE, SearchResult,
    SourceRef, create_client,
};
pub use panel::{
    GUIDE_FAILURE_MESSAGE, GuidePanel, PLANNER_FAILURE_MESSAGE, Panel, PlannerPanel, QUICK_QUERIES,
    RequestState, RequestToken,
};
pub use session::{DEFAULT_HERO, HeroImage, Session, Tab};
pub use trip::{
    Activity, DayPlan, INTEREST_OPTIONS, ItineraryPlan, MAX_DURATION_DAYS, MIN_DURATION_DAYS,
    TripDraft, TripRequest,
};
