//! Per-panel request state machines
//!
//! Pure data structures driving the async panels. No rendering logic
//! here; a presentation layer reads [`RequestState`] and decides what to
//! draw. Each panel holds exactly one state at a time and is reusable
//! indefinitely across submissions.

use tracing::{debug, warn};

mod guide;
mod planner;

pub use guide::{GUIDE_FAILURE_MESSAGE, GuidePanel, QUICK_QUERIES};
pub use planner::{PLANNER_FAILURE_MESSAGE, PlannerPanel};

/// State of one async-driven panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T> {
    /// Nothing requested yet, or a settled result was dismissed
    Idle,
    /// A request is in flight
    Loading,
    /// The last request settled with a value
    Success(T),
    /// The last request settled with a fixed user-facing message
    Failure(String),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> RequestState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Get the settled value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Get the user-facing failure message, if any
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Token tying an in-flight call to the submission that started it
///
/// Settlements carrying a superseded token are discarded, so a slow
/// response can never overwrite the state of a newer submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// A reusable request/response state machine for one panel
#[derive(Debug)]
pub struct Panel<T> {
    state: RequestState<T>,
    generation: u64,
}

impl<T> Default for Panel<T> {
    fn default() -> Self {
        Self {
            state: RequestState::Idle,
            generation: 0,
        }
    }
}

impl<T> Panel<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    /// Begin a new submission
    ///
    /// Valid from Idle, Success, or Failure; moves to Loading and issues
    /// a token for the eventual settlement. Returns None while a request
    /// is in flight, which the submission surface treats as a disabled
    /// control (no second adapter call is made).
    pub fn begin(&mut self) -> Option<RequestToken> {
        if self.state.is_loading() {
            debug!("begin: submission refused while loading");
            return None;
        }
        self.generation += 1;
        self.state = RequestState::Loading;
        debug!(generation = self.generation, "begin: now loading");
        Some(RequestToken(self.generation))
    }

    /// Settle a submission with the adapter outcome
    ///
    /// Applies only while Loading and only for the latest issued token;
    /// anything else is discarded and `false` is returned. On failure
    /// the underlying error is logged and the panel shows only the
    /// fixed message.
    pub fn settle<E: std::fmt::Display>(
        &mut self,
        token: RequestToken,
        outcome: Result<T, E>,
        failure_message: &str,
    ) -> bool {
        if token.0 != self.generation || !self.state.is_loading() {
            debug!(
                token = token.0,
                generation = self.generation,
                "settle: stale settlement discarded"
            );
            return false;
        }

        match outcome {
            Ok(value) => {
                debug!(generation = self.generation, "settle: success");
                self.state = RequestState::Success(value);
            }
            Err(e) => {
                warn!(error = %e, "settle: request failed");
                self.state = RequestState::Failure(failure_message.to_string());
            }
        }
        true
    }

    /// Dismiss a settled result and return to Idle
    ///
    /// Ignored from Idle and Loading.
    pub fn dismiss(&mut self) {
        match self.state {
            RequestState::Success(_) | RequestState::Failure(_) => {
                self.state = RequestState::Idle;
            }
            _ => debug!("dismiss: nothing to dismiss"),
        }
    }
}
