//! Normalized adapter outputs
//!
//! What the three client operations return once the wire response has
//! been reduced to domain data. The itinerary counterpart lives in
//! [`crate::trip`].

use serde::{Deserialize, Serialize};

/// Label used when a grounding source carries no title
pub const SOURCE_FALLBACK_TITLE: &str = "Source Reference";

/// A web source citation attached to a grounded answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub uri: String,
    pub title: String,
}

/// Prose answer plus its extracted source citations
///
/// The two always travel together; a search either fully succeeds or
/// fails as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub text: String,
    pub sources: Vec<SourceRef>,
}

impl SearchResult {
    /// Prose with literal markdown emphasis markers stripped for display
    pub fn display_text(&self) -> String {
        self.text.replace('*', "")
    }
}

/// An inline image produced by the generation service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub mime_type: String,
    /// Base64-encoded payload, as returned
    pub data: String,
}

impl GeneratedImage {
    /// Render as a data URI usable as an image source
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}
