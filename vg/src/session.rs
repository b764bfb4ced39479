//! Application session state
//!
//! Explicit single-owner object for what a UI shell would otherwise keep
//! as ambient globals: the active tab and the hero image slot, alongside
//! the gallery, both panel drivers, and the blob store backing uploaded
//! images. Everything here is session-scoped; nothing survives `close`.

use tracing::debug;

use crate::gallery::{Blob, BlobId, BlobStore, ExperienceStore};
use crate::panel::{GuidePanel, PlannerPanel};

/// Built-in SVG fallback so the hero slot is never empty
pub const DEFAULT_HERO: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHdpZHRoPSI0MDQiIGhlaWdodD0iNDYwIiB2aWV3Qm94PSIwIDAgNDA0IDQ2MCI+PHJlY3Qgd2lkdGg9IjEwMCUiIGhlaWdodD0iMTAwJSIgZmlsbD0iI2ZhZmFmOSIvPjx0ZXh0IHg9IjUwJSIgeT0iNDAlIiBmb250LXNpemU9IjEwMCIgdGV4dC1hbmNob3I9Im1pZGRsZSIgZHk9Ii4zZW0iPuKdpO+4jzwvdGV4dD48dGV4dCB4PSI1MCUiIHk9IjcwJSIgZm9udC1zaXplPSIxNCIgdGV4dC1hbmNob3I9Im1pZGRsZSIgZmlsbD0iIzQ0NCI+Q2xpY2sgJ1VwZGF0ZScgdG8gYWRkIHlvdXIgYXJ0PC90ZXh0Pjwvc3ZnPg==";

/// Top-level view panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Planner,
    Experiences,
    Guide,
}

impl Tab {
    /// Navigation label for the tab
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Discover",
            Self::Planner => "Smart Planner",
            Self::Experiences => "Experiences",
            Self::Guide => "Travel Guide",
        }
    }

    /// All tabs in navigation order
    pub fn all() -> [Tab; 4] {
        [Self::Overview, Self::Planner, Self::Experiences, Self::Guide]
    }
}

/// The hero image slot: the built-in fallback or an uploaded blob
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HeroImage {
    #[default]
    Fallback,
    Uploaded(BlobId),
}

/// All mutable state for one run of the application
///
/// The panels are operated directly (`session.planner.submit(..)`);
/// hero and gallery mutations go through the methods below so blob
/// handles are released when images are replaced.
#[derive(Debug, Default)]
pub struct Session {
    tab: Tab,
    hero: HeroImage,
    blobs: BlobStore,
    gallery: ExperienceStore,
    pub planner: PlannerPanel,
    pub guide: GuidePanel,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        debug!(?tab, "set_tab: called");
        self.tab = tab;
    }

    pub fn hero(&self) -> &HeroImage {
        &self.hero
    }

    /// The hero image bytes, when an upload is active
    pub fn hero_blob(&self) -> Option<&Blob> {
        match &self.hero {
            HeroImage::Uploaded(id) => self.blobs.get(id),
            HeroImage::Fallback => None,
        }
    }

    /// Displayable hero source: uploaded handle or the built-in fallback
    pub fn hero_src(&self) -> String {
        match &self.hero {
            HeroImage::Fallback => DEFAULT_HERO.to_string(),
            HeroImage::Uploaded(id) => id.to_string(),
        }
    }

    /// Upload a new hero image, releasing the previous upload
    pub fn set_hero(&mut self, mime_type: impl Into<String>, bytes: Vec<u8>) {
        let blob = self.blobs.insert(mime_type, bytes);
        let previous = std::mem::replace(&mut self.hero, HeroImage::Uploaded(blob));
        if let HeroImage::Uploaded(old) = previous {
            self.blobs.revoke(&old);
        }
    }

    /// Drop any uploaded hero and fall back to the default art
    pub fn reset_hero(&mut self) {
        if let HeroImage::Uploaded(old) = std::mem::take(&mut self.hero) {
            self.blobs.revoke(&old);
        }
    }

    pub fn gallery(&self) -> &ExperienceStore {
        &self.gallery
    }

    /// Upload an image for an experience record
    ///
    /// Unknown ids are a no-op; the replaced blob (or the rejected
    /// upload) is released either way.
    pub fn upload_experience_image(
        &mut self,
        id: &str,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) {
        let blob = self.blobs.insert(mime_type, bytes);
        self.gallery.attach_image(&mut self.blobs, id, blob);
    }

    /// Replace an experience record's notes verbatim
    pub fn set_notes(&mut self, id: &str, text: impl Into<String>) {
        self.gallery.set_notes(id, text);
    }

    pub fn select_experience(&mut self, id: &str) {
        self.gallery.select(id);
    }

    pub fn deselect_experience(&mut self) {
        self.gallery.deselect();
    }

    /// Number of live blobs (uploads minus releases)
    pub fn blob_count(&self) -> usize {
        self.blobs.len()
    }

    /// End the session, releasing every outstanding blob
    pub fn close(&mut self) {
        debug!("close: releasing session resources");
        self.gallery.release_images(&mut self.blobs);
        self.reset_hero();
        self.blobs.clear();
    }
}
