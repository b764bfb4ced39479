//! Experience records and their mutations
//!
//! The catalog is fixed at startup; records are never created or
//! deleted afterwards, only annotated. Identity is the record id.

use tracing::debug;

use super::blob::{BlobId, BlobStore};

/// Experience category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Auto,
    Food,
    History,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "Auto"),
            Self::Food => write!(f, "Food"),
            Self::History => write!(f, "History"),
        }
    }
}

/// One experience entry
#[derive(Debug, Clone)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// User-authored notes; `Some("")` means written then cleared,
    /// `None` means never written
    pub notes: Option<String>,
    /// Uploaded photo, if any
    pub image: Option<BlobId>,
}

impl Experience {
    fn seed(id: &str, title: &str, category: Category, description: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category,
            notes: None,
            image: None,
        }
    }

    /// Whether the user has ever written notes for this record
    pub fn has_notes(&self) -> bool {
        self.notes.is_some()
    }
}

/// The catalog every session starts from
fn seed_catalog() -> Vec<Experience> {
    vec![
        Experience::seed(
            "1",
            "The Enzo Ferrari Museum",
            Category::Auto,
            "Experience the futuristic yellow aluminum canopy designed by Jan Kaplický.",
        ),
        Experience::seed(
            "2",
            "Albinelli Market",
            Category::Food,
            "Visit the historic covered market where locals shop for Parmigiano Reggiano.",
        ),
        Experience::seed(
            "3",
            "Duomo di Modena",
            Category::History,
            "A UNESCO World Heritage site and a masterpiece of Romanesque architecture.",
        ),
        Experience::seed(
            "4",
            "Traditional Acetaia",
            Category::Food,
            "Climb into the attics to smell the aging balsamic in cherry and oak barrels.",
        ),
    ]
}

/// In-memory collection of experience records plus the detail-view
/// selection pointer (zero or one record selected at a time)
#[derive(Debug)]
pub struct ExperienceStore {
    records: Vec<Experience>,
    selected: Option<String>,
}

impl Default for ExperienceStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ExperienceStore {
    /// Store seeded with the fixed catalog
    pub fn seeded() -> Self {
        Self {
            records: seed_catalog(),
            selected: None,
        }
    }

    pub fn records(&self) -> &[Experience] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&Experience> {
        self.records.iter().find(|r| r.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Experience> {
        self.records.iter_mut().find(|r| r.id == id)
    }

    /// Attach an uploaded image to a record, releasing any previous one
    ///
    /// Unknown ids are a silent no-op; the incoming blob is revoked in
    /// that case so it cannot leak in the store.
    pub fn attach_image(&mut self, blobs: &mut BlobStore, id: &str, blob: BlobId) {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                if let Some(old) = record.image.replace(blob) {
                    blobs.revoke(&old);
                }
            }
            None => {
                debug!(%id, "attach_image: unknown record, ignoring");
                blobs.revoke(&blob);
            }
        }
    }

    /// Replace a record's notes verbatim
    ///
    /// The empty string is a valid value (cleared notes), distinct from
    /// notes never having been written. Unknown ids are a silent no-op.
    pub fn set_notes(&mut self, id: &str, text: impl Into<String>) {
        match self.get_mut(id) {
            Some(record) => record.notes = Some(text.into()),
            None => debug!(%id, "set_notes: unknown record, ignoring"),
        }
    }

    /// Select the record shown in the detail view
    ///
    /// Unknown ids leave the selection untouched.
    pub fn select(&mut self, id: &str) {
        if self.get(id).is_some() {
            self.selected = Some(id.to_string());
        } else {
            debug!(%id, "select: unknown record, ignoring");
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Experience> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    /// Release every record image (session teardown)
    pub fn release_images(&mut self, blobs: &mut BlobStore) {
        for record in &mut self.records {
            if let Some(old) = record.image.take() {
                blobs.revoke(&old);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog() {
        let store = ExperienceStore::seeded();
        assert_eq!(store.records().len(), 4);

        let museum = store.get("1").expect("seed record 1 should exist");
        assert_eq!(museum.title, "The Enzo Ferrari Museum");
        assert_eq!(museum.category, Category::Auto);
        assert!(museum.notes.is_none());
        assert!(museum.image.is_none());
    }

    #[test]
    fn test_set_notes_verbatim() {
        let mut store = ExperienceStore::seeded();
        store.set_notes("2", "remember the parmigiano stall");
        assert_eq!(
            store.get("2").unwrap().notes.as_deref(),
            Some("remember the parmigiano stall")
        );
    }

    #[test]
    fn test_cleared_notes_distinct_from_never_written() {
        let mut store = ExperienceStore::seeded();
        store.set_notes("3", "");

        let cleared = store.get("3").unwrap();
        assert_eq!(cleared.notes.as_deref(), Some(""));
        assert!(cleared.has_notes());

        let untouched = store.get("4").unwrap();
        assert!(untouched.notes.is_none());
        assert!(!untouched.has_notes());
    }

    #[test]
    fn test_set_notes_unknown_id_is_noop() {
        let mut store = ExperienceStore::seeded();
        store.set_notes("nonexistent-id", "lost words");
        assert_eq!(store.records().len(), 4);
        assert!(store.records().iter().all(|r| r.notes.is_none()));
    }

    #[test]
    fn test_attach_image() {
        let mut blobs = BlobStore::new();
        let mut store = ExperienceStore::seeded();

        let blob = blobs.insert("image/png", vec![1, 2, 3]);
        store.attach_image(&mut blobs, "1", blob.clone());

        assert_eq!(store.get("1").unwrap().image.as_ref(), Some(&blob));
    }

    #[test]
    fn test_attach_image_replaces_and_revokes() {
        let mut blobs = BlobStore::new();
        let mut store = ExperienceStore::seeded();

        let first = blobs.insert("image/png", vec![1]);
        let second = blobs.insert("image/png", vec![2]);
        store.attach_image(&mut blobs, "1", first.clone());
        store.attach_image(&mut blobs, "1", second.clone());

        assert_eq!(store.get("1").unwrap().image.as_ref(), Some(&second));
        assert!(blobs.get(&first).is_none());
        assert!(blobs.get(&second).is_some());
    }

    #[test]
    fn test_attach_image_unknown_id_is_noop() {
        let mut blobs = BlobStore::new();
        let mut store = ExperienceStore::seeded();

        let blob = blobs.insert("image/png", vec![7]);
        store.attach_image(&mut blobs, "nonexistent-id", blob.clone());

        assert_eq!(store.records().len(), 4);
        assert!(store.records().iter().all(|r| r.image.is_none()));
        // The orphaned blob must not leak
        assert!(blobs.is_empty());
    }

    #[test]
    fn test_selection_single_slot() {
        let mut store = ExperienceStore::seeded();
        assert!(store.selected().is_none());

        store.select("2");
        assert_eq!(store.selected().unwrap().id, "2");

        store.select("3");
        assert_eq!(store.selected().unwrap().id, "3");

        store.deselect();
        assert!(store.selected().is_none());
    }

    #[test]
    fn test_select_unknown_id_keeps_selection() {
        let mut store = ExperienceStore::seeded();
        store.select("1");
        store.select("nonexistent-id");
        assert_eq!(store.selected().unwrap().id, "1");
    }

    #[test]
    fn test_release_images() {
        let mut blobs = BlobStore::new();
        let mut store = ExperienceStore::seeded();

        let a = blobs.insert("image/png", vec![1]);
        let b = blobs.insert("image/png", vec![2]);
        store.attach_image(&mut blobs, "1", a);
        store.attach_image(&mut blobs, "2", b);

        store.release_images(&mut blobs);
        assert!(blobs.is_empty());
        assert!(store.records().iter().all(|r| r.image.is_none()));
    }
}
