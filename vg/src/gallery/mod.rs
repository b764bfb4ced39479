//! Experience gallery and session image storage
//!
//! A fixed catalog of experience records with user-authored notes and
//! optional uploaded photos, plus the session-scoped blob store backing
//! those photos.

mod blob;
mod store;

pub use blob::{Blob, BlobId, BlobStore};
pub use store::{Category, Experience, ExperienceStore};
