//! Photosort Domain Layer
//!
//! This crate contains the domain model for photosort: the flat scene
//! record produced for every analyzed photo, and the small pieces of pure
//! logic derived from it.
//!
//! ## Key Concepts
//!
//! - **SceneRecord**: the flat output record - one per analyzed photo,
//!   every field always present and defaulted
//! - **Confidence Bucket**: three-level classification (high/medium/low)
//!   derived from the numeric confidence score
//! - **Folder Slug**: a lowercase, hyphen-separated, filesystem-safe name
//!   derived from the resolved category
//!
//! ## Architecture
//!
//! Pure business logic only. The extraction pipeline that populates these
//! types lives in `photosort-extractor`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod confidence;
pub mod record;
pub mod slug;

// Re-exports for convenience
pub use confidence::ConfidenceLevel;
pub use record::{resolve_category, SceneRecord, UNCATEGORIZED};
pub use slug::folder_slug;
