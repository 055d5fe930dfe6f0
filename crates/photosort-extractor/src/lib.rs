//! Photosort Extractor
//!
//! Recovers a structured [`SceneRecord`] from the free-form text response of
//! a generative-AI photo analysis call. The response is nominally JSON but
//! in practice may be malformed, wrapped in markdown fences, or shaped
//! differently across API versions.
//!
//! # Architecture
//!
//! ```text
//! Envelope → Payload Locator → Field Extractor → SceneRecord
//! ```
//!
//! The pipeline never fails: the locator degrades to serializing the whole
//! envelope when no known payload path matches, and every field is recovered
//! independently with its own default, so one malformed field never aborts
//! extraction of the others.
//!
//! # Example Usage
//!
//! ```
//! use photosort_extractor::process;
//! use serde_json::json;
//!
//! let envelope = json!({
//!     "candidates": [{
//!         "content": {
//!             "parts": [{
//!                 "text": "```json\n{\"subcategory\": \"Nature\", \"confidence\": 92}\n```"
//!             }]
//!         }
//!     }]
//! });
//!
//! let record = process(&envelope);
//!
//! assert_eq!(record.category, "Nature");
//! assert_eq!(record.folder_name, "nature");
//! assert_eq!(record.confidence, 92);
//! ```

#![warn(missing_docs)]

mod envelope;
mod extractor;
mod fields;

pub use envelope::{locate, strip_code_fences};
pub use extractor::{extract, process};
pub use photosort_domain::SceneRecord;
