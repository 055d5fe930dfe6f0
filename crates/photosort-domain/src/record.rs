//! The flat scene record produced for every analyzed photo

use crate::confidence::ConfidenceLevel;
use serde::{Deserialize, Serialize};

/// Sentinel subcategory meaning the model could not classify the photo
pub const UNCATEGORIZED: &str = "uncategorized";

/// Resolve the final category from the model's two categorization fields
///
/// The subcategory wins whenever the model produced one. Only when it is the
/// `"uncategorized"` sentinel and a non-empty primary category exists does
/// the primary category take over; otherwise the sentinel stands.
pub fn resolve_category(subcategory: &str, primary_category: &str) -> String {
    if subcategory == UNCATEGORIZED && !primary_category.is_empty() {
        primary_category.to_string()
    } else {
        subcategory.to_string()
    }
}

/// One analyzed photo, flattened for downstream consumers
///
/// Serialized field names match the wire contract exactly (camelCase, plus
/// the positional `keyword1`..`keyword10` slots). Every field is always
/// present: extraction never fails the whole record, individual fields fall
/// back to the defaults encoded in [`SceneRecord::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneRecord {
    /// Final category after subcategory/primary resolution
    pub category: String,

    /// Broad category reported by the model
    pub primary_category: String,

    /// Specific category reported by the model
    pub subcategory: String,

    /// Filesystem-safe slug of `category`, used to file the photo
    pub folder_name: String,

    /// Categorization confidence, nominally 0-100
    pub confidence: i64,

    /// Bucketed confidence for downstream branching
    pub confidence_level: ConfidenceLevel,

    /// Free-text scene description
    pub description: String,

    /// Ordered keyword list
    pub keywords: Vec<String>,

    /// Text the model read off the photo, newline escapes flattened
    pub extracted_text: String,

    /// Whether the scene is an industrial site
    pub is_industrial: bool,

    /// Main subjects visible in the scene
    pub main_subjects: Vec<String>,

    /// Scene setting (e.g. indoor, outdoor)
    pub setting: String,

    /// Apparent time of day
    pub time_of_day: String,

    /// Whether people are visible
    pub people_present: bool,

    /// Brand logos visible in the scene
    pub brand_logos: Vec<String>,

    /// Action taking place in the scene
    pub action_happening: String,

    /// Keyword slot 1 (first element of `keywords`, empty when absent)
    pub keyword1: String,
    /// Keyword slot 2
    pub keyword2: String,
    /// Keyword slot 3
    pub keyword3: String,
    /// Keyword slot 4
    pub keyword4: String,
    /// Keyword slot 5
    pub keyword5: String,
    /// Keyword slot 6
    pub keyword6: String,
    /// Keyword slot 7
    pub keyword7: String,
    /// Keyword slot 8
    pub keyword8: String,
    /// Keyword slot 9
    pub keyword9: String,
    /// Keyword slot 10
    pub keyword10: String,

    /// The raw model response the record was extracted from, verbatim
    pub original_gemini_response: String,

    /// Wall-clock time the record was assembled, RFC 3339
    pub processed_at: String,
}

impl Default for SceneRecord {
    /// A record as produced from text containing no recognizable fields
    fn default() -> Self {
        Self {
            category: UNCATEGORIZED.to_string(),
            primary_category: String::new(),
            subcategory: UNCATEGORIZED.to_string(),
            folder_name: UNCATEGORIZED.to_string(),
            confidence: 0,
            confidence_level: ConfidenceLevel::Low,
            description: String::new(),
            keywords: Vec::new(),
            extracted_text: String::new(),
            is_industrial: false,
            main_subjects: Vec::new(),
            setting: "unknown".to_string(),
            time_of_day: "unknown".to_string(),
            people_present: false,
            brand_logos: Vec::new(),
            action_happening: "none".to_string(),
            keyword1: String::new(),
            keyword2: String::new(),
            keyword3: String::new(),
            keyword4: String::new(),
            keyword5: String::new(),
            keyword6: String::new(),
            keyword7: String::new(),
            keyword8: String::new(),
            keyword9: String::new(),
            keyword10: String::new(),
            original_gemini_response: String::new(),
            processed_at: String::new(),
        }
    }
}
