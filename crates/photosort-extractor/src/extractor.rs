//! Record assembly: run every field accessor and compute derived fields

use crate::envelope::locate;
use crate::fields::{bool_field, list_field, number_field, string_field};
use chrono::Utc;
use photosort_domain::{
    folder_slug, resolve_category, ConfidenceLevel, SceneRecord, UNCATEGORIZED,
};
use serde_json::Value;
use tracing::{debug, info};

/// Process one response envelope into a scene record
///
/// The composition most callers want: locate the raw text payload, then
/// extract every field from it. Never fails.
pub fn process(envelope: &Value) -> SceneRecord {
    let raw_text = locate(envelope);
    debug!("raw payload length: {} chars", raw_text.len());

    let record = extract(&raw_text);

    info!(
        "processed envelope into category '{}' (confidence {}, {})",
        record.category,
        record.confidence,
        record.confidence_level.as_str()
    );

    record
}

/// Extract a scene record from raw model text
///
/// Every field is recovered independently with its own default, so the
/// result is always a fully-populated record no matter how malformed the
/// text is. The text itself is preserved verbatim on the record.
pub fn extract(raw_text: &str) -> SceneRecord {
    let subcategory = string_field(raw_text, "subcategory", UNCATEGORIZED);
    let primary_category = string_field(raw_text, "primaryCategory", "");
    let confidence = number_field(raw_text, "confidence", 0);
    let description = string_field(raw_text, "description", "");
    let keywords = list_field(raw_text, "keywords");
    let extracted_text = string_field(raw_text, "extractedText", "").replace("\\n", " ");
    let is_industrial = bool_field(raw_text, "isIndustrial", false);
    let main_subjects = list_field(raw_text, "mainSubjects");
    let setting = string_field(raw_text, "setting", "unknown");
    let time_of_day = string_field(raw_text, "timeOfDay", "unknown");
    let people_present = bool_field(raw_text, "peoplePresent", false);
    let brand_logos = list_field(raw_text, "brandLogos");
    let action_happening = string_field(raw_text, "actionHappening", "none");

    let category = resolve_category(&subcategory, &primary_category);
    let folder_name = folder_slug(&category);
    let confidence_level = ConfidenceLevel::from_score(confidence);

    debug!(
        "extracted category '{}' with {} keywords",
        category,
        keywords.len()
    );

    SceneRecord {
        keyword1: keyword_slot(&keywords, 0),
        keyword2: keyword_slot(&keywords, 1),
        keyword3: keyword_slot(&keywords, 2),
        keyword4: keyword_slot(&keywords, 3),
        keyword5: keyword_slot(&keywords, 4),
        keyword6: keyword_slot(&keywords, 5),
        keyword7: keyword_slot(&keywords, 6),
        keyword8: keyword_slot(&keywords, 7),
        keyword9: keyword_slot(&keywords, 8),
        keyword10: keyword_slot(&keywords, 9),
        category,
        primary_category,
        subcategory,
        folder_name,
        confidence,
        confidence_level,
        description,
        keywords,
        extracted_text,
        is_industrial,
        main_subjects,
        setting,
        time_of_day,
        people_present,
        brand_logos,
        action_happening,
        original_gemini_response: raw_text.to_string(),
        processed_at: Utc::now().to_rfc3339(),
    }
}

/// Positional keyword slot, empty when the list is shorter
fn keyword_slot(keywords: &[String], index: usize) -> String {
    keywords.get(index).cloned().unwrap_or_default()
}
