//! End-to-end envelope → record tests

use photosort_extractor::{locate, process, strip_code_fences, SceneRecord};
use serde_json::json;

fn gemini_envelope(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{"text": text}]
            },
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 412}
    })
}

#[test]
fn test_well_formed_gemini_response() {
    let envelope = gemini_envelope(
        r#"```json
{
  "primaryCategory": "Nature",
  "subcategory": "Wildlife",
  "confidence": 91,
  "description": "A heron standing in shallow water",
  "keywords": ["heron", "river", "morning"],
  "setting": "outdoor",
  "timeOfDay": "morning",
  "peoplePresent": false,
  "actionHappening": "bird hunting for fish"
}
```"#,
    );

    let record = process(&envelope);

    assert_eq!(record.category, "Wildlife");
    assert_eq!(record.folder_name, "wildlife");
    assert_eq!(record.confidence, 91);
    assert_eq!(record.confidence_level.as_str(), "high");
    assert_eq!(record.keyword1, "heron");
    assert_eq!(record.keyword3, "morning");
    assert_eq!(record.keyword4, "");
    assert!(!record.people_present);
    // The fence-stripped payload is preserved for auditing
    assert!(record.original_gemini_response.contains("\"subcategory\""));
    assert!(!record.original_gemini_response.contains("```"));
}

#[test]
fn test_response_with_surrounding_chatter() {
    let envelope = gemini_envelope(
        "Here is the analysis you asked for:\n```json\n{\"subcategory\": \"Food & Drink\", \"confidence\": 77}\n```\nLet me know if you need more detail.",
    );

    let record = process(&envelope);

    assert_eq!(record.category, "Food & Drink");
    assert_eq!(record.folder_name, "food-drink");
    assert_eq!(record.confidence_level.as_str(), "medium");
}

#[test]
fn test_error_shaped_envelope_degrades_to_defaults() {
    let envelope = json!({
        "error": {"code": 429, "message": "Resource has been exhausted"}
    });

    let record = process(&envelope);

    assert_eq!(record.category, "uncategorized");
    assert_eq!(record.folder_name, "uncategorized");
    assert_eq!(record.confidence, 0);
    // The serialized envelope is kept so the failure can be inspected later
    assert!(record.original_gemini_response.contains("Resource has been exhausted"));
}

#[test]
fn test_legacy_raw_content_shape() {
    let envelope = json!({
        "rawContent": "{\"subcategory\": \"Architecture\", \"confidence\": 65, \"isIndustrial\": true}"
    });

    let record = process(&envelope);

    assert_eq!(record.category, "Architecture");
    assert!(record.is_industrial);
    assert_eq!(record.confidence_level.as_str(), "medium");
}

#[test]
fn test_partially_malformed_response() {
    // keywords is cut off mid-list; every other field still extracts
    let envelope = gemini_envelope(
        r#"{"subcategory": "Travel", "confidence": 83, "keywords": ["beach", "sunset", "#,
    );

    let record = process(&envelope);

    assert_eq!(record.category, "Travel");
    assert_eq!(record.confidence, 83);
    assert!(record.keywords.is_empty());
    assert_eq!(record.keyword1, "");
}

#[test]
fn test_record_serializes_flat_wire_shape() {
    let envelope = gemini_envelope(r#"{"subcategory": "Pets", "keywords": ["dog"]}"#);

    let record = process(&envelope);
    let wire = serde_json::to_value(&record).unwrap();

    assert_eq!(wire["category"], "Pets");
    assert_eq!(wire["folderName"], "pets");
    assert_eq!(wire["keyword1"], "dog");
    assert_eq!(wire["confidenceLevel"], "low");
    assert!(wire["processedAt"].as_str().unwrap().contains('T'));
}

#[test]
fn test_locate_and_extract_compose_like_process() {
    let envelope = gemini_envelope(r#"{"subcategory": "Sports"}"#);

    let raw = locate(&envelope);
    let mut composed: SceneRecord = photosort_extractor::extract(&raw);
    let mut processed = process(&envelope);

    // Timestamps are captured at assembly time and may differ
    composed.processed_at.clear();
    processed.processed_at.clear();
    assert_eq!(composed, processed);
}

#[test]
fn test_fence_stripping_idempotent_on_located_payload() {
    let envelope = gemini_envelope("```json\n{\"subcategory\": \"Cars\"}\n```");

    let raw = locate(&envelope);
    assert_eq!(strip_code_fences(&raw), raw);
}
