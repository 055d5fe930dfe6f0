//! Locate the raw text payload inside a model response envelope

use regex::Regex;
use serde_json::Value;
use tracing::debug;

/// Known payload locations, tried in priority order
const CANDIDATE_PATHS: [&str; 4] = [
    "/candidates/0/content/parts/0/text", // Gemini API format
    "/content/parts/0/text",              // Alternative format
    "/rawContent",
    "/text",
];

/// Find the best-effort raw text payload in a response envelope
///
/// Tries each known payload path in order and takes the first one that
/// yields a non-empty string. When none matches - a differently-shaped or
/// malformed envelope - the whole envelope is serialized and used as the
/// payload instead, so downstream extraction still has something to work on.
///
/// Markdown code fences are stripped from the result. This function never
/// fails.
pub fn locate(envelope: &Value) -> String {
    for path in CANDIDATE_PATHS {
        if let Some(text) = envelope.pointer(path).and_then(Value::as_str) {
            if !text.is_empty() {
                debug!("payload located via '{}'", path);
                return strip_code_fences(text);
            }
        }
    }

    debug!("no known payload path matched, serializing whole envelope");
    strip_code_fences(&envelope.to_string())
}

/// Remove markdown code-fence markers, leaving the enclosed content intact
///
/// Strips every ```` ```json ```` opener and every bare ```` ``` ```` marker
/// (plus trailing whitespace), wherever they appear. Idempotent: text with
/// no fence markers passes through unchanged.
pub fn strip_code_fences(text: &str) -> String {
    // The tagged opener goes first so the bare pass does not leave "json"
    // behind. Regex failure degrades to the unstripped text.
    let stripped = match Regex::new(r"```json\s*") {
        Ok(re) => re.replace_all(text, "").into_owned(),
        Err(_) => text.to_string(),
    };
    match Regex::new(r"```\s*") {
        Ok(re) => re.replace_all(&stripped, "").into_owned(),
        Err(_) => stripped,
    }
}
