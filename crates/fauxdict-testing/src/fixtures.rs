//! Payloads and config snippets used across integration tests.

use serde_json::json;

/// Word list payload in the default `{ "words": [...] }` shape
pub fn word_payload(words: &[&str]) -> String {
    json!({ "words": words }).to_string()
}

/// Payload keyed under a different field name
pub fn payload_with_field(field: &str, words: &[&str]) -> String {
    let mut object = serde_json::Map::new();
    object.insert(field.to_string(), json!(words));
    serde_json::Value::Object(object).to_string()
}

/// Config that removes the artificial batch delay so commands finish quickly
pub const FAST_CONFIG: &str = "[paging]\nbatch_delay_ms = 0\n";

/// A small dictionary with two entries mentioning "cat"
pub const SAMPLE_WORDS: [&str; 4] = [
    "Catastrophizzle (n.): a small disaster that fizzles out",
    "Doggerel (n.): poetry written by a dog",
    "Concatenap (n.): a nap taken in several pieces",
    "Snackrifice (n.): giving up the last chip",
];

/// The built-in list shown when the source cannot be used
pub fn fallback_words() -> &'static [&'static str] {
    &fauxdict_types::FALLBACK_ENTRIES
}
