// src/document.rs
//! Flattening of structured resume content into searchable text

use serde_json::Value;

/// Flatten an arbitrary resume document into one lowercase searchable string.
///
/// The document is opaque to the scoring core: no schema is enforced. Object
/// keys are included alongside values so section names like "experience" or
/// "skills" count as document text, matching how the whole serialized
/// document was scanned historically. Nulls contribute nothing.
pub fn flatten_document(document: &Value) -> String {
    let mut text = String::new();
    collect(document, &mut text);
    text.to_lowercase()
}

fn collect(value: &Value, text: &mut String) {
    match value {
        Value::Null => {}
        Value::Bool(b) => push(text, if *b { "true" } else { "false" }),
        Value::Number(n) => push(text, &n.to_string()),
        Value::String(s) => push(text, s),
        Value::Array(items) => {
            for item in items {
                collect(item, text);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                push(text, key);
                collect(item, text);
            }
        }
    }
}

fn push(text: &mut String, piece: &str) {
    if !text.is_empty() {
        text.push(' ');
    }
    text.push_str(piece);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flattens_keys_and_values() {
        let document = json!({
            "summary": "Backend Engineer",
            "skills": ["Rust", "PostgreSQL"],
        });

        let text = flatten_document(&document);

        assert!(text.contains("summary"));
        assert!(text.contains("backend engineer"));
        assert!(text.contains("skills"));
        assert!(text.contains("rust postgresql"));
    }

    #[test]
    fn test_numbers_and_bools_included_nulls_skipped() {
        let document = json!({
            "years": 7,
            "remote": true,
            "phone": null,
        });

        let text = flatten_document(&document);

        assert!(text.contains('7'));
        assert!(text.contains("true"));
        assert!(!text.contains("null"));
    }

    #[test]
    fn test_output_is_lowercase() {
        let text = flatten_document(&json!({"Name": "ADA LOVELACE"}));
        assert_eq!(text, text.to_lowercase());
    }
}
