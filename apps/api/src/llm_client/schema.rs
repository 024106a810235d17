//! Response schemas declared to the model in structured-output mode.
//!
//! Gemini's schema dialect uses upper-case OpenAPI type names (`OBJECT`, `STRING`, `ARRAY`).

use serde_json::{json, Value};

/// Schema for a generated book: `{title, author, description, chapters: [{title, content}]}`,
/// every field required.
pub fn book_response_schema(chapter_count: u32) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING", "description": "The title of the book in Arabic" },
            "author": { "type": "STRING", "description": "The name of the author" },
            "description": { "type": "STRING", "description": "A short summary of the book back cover" },
            "chapters": {
                "type": "ARRAY",
                "description": format!("List of exactly {chapter_count} chapters"),
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING", "description": "Chapter title" },
                        "content": {
                            "type": "STRING",
                            "description": "Full text content of the chapter, rich and detailed"
                        }
                    },
                    "required": ["title", "content"]
                }
            }
        },
        "required": ["title", "author", "description", "chapters"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_schema_requires_all_top_level_fields() {
        let schema = book_response_schema(5);
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required, vec!["title", "author", "description", "chapters"]);
    }

    #[test]
    fn test_chapter_items_require_title_and_content() {
        let schema = book_response_schema(5);
        let items = &schema["properties"]["chapters"]["items"];
        assert_eq!(items["type"], "OBJECT");
        assert_eq!(items["required"], json!(["title", "content"]));
        assert_eq!(items["properties"]["content"]["type"], "STRING");
    }

    #[test]
    fn test_chapter_array_description_carries_count() {
        let schema = book_response_schema(12);
        let description = schema["properties"]["chapters"]["description"]
            .as_str()
            .unwrap();
        assert!(description.contains("exactly 12 chapters"));
    }
}
