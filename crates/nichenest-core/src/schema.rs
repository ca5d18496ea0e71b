//! Response schemas demanded from the Gemini API.
//!
//! Both requests set `responseMimeType: application/json` together with one
//! of these schemas, so the model is constrained to reply with the exact
//! shape the parsers in [`crate::service`] expect. Every field the data
//! model consumes is marked required here; in particular the details schema
//! requires `competitors`, matching [`crate::model::RelatedKeyword`].

use serde_json::{json, Value};

/// Schema for the top-keywords reply: `{ "keywords": [KeywordSummary] }`.
pub fn top_keywords() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "keywords": {
                "type": "ARRAY",
                "description": "A list of top book-related keywords.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "keyword": {
                            "type": "STRING",
                            "description": "The search keyword."
                        },
                        "volume": {
                            "type": "INTEGER",
                            "description": "Estimated monthly search volume."
                        },
                        "revenue": {
                            "type": "STRING",
                            "description": "Estimated monthly revenue potential."
                        }
                    },
                    "required": ["keyword", "volume", "revenue"]
                }
            }
        },
        "required": ["keywords"]
    })
}

/// Schema for the keyword-details reply, all three sections required.
pub fn keyword_details() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "relatedKeywords": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "keyword": { "type": "STRING" },
                        "volume": { "type": "INTEGER" },
                        "competitors": {
                            "type": "INTEGER",
                            "description": "Estimated number of competing titles."
                        },
                        "type": { "type": "STRING", "enum": ["short", "long"] }
                    },
                    "required": ["keyword", "volume", "competitors", "type"]
                }
            },
            "profitableTopics": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "authorTips": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": ["relatedKeywords", "profitableTopics", "authorTips"]
    })
}
