//! Chat and analysis payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::document::Document;

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub question: String,
    pub document_id: String,
}

/// Field names the chat endpoint has been seen to answer under, in lookup order.
/// `awnser` is a typo the backend actually ships.
const ANSWER_FIELDS: [&str; 5] = ["awnser", "answer", "respuesta", "response", "message"];

/// Pull the answer text out of a chat response.
///
/// The first non-empty string under one of [`ANSWER_FIELDS`] wins; otherwise
/// the raw JSON is returned so the user still sees something.
pub fn extract_answer(body: &Value) -> String {
    ANSWER_FIELDS
        .iter()
        .filter_map(|field| body.get(field).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string())
}

/// Body of `POST /documents/:id/analyze`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnalyzeRequest {
    pub record: AnalyzeRecord,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnalyzeRecord {
    pub id: String,
    pub s3_url: String,
    pub filename: String,
}

impl From<&Document> for AnalyzeRequest {
    fn from(doc: &Document) -> Self {
        Self {
            record: AnalyzeRecord {
                id: doc.id.clone(),
                s3_url: doc.s3_url.clone(),
                filename: doc.filename.clone(),
            },
        }
    }
}

/// Result of a document analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Analysis {
    pub id: String,
    pub filename: String,
    pub respuesta: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_typo_field_takes_priority() {
        let body = json!({"awnser": "typo", "answer": "proper"});
        assert_eq!(extract_answer(&body), "typo");
    }

    #[test]
    fn test_falls_through_empty_and_non_string_fields() {
        let body = json!({"awnser": "", "answer": null, "respuesta": 3, "response": "ok"});
        assert_eq!(extract_answer(&body), "ok");
    }

    #[test]
    fn test_raw_json_when_no_known_field() {
        let body = json!({"data": "x"});
        assert_eq!(extract_answer(&body), r#"{"data":"x"}"#);
    }

    #[test]
    fn test_chat_request_shape() {
        let body = serde_json::to_value(ChatRequest {
            question: "What is it?".into(),
            document_id: "d1".into(),
        })
        .unwrap();
        assert_eq!(body, json!({"question": "What is it?", "documentId": "d1"}));
    }
}
