use serde::{Deserialize, Serialize};

/// Ответ `GET /documents`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentListResponse {
    #[serde(default)]
    pub documents: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_list() {
        let r: DocumentListResponse =
            serde_json::from_str(r#"{"documents":["민원안내.pdf","조례.txt"]}"#).unwrap();
        assert_eq!(r.documents, vec!["민원안내.pdf", "조례.txt"]);
    }

    #[test]
    fn test_missing_documents_field_is_empty() {
        // error replies carry only {"error": ...}
        let r: DocumentListResponse =
            serde_json::from_str(r#"{"error":"Error listing documents"}"#).unwrap();
        assert!(r.documents.is_empty());
    }
}
