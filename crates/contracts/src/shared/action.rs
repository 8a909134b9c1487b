use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reply of the upload, delete and clear-conversation endpoints.
///
/// The server answers `{"success": ...}` or `{"error": "..."}`, whatever
/// the HTTP status. `success` is a message string or `true` depending on
/// the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Carries the server message when `success` was a string.
    Succeeded(Option<String>),
    Failed(String),
    /// Neither field was set.
    Unrecognized,
}

impl ActionResponse {
    pub fn outcome(self) -> ActionOutcome {
        if let Some(success) = self.success.filter(is_truthy) {
            let message = success.as_str().map(str::to_string);
            return ActionOutcome::Succeeded(message);
        }
        match self.error {
            Some(error) if !error.is_empty() => ActionOutcome::Failed(error),
            _ => ActionOutcome::Unrecognized,
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ActionOutcome {
        serde_json::from_str::<ActionResponse>(json).unwrap().outcome()
    }

    #[test]
    fn test_success_variants() {
        assert_eq!(
            parse(r#"{"success":"Successfully uploaded and processed a.pdf"}"#),
            ActionOutcome::Succeeded(Some(
                "Successfully uploaded and processed a.pdf".to_string()
            ))
        );
        assert_eq!(parse(r#"{"success":true}"#), ActionOutcome::Succeeded(None));
    }

    #[test]
    fn test_error_variant() {
        assert_eq!(
            parse(r#"{"error":"Invalid file type. Only TXT and PDF files are allowed."}"#),
            ActionOutcome::Failed("Invalid file type. Only TXT and PDF files are allowed.".to_string())
        );
    }

    #[test]
    fn test_falsy_success_falls_through_to_error() {
        assert_eq!(
            parse(r#"{"success":false,"error":"boom"}"#),
            ActionOutcome::Failed("boom".to_string())
        );
        assert_eq!(parse(r#"{"success":""}"#), ActionOutcome::Unrecognized);
        assert_eq!(parse("{}"), ActionOutcome::Unrecognized);
    }
}
