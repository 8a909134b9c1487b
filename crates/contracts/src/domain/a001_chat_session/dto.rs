use super::session_id::SessionId;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Тело запроса `POST /chat-stream`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatStreamRequest {
    pub message: String,
    pub session_id: SessionId,
}

/// Тело запроса `POST /clear_conversation`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearConversationRequest {
    pub session_id: SessionId,
}

/// JSON payload of one `data: ` line of the chat stream.
///
/// `text` is the whole answer rendered so far, not a delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamPayload {
    pub text: String,
    #[serde(default, deserialize_with = "deserialize_labels")]
    pub sources: Option<Vec<String>>,
}

/// Labels are shown as text: non-string entries keep their JSON form
/// instead of rejecting the whole payload.
fn deserialize_labels<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let labels = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(labels.map(|values| {
        values
            .into_iter()
            .map(|value| match value {
                Value::String(label) => label,
                other => other.to_string(),
            })
            .collect()
    }))
}
