//! Chat Session - Model (API functions)

use crate::domain::a001_chat_session::ChatContext;
use crate::shared::error::ApiError;
use contracts::domain::a001_chat_session::{
    ChatStreamRequest, ClearConversationRequest, StreamDecoder, StreamEvent, CHAT_STREAM_PATH,
    CLEAR_CONVERSATION_PATH,
};
use contracts::shared::{ActionOutcome, ActionResponse};
use gloo_net::http::Request;
use std::collections::VecDeque;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::ReadableStreamDefaultReader;

/// Ответ `/chat-stream` как асинхронный источник событий.
///
/// Reads the body chunk by chunk and hands out parsed events one at a time;
/// chunk boundaries never leak to the caller.
pub struct ChatStream {
    reader: ReadableStreamDefaultReader,
    decoder: StreamDecoder,
    queued: VecDeque<StreamEvent>,
    body_finished: bool,
}

impl ChatStream {
    fn new(reader: ReadableStreamDefaultReader) -> Self {
        Self {
            reader,
            decoder: StreamDecoder::new(),
            queued: VecDeque::new(),
            body_finished: false,
        }
    }

    /// Next event, or `None` once the body is exhausted.
    ///
    /// `Done` is yielded like any other event; the caller stops there.
    pub async fn next_event(&mut self) -> Result<Option<StreamEvent>, ApiError> {
        loop {
            if let Some(event) = self.queued.pop_front() {
                return Ok(Some(event));
            }
            if self.body_finished || self.decoder.is_done() {
                return Ok(None);
            }
            match self.read_chunk().await? {
                Some(bytes) => self.queued.extend(self.decoder.push(&bytes)),
                None => {
                    self.body_finished = true;
                    self.queued.extend(self.decoder.finish());
                }
            }
        }
    }

    async fn read_chunk(&self) -> Result<Option<Vec<u8>>, ApiError> {
        let result = wasm_bindgen_futures::JsFuture::from(self.reader.read())
            .await
            .map_err(ApiError::stream)?;

        let done = js_sys::Reflect::get(&result, &JsValue::from_str("done"))
            .map_err(ApiError::stream)?
            .as_bool()
            .unwrap_or(true);
        if done {
            return Ok(None);
        }

        let value = js_sys::Reflect::get(&result, &JsValue::from_str("value"))
            .map_err(ApiError::stream)?;
        let bytes = value
            .dyn_into::<js_sys::Uint8Array>()
            .map_err(ApiError::stream)?;
        Ok(Some(bytes.to_vec()))
    }
}

/// Отправить сообщение и открыть поток ответа
pub async fn open_chat_stream(ctx: &ChatContext, message: &str) -> Result<ChatStream, ApiError> {
    let body = ChatStreamRequest {
        message: message.to_string(),
        session_id: ctx.session_id.clone(),
    };
    let response = Request::post(&ctx.url(CHAT_STREAM_PATH))
        .json(&body)?
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let stream = response
        .body()
        .ok_or_else(|| ApiError::Stream("response has no body".to_string()))?;
    let reader: ReadableStreamDefaultReader = stream.get_reader().unchecked_into();
    log::debug!("chat stream opened for {}", ctx.session_id);
    Ok(ChatStream::new(reader))
}

/// Очистить историю диалога на сервере
pub async fn clear_conversation(ctx: &ChatContext) -> Result<ActionOutcome, ApiError> {
    let body = ClearConversationRequest {
        session_id: ctx.session_id.clone(),
    };
    let response = Request::post(&ctx.url(CLEAR_CONVERSATION_PATH))
        .json(&body)?
        .send()
        .await?;

    // error replies come with a JSON body too, so the status is not checked
    let data: ActionResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(data.outcome())
}
