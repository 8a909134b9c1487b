//! Decoder for the `/chat-stream` response body.
//!
//! The body is a sequence of `\n`-terminated lines. Lines starting with
//! `data: ` carry either a JSON [`StreamPayload`] or the `[DONE]` sentinel;
//! anything else is ignored. Network chunks are not aligned to lines, so the
//! decoder keeps the unterminated tail between calls to [`StreamDecoder::push`].

use super::dto::StreamPayload;

pub const DATA_PREFIX: &str = "data: ";
pub const DONE_SENTINEL: &str = "[DONE]";

/// One parsed stream line.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// Cumulative answer text; replaces whatever was shown before.
    Update { text: String, sources: Vec<String> },
    /// Payload that is not a valid JSON object; shown as-is.
    Raw(String),
    /// End of the answer.
    Done,
}

impl StreamEvent {
    /// Parses a single line without its terminating `\n`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let data = line.strip_prefix(DATA_PREFIX)?;
        if data == DONE_SENTINEL {
            return Some(Self::Done);
        }
        match serde_json::from_str::<StreamPayload>(data) {
            Ok(payload) => Some(Self::Update {
                text: payload.text,
                sources: payload.sources.unwrap_or_default(),
            }),
            Err(_) => Some(Self::Raw(data.to_string())),
        }
    }
}

#[derive(Debug, Default)]
pub struct StreamDecoder {
    pending: Vec<u8>,
    done: bool,
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the sentinel was seen or [`finish`](Self::finish) was called.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Feeds one network chunk and returns every event completed by it.
    ///
    /// Lines are split on raw bytes, so a UTF-8 sequence cut by a chunk
    /// boundary is reassembled before decoding. Input after `[DONE]` is dropped.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<StreamEvent> {
        let mut events = Vec::new();
        if self.done {
            return events;
        }
        self.pending.extend_from_slice(chunk);

        while let Some(end) = self.pending.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=end).collect();
            let line = String::from_utf8_lossy(&line[..end]);
            if let Some(event) = StreamEvent::parse_line(&line) {
                let is_done = event == StreamEvent::Done;
                events.push(event);
                if is_done {
                    self.done = true;
                    self.pending.clear();
                    break;
                }
            }
        }
        events
    }

    /// Flushes a final line the server did not terminate with `\n`.
    pub fn finish(&mut self) -> Vec<StreamEvent> {
        if self.done {
            return Vec::new();
        }
        self.done = true;
        let rest = std::mem::take(&mut self.pending);
        if rest.is_empty() {
            return Vec::new();
        }
        StreamEvent::parse_line(&String::from_utf8_lossy(&rest))
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(text: &str, sources: &[&str]) -> StreamEvent {
        StreamEvent::Update {
            text: text.to_string(),
            sources: sources.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_line_variants() {
        assert_eq!(StreamEvent::parse_line("data: [DONE]"), Some(StreamEvent::Done));
        assert_eq!(
            StreamEvent::parse_line(r#"data: {"text":"hi","sources":[]}"#),
            Some(update("hi", &[]))
        );
        assert_eq!(
            StreamEvent::parse_line("data: not json"),
            Some(StreamEvent::Raw("not json".to_string()))
        );
        assert_eq!(StreamEvent::parse_line(""), None);
        assert_eq!(StreamEvent::parse_line(": keep-alive"), None);
        assert_eq!(StreamEvent::parse_line("data:[DONE]"), None);
    }

    #[test]
    fn test_crlf_line_endings() {
        let mut decoder = StreamDecoder::new();
        let events = decoder.push(b"data: {\"text\":\"a\"}\r\n\r\ndata: [DONE]\r\n");
        assert_eq!(events, vec![update("a", &[]), StreamEvent::Done]);
    }

    #[test]
    fn test_each_event_carries_full_text() {
        let body = concat!(
            "data: {\"text\": \"밀양시\", \"sources\": []}\n\n",
            "data: {\"text\": \"밀양시 청사\", \"sources\": []}\n\n",
            "data: {\"text\": \"밀양시 청사 위치\", \"sources\": [\"안내.pdf\"]}\n\n",
            "data: [DONE]\n\n",
        );
        let mut decoder = StreamDecoder::new();
        let events = decoder.push(body.as_bytes());
        assert_eq!(
            events,
            vec![
                update("밀양시", &[]),
                update("밀양시 청사", &[]),
                update("밀양시 청사 위치", &["안내.pdf"]),
                StreamEvent::Done,
            ]
        );
        assert!(decoder.is_done());
    }

    #[test]
    fn test_payload_split_across_chunks() {
        let mut decoder = StreamDecoder::new();
        assert!(decoder.push(b"data: {\"text\": \"hel").is_empty());
        assert!(decoder.push(b"lo wor").is_empty());
        assert_eq!(decoder.push(b"ld\"}\n\n"), vec![update("hello world", &[])]);
    }

    #[test]
    fn test_multibyte_char_split_across_chunks() {
        let line = "data: {\"text\": \"문서\"}\n".as_bytes();
        // cut inside the first Hangul syllable
        let cut = line.iter().position(|b| *b >= 0x80).unwrap() + 1;
        let mut decoder = StreamDecoder::new();
        assert!(decoder.push(&line[..cut]).is_empty());
        assert_eq!(decoder.push(&line[cut..]), vec![update("문서", &[])]);
    }

    #[test]
    fn test_malformed_payload_falls_back_to_raw() {
        let mut decoder = StreamDecoder::new();
        let events = decoder.push(b"data: **bold** answer\ndata: {\"text\": 1}\n");
        assert_eq!(
            events,
            vec![
                StreamEvent::Raw("**bold** answer".to_string()),
                StreamEvent::Raw("{\"text\": 1}".to_string()),
            ]
        );
    }

    #[test]
    fn test_numeric_source_label_keeps_answer_text() {
        let event = StreamEvent::parse_line(r#"data: {"text":"answer","sources":[1,"b.pdf"]}"#);
        assert_eq!(event, Some(update("answer", &["1", "b.pdf"])));
    }

    #[test]
    fn test_input_after_done_is_ignored() {
        let mut decoder = StreamDecoder::new();
        let events = decoder.push(b"data: [DONE]\ndata: {\"text\":\"late\"}\n");
        assert_eq!(events, vec![StreamEvent::Done]);
        assert!(decoder.push(b"data: {\"text\":\"later\"}\n").is_empty());
        assert!(decoder.finish().is_empty());
    }

    #[test]
    fn test_finish_flushes_unterminated_line() {
        let mut decoder = StreamDecoder::new();
        assert!(decoder.push(b"data: {\"text\":\"tail\"}").is_empty());
        assert_eq!(decoder.finish(), vec![update("tail", &[])]);
        assert!(decoder.is_done());
    }

    #[test]
    fn test_finish_with_empty_buffer() {
        let mut decoder = StreamDecoder::new();
        assert_eq!(decoder.push(b"data: {\"text\":\"x\"}\n"), vec![update("x", &[])]);
        assert!(decoder.finish().is_empty());
    }
}
