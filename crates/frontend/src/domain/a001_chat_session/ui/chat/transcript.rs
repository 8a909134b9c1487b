//! Client-side chat transcript.
//!
//! The transcript is exactly what the user has seen in this page: local
//! sends and received stream events, in order. It is never merged with a
//! server-side history; a successful reset replaces it with one notice.

use contracts::domain::a001_chat_session::StreamEvent;
use contracts::shared::ActionOutcome;

pub const LOADING_TEXT: &str = "답변을 생성하고 있습니다...";
pub const CONNECTION_ERROR_TEXT: &str = "오류: 서버와 통신할 수 없습니다.";
pub const RESET_NOTICE_TEXT: &str = "대화가 초기화되었습니다. 새로운 질문을 해보세요!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    /// Shown as a text node.
    Plain,
    /// Rendered to sanitized HTML.
    Markdown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender: Sender,
    pub content: String,
    pub format: ContentFormat,
    pub loading: bool,
    pub sources: Vec<String>,
    /// Bumped whenever a stream event rewrites the message.
    pub revision: u64,
}

impl ChatMessage {
    /// CSS classes of the message row, e.g. `message bot-message loading`.
    pub fn class(&self) -> String {
        let mut class = format!("message {}-message", self.sender.as_str());
        if self.loading {
            class.push_str(" loading");
        }
        class
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptEntry {
    Message(ChatMessage),
    /// Informational banner, not authored by anyone.
    Notice { id: MessageId, text: String },
}

impl TranscriptEntry {
    pub fn id(&self) -> MessageId {
        match self {
            TranscriptEntry::Message(m) => m.id,
            TranscriptEntry::Notice { id, .. } => *id,
        }
    }

    /// Row key for keyed rendering: changes only when this entry's content does.
    pub fn render_key(&self) -> (MessageId, u64) {
        match self {
            TranscriptEntry::Message(m) => (m.id, m.revision),
            TranscriptEntry::Notice { id, .. } => (*id, 0),
        }
    }
}

/// Handles of one in-flight question: the loading placeholder and the
/// not-yet-attached answer that stream events will fill.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingExchange {
    pub loading: MessageId,
    pub response: ChatMessage,
}

impl PendingExchange {
    pub fn response_id(&self) -> MessageId {
        self.response.id
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.entries.iter().filter_map(|e| match e {
            TranscriptEntry::Message(m) => Some(m),
            TranscriptEntry::Notice { .. } => None,
        })
    }

    pub fn get(&self, id: MessageId) -> Option<&ChatMessage> {
        self.messages().find(|m| m.id == id)
    }

    pub fn contains(&self, id: MessageId) -> bool {
        self.entries.iter().any(|e| e.id() == id)
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Appends a message and returns its handle.
    ///
    /// Markdown is honored for bot messages only; user text is always plain.
    pub fn add_message(
        &mut self,
        text: impl Into<String>,
        sender: Sender,
        is_loading: bool,
        is_markdown: bool,
    ) -> MessageId {
        let mut message = self.create_empty_message(sender);
        message.content = text.into();
        message.loading = is_loading;
        if is_markdown && sender == Sender::Bot {
            message.format = ContentFormat::Markdown;
        }
        let id = message.id;
        self.entries.push(TranscriptEntry::Message(message));
        id
    }

    /// A message with an id but no content, not yet part of the transcript.
    pub fn create_empty_message(&mut self, sender: Sender) -> ChatMessage {
        ChatMessage {
            id: self.allocate_id(),
            sender,
            content: String::new(),
            format: ContentFormat::Plain,
            loading: false,
            sources: Vec::new(),
            revision: 0,
        }
    }

    pub fn attach(&mut self, message: ChatMessage) {
        if !self.contains(message.id) {
            self.entries.push(TranscriptEntry::Message(message));
        }
    }

    pub fn remove(&mut self, id: MessageId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id() != id);
        self.entries.len() != before
    }

    /// Shows the user's question and a loading placeholder.
    pub fn begin_exchange(&mut self, question: &str) -> PendingExchange {
        self.add_message(question, Sender::User, false, false);
        let loading = self.add_message(LOADING_TEXT, Sender::Bot, true, false);
        let mut response = self.create_empty_message(Sender::Bot);
        response.format = ContentFormat::Markdown;
        PendingExchange { loading, response }
    }

    /// The server accepted the question: the placeholder gives way to the
    /// (still empty) answer.
    pub fn open_response(&mut self, exchange: &PendingExchange) {
        self.remove(exchange.loading);
        self.attach(exchange.response.clone());
    }

    /// Drops the placeholder and any partial answer, then reports the
    /// failure as one bot message.
    pub fn fail_exchange(&mut self, exchange: &PendingExchange) {
        self.remove(exchange.loading);
        self.remove(exchange.response_id());
        self.add_message(CONNECTION_ERROR_TEXT, Sender::Bot, false, false);
    }

    /// Replaces the content of `id` with the event's state.
    ///
    /// Returns false for `Done` or when the message is not attached.
    pub fn apply_stream_event(&mut self, id: MessageId, event: &StreamEvent) -> bool {
        let Some(message) = self.entries.iter_mut().find_map(|e| match e {
            TranscriptEntry::Message(m) if m.id == id => Some(m),
            _ => None,
        }) else {
            return false;
        };

        match event {
            StreamEvent::Update { text, sources } => {
                message.content.clone_from(text);
                message.sources.clone_from(sources);
            }
            StreamEvent::Raw(raw) => {
                message.content.clone_from(raw);
                message.sources.clear();
            }
            StreamEvent::Done => return false,
        }
        message.format = ContentFormat::Markdown;
        message.revision += 1;
        true
    }

    /// Replaces everything with a single informational notice.
    pub fn reset_with_notice(&mut self, text: impl Into<String>) {
        let id = self.allocate_id();
        self.entries.clear();
        self.entries.push(TranscriptEntry::Notice {
            id,
            text: text.into(),
        });
    }

    /// Applies the server's answer to a clear request. Only a success
    /// touches the transcript; returns whether it was reset.
    pub fn apply_clear_outcome(&mut self, outcome: &ActionOutcome) -> bool {
        match outcome {
            ActionOutcome::Succeeded(_) => {
                self.reset_with_notice(RESET_NOTICE_TEXT);
                true
            }
            ActionOutcome::Failed(_) | ActionOutcome::Unrecognized => false,
        }
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

    fn senders(t: &Transcript) -> Vec<Sender> {
        t.messages().map(|m| m.sender).collect()
    }

    #[test]
    fn test_add_message_returns_removable_handle() {
        let mut t = Transcript::new();
        let id = t.add_message(LOADING_TEXT, Sender::Bot, true, false);
        assert_eq!(t.get(id).unwrap().class(), "message bot-message loading");
        assert!(t.remove(id));
        assert!(t.is_empty());
        assert!(!t.remove(id));
    }

    #[test]
    fn test_markdown_only_for_bot() {
        let mut t = Transcript::new();
        let user = t.add_message("**x**", Sender::User, false, true);
        let bot = t.add_message("**x**", Sender::Bot, false, true);
        assert_eq!(t.get(user).unwrap().format, ContentFormat::Plain);
        assert_eq!(t.get(bot).unwrap().format, ContentFormat::Markdown);
    }

    #[test]
    fn test_empty_message_is_unattached() {
        let mut t = Transcript::new();
        let m = t.create_empty_message(Sender::Bot);
        assert!(m.content.is_empty());
        assert!(!t.contains(m.id));
        t.attach(m.clone());
        t.attach(m.clone());
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_successful_exchange_leaves_user_then_bot() {
        let mut t = Transcript::new();
        let ex = t.begin_exchange("도서관 운영 시간은?");
        assert_eq!(t.len(), 2);
        assert!(t.get(ex.loading).unwrap().loading);

        t.open_response(&ex);
        for event in [
            update("도서관은", &[]),
            update("도서관은 9시부터", &[]),
            update("도서관은 9시부터 운영합니다.", &["도서관.pdf"]),
        ] {
            assert!(t.apply_stream_event(ex.response_id(), &event));
        }
        assert!(!t.apply_stream_event(ex.response_id(), &StreamEvent::Done));

        assert_eq!(senders(&t), vec![Sender::User, Sender::Bot]);
        assert!(t.messages().all(|m| !m.loading));
        let answer = t.get(ex.response_id()).unwrap();
        assert_eq!(answer.content, "도서관은 9시부터 운영합니다.");
        assert_eq!(answer.sources, vec!["도서관.pdf"]);
    }

    #[test]
    fn test_events_replace_content() {
        let mut t = Transcript::new();
        let ex = t.begin_exchange("q");
        t.open_response(&ex);

        t.apply_stream_event(ex.response_id(), &update("a", &["s1"]));
        t.apply_stream_event(ex.response_id(), &update("a b", &[]));
        let answer = t.get(ex.response_id()).unwrap();
        assert_eq!(answer.content, "a b");
        assert!(answer.sources.is_empty());

        t.apply_stream_event(ex.response_id(), &StreamEvent::Raw("raw **text**".into()));
        assert_eq!(t.get(ex.response_id()).unwrap().content, "raw **text**");
    }

    #[test]
    fn test_failed_before_stream() {
        let mut t = Transcript::new();
        let ex = t.begin_exchange("q");
        t.fail_exchange(&ex);
        assert_eq!(senders(&t), vec![Sender::User, Sender::Bot]);
        let last = t.messages().last().unwrap();
        assert_eq!(last.content, CONNECTION_ERROR_TEXT);
        assert!(!last.loading);
    }

    #[test]
    fn test_failed_mid_stream_drops_partial_answer() {
        let mut t = Transcript::new();
        let ex = t.begin_exchange("q");
        t.open_response(&ex);
        t.apply_stream_event(ex.response_id(), &update("half", &[]));
        t.fail_exchange(&ex);
        assert!(!t.contains(ex.response_id()));
        assert_eq!(t.len(), 2);
        assert_eq!(t.messages().last().unwrap().content, CONNECTION_ERROR_TEXT);
    }

    #[test]
    fn test_event_for_detached_message_is_ignored() {
        let mut t = Transcript::new();
        let ex = t.begin_exchange("q");
        assert!(!t.apply_stream_event(ex.response_id(), &update("x", &[])));
    }

    #[test]
    fn test_reset_with_notice() {
        let mut t = Transcript::new();
        t.begin_exchange("q");
        t.reset_with_notice(RESET_NOTICE_TEXT);
        assert_eq!(t.len(), 1);
        assert_eq!(t.messages().count(), 0);
        assert!(matches!(
            &t.entries()[0],
            TranscriptEntry::Notice { text, .. } if text == RESET_NOTICE_TEXT
        ));
    }

    fn answered_transcript() -> Transcript {
        let mut t = Transcript::new();
        let ex = t.begin_exchange("민원실 위치");
        t.open_response(&ex);
        t.apply_stream_event(ex.response_id(), &update("본관 1층입니다.", &["안내.pdf"]));
        t
    }

    #[test]
    fn test_rejected_clear_leaves_transcript_untouched() {
        for outcome in [
            ActionOutcome::Failed("session not found".to_string()),
            ActionOutcome::Unrecognized,
        ] {
            let mut t = answered_transcript();
            let before = t.clone();
            assert!(!t.apply_clear_outcome(&outcome));
            assert_eq!(t.entries(), before.entries());
        }
    }

    #[test]
    fn test_accepted_clear_leaves_single_notice() {
        let mut t = answered_transcript();
        assert!(t.apply_clear_outcome(&ActionOutcome::Succeeded(None)));
        assert_eq!(t.len(), 1);
        assert!(matches!(
            &t.entries()[0],
            TranscriptEntry::Notice { text, .. } if text == RESET_NOTICE_TEXT
        ));
    }

    #[test]
    fn test_stream_event_changes_only_its_row_key() {
        let mut t = answered_transcript();
        let ex = t.begin_exchange("주차 요금");
        t.open_response(&ex);
        let before: Vec<_> = t.entries().iter().map(|e| e.render_key()).collect();

        t.apply_stream_event(ex.response_id(), &update("시간당", &[]));
        let after: Vec<_> = t.entries().iter().map(|e| e.render_key()).collect();

        assert_eq!(before.len(), after.len());
        let changed: Vec<_> = before
            .iter()
            .zip(&after)
            .filter(|(b, a)| b != a)
            .map(|(_, a)| a.0)
            .collect();
        assert_eq!(changed, vec![ex.response_id()]);
    }
}
