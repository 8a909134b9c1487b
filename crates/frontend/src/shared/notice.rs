//! Transient, color-coded status lines (upload progress, delete results).

use leptos::prelude::*;

/// Auto-dismiss delay for success notices.
pub const SUCCESS_DISMISS_MS: u32 = 3_000;
/// Auto-dismiss delay for error notices.
pub const ERROR_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    /// In-progress state, removed by the caller.
    Info,
    Success,
    Danger,
}

impl NoticeTone {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeTone::Info => "upload-status text-info",
            NoticeTone::Success => "upload-status text-success",
            NoticeTone::Danger => "upload-status text-danger",
        }
    }

    pub fn dismiss_after_ms(&self) -> Option<u32> {
        match self {
            NoticeTone::Info => None,
            NoticeTone::Success => Some(SUCCESS_DISMISS_MS),
            NoticeTone::Danger => Some(ERROR_DISMISS_MS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeId(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: NoticeId,
    pub tone: NoticeTone,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeBoard {
    items: Vec<Notice>,
    next_id: u64,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tone: NoticeTone, text: impl Into<String>) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        self.items.push(Notice {
            id,
            tone,
            text: text.into(),
        });
        id
    }

    pub fn remove(&mut self, id: NoticeId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }
}

/// Shows a notice and schedules its removal according to its tone.
///
/// Returns `None` when the board has already been disposed.
pub fn post_notice(
    board: RwSignal<NoticeBoard>,
    tone: NoticeTone,
    text: impl Into<String>,
) -> Option<NoticeId> {
    let text = text.into();
    let id = board.try_update(|b| b.push(tone, text))?;

    if let Some(delay) = tone.dismiss_after_ms() {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay).await;
            let _ = board.try_update(|b| b.remove(id));
        });
    }
    Some(id)
}

pub fn dismiss_notice(board: RwSignal<NoticeBoard>, id: NoticeId) {
    let _ = board.try_update(|b| b.remove(id));
}

#[component]
pub fn NoticeStack(board: RwSignal<NoticeBoard>) -> impl IntoView {
    view! {
        <For
            each=move || board.get().items().to_vec()
            key=|notice| notice.id
            let:notice
        >
            <div class=notice.tone.class()>{notice.text}</div>
        </For>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_remove() {
        let mut board = NoticeBoard::new();
        let a = board.push(NoticeTone::Info, "업로드 중...");
        let b = board.push(NoticeTone::Success, "ok");
        assert_eq!(board.items().len(), 2);
        assert!(board.remove(a));
        assert!(!board.remove(a));
        assert_eq!(board.items().len(), 1);
        assert_eq!(board.items()[0].id, b);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut board = NoticeBoard::new();
        let a = board.push(NoticeTone::Danger, "x");
        board.remove(a);
        let b = board.push(NoticeTone::Danger, "y");
        assert_ne!(a, b);
    }

    #[test]
    fn test_tone_timings() {
        assert_eq!(NoticeTone::Info.dismiss_after_ms(), None);
        assert_eq!(NoticeTone::Success.dismiss_after_ms(), Some(3_000));
        assert_eq!(NoticeTone::Danger.dismiss_after_ms(), Some(5_000));
        assert_eq!(NoticeTone::Danger.class(), "upload-status text-danger");
    }
}
