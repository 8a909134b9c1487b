use super::transcript::{ChatMessage, ContentFormat, Sender, TranscriptEntry};
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::markdown::render_markdown;
use leptos::prelude::*;

pub const SOURCES_TITLE: &str = "참고 문서";

#[component]
pub fn TranscriptEntryView(entry: TranscriptEntry) -> impl IntoView {
    match entry {
        TranscriptEntry::Message(message) => view! { <ChatMessageView message=message /> }.into_any(),
        TranscriptEntry::Notice { text, .. } => {
            view! { <div class="alert alert-info">{text}</div> }.into_any()
        }
    }
}

/// Avatar + content. Markdown content is sanitized before it becomes markup.
#[component]
pub fn ChatMessageView(message: ChatMessage) -> impl IntoView {
    let avatar = match message.sender {
        Sender::Bot => icon("city"),
        Sender::User => icon("user"),
    };

    let body = match message.format {
        ContentFormat::Markdown => {
            view! { <div class="message-text" inner_html=render_markdown(&message.content)></div> }
                .into_any()
        }
        ContentFormat::Plain => view! { <div class="message-text">{message.content.clone()}</div> }.into_any(),
    };

    let sources = (!message.sources.is_empty()).then(|| {
        view! {
            <div class="message-sources">
                <div class="sources-title">{icon("document")}" "{SOURCES_TITLE}</div>
                <div class="sources-list">
                    {message
                        .sources
                        .clone()
                        .into_iter()
                        .map(|source| {
                            view! { <Badge variant="source" class="source-item">{source}</Badge> }
                        })
                        .collect_view()}
                </div>
            </div>
        }
    });

    view! {
        <div class=message.class()>
            <div class="message-avatar">{avatar}</div>
            <div class="message-content">{body} {sources}</div>
        </div>
    }
}
