use crate::domain::a001_chat_session::ui::chat::ChatPanel;
use crate::domain::a001_chat_session::ChatContext;
use crate::domain::a002_document::ui::list::DocumentPanel;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    // One session per page load; nothing survives a reload.
    let chat_ctx = ChatContext::for_page();
    log::info!("session {} against '{}'", chat_ctx.session_id, chat_ctx.api_base);
    provide_context(chat_ctx);

    view! {
        <ConfigProvider>
            <Shell
                left=|| view! { <DocumentPanel /> }.into_any()
                center=|| view! { <ChatPanel /> }.into_any()
            />
        </ConfigProvider>
    }
}
