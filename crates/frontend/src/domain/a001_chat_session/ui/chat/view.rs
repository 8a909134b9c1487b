//! Chat Session - View Component

use super::message::TranscriptEntryView;
use super::view_model::ChatVm;
use crate::domain::a001_chat_session::ChatContext;
use crate::shared::components::ui::Button as FormButton;
use crate::shared::dialogs::confirm;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

const CLEAR_CONFIRM_TEXT: &str = "대화 기록을 모두 삭제하시겠습니까?";

#[component]
#[allow(non_snake_case)]
pub fn ChatPanel() -> impl IntoView {
    let ctx = use_context::<ChatContext>().expect("ChatContext not found");
    let vm = ChatVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Every transcript change pins the list to the bottom
    Effect::new(move |_| {
        vm.transcript.track();
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let handle_send = Callback::new({
        let ctx = ctx.clone();
        move |_: ()| vm.submit(&ctx)
    });

    let handle_clear = {
        let ctx = ctx.clone();
        move |_| {
            if confirm(CLEAR_CONFIRM_TEXT) {
                vm.reset_conversation(&ctx);
            }
        }
    };

    view! {
        <div class="chat-panel">
            <Flex
                justify=FlexJustify::SpaceBetween
                align=FlexAlign::Center
                style="padding: 12px 16px; border-bottom: 1px solid var(--colorNeutralStroke2);"
            >
                <h2 class="chat-title">"문서 기반 상담"</h2>
                <Button appearance=ButtonAppearance::Secondary on_click=handle_clear>
                    {icon("eraser")}
                    " 대화 초기화"
                </Button>
            </Flex>

            <div node_ref=messages_container_ref id="chatMessages" class="chat-messages">
                <For
                    each=move || vm.transcript.with(|t| t.entries().to_vec())
                    key=|entry| entry.render_key()
                    let:entry
                >
                    <TranscriptEntryView entry=entry />
                </For>
            </div>

            <form
                id="chatForm"
                class="chat-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    handle_send.run(());
                }
            >
                <input
                    id="messageInput"
                    class="chat-input"
                    type="text"
                    autocomplete="off"
                    placeholder="질문을 입력하세요..."
                    prop:value=move || vm.draft.get()
                    on:input=move |ev| vm.draft.set(event_target_value(&ev))
                    disabled=move || vm.is_streaming.get()
                />
                <FormButton button_type="submit" disabled=vm.is_streaming>
                    {icon("send")}
                    {move || if vm.is_streaming.get() { " 답변 중..." } else { " 전송" }}
                </FormButton>
            </form>
        </div>
    }
}
