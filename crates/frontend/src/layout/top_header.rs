//! TopHeader component - application top bar with the sidebar toggle.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

pub const APP_TITLE: &str = "문서 기반 AI 상담";

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <button
                class="top-header__icon-btn"
                on:click=toggle_sidebar
                title=move || if is_sidebar_visible() { "문서 패널 숨기기" } else { "문서 패널 보기" }
            >
                {icon("menu")}
            </button>
            <div class="top-header__brand">
                {icon("city")}
                <span class="top-header__title">{APP_TITLE}</span>
            </div>
        </div>
    }
}
