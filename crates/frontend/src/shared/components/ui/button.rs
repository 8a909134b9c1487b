use leptos::prelude::*;

/// Plain `<button>` for places where the form needs a real submit button
/// or an icon-only action.
#[component]
pub fn Button(
    /// "primary" (default) or "icon"
    #[prop(optional)]
    variant: &'static str,
    /// Additional CSS classes
    #[prop(optional)]
    class: &'static str,
    /// `type` attribute, "button" unless set
    #[prop(optional)]
    button_type: &'static str,
    /// Tooltip
    #[prop(optional)]
    title: &'static str,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        "icon" => "button--icon",
        _ => "button--primary",
    };
    let btn_type = if button_type.is_empty() { "button" } else { button_type };
    let title = (!title.is_empty()).then_some(title);

    view! {
        <button
            type=btn_type
            title=title
            class=move || {
                format!(
                    "button {} {} {}",
                    variant_class,
                    if disabled.get() { "disabled" } else { "" },
                    class,
                )
            }
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
