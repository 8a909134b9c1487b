use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "source" or "neutral" (default)
    #[prop(optional)]
    variant: &'static str,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let variant_class = match variant {
        "source" => "badge--source",
        _ => "badge--neutral",
    };

    view! {
        <span class=format!("badge {} {}", variant_class, class)>
            {children()}
        </span>
    }
}
