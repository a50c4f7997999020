use leptos::prelude::*;

/// Button component with variants and sizes.
///
/// Variants: "primary" (default), "secondary", "ghost", "success", "danger", "warning".
/// Sizes: "md" (default), "sm", "round" (icon only, circular).
#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Tooltip
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        "success" => "button--success",
        "danger" => "button--danger",
        "warning" => "button--warning",
        _ => "button--primary",
    };

    let size_class = move || match size.get().as_deref() {
        Some("sm") => "button--small",
        Some("round") => "button--round",
        _ => "",
    };

    let additional_class = move || class.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("button {} {} {}", variant_class(), size_class(), additional_class())
            title=move || title.get().unwrap_or_default()
            aria-label=move || title.get().unwrap_or_default()
            disabled=move || disabled.get().unwrap_or(false)
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
