use leptos::prelude::*;

/// Checkbox with its label. Reports the new checked state.
#[component]
pub fn Checkbox(
    #[prop(into)]
    label: String,
    #[prop(into)]
    checked: Signal<bool>,
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Additional CSS classes for wrapper
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let is_disabled = move || disabled.get().unwrap_or(false);
    let wrapper_class = move || {
        let extra = class.get().unwrap_or_default();
        if is_disabled() {
            format!("form__checkbox-wrapper form__checkbox-wrapper--disabled {}", extra)
        } else {
            format!("form__checkbox-wrapper {}", extra)
        }
    };

    view! {
        <label class=wrapper_class>
            <input
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=is_disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <span class="form__checkbox-label">{label}</span>
        </label>
    }
}
