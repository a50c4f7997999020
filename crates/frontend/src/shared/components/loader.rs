use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

/// Spinner shown while a long backend call runs. There is no cancel path.
#[component]
pub fn Loader(
    #[prop(into)]
    visible: Signal<bool>,
    #[prop(optional, into)]
    label: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="loader">
                <Spinner size=SpinnerSize::Large />
                <span class="loader__label">
                    {move || label.get().unwrap_or_else(|| "Working...".to_string())}
                </span>
            </div>
        </Show>
    }
}
