use leptos::prelude::*;

/// One choice of a [`RadioGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioOption {
    pub value: String,
    pub label: String,
    /// Tooltip shown on hover.
    pub hint: Option<String>,
}

impl RadioOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Radio button component
#[component]
pub fn Radio(
    #[prop(into)]
    option: RadioOption,
    /// Current selected value
    #[prop(into)]
    checked_value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    let RadioOption { value, label, hint } = option;
    let radio_id = format!("radio-{}-{}", name, value);
    let value_for_check = value.clone();
    let value_for_change = value.clone();

    let is_checked = move || checked_value.get() == value_for_check;
    let wrapper_class = if disabled {
        "form__radio-wrapper form__radio-wrapper--disabled"
    } else {
        "form__radio-wrapper"
    };

    view! {
        <div class=wrapper_class title=hint.unwrap_or_default()>
            <input
                id=radio_id.clone()
                type="radio"
                class="form__radio"
                name=name
                value=value
                prop:checked=is_checked
                disabled=disabled
                on:change=move |_| {
                    if let Some(handler) = on_change {
                        handler.run(value_for_change.clone());
                    }
                }
            />
            <label class="form__radio-label" for=radio_id>
                {label}
            </label>
        </div>
    }
}

/// Radio group component
#[component]
pub fn RadioGroup(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current selected value
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    options: Vec<RadioOption>,
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <div class="form__radio-group">
                {options
                    .into_iter()
                    .map(|option| {
                        view! {
                            <Radio
                                option=option
                                checked_value=value
                                on_change=Callback::new(move |new_val: String| {
                                    if let Some(handler) = on_change {
                                        handler.run(new_val);
                                    }
                                })
                                name=name.clone()
                                disabled=disabled
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
