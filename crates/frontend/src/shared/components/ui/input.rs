use leptos::prelude::*;

/// Form field bound to a string signal.
///
/// The raw text goes back through `on_input`; parsing and validation belong
/// to the DTO. `min`/`max` only hint the browser for `number` fields.
#[component]
pub fn Input(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// "text" when omitted
    #[prop(optional, into)]
    input_type: Option<String>,
    #[prop(optional, into)]
    min: MaybeProp<u32>,
    #[prop(optional, into)]
    max: MaybeProp<u32>,
    /// Marks the label with an asterisk
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());

    view! {
        <label class="form__group">
            <span class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </span>
            <input
                class="form__input"
                type=input_type
                min=move || min.get().map(|v| v.to_string())
                max=move || max.get().map(|v| v.to_string())
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}
