use leptos::prelude::*;

/// One option of a checkbox multi-select.
///
/// The label wraps the input, so no element id is needed.
#[component]
pub fn Checkbox(
    #[prop(into)]
    label: String,
    #[prop(into)]
    checked: Signal<bool>,
    on_toggle: Callback<bool>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="form__option" class:form__option--checked=move || checked.get()>
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}
