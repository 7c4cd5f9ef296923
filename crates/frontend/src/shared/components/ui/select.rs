use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// Drop-down over records of one aggregate, keyed by their id.
///
/// The leading placeholder has an empty value; choosing it reports `None`.
#[component]
pub fn Select<Id>(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<Option<Id>>,
    /// `(id, display name)` pairs
    #[prop(into)]
    options: Signal<Vec<(Id, String)>>,
    on_change: Callback<Option<Id>>,
    #[prop(into)]
    placeholder: String,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView
where
    Id: AggregateId + Send + Sync + 'static,
{
    let selected = move || value.get().map(|id| id.as_string()).unwrap_or_default();

    view! {
        <label class="form__group">
            <span class="form__label">{label}</span>
            <select
                class="form__select"
                disabled=move || disabled.get()
                prop:value=selected
                on:change=move |ev| on_change.run(Id::from_string(&event_target_value(&ev)).ok())
            >
                <option value="">{placeholder}</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(id, name)| {
                            let is_current = value.get() == Some(id);
                            view! {
                                <option value=id.as_string() selected=is_current>{name}</option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
