//! Thaw [`Card`] that fades in on mount, with a titled header row.

use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    #[prop(into)]
    title: String,
    /// Name understood by [`icon`]
    #[prop(optional)]
    icon_name: Option<&'static str>,
    /// Switches the card to its warning accent
    #[prop(optional, into)]
    warning: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <Card
            class=Signal::derive(move || {
                Some(if warning.get() { "card-animated card-animated--warning" } else { "card-animated" }.to_string())
            })
            attr:style="animation: card-appear 0.28s ease-out both;"
        >
            <h2 class="card-animated__title">
                {icon_name.map(|name| icon(name))}
                <span>{title}</span>
            </h2>
            {children()}
        </Card>
    }
}
