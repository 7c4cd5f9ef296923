use crate::shared::icons::icon;
use contracts::shared::navigation::AppRoute;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                {icon("building")}
                <A href=AppRoute::HotelList.path() attr:class="header__title">"Gestión Hotelera"</A>
            </div>
        </header>
    }
}
