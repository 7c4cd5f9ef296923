//! Menu shown on every hotel-scoped page.

use crate::shared::icons::icon;
use contracts::domain::a001_hotel::aggregate::HotelId;
use contracts::shared::navigation::AppRoute;
use leptos::prelude::*;
use leptos_router::components::A;

fn hotel_of(route: AppRoute) -> Option<HotelId> {
    match route {
        AppRoute::HotelList => None,
        AppRoute::RoomAllocations(id) | AppRoute::Accommodations(id) | AppRoute::RoomTypes(id) => {
            Some(id)
        }
    }
}

/// Links to the hotel's pages; the current one is rendered inactive
#[component]
pub fn NavigationMenu(current: AppRoute) -> impl IntoView {
    let entries = hotel_of(current)
        .map(|id| AppRoute::hotel_menu(id).to_vec())
        .unwrap_or_default();

    view! {
        <nav class="navbar hotel-menu">
            <A href=AppRoute::HotelList.path() attr:class="navbar__item navbar__item--back">
                {icon("arrow-left")}
                " Volver a hoteles"
            </A>
            {entries
                .into_iter()
                .map(|route| {
                    if route == current {
                        view! {
                            <span class="navbar__item navbar__item--active">{route.label()}</span>
                        }
                        .into_any()
                    } else {
                        view! {
                            <A href=route.path() attr:class="navbar__item">{route.label()}</A>
                        }
                        .into_any()
                    }
                })
                .collect_view()}
        </nav>
    }
}
