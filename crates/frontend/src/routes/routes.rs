use crate::domain::a001_hotel::ui::list::HotelListPage;
use crate::domain::a002_accommodation::ui::page::AccommodationPage;
use crate::domain::a003_room_type::ui::page::RoomTypePage;
use crate::domain::a004_room_allocation::ui::page::RoomAllocationPage;
use crate::layout::Shell;
use contracts::domain::a001_hotel::aggregate::HotelId;
use contracts::domain::common::AggregateId;
use contracts::shared::navigation::AppRoute;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

/// Renders `page` for the route's `:hotel_id`, or the not-found view when
/// the segment is not a valid id
fn hotel_page<V: IntoView + 'static>(page: fn(HotelId) -> V) -> impl IntoView {
    let params = use_params_map();
    move || {
        let hotel_id = params
            .read()
            .get("hotel_id")
            .and_then(|raw| HotelId::from_string(&raw).ok());
        match hotel_id {
            Some(id) => page(id).into_any(),
            None => view! { <NotFound /> }.into_any(),
        }
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page-header__title">"Página no encontrada"</h1>
            <A href=AppRoute::HotelList.path()>"Volver a hoteles"</A>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HotelListPage />
                    <Route
                        path=path!("/hotel/:hotel_id")
                        view=|| hotel_page(|id| view! { <RoomAllocationPage hotel_id=id /> })
                    />
                    <Route
                        path=path!("/accommodations/:hotel_id")
                        view=|| hotel_page(|id| view! { <AccommodationPage hotel_id=id /> })
                    />
                    <Route
                        path=path!("/room-types/:hotel_id")
                        view=|| hotel_page(|id| view! { <RoomTypePage hotel_id=id /> })
                    />
                </Routes>
            </Shell>
        </Router>
    }
}
