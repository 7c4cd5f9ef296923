//! Read-only hotel card of the allocation page.

use crate::shared::components::card_animated::CardAnimated;
use contracts::domain::a001_hotel::aggregate::Hotel;
use contracts::domain::a004_room_allocation::capacity::CapacityGuard;
use leptos::prelude::*;

/// Label/value pairs shown in the card, in display order
pub fn info_rows(hotel: &Hotel, guard: &CapacityGuard) -> Vec<(&'static str, String)> {
    vec![
        ("Ciudad", hotel.city.clone()),
        ("Dirección", hotel.address.clone()),
        ("NIT", hotel.tax_id.clone()),
        ("Habitaciones declaradas", hotel.room_capacity.to_string()),
        (
            "Habitaciones asignadas",
            format!("{} / {}", guard.provisioned, guard.capacity),
        ),
        ("Habitaciones disponibles", guard.remaining().to_string()),
        ("Creado", hotel.metadata.created_display()),
        ("Actualizado", hotel.metadata.updated_display()),
    ]
}

#[component]
pub fn HotelInfo(hotel: Hotel, guard: CapacityGuard) -> impl IntoView {
    let rows = info_rows(&hotel, &guard);

    view! {
        <CardAnimated title=hotel.name.clone() icon_name="building" warning=guard.is_reached()>
            <dl class="hotel-info__grid">
                {rows
                    .into_iter()
                    .map(|(label, value)| view! {
                        <dt class="hotel-info__label">{label}</dt>
                        <dd class="hotel-info__value">{value}</dd>
                    })
                    .collect_view()}
            </dl>
        </CardAnimated>
    }
}
