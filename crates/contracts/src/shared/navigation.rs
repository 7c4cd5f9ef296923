//! Route table of the admin UI and the prerequisite redirects between pages.

use crate::domain::a001_hotel::aggregate::HotelId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    /// `/`
    HotelList,
    /// `/hotel/{hotelId}`: room allocation page
    RoomAllocations(HotelId),
    /// `/accommodations/{hotelId}`
    Accommodations(HotelId),
    /// `/room-types/{hotelId}`
    RoomTypes(HotelId),
}

impl AppRoute {
    pub fn path(&self) -> String {
        match self {
            AppRoute::HotelList => "/".to_string(),
            AppRoute::RoomAllocations(id) => format!("/hotel/{}", id),
            AppRoute::Accommodations(id) => format!("/accommodations/{}", id),
            AppRoute::RoomTypes(id) => format!("/room-types/{}", id),
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            AppRoute::HotelList => "Hoteles",
            AppRoute::RoomAllocations(_) => "Hotel",
            AppRoute::Accommodations(_) => "Gestionar Acomodaciones",
            AppRoute::RoomTypes(_) => "Tipos de Habitaciones",
        }
    }

    /// Hotel-scoped menu entries in display order
    pub fn hotel_menu(hotel_id: HotelId) -> [AppRoute; 3] {
        [
            AppRoute::RoomAllocations(hotel_id),
            AppRoute::Accommodations(hotel_id),
            AppRoute::RoomTypes(hotel_id),
        ]
    }
}

/// Allocation page without room types: send the operator to define one first
pub fn redirect_after_allocation_load(hotel_id: HotelId, room_type_count: usize) -> Option<AppRoute> {
    (room_type_count == 0).then_some(AppRoute::RoomTypes(hotel_id))
}

/// A new accommodation on a hotel with no room types continues to room types
pub fn redirect_after_accommodation_created(
    hotel_id: HotelId,
    room_type_count: usize,
) -> Option<AppRoute> {
    (room_type_count == 0).then_some(AppRoute::RoomTypes(hotel_id))
}

/// The first room type of a hotel with no rooms yet continues to allocation
pub fn redirect_after_room_type_created(
    hotel_id: HotelId,
    room_type_count: usize,
    allocation_count: usize,
) -> Option<AppRoute> {
    (room_type_count == 1 && allocation_count == 0).then_some(AppRoute::RoomAllocations(hotel_id))
}
