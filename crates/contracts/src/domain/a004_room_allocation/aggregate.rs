use crate::aggregate_id;
use crate::domain::a001_hotel::aggregate::HotelId;
use crate::domain::a002_accommodation::aggregate::{Accommodation, AccommodationId};
use crate::domain::a003_room_type::aggregate::{RoomType, RoomTypeId};
use crate::domain::common::{AggregateRoot, EntityMetadata};
use serde::{Deserialize, Serialize};

aggregate_id!(
    /// Identifier of a room allocation (a "habitación" on the service)
    RoomAllocationId
);

/// A provisioned batch of physical rooms of one room type + accommodation,
/// counted against the hotel's declared capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomAllocation {
    pub id: RoomAllocationId,

    #[serde(rename = "cantidad")]
    pub quantity: u32,

    #[serde(rename = "tipo_habitacion_id")]
    pub room_type_id: RoomTypeId,

    #[serde(rename = "acomodacion_id")]
    pub accommodation_id: AccommodationId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_id: Option<HotelId>,

    /// Embedded detail for display
    #[serde(rename = "tipo_habitacion", default, skip_serializing_if = "Option::is_none")]
    pub room_type: Option<RoomType>,

    #[serde(rename = "acomodacion", default, skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<Accommodation>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl RoomAllocation {
    pub fn room_type_name(&self) -> String {
        self.room_type
            .as_ref()
            .map(|rt| rt.name.clone())
            .unwrap_or_else(|| "Sin tipo".to_string())
    }

    pub fn accommodation_name(&self) -> String {
        self.accommodation
            .as_ref()
            .map(|a| a.name.clone())
            .unwrap_or_else(|| "-".to_string())
    }
}

impl AggregateRoot for RoomAllocation {
    type Id = RoomAllocationId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn collection_name() -> &'static str {
        "habitaciones"
    }

    fn list_name() -> &'static str {
        "Habitaciones"
    }
}

/// Body of `POST /habitaciones/{hotelId}` and `PUT /habitaciones/{hotelId}/actualizar/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomAllocationPayload {
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(rename = "tipo")]
    pub room_type: RoomTypeId,
    #[serde(rename = "acomodacion")]
    pub accommodation: AccommodationId,
}
