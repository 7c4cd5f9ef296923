use crate::aggregate_id;
use crate::domain::a001_hotel::aggregate::HotelId;
use crate::domain::common::{AggregateRoot, EntityMetadata};
use serde::{Deserialize, Serialize};

aggregate_id!(
    /// Identifier of an accommodation category
    AccommodationId
);

/// Accommodation category: a named bedding/occupancy configuration of one hotel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    pub id: AccommodationId,

    #[serde(rename = "nombre")]
    pub name: String,

    /// Omitted when embedded inside a room type or an allocation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_id: Option<HotelId>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Accommodation {
    pub fn to_dto(&self) -> AccommodationDto {
        AccommodationDto {
            id: Some(self.id),
            name: self.name.clone(),
        }
    }
}

impl AggregateRoot for Accommodation {
    type Id = AccommodationId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn collection_name() -> &'static str {
        "acomodaciones"
    }

    fn list_name() -> &'static str {
        "Acomodaciones"
    }
}

/// Form state for an accommodation category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccommodationDto {
    pub id: Option<AccommodationId>,
    pub name: String,
}

/// Body of `POST /acomodaciones/{hotelId}` and its update counterpart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccommodationPayload {
    #[serde(rename = "nombre")]
    pub name: String,
}

impl AccommodationDto {
    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn to_payload(&self) -> Result<AccommodationPayload, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("El nombre es obligatorio".into());
        }
        if name.chars().count() < 2 {
            return Err("Debe tener al menos 2 caracteres".into());
        }
        Ok(AccommodationPayload {
            name: name.to_string(),
        })
    }
}
