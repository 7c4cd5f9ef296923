use crate::aggregate_id;
use crate::domain::a001_hotel::aggregate::HotelId;
use crate::domain::a002_accommodation::aggregate::{Accommodation, AccommodationId};
use crate::domain::common::{AggregateRoot, EntityMetadata};
use serde::{Deserialize, Serialize};

aggregate_id!(
    /// Identifier of a room type
    RoomTypeId
);

/// Room type: a named class of room linked to one or more accommodation categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: RoomTypeId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_id: Option<HotelId>,

    #[serde(rename = "acomodaciones", default)]
    pub accommodations: Vec<Accommodation>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl RoomType {
    pub fn allows(&self, accommodation_id: AccommodationId) -> bool {
        self.accommodations.iter().any(|a| a.id == accommodation_id)
    }

    /// Comma separated category names for list views
    pub fn accommodation_names(&self) -> String {
        self.accommodations
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn to_dto(&self) -> RoomTypeDto {
        RoomTypeDto {
            id: Some(self.id),
            name: self.name.clone(),
            accommodations: self.accommodations.iter().map(|a| a.id).collect(),
        }
    }
}

impl AggregateRoot for RoomType {
    type Id = RoomTypeId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn collection_name() -> &'static str {
        "tipo-habitaciones"
    }

    fn list_name() -> &'static str {
        "Tipos de Habitaciones"
    }
}

/// Form state for a room type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomTypeDto {
    pub id: Option<RoomTypeId>,
    pub name: String,
    pub accommodations: Vec<AccommodationId>,
}

/// Body of `POST /tipo-habitaciones/{hotelId}` and its update counterpart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomTypePayload {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "acomodaciones")]
    pub accommodations: Vec<AccommodationId>,
}

impl RoomTypeDto {
    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Toggle membership of a category in the multi-select
    pub fn toggle_accommodation(&mut self, id: AccommodationId, checked: bool) {
        let present = self.accommodations.contains(&id);
        if checked && !present {
            self.accommodations.push(id);
        } else if !checked && present {
            self.accommodations.retain(|a| *a != id);
        }
    }

    pub fn to_payload(&self) -> Result<RoomTypePayload, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("El nombre es obligatorio".into());
        }
        if name.chars().count() < 2 {
            return Err("Debe tener al menos 2 caracteres".into());
        }
        if self.accommodations.is_empty() {
            return Err("Debe seleccionar al menos una acomodación".into());
        }
        Ok(RoomTypePayload {
            name: name.to_string(),
            accommodations: self.accommodations.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM_TYPE_JSON: &str = r#"{
        "id": 5,
        "nombre": "Estándar",
        "hotel_id": 1,
        "created_at": "2024-03-15T14:02:26.000000Z",
        "updated_at": "2024-03-15T14:02:26.000000Z",
        "acomodaciones": [
            {"id": 1, "nombre": "Sencilla", "pivot": {"tipo_habitacion_id": 5, "acomodacion_id": 1}},
            {"id": 2, "nombre": "Doble", "pivot": {"tipo_habitacion_id": 5, "acomodacion_id": 2}}
        ]
    }"#;

    #[test]
    fn test_room_type_with_pivot_accommodations() {
        let rt: RoomType = serde_json::from_str(ROOM_TYPE_JSON).unwrap();
        assert_eq!(rt.hotel_id, Some(HotelId(1)));
        assert!(rt.allows(AccommodationId(2)));
        assert!(!rt.allows(AccommodationId(3)));
        assert_eq!(rt.accommodation_names(), "Sencilla, Doble");
        assert_eq!(rt.to_dto().accommodations, vec![AccommodationId(1), AccommodationId(2)]);
    }

    #[test]
    fn test_requires_at_least_one_accommodation() {
        let mut dto = RoomTypeDto {
            name: "Suite".into(),
            ..Default::default()
        };
        assert_eq!(
            dto.to_payload().unwrap_err(),
            "Debe seleccionar al menos una acomodación"
        );
        dto.toggle_accommodation(AccommodationId(4), true);
        dto.toggle_accommodation(AccommodationId(4), true);
        assert_eq!(dto.accommodations.len(), 1);
        let json = serde_json::to_value(dto.to_payload().unwrap()).unwrap();
        assert_eq!(json["acomodaciones"], serde_json::json!([4]));
        dto.toggle_accommodation(AccommodationId(4), false);
        assert!(dto.accommodations.is_empty());
    }
}
