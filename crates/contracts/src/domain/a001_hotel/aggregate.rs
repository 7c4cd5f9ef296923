use crate::aggregate_id;
use crate::domain::common::{AggregateRoot, EntityMetadata};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

aggregate_id!(
    /// Unique identifier of a hotel
    HotelId
);

/// Upper bound the admin form accepts for the declared room count
pub const MAX_ROOM_CAPACITY: u32 = 100;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Hotel: top-level tenant owning identity fields and the declared capacity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: HotelId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "direccion")]
    pub address: String,

    #[serde(rename = "ciudad")]
    pub city: String,

    #[serde(rename = "nit")]
    pub tax_id: String,

    /// Declared total room capacity
    #[serde(rename = "numero_de_habitaciones")]
    pub room_capacity: u32,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Hotel {
    /// Edit form prefilled from the record
    pub fn to_dto(&self) -> HotelDto {
        HotelDto {
            id: Some(self.id),
            name: self.name.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            tax_id: self.tax_id.clone(),
            room_capacity: self.room_capacity.to_string(),
        }
    }
}

impl AggregateRoot for Hotel {
    type Id = HotelId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn collection_name() -> &'static str {
        "hoteles"
    }

    fn list_name() -> &'static str {
        "Lista de hoteles"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Form state for creating/updating a hotel.
///
/// `room_capacity` keeps the raw text of the input; it is parsed by
/// [`HotelDto::to_payload`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotelDto {
    pub id: Option<HotelId>,
    pub name: String,
    pub address: String,
    pub city: String,
    pub tax_id: String,
    pub room_capacity: String,
}

/// Body of `POST /hoteles` and `PUT /hoteles/actualizar/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelPayload {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "ciudad")]
    pub city: String,
    #[serde(rename = "nit")]
    pub tax_id: String,
    #[serde(rename = "numero_de_habitaciones")]
    pub room_capacity: u32,
}

impl HotelDto {
    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Validates the form and builds the request body
    pub fn to_payload(&self) -> Result<HotelPayload, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("El nombre es obligatorio".into());
        }
        let name_len = name.chars().count();
        if name_len < 2 {
            return Err("El nombre debe tener al menos 2 caracteres".into());
        }
        if name_len > 50 {
            return Err("El nombre no puede exceder 50 caracteres".into());
        }
        if self.address.trim().is_empty() {
            return Err("La dirección es obligatoria".into());
        }
        if self.city.trim().is_empty() {
            return Err("La ciudad es obligatoria".into());
        }

        let tax_id = self.tax_id.trim();
        if tax_id.is_empty() {
            return Err("El NIT es obligatorio".into());
        }
        if !tax_id.chars().all(|c| c.is_ascii_digit()) {
            return Err("El NIT solo puede contener números".into());
        }
        if tax_id.len() > 15 {
            return Err("El NIT no puede exceder 15 dígitos".into());
        }

        let capacity_raw = self.room_capacity.trim();
        if capacity_raw.is_empty() {
            return Err("El número de habitaciones es obligatorio".into());
        }
        let capacity: i64 = capacity_raw
            .parse()
            .map_err(|_| "Debe ser un número entero".to_string())?;
        if capacity < 1 {
            return Err("Debe ser al menos 1".into());
        }
        if capacity > MAX_ROOM_CAPACITY as i64 {
            return Err(format!(
                "No puede exceder {} habitaciones",
                MAX_ROOM_CAPACITY
            ));
        }

        Ok(HotelPayload {
            name: name.to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            tax_id: tax_id.to_string(),
            room_capacity: capacity as u32,
        })
    }
}
