//! Allocation form state and the room type → accommodation option chain.

use super::aggregate::{RoomAllocation, RoomAllocationId, RoomAllocationPayload};
use crate::domain::a002_accommodation::aggregate::{Accommodation, AccommodationId};
use crate::domain::a003_room_type::aggregate::{RoomType, RoomTypeId};
use serde::{Deserialize, Serialize};

/// Selectable accommodations for the chosen room type: exactly its categories.
///
/// No room type selected (or an unknown one) yields no options.
pub fn accommodation_options(
    room_types: &[RoomType],
    selected: Option<RoomTypeId>,
) -> Vec<Accommodation> {
    selected
        .and_then(|id| room_types.iter().find(|rt| rt.id == id))
        .map(|rt| rt.accommodations.clone())
        .unwrap_or_default()
}

/// Keeps `current` only while it is still one of `options`
pub fn reconcile_accommodation(
    options: &[Accommodation],
    current: Option<AccommodationId>,
) -> Option<AccommodationId> {
    current.filter(|id| options.iter().any(|a| a.id == *id))
}

/// Create/edit form of the allocation page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomAllocationForm {
    /// Allocation being edited; `None` means create mode
    pub editing: Option<RoomAllocationId>,
    /// Raw text of the quantity input
    pub quantity: String,
    pub room_type_id: Option<RoomTypeId>,
    pub accommodation_id: Option<AccommodationId>,
}

impl RoomAllocationForm {
    pub fn from_allocation(allocation: &RoomAllocation) -> Self {
        Self {
            editing: Some(allocation.id),
            quantity: allocation.quantity.to_string(),
            room_type_id: Some(allocation.room_type_id),
            accommodation_id: Some(allocation.accommodation_id),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    /// Switch room type; the accommodation survives only if the new type allows it
    pub fn select_room_type(&mut self, room_type_id: Option<RoomTypeId>, room_types: &[RoomType]) {
        self.room_type_id = room_type_id;
        let options = accommodation_options(room_types, room_type_id);
        self.accommodation_id = reconcile_accommodation(&options, self.accommodation_id);
    }

    pub fn options(&self, room_types: &[RoomType]) -> Vec<Accommodation> {
        accommodation_options(room_types, self.room_type_id)
    }

    /// Validates the form and builds the request body
    pub fn to_payload(&self, room_types: &[RoomType]) -> Result<RoomAllocationPayload, String> {
        let raw = self.quantity.trim();
        if raw.is_empty() {
            return Err("La cantidad es obligatoria".into());
        }
        let quantity: i64 = raw
            .parse()
            .map_err(|_| "La cantidad debe ser un número entero".to_string())?;
        if quantity < 1 {
            return Err("Debe ser al menos 1".into());
        }
        let quantity =
            u32::try_from(quantity).map_err(|_| "La cantidad es demasiado grande".to_string())?;

        let room_type = self
            .room_type_id
            .ok_or_else(|| "El tipo de habitación es obligatorio".to_string())?;
        let accommodation = self
            .accommodation_id
            .ok_or_else(|| "La acomodación es obligatoria".to_string())?;

        let allowed = room_types
            .iter()
            .find(|rt| rt.id == room_type)
            .map(|rt| rt.allows(accommodation))
            .unwrap_or(false);
        if !allowed {
            return Err("La acomodación no corresponde al tipo de habitación".into());
        }

        Ok(RoomAllocationPayload {
            quantity,
            room_type,
            accommodation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityMetadata;

    fn acc(id: i64, name: &str) -> Accommodation {
        Accommodation {
            id: AccommodationId(id),
            name: name.into(),
            hotel_id: None,
            metadata: EntityMetadata::default(),
        }
    }

    fn room_type(id: i64, accommodations: Vec<Accommodation>) -> RoomType {
        RoomType {
            id: RoomTypeId(id),
            name: format!("Tipo {}", id),
            hotel_id: None,
            accommodations,
            metadata: EntityMetadata::default(),
        }
    }

    fn catalogue() -> Vec<RoomType> {
        vec![
            room_type(1, vec![acc(10, "Sencilla"), acc(11, "Doble")]),
            room_type(2, vec![acc(11, "Doble"), acc(12, "Triple")]),
            room_type(3, vec![]),
        ]
    }

    #[test]
    fn test_options_are_exactly_the_room_type_categories() {
        let types = catalogue();
        for rt in &types {
            assert_eq!(accommodation_options(&types, Some(rt.id)), rt.accommodations);
        }
        assert!(accommodation_options(&types, None).is_empty());
        assert!(accommodation_options(&types, Some(RoomTypeId(99))).is_empty());
    }

    #[test]
    fn test_switching_room_type_keeps_shared_category() {
        let types = catalogue();
        let mut form = RoomAllocationForm::default();
        form.select_room_type(Some(RoomTypeId(1)), &types);
        form.accommodation_id = Some(AccommodationId(11));

        form.select_room_type(Some(RoomTypeId(2)), &types);
        assert_eq!(form.accommodation_id, Some(AccommodationId(11)));
    }

    #[test]
    fn test_switching_room_type_clears_invalid_category() {
        let types = catalogue();
        let mut form = RoomAllocationForm::default();
        form.select_room_type(Some(RoomTypeId(1)), &types);
        form.accommodation_id = Some(AccommodationId(10));

        form.select_room_type(Some(RoomTypeId(2)), &types);
        assert_eq!(form.accommodation_id, None);

        form.accommodation_id = Some(AccommodationId(12));
        form.select_room_type(None, &types);
        assert_eq!(form.accommodation_id, None);
    }

    #[test]
    fn test_payload_validation() {
        let types = catalogue();
        let mut form = RoomAllocationForm::default();
        assert_eq!(form.to_payload(&types).unwrap_err(), "La cantidad es obligatoria");

        form.quantity = "0".into();
        assert_eq!(form.to_payload(&types).unwrap_err(), "Debe ser al menos 1");

        form.quantity = "2".into();
        assert_eq!(
            form.to_payload(&types).unwrap_err(),
            "El tipo de habitación es obligatorio"
        );

        form.select_room_type(Some(RoomTypeId(2)), &types);
        assert_eq!(form.to_payload(&types).unwrap_err(), "La acomodación es obligatoria");

        form.accommodation_id = Some(AccommodationId(10));
        assert!(form.to_payload(&types).is_err());

        form.accommodation_id = Some(AccommodationId(12));
        let payload = form.to_payload(&types).unwrap();
        assert_eq!(payload.quantity, 2);
        assert_eq!(payload.room_type, RoomTypeId(2));
    }

    #[test]
    fn test_edit_form_keeps_saved_category_selectable() {
        let types = catalogue();
        let allocation = RoomAllocation {
            id: RoomAllocationId(7),
            quantity: 4,
            room_type_id: RoomTypeId(2),
            accommodation_id: AccommodationId(12),
            hotel_id: None,
            room_type: None,
            accommodation: None,
            metadata: EntityMetadata::default(),
        };
        let form = RoomAllocationForm::from_allocation(&allocation);
        assert!(form.is_edit_mode());
        assert_eq!(form.quantity, "4");
        assert!(form
            .options(&types)
            .iter()
            .any(|a| a.id == AccommodationId(12)));
    }
}
