//! In-memory [`HotelService`] for workflow tests.
//!
//! Behaves like the remote service closely enough for the page workflows:
//! integer ids, embedded room type / accommodation detail on allocations,
//! NotFound for unknown ids. Every call is recorded, and a failure can be
//! queued for the next call of a given operation.

use super::api_error::ApiError;
use super::service::HotelService;
use async_trait::async_trait;
use contracts::domain::a001_hotel::aggregate::{Hotel, HotelId, HotelPayload};
use contracts::domain::a002_accommodation::aggregate::{
    Accommodation, AccommodationId, AccommodationPayload,
};
use contracts::domain::a003_room_type::aggregate::{RoomType, RoomTypeId, RoomTypePayload};
use contracts::domain::a004_room_allocation::aggregate::{
    RoomAllocation, RoomAllocationId, RoomAllocationPayload,
};
use contracts::domain::common::EntityMetadata;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Default)]
struct Store {
    next_id: i64,
    hotels: Vec<Hotel>,
    accommodations: Vec<Accommodation>,
    room_types: Vec<RoomType>,
    allocations: Vec<RoomAllocation>,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct InMemoryHotelService {
    store: RefCell<Store>,
    calls: RefCell<Vec<String>>,
    failures: RefCell<HashMap<&'static str, ApiError>>,
}

impl InMemoryHotelService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hotel(self, id: i64, capacity: u32) -> Self {
        {
            let mut store = self.store.borrow_mut();
            store.next_id = store.next_id.max(id);
            store.hotels.push(Hotel {
                id: HotelId(id),
                name: format!("Hotel {}", id),
                address: "Calle 1".into(),
                city: "Cartagena".into(),
                tax_id: "900123".into(),
                room_capacity: capacity,
                metadata: EntityMetadata::default(),
            });
        }
        self
    }

    pub fn with_accommodation(self, hotel_id: i64, id: i64, name: &str) -> Self {
        {
            let mut store = self.store.borrow_mut();
            store.next_id = store.next_id.max(id);
            store.accommodations.push(accommodation(hotel_id, id, name));
        }
        self
    }

    /// Room type linked to already registered accommodations
    pub fn with_room_type(self, hotel_id: i64, id: i64, accommodation_ids: &[i64]) -> Self {
        {
            let mut store = self.store.borrow_mut();
            store.next_id = store.next_id.max(id);
            let accommodations = store
                .accommodations
                .iter()
                .filter(|a| accommodation_ids.contains(&a.id.0))
                .cloned()
                .collect();
            store.room_types.push(RoomType {
                id: RoomTypeId(id),
                name: format!("Tipo {}", id),
                hotel_id: Some(HotelId(hotel_id)),
                accommodations,
                metadata: EntityMetadata::default(),
            });
        }
        self
    }

    pub fn with_allocation(self, hotel_id: i64, id: i64, quantity: u32, room_type: i64, accommodation: i64) -> Self {
        {
            let mut store = self.store.borrow_mut();
            store.next_id = store.next_id.max(id);
            let allocation = build_allocation(
                &store,
                HotelId(hotel_id),
                RoomAllocationId(id),
                &RoomAllocationPayload {
                    quantity,
                    room_type: RoomTypeId(room_type),
                    accommodation: AccommodationId(accommodation),
                },
            );
            store.allocations.push(allocation);
        }
        self
    }

    /// Make the next call of `operation` fail with `error`
    pub fn fail_next(&self, operation: &'static str, error: ApiError) {
        self.failures.borrow_mut().insert(operation, error);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Server-side removal behind the UI's back
    pub fn remove_allocation_silently(&self, id: i64) {
        self.store
            .borrow_mut()
            .allocations
            .retain(|a| a.id != RoomAllocationId(id));
    }

    pub fn allocation_count(&self) -> usize {
        self.store.borrow().allocations.len()
    }

    fn record(&self, operation: &'static str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(operation.to_string());
        match self.failures.borrow_mut().remove(operation) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

fn accommodation(hotel_id: i64, id: i64, name: &str) -> Accommodation {
    Accommodation {
        id: AccommodationId(id),
        name: name.to_string(),
        hotel_id: Some(HotelId(hotel_id)),
        metadata: EntityMetadata::default(),
    }
}

fn build_allocation(
    store: &Store,
    hotel_id: HotelId,
    id: RoomAllocationId,
    payload: &RoomAllocationPayload,
) -> RoomAllocation {
    RoomAllocation {
        id,
        quantity: payload.quantity,
        room_type_id: payload.room_type,
        accommodation_id: payload.accommodation,
        hotel_id: Some(hotel_id),
        room_type: store
            .room_types
            .iter()
            .find(|rt| rt.id == payload.room_type)
            .cloned(),
        accommodation: store
            .accommodations
            .iter()
            .find(|a| a.id == payload.accommodation)
            .cloned(),
        metadata: EntityMetadata::default(),
    }
}

fn not_found() -> ApiError {
    ApiError::not_found("No existe")
}

#[async_trait(?Send)]
impl HotelService for InMemoryHotelService {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, ApiError> {
        self.record("list_hotels")?;
        Ok(self.store.borrow().hotels.clone())
    }

    async fn get_hotel(&self, id: HotelId) -> Result<Hotel, ApiError> {
        self.record("get_hotel")?;
        self.store
            .borrow()
            .hotels
            .iter()
            .find(|h| h.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn create_hotel(&self, payload: &HotelPayload) -> Result<(), ApiError> {
        self.record("create_hotel")?;
        let mut store = self.store.borrow_mut();
        let id = store.next_id();
        store.hotels.push(Hotel {
            id: HotelId(id),
            name: payload.name.clone(),
            address: payload.address.clone(),
            city: payload.city.clone(),
            tax_id: payload.tax_id.clone(),
            room_capacity: payload.room_capacity,
            metadata: EntityMetadata::default(),
        });
        Ok(())
    }

    async fn update_hotel(&self, id: HotelId, payload: &HotelPayload) -> Result<(), ApiError> {
        self.record("update_hotel")?;
        let mut store = self.store.borrow_mut();
        let hotel = store.hotels.iter_mut().find(|h| h.id == id).ok_or_else(not_found)?;
        hotel.name = payload.name.clone();
        hotel.address = payload.address.clone();
        hotel.city = payload.city.clone();
        hotel.tax_id = payload.tax_id.clone();
        hotel.room_capacity = payload.room_capacity;
        Ok(())
    }

    async fn delete_hotel(&self, id: HotelId) -> Result<(), ApiError> {
        self.record("delete_hotel")?;
        let mut store = self.store.borrow_mut();
        let before = store.hotels.len();
        store.hotels.retain(|h| h.id != id);
        if store.hotels.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn list_accommodations(&self, hotel_id: HotelId) -> Result<Vec<Accommodation>, ApiError> {
        self.record("list_accommodations")?;
        Ok(self
            .store
            .borrow()
            .accommodations
            .iter()
            .filter(|a| a.hotel_id == Some(hotel_id))
            .cloned()
            .collect())
    }

    async fn create_accommodation(
        &self,
        hotel_id: HotelId,
        payload: &AccommodationPayload,
    ) -> Result<(), ApiError> {
        self.record("create_accommodation")?;
        let mut store = self.store.borrow_mut();
        let id = store.next_id();
        store
            .accommodations
            .push(accommodation(hotel_id.0, id, &payload.name));
        Ok(())
    }

    async fn update_accommodation(
        &self,
        _hotel_id: HotelId,
        id: AccommodationId,
        payload: &AccommodationPayload,
    ) -> Result<(), ApiError> {
        self.record("update_accommodation")?;
        let mut store = self.store.borrow_mut();
        let acc = store
            .accommodations
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(not_found)?;
        acc.name = payload.name.clone();
        Ok(())
    }

    async fn delete_accommodation(&self, _hotel_id: HotelId, id: AccommodationId) -> Result<(), ApiError> {
        self.record("delete_accommodation")?;
        let mut store = self.store.borrow_mut();
        let before = store.accommodations.len();
        store.accommodations.retain(|a| a.id != id);
        if store.accommodations.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn list_room_types(&self, hotel_id: HotelId) -> Result<Vec<RoomType>, ApiError> {
        self.record("list_room_types")?;
        Ok(self
            .store
            .borrow()
            .room_types
            .iter()
            .filter(|rt| rt.hotel_id == Some(hotel_id))
            .cloned()
            .collect())
    }

    async fn create_room_type(&self, hotel_id: HotelId, payload: &RoomTypePayload) -> Result<(), ApiError> {
        self.record("create_room_type")?;
        let mut store = self.store.borrow_mut();
        let id = store.next_id();
        let accommodations = store
            .accommodations
            .iter()
            .filter(|a| payload.accommodations.contains(&a.id))
            .cloned()
            .collect();
        store.room_types.push(RoomType {
            id: RoomTypeId(id),
            name: payload.name.clone(),
            hotel_id: Some(hotel_id),
            accommodations,
            metadata: EntityMetadata::default(),
        });
        Ok(())
    }

    async fn update_room_type(
        &self,
        _hotel_id: HotelId,
        id: RoomTypeId,
        payload: &RoomTypePayload,
    ) -> Result<(), ApiError> {
        self.record("update_room_type")?;
        let mut store = self.store.borrow_mut();
        let accommodations: Vec<Accommodation> = store
            .accommodations
            .iter()
            .filter(|a| payload.accommodations.contains(&a.id))
            .cloned()
            .collect();
        let room_type = store
            .room_types
            .iter_mut()
            .find(|rt| rt.id == id)
            .ok_or_else(not_found)?;
        room_type.name = payload.name.clone();
        room_type.accommodations = accommodations;
        Ok(())
    }

    async fn delete_room_type(&self, _hotel_id: HotelId, id: RoomTypeId) -> Result<(), ApiError> {
        self.record("delete_room_type")?;
        let mut store = self.store.borrow_mut();
        let before = store.room_types.len();
        store.room_types.retain(|rt| rt.id != id);
        if store.room_types.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn list_room_allocations(&self, hotel_id: HotelId) -> Result<Vec<RoomAllocation>, ApiError> {
        self.record("list_room_allocations")?;
        Ok(self
            .store
            .borrow()
            .allocations
            .iter()
            .filter(|a| a.hotel_id == Some(hotel_id))
            .cloned()
            .collect())
    }

    async fn create_room_allocation(
        &self,
        hotel_id: HotelId,
        payload: &RoomAllocationPayload,
    ) -> Result<(), ApiError> {
        self.record("create_room_allocation")?;
        let mut store = self.store.borrow_mut();
        let id = RoomAllocationId(store.next_id());
        let allocation = build_allocation(&store, hotel_id, id, payload);
        store.allocations.push(allocation);
        Ok(())
    }

    async fn update_room_allocation(
        &self,
        hotel_id: HotelId,
        id: RoomAllocationId,
        payload: &RoomAllocationPayload,
    ) -> Result<(), ApiError> {
        self.record("update_room_allocation")?;
        let mut store = self.store.borrow_mut();
        let updated = build_allocation(&store, hotel_id, id, payload);
        let slot = store
            .allocations
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(not_found)?;
        *slot = updated;
        Ok(())
    }

    async fn delete_room_allocation(&self, _hotel_id: HotelId, id: RoomAllocationId) -> Result<(), ApiError> {
        self.record("delete_room_allocation")?;
        let mut store = self.store.borrow_mut();
        let before = store.allocations.len();
        store.allocations.retain(|a| a.id != id);
        if store.allocations.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}
