//! Seam between the page workflows and the remote hotel service.
//!
//! Workflows are generic over [`HotelService`]; the browser build uses
//! [`HttpHotelService`], tests use an in-memory double.

use super::api_error::ApiError;
use crate::domain::{a001_hotel, a002_accommodation, a003_room_type, a004_room_allocation};
use async_trait::async_trait;
use contracts::domain::a001_hotel::aggregate::{Hotel, HotelId, HotelPayload};
use contracts::domain::a002_accommodation::aggregate::{
    Accommodation, AccommodationId, AccommodationPayload,
};
use contracts::domain::a003_room_type::aggregate::{RoomType, RoomTypeId, RoomTypePayload};
use contracts::domain::a004_room_allocation::aggregate::{
    RoomAllocation, RoomAllocationId, RoomAllocationPayload,
};

#[async_trait(?Send)]
pub trait HotelService {
    // Hotels
    async fn list_hotels(&self) -> Result<Vec<Hotel>, ApiError>;
    async fn get_hotel(&self, id: HotelId) -> Result<Hotel, ApiError>;
    async fn create_hotel(&self, payload: &HotelPayload) -> Result<(), ApiError>;
    async fn update_hotel(&self, id: HotelId, payload: &HotelPayload) -> Result<(), ApiError>;
    async fn delete_hotel(&self, id: HotelId) -> Result<(), ApiError>;

    // Accommodation categories
    async fn list_accommodations(&self, hotel_id: HotelId) -> Result<Vec<Accommodation>, ApiError>;
    async fn create_accommodation(
        &self,
        hotel_id: HotelId,
        payload: &AccommodationPayload,
    ) -> Result<(), ApiError>;
    async fn update_accommodation(
        &self,
        hotel_id: HotelId,
        id: AccommodationId,
        payload: &AccommodationPayload,
    ) -> Result<(), ApiError>;
    async fn delete_accommodation(&self, hotel_id: HotelId, id: AccommodationId) -> Result<(), ApiError>;

    // Room types
    async fn list_room_types(&self, hotel_id: HotelId) -> Result<Vec<RoomType>, ApiError>;
    async fn create_room_type(&self, hotel_id: HotelId, payload: &RoomTypePayload) -> Result<(), ApiError>;
    async fn update_room_type(
        &self,
        hotel_id: HotelId,
        id: RoomTypeId,
        payload: &RoomTypePayload,
    ) -> Result<(), ApiError>;
    async fn delete_room_type(&self, hotel_id: HotelId, id: RoomTypeId) -> Result<(), ApiError>;

    // Room allocations
    async fn list_room_allocations(&self, hotel_id: HotelId) -> Result<Vec<RoomAllocation>, ApiError>;
    async fn create_room_allocation(
        &self,
        hotel_id: HotelId,
        payload: &RoomAllocationPayload,
    ) -> Result<(), ApiError>;
    async fn update_room_allocation(
        &self,
        hotel_id: HotelId,
        id: RoomAllocationId,
        payload: &RoomAllocationPayload,
    ) -> Result<(), ApiError>;
    async fn delete_room_allocation(&self, hotel_id: HotelId, id: RoomAllocationId) -> Result<(), ApiError>;
}

/// The remote service reached over HTTP
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpHotelService;

#[async_trait(?Send)]
impl HotelService for HttpHotelService {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, ApiError> {
        a001_hotel::api::fetch_hotels().await
    }

    async fn get_hotel(&self, id: HotelId) -> Result<Hotel, ApiError> {
        a001_hotel::api::fetch_hotel(id).await
    }

    async fn create_hotel(&self, payload: &HotelPayload) -> Result<(), ApiError> {
        a001_hotel::api::create_hotel(payload).await
    }

    async fn update_hotel(&self, id: HotelId, payload: &HotelPayload) -> Result<(), ApiError> {
        a001_hotel::api::update_hotel(id, payload).await
    }

    async fn delete_hotel(&self, id: HotelId) -> Result<(), ApiError> {
        a001_hotel::api::delete_hotel(id).await
    }

    async fn list_accommodations(&self, hotel_id: HotelId) -> Result<Vec<Accommodation>, ApiError> {
        a002_accommodation::api::fetch_accommodations(hotel_id).await
    }

    async fn create_accommodation(
        &self,
        hotel_id: HotelId,
        payload: &AccommodationPayload,
    ) -> Result<(), ApiError> {
        a002_accommodation::api::create_accommodation(hotel_id, payload).await
    }

    async fn update_accommodation(
        &self,
        hotel_id: HotelId,
        id: AccommodationId,
        payload: &AccommodationPayload,
    ) -> Result<(), ApiError> {
        a002_accommodation::api::update_accommodation(hotel_id, id, payload).await
    }

    async fn delete_accommodation(&self, hotel_id: HotelId, id: AccommodationId) -> Result<(), ApiError> {
        a002_accommodation::api::delete_accommodation(hotel_id, id).await
    }

    async fn list_room_types(&self, hotel_id: HotelId) -> Result<Vec<RoomType>, ApiError> {
        a003_room_type::api::fetch_room_types(hotel_id).await
    }

    async fn create_room_type(&self, hotel_id: HotelId, payload: &RoomTypePayload) -> Result<(), ApiError> {
        a003_room_type::api::create_room_type(hotel_id, payload).await
    }

    async fn update_room_type(
        &self,
        hotel_id: HotelId,
        id: RoomTypeId,
        payload: &RoomTypePayload,
    ) -> Result<(), ApiError> {
        a003_room_type::api::update_room_type(hotel_id, id, payload).await
    }

    async fn delete_room_type(&self, hotel_id: HotelId, id: RoomTypeId) -> Result<(), ApiError> {
        a003_room_type::api::delete_room_type(hotel_id, id).await
    }

    async fn list_room_allocations(&self, hotel_id: HotelId) -> Result<Vec<RoomAllocation>, ApiError> {
        a004_room_allocation::api::fetch_room_allocations(hotel_id).await
    }

    async fn create_room_allocation(
        &self,
        hotel_id: HotelId,
        payload: &RoomAllocationPayload,
    ) -> Result<(), ApiError> {
        a004_room_allocation::api::create_room_allocation(hotel_id, payload).await
    }

    async fn update_room_allocation(
        &self,
        hotel_id: HotelId,
        id: RoomAllocationId,
        payload: &RoomAllocationPayload,
    ) -> Result<(), ApiError> {
        a004_room_allocation::api::update_room_allocation(hotel_id, id, payload).await
    }

    async fn delete_room_allocation(&self, hotel_id: HotelId, id: RoomAllocationId) -> Result<(), ApiError> {
        a004_room_allocation::api::delete_room_allocation(hotel_id, id).await
    }
}
