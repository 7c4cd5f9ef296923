use crate::shared::api_error::ApiError;
use crate::shared::http::{delete, get_json, write_json, WriteMethod};
use contracts::domain::common::AggregateRoot;
use contracts::domain::a001_hotel::aggregate::HotelId;
use contracts::domain::a004_room_allocation::aggregate::{
    RoomAllocation, RoomAllocationId, RoomAllocationPayload,
};

pub async fn fetch_room_allocations(hotel_id: HotelId) -> Result<Vec<RoomAllocation>, ApiError> {
    get_json(&format!("/{}/{}", RoomAllocation::collection_name(), hotel_id)).await
}

pub async fn create_room_allocation(
    hotel_id: HotelId,
    payload: &RoomAllocationPayload,
) -> Result<(), ApiError> {
    write_json(WriteMethod::Post, &format!("/{}/{}", RoomAllocation::collection_name(), hotel_id), payload).await
}

pub async fn update_room_allocation(
    hotel_id: HotelId,
    id: RoomAllocationId,
    payload: &RoomAllocationPayload,
) -> Result<(), ApiError> {
    let path = format!("/{}/{}/actualizar/{}", RoomAllocation::collection_name(), hotel_id, id);
    write_json(WriteMethod::Put, &path, payload).await
}

pub async fn delete_room_allocation(hotel_id: HotelId, id: RoomAllocationId) -> Result<(), ApiError> {
    delete(&format!("/{}/{}/eliminar/{}", RoomAllocation::collection_name(), hotel_id, id)).await
}
