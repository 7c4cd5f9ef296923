use crate::shared::api_error::ApiError;
use crate::shared::http::{delete, get_json, write_json, WriteMethod};
use contracts::domain::common::AggregateRoot;
use contracts::domain::a001_hotel::aggregate::HotelId;
use contracts::domain::a003_room_type::aggregate::{RoomType, RoomTypeId, RoomTypePayload};

pub async fn fetch_room_types(hotel_id: HotelId) -> Result<Vec<RoomType>, ApiError> {
    get_json(&format!("/{}/{}", RoomType::collection_name(), hotel_id)).await
}

pub async fn create_room_type(hotel_id: HotelId, payload: &RoomTypePayload) -> Result<(), ApiError> {
    write_json(WriteMethod::Post, &format!("/{}/{}", RoomType::collection_name(), hotel_id), payload).await
}

pub async fn update_room_type(
    hotel_id: HotelId,
    id: RoomTypeId,
    payload: &RoomTypePayload,
) -> Result<(), ApiError> {
    let path = format!("/{}/{}/actualizar/{}", RoomType::collection_name(), hotel_id, id);
    write_json(WriteMethod::Put, &path, payload).await
}

pub async fn delete_room_type(hotel_id: HotelId, id: RoomTypeId) -> Result<(), ApiError> {
    delete(&format!("/{}/{}/eliminar/{}", RoomType::collection_name(), hotel_id, id)).await
}
