use crate::shared::api_error::ApiError;
use crate::shared::http::{delete, get_json, write_json, WriteMethod};
use contracts::domain::common::AggregateRoot;
use contracts::domain::a001_hotel::aggregate::{Hotel, HotelId, HotelPayload};

pub async fn fetch_hotels() -> Result<Vec<Hotel>, ApiError> {
    get_json(&format!("/{}", Hotel::collection_name())).await
}

pub async fn fetch_hotel(id: HotelId) -> Result<Hotel, ApiError> {
    get_json(&format!("/{}/{}", Hotel::collection_name(), id)).await
}

pub async fn create_hotel(payload: &HotelPayload) -> Result<(), ApiError> {
    write_json(WriteMethod::Post, &format!("/{}", Hotel::collection_name()), payload).await
}

pub async fn update_hotel(id: HotelId, payload: &HotelPayload) -> Result<(), ApiError> {
    write_json(WriteMethod::Put, &format!("/{}/actualizar/{}", Hotel::collection_name(), id), payload).await
}

pub async fn delete_hotel(id: HotelId) -> Result<(), ApiError> {
    delete(&format!("/{}/eliminar/{}", Hotel::collection_name(), id)).await
}
