use crate::shared::api_error::ApiError;
use crate::shared::http::{delete, get_json, write_json, WriteMethod};
use contracts::domain::common::AggregateRoot;
use contracts::domain::a001_hotel::aggregate::HotelId;
use contracts::domain::a002_accommodation::aggregate::{
    Accommodation, AccommodationId, AccommodationPayload,
};

pub async fn fetch_accommodations(hotel_id: HotelId) -> Result<Vec<Accommodation>, ApiError> {
    get_json(&format!("/{}/{}", Accommodation::collection_name(), hotel_id)).await
}

pub async fn create_accommodation(
    hotel_id: HotelId,
    payload: &AccommodationPayload,
) -> Result<(), ApiError> {
    write_json(WriteMethod::Post, &format!("/{}/{}", Accommodation::collection_name(), hotel_id), payload).await
}

pub async fn update_accommodation(
    hotel_id: HotelId,
    id: AccommodationId,
    payload: &AccommodationPayload,
) -> Result<(), ApiError> {
    let path = format!("/{}/{}/actualizar/{}", Accommodation::collection_name(), hotel_id, id);
    write_json(WriteMethod::Put, &path, payload).await
}

pub async fn delete_accommodation(hotel_id: HotelId, id: AccommodationId) -> Result<(), ApiError> {
    delete(&format!("/{}/{}/eliminar/{}", Accommodation::collection_name(), hotel_id, id)).await
}
