pub mod a001_hotel;
pub mod a002_accommodation;
pub mod a003_room_type;
pub mod a004_room_allocation;
